use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::Catalog;
use crate::cli::query::truncate;
use crate::cli::OutputFormat;
use crate::core::types::CategoryId;

#[derive(Args)]
pub struct ExportArgs {
    /// Output file path
    #[arg(required = true)]
    pub output: PathBuf,
}

pub fn run_list(catalog: &Catalog, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    if verbose {
        eprintln!(
            "Loaded catalog with {} categories and {} books",
            catalog.categories().len(),
            catalog.len()
        );
    }

    let rows: Vec<_> = catalog
        .categories()
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let id = CategoryId(i);
            (
                category,
                catalog.category_book_count(id),
                catalog.category_average_rating(id),
            )
        })
        .collect();

    match format {
        OutputFormat::Text => {
            let name_width = rows
                .iter()
                .map(|(c, _, _)| c.name.chars().count().min(35))
                .max()
                .unwrap_or(4)
                .max(4);

            println!("Categories ({})\n", rows.len());
            println!(
                "{:<name_w$} {:<11} {:<11} {:>6} {:>8}",
                "Name",
                "Kind",
                "Origin",
                "Books",
                "Average",
                name_w = name_width
            );
            println!("{}", "-".repeat(name_width + 41));
            for (category, count, average) in &rows {
                println!(
                    "{:<name_w$} {:<11} {:<11} {:>6} {:>8}",
                    truncate(&category.name, name_width),
                    category.kind_label(),
                    category.origin.to_string(),
                    count,
                    average.map_or_else(|| "-".to_string(), |avg| format!("{avg:.2}")),
                    name_w = name_width
                );
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = rows
                .iter()
                .map(|(category, count, average)| {
                    serde_json::json!({
                        "name": category.name,
                        "is_fiction": category.is_fiction,
                        "origin": category.origin,
                        "book_count": count,
                        "average_rating": average,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("name\tis_fiction\torigin\tbook_count\taverage_rating");
            for (category, count, average) in &rows {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    category.name,
                    category.is_fiction,
                    category.origin,
                    count,
                    average.map(|avg| avg.to_string()).unwrap_or_default()
                );
            }
        }
    }

    Ok(())
}

pub fn run_export(args: &ExportArgs, catalog: &Catalog, verbose: bool) -> anyhow::Result<()> {
    let json = catalog.to_json()?;
    std::fs::write(&args.output, json)?;

    if verbose {
        eprintln!(
            "Exported {} books in {} categories to {}",
            catalog.len(),
            catalog.categories().len(),
            args.output.display()
        );
    }
    Ok(())
}
