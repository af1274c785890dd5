use crate::catalog::store::Catalog;
use crate::cli::OutputFormat;

pub fn run(catalog: &Catalog, format: OutputFormat) -> anyhow::Result<()> {
    let summary = catalog.summary();

    match format {
        OutputFormat::Text => print!("{summary}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Tsv => {
            println!("metric\tvalue");
            println!("categories\t{}", summary.categories);
            println!("books\t{}", summary.books);
            println!(
                "average_rating\t{}",
                summary
                    .average_rating
                    .map(|avg| format!("{avg:.4}"))
                    .unwrap_or_default()
            );
            println!(
                "most_books\t{}",
                summary.most_books.as_deref().unwrap_or("")
            );
            println!(
                "best_rated\t{}",
                summary.best_rated.as_deref().unwrap_or("")
            );
            println!("without_cover\t{}", summary.without_cover);
            println!(
                "author_in_multiple_categories\t{}",
                summary.author_in_multiple_categories
            );
            for (name, count) in &summary.dynamic_categories {
                println!("synthesized:{name}\t{count}");
            }
        }
    }

    Ok(())
}
