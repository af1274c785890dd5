use clap::Args;

use crate::catalog::store::Catalog;
use crate::cli::OutputFormat;
use crate::core::book::Book;

#[derive(Args)]
pub struct FindArgs {
    /// Exact title
    #[arg(required = true)]
    pub title: String,
}

#[derive(Args)]
pub struct CategoryArgs {
    /// Exact category name
    #[arg(required = true)]
    pub name: String,
}

#[derive(Args)]
pub struct AuthorArgs {
    /// Any part of the author's name
    #[arg(required = true)]
    pub fragment: String,
}

#[derive(Args)]
pub struct AuthorCategoriesArgs {
    /// Exact author name
    #[arg(required = true)]
    pub author: String,
}

pub fn run_find(args: &FindArgs, catalog: &Catalog, format: OutputFormat) -> anyhow::Result<()> {
    match catalog.find_book(&args.title) {
        Some(book) => print_books(catalog, &[book], format)?,
        None => match format {
            OutputFormat::Json => println!("null"),
            OutputFormat::Tsv => print_tsv_header(),
            OutputFormat::Text => println!("No book titled '{}'", args.title),
        },
    }
    Ok(())
}

pub fn run_category(
    args: &CategoryArgs,
    catalog: &Catalog,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let books = catalog.books_by_category(&args.name);
    if verbose {
        eprintln!("Category '{}': {} book(s)", args.name, books.len());
    }
    print_books(catalog, &books, format)
}

pub fn run_author(
    args: &AuthorArgs,
    catalog: &Catalog,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let books = catalog.books_by_author(&args.fragment);
    if verbose {
        eprintln!("Author matching '{}': {} book(s)", args.fragment, books.len());
    }
    print_books(catalog, &books, format)
}

pub fn run_author_categories(
    args: &AuthorCategoriesArgs,
    catalog: &Catalog,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let categories = catalog.categories_by_author(&args.author);

    match format {
        OutputFormat::Text => {
            if categories.is_empty() {
                println!("No categories with books by '{}'", args.author);
            } else {
                println!("Categories with books by '{}':", args.author);
                for category in &categories {
                    println!("  - {} ({})", category.name, category.kind_label());
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&categories)?);
        }
        OutputFormat::Tsv => {
            println!("name\tis_fiction");
            for category in &categories {
                println!("{}\t{}", category.name, category.is_fiction);
            }
        }
    }
    Ok(())
}

fn print_tsv_header() {
    println!("title\tauthor\trating\tcategory\tcover");
}

fn print_books(catalog: &Catalog, books: &[&Book], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            if books.is_empty() {
                println!("No books found");
                return Ok(());
            }

            let title_width = books
                .iter()
                .map(|b| b.title.chars().count().min(40))
                .max()
                .unwrap_or(5)
                .max(5);
            let author_width = books
                .iter()
                .map(|b| b.author.chars().count().min(30))
                .max()
                .unwrap_or(6)
                .max(6);

            println!(
                "{:<title_w$} {:<author_w$} {:>6}  Category",
                "Title",
                "Author",
                "Rating",
                title_w = title_width,
                author_w = author_width
            );
            println!("{}", "-".repeat(title_width + author_width + 20));
            for book in books {
                println!(
                    "{:<title_w$} {:<author_w$} {:>6.2}  {}{}",
                    truncate(&book.title, title_width),
                    truncate(&book.author, author_width),
                    book.rating,
                    catalog.category_of(book).name,
                    if book.has_cover() { "" } else { "  (no cover)" },
                    title_w = title_width,
                    author_w = author_width
                );
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = books
                .iter()
                .map(|b| {
                    serde_json::json!({
                        "title": b.title,
                        "author": b.author,
                        "rating": b.rating,
                        "category": catalog.category_of(b).name,
                        "cover": b.cover,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            print_tsv_header();
            for b in books {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    b.title,
                    b.author,
                    b.rating,
                    catalog.category_of(b).name,
                    b.cover.as_ref().map_or("", |c| c.file.as_str())
                );
            }
        }
    }
    Ok(())
}

/// Truncate to `max` characters, marking the cut with "..."
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max <= 3 {
        s.chars().take(max).collect()
    } else {
        let mut out: String = s.chars().take(max - 3).collect();
        out.push_str("...");
        out
    }
}
