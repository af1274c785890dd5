//! Command-line interface for book-catalog.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **find**: Look up a book by exact title
//! - **category**: List the books in a category
//! - **author**: Search books by a fragment of the author's name
//! - **author-categories**: List the categories an author appears in
//! - **stats**: Show catalog-wide aggregates
//! - **list**: List categories with their book counts
//! - **export**: Write the loaded catalog as JSON
//!
//! ## Usage
//!
//! ```text
//! # Search by author fragment, case-insensitive
//! book-catalog author "ulio v"
//!
//! # Use other source files and cover directory
//! book-catalog --categories cats.csv --books books.csv --assets-dir covers stats
//!
//! # JSON output for scripting
//! book-catalog --format json category Novela
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::catalog::assets::{DirectoryAssets, DEFAULT_ASSET_DIR};
use crate::catalog::store::{Catalog, CatalogError};
use crate::utils::validation::parse_delimiter;

pub mod catalog;
pub mod query;
pub mod stats;

/// Default category file
pub const DEFAULT_CATEGORIES: &str = "data/categorias.csv";

/// Default book file
pub const DEFAULT_BOOKS: &str = "data/libros.csv";

#[derive(Parser)]
#[command(name = "book-catalog")]
#[command(version)]
#[command(about = "Query a book catalog loaded from delimited files")]
#[command(
    long_about = "book-catalog loads categories and books from two delimited files and answers questions about them.\n\nBooks naming an unknown category are filed under a new non-fiction category created on the fly. Covers are attached when the named image exists in the asset directory."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Category file (header row, then name,isFiction)
    #[arg(long, global = true, default_value = DEFAULT_CATEGORIES)]
    pub categories: PathBuf,

    /// Book file (header row, then title,author,rating,category,cover,width,height)
    #[arg(long, global = true, default_value = DEFAULT_BOOKS)]
    pub books: PathBuf,

    /// Directory searched for cover images
    #[arg(long, global = true, default_value = DEFAULT_ASSET_DIR)]
    pub assets_dir: PathBuf,

    /// Field delimiter: a single character, or "tab"
    #[arg(short, long, global = true, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: char,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

impl Cli {
    /// Load the catalog named by the global flags
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Load` if either file cannot be read or parsed.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        let assets = DirectoryAssets::new(&self.assets_dir);
        Catalog::load_from_files(&self.categories, &self.books, self.delimiter, &assets)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find a book by its exact title
    Find(query::FindArgs),

    /// List the books in a category
    Category(query::CategoryArgs),

    /// Search books by a fragment of the author's name (case-insensitive)
    Author(query::AuthorArgs),

    /// List the categories holding books by an author (exact name)
    AuthorCategories(query::AuthorCategoriesArgs),

    /// Show catalog statistics
    Stats,

    /// List categories
    List,

    /// Export the loaded catalog to a JSON file
    Export(catalog::ExportArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
