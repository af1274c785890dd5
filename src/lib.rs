//! # book-catalog
//!
//! A library for loading a catalog of books and their categories from two
//! delimited text files and answering questions about it.
//!
//! The catalog is built once and is read-only afterward. While loading, each
//! book's category name is resolved against the declared categories; a name
//! that matches nothing gets a new non-fiction category, and the catalog
//! keeps count of the books filed under each such category.
//!
//! ## Features
//!
//! - **Title lookup**: Exact match on a book's title
//! - **Author search**: Case-insensitive substring match on author names
//! - **Category statistics**: Most books, best average rating
//! - **Cross-category authors**: Detects authors filed under several categories
//! - **Cover snapshot**: Cover art presence is checked once, at load time
//!
//! ## Example
//!
//! ```rust,no_run
//! use book_catalog::Catalog;
//! use book_catalog::catalog::assets::DirectoryAssets;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_files(
//!     Path::new("data/categorias.csv"),
//!     Path::new("data/libros.csv"),
//!     ',',
//!     &DirectoryAssets::default(),
//! )
//! .unwrap();
//!
//! if let Some(book) = catalog.find_book("Veinte mil leguas de viaje submarino") {
//!     println!("{} by {}", book.title, book.author);
//! }
//!
//! if let Some(category) = catalog.category_with_most_books() {
//!     println!("Largest category: {}", category.name);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Catalog loading, indexing, queries and statistics
//! - [`core`]: Category, book and cover types
//! - [`parsing`]: Record source and row parsers for the two input files
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::catalog::assets::{AssetLookup, DirectoryAssets, NoAssets};
pub use crate::catalog::stats::CatalogSummary;
pub use crate::catalog::store::{Catalog, CatalogError};
pub use crate::core::book::{Book, CoverImage};
pub use crate::core::category::Category;
pub use crate::core::types::*;
pub use crate::parsing::ParseError;
