//! Book catalog storage, loading and queries.
//!
//! A catalog is loaded once from a category source and a book source and is
//! read-only afterward. Books whose category name matches no declared
//! category get a synthesized non-fiction category, tracked with a running
//! count of the books filed under it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use book_catalog::Catalog;
//! use book_catalog::catalog::assets::DirectoryAssets;
//! use std::path::Path;
//!
//! let assets = DirectoryAssets::new("data");
//! let catalog = Catalog::load_from_files(
//!     Path::new("data/categorias.csv"),
//!     Path::new("data/libros.csv"),
//!     ',',
//!     &assets,
//! )
//! .unwrap();
//!
//! for book in catalog.books_by_author("ulio v") {
//!     println!("{} ({})", book.title, book.author);
//! }
//!
//! match catalog.average_rating() {
//!     Ok(avg) => println!("Average rating: {avg:.2}"),
//!     Err(e) => println!("{e}"),
//! }
//! ```
//!
//! ## In-memory Sources
//!
//! Any iterator of records works as a source, which keeps tests free of files:
//!
//! ```rust
//! use book_catalog::Catalog;
//! use book_catalog::catalog::assets::NoAssets;
//! use book_catalog::parsing::records::records_from_text;
//!
//! let categories = records_from_text("name,fiction\nNovela,true\n", ',');
//! let books = records_from_text(
//!     "title,author,rating,category,cover,width,height\nRayuela,Julio Cortazar,4.5,Novela,r.jpg,1,1\n",
//!     ',',
//! );
//! let catalog = Catalog::load(categories, books, &NoAssets).unwrap();
//! assert_eq!(catalog.find_book("Rayuela").unwrap().author, "Julio Cortazar");
//! ```

pub mod assets;
pub mod builder;
pub mod index;
pub mod query;
pub mod stats;
pub mod store;
