use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::catalog::assets::AssetLookup;
use crate::catalog::builder::CatalogBuilder;
use crate::catalog::index::CategoryIndex;
use crate::core::book::{Book, CoverImage};
use crate::core::category::Category;
use crate::core::types::CategoryId;
use crate::parsing::book::parse_book_record;
use crate::parsing::category::load_categories;
use crate::parsing::records::{read_records_file, skip_header, Record};
use crate::parsing::ParseError;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to load catalog: {0}")]
    Load(#[from] ParseError),

    #[error("Catalog has no books to average")]
    EmptyCatalog,

    #[error("Failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Export format version
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable snapshot of a loaded catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub categories: Vec<Category>,
    pub books: Vec<BookEntry>,
    pub dynamic_categories: Vec<DynamicCategoryEntry>,
}

/// A book as exported, with its category spelled out by name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookEntry {
    pub title: String,
    pub author: String,
    pub rating: f64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<CoverImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DynamicCategoryEntry {
    pub name: String,
    pub books: usize,
}

/// The loaded, read-only book catalog
#[derive(Debug)]
pub struct Catalog {
    /// All categories: declared ones in file order, then synthesized ones
    categories: Vec<Category>,

    /// All books in file order
    books: Vec<Book>,

    /// Index: category name and category -> books
    index: CategoryIndex,

    /// Synthesized category -> books filed under it during load
    dynamic_counts: HashMap<CategoryId, usize>,
}

impl Catalog {
    pub(crate) fn from_parts(
        categories: Vec<Category>,
        books: Vec<Book>,
        index: CategoryIndex,
        dynamic_counts: HashMap<CategoryId, usize>,
    ) -> Self {
        Self {
            categories,
            books,
            index,
            dynamic_counts,
        }
    }

    /// Load a catalog from a category source and a book source.
    ///
    /// Both sources start with a header row, which is discarded. Any read or
    /// parse failure aborts the whole load.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Load` wrapping the first `ParseError` hit.
    pub fn load<C, B>(
        category_rows: C,
        book_rows: B,
        assets: &dyn AssetLookup,
    ) -> Result<Self, CatalogError>
    where
        C: IntoIterator<Item = Result<Record, ParseError>>,
        B: IntoIterator<Item = Result<Record, ParseError>>,
    {
        let mut builder = CatalogBuilder::new(assets);
        builder.add_categories(load_categories(category_rows)?);

        let mut rows = book_rows.into_iter();
        skip_header(&mut rows)?;
        for row in rows {
            let record = parse_book_record(&row?)?;
            builder.add_book(record);
        }
        debug!("Loaded {} books", builder.book_count());

        Ok(builder.build())
    }

    /// Load a catalog from two delimited files
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Load` if either file cannot be read or has a
    /// malformed row.
    pub fn load_from_files(
        categories_path: &Path,
        books_path: &Path,
        delimiter: char,
        assets: &dyn AssetLookup,
    ) -> Result<Self, CatalogError> {
        debug!(
            "Loading catalog from {} and {}",
            categories_path.display(),
            books_path.display()
        );
        let category_rows = read_records_file(categories_path, delimiter)?;
        let book_rows = read_records_file(books_path, delimiter)?;
        Self::load(category_rows, book_rows, assets)
    }

    /// All categories in catalog order
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All books in load order
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    #[must_use]
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(id.index())
    }

    /// Category a book is filed under
    #[must_use]
    pub fn category_of(&self, book: &Book) -> &Category {
        // Builder only hands out ids of categories it has pushed
        &self.categories[book.category.index()]
    }

    /// Books filed under a category, in load order
    pub fn books_in(&self, id: CategoryId) -> impl Iterator<Item = &Book> + '_ {
        self.index
            .books_of(id)
            .iter()
            .map(move |&position| &self.books[position])
    }

    pub(crate) fn first_category_named(&self, name: &str) -> Option<CategoryId> {
        self.index.first_named(name)
    }

    /// Synthesized categories with the number of books filed under each,
    /// in creation order
    #[must_use]
    pub fn dynamic_category_counts(&self) -> Vec<(&Category, usize)> {
        let mut entries: Vec<_> = self.dynamic_counts.iter().collect();
        entries.sort_by_key(|(id, _)| **id);
        entries
            .into_iter()
            .map(|(id, &count)| (&self.categories[id.index()], count))
            .collect()
    }

    /// Export catalog to JSON
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Serialize` if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            categories: self.categories.clone(),
            books: self
                .books
                .iter()
                .map(|book| BookEntry {
                    title: book.title.clone(),
                    author: book.author.clone(),
                    rating: book.rating,
                    category: self.category_of(book).name.clone(),
                    cover: book.cover.clone(),
                })
                .collect(),
            dynamic_categories: self
                .dynamic_category_counts()
                .into_iter()
                .map(|(category, books)| DynamicCategoryEntry {
                    name: category.name.clone(),
                    books,
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of books in catalog
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check if catalog has no books
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
