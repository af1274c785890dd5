//! Catalog builder that resolves book categories while loading.
//!
//! The `CatalogBuilder` accumulates categories and books in load order. When a
//! book names a category that was never declared, the builder synthesizes a
//! non-fiction category for it, appends it to the category list, and keeps a
//! running count of the books filed under it. `build` freezes everything into
//! an immutable [`Catalog`].

use std::collections::HashMap;

use tracing::debug;

use crate::catalog::assets::AssetLookup;
use crate::catalog::index::CategoryIndex;
use crate::catalog::store::Catalog;
use crate::core::book::{Book, CoverImage};
use crate::core::category::Category;
use crate::core::types::CategoryId;
use crate::parsing::book::BookRecord;

/// Builder that collates categories and books into a catalog
pub struct CatalogBuilder<'a> {
    assets: &'a dyn AssetLookup,

    /// Declared categories first, synthesized ones appended
    categories: Vec<Category>,

    /// Books in load order
    books: Vec<Book>,

    index: CategoryIndex,

    /// Synthesized category -> number of books filed under it
    dynamic_counts: HashMap<CategoryId, usize>,
}

impl<'a> CatalogBuilder<'a> {
    pub fn new(assets: &'a dyn AssetLookup) -> Self {
        Self {
            assets,
            categories: Vec::new(),
            books: Vec::new(),
            index: CategoryIndex::new(),
            dynamic_counts: HashMap::new(),
        }
    }

    /// Append a category and return its id
    pub fn add_category(&mut self, category: Category) -> CategoryId {
        let id = CategoryId(self.categories.len());
        self.index.insert_category(&category.name, id);
        self.categories.push(category);
        id
    }

    pub fn add_categories(&mut self, categories: impl IntoIterator<Item = Category>) {
        for category in categories {
            self.add_category(category);
        }
    }

    /// Resolve a category name, synthesizing a category if none matches
    fn resolve_category(&mut self, name: &str) -> CategoryId {
        if let Some(id) = self.index.first_named(name) {
            return id;
        }

        let id = self.add_category(Category::synthesized(name));
        self.dynamic_counts.entry(id).or_insert(0);
        debug!("Synthesized category '{}' ({})", name, id);
        id
    }

    /// Add a book, resolving its category and cover.
    ///
    /// Returns the position of the new book.
    pub fn add_book(&mut self, record: BookRecord) -> usize {
        let category = self.resolve_category(&record.category);

        // Every book naming a synthesized category counts once, including the
        // book that caused it to be created
        if let Some(count) = self.dynamic_counts.get_mut(&category) {
            *count += 1;
        }

        let mut book = Book::new(record.title, record.author, record.rating, category);
        if self.assets.exists(&record.cover_file) {
            book = book.with_cover(CoverImage::new(
                record.cover_file,
                record.cover_width,
                record.cover_height,
            ));
        }

        let position = self.books.len();
        self.index.insert_book(category, position);
        self.books.push(book);
        position
    }

    /// Number of books added so far
    #[must_use]
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Freeze into an immutable catalog
    #[must_use]
    pub fn build(self) -> Catalog {
        debug!(
            "Built catalog: {} categories ({} synthesized), {} books",
            self.categories.len(),
            self.dynamic_counts.len(),
            self.books.len()
        );
        Catalog::from_parts(self.categories, self.books, self.index, self.dynamic_counts)
    }
}
