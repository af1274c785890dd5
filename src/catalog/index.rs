use std::collections::HashMap;

use crate::core::types::CategoryId;

/// Derived lookups over a catalog's categories.
///
/// Maps each category name to the first category declared with it, and each
/// category to the positions of its books in the catalog's book list.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    /// Index: name -> first category with that name
    by_name: HashMap<String, CategoryId>,

    /// Index: category position -> book positions, in load order
    books: Vec<Vec<usize>>,
}

impl CategoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a category. Its id must be the next position in the list.
    pub fn insert_category(&mut self, name: &str, id: CategoryId) {
        debug_assert_eq!(id.index(), self.books.len());
        self.by_name.entry(name.to_string()).or_insert(id);
        self.books.push(Vec::new());
    }

    /// Attach a book position to its category
    pub fn insert_book(&mut self, category: CategoryId, book: usize) {
        self.books[category.index()].push(book);
    }

    /// First category with exactly this name
    #[must_use]
    pub fn first_named(&self, name: &str) -> Option<CategoryId> {
        self.by_name.get(name).copied()
    }

    /// Book positions filed under a category
    #[must_use]
    pub fn books_of(&self, category: CategoryId) -> &[usize] {
        self.books
            .get(category.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name_wins() {
        let mut index = CategoryIndex::new();
        index.insert_category("Novela", CategoryId(0));
        index.insert_category("Novela", CategoryId(1));

        assert_eq!(index.first_named("Novela"), Some(CategoryId(0)));
        assert_eq!(index.first_named("novela"), None);
    }

    #[test]
    fn test_books_of() {
        let mut index = CategoryIndex::new();
        index.insert_category("A", CategoryId(0));
        index.insert_category("B", CategoryId(1));
        index.insert_book(CategoryId(1), 0);
        index.insert_book(CategoryId(1), 2);

        assert!(index.books_of(CategoryId(0)).is_empty());
        assert_eq!(index.books_of(CategoryId(1)), &[0, 2]);
        assert!(index.books_of(CategoryId(9)).is_empty());
    }
}
