//! Lookups over a loaded catalog.
//!
//! Absence is never an error here: a missing title is `None`, an unknown
//! category or author yields an empty list.

use crate::catalog::store::Catalog;
use crate::core::book::Book;
use crate::core::category::Category;
use crate::core::types::CategoryId;

impl Catalog {
    /// First book whose title equals `title` exactly
    #[must_use]
    pub fn find_book(&self, title: &str) -> Option<&Book> {
        self.books().iter().find(|book| book.title == title)
    }

    /// Books of the first category named `name`, in load order
    #[must_use]
    pub fn books_by_category(&self, name: &str) -> Vec<&Book> {
        self.first_category_named(name)
            .map(|id| self.books_in(id).collect())
            .unwrap_or_default()
    }

    /// Books whose author contains `fragment`, ignoring case.
    ///
    /// Results are grouped by category in catalog order, then by load order
    /// within each category.
    #[must_use]
    pub fn books_by_author(&self, fragment: &str) -> Vec<&Book> {
        let needle = fragment.to_lowercase();
        self.category_ids()
            .flat_map(|id| self.books_in(id))
            .filter(|book| book.author_contains(&needle))
            .collect()
    }

    /// Categories holding at least one book by exactly `author`
    #[must_use]
    pub fn categories_by_author(&self, author: &str) -> Vec<&Category> {
        self.category_ids()
            .filter(|&id| self.category_has_author(id, author))
            .map(|id| &self.categories()[id.index()])
            .collect()
    }

    /// Whether a category holds a book by exactly `author`
    #[must_use]
    pub fn category_has_author(&self, id: CategoryId, author: &str) -> bool {
        self.books_in(id).any(|book| book.author == author)
    }

    pub(crate) fn category_ids(&self) -> impl Iterator<Item = CategoryId> {
        (0..self.categories().len()).map(CategoryId)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::assets::NoAssets;
    use crate::catalog::store::Catalog;
    use crate::parsing::records::records_from_text;

    fn catalog() -> Catalog {
        let categories = "nombre,ficcion\nAventura,true\nCiencia,false\nNovela,true\n";
        let books = "titulo,autor,calificacion,categoria,portada,ancho,alto
La vuelta al mundo,Julio Verne,4.0,Aventura,a.jpg,1,1
Cosmos,Carl Sagan,4.9,Ciencia,b.jpg,1,1
Veinte mil leguas,julio verne,4.2,Novela,c.jpg,1,1
De la tierra a la luna,Julio Verne,3.8,Ciencia,d.jpg,1,1
";
        Catalog::load(
            records_from_text(categories, ','),
            records_from_text(books, ','),
            &NoAssets,
        )
        .unwrap()
    }

    #[test]
    fn test_find_book() {
        let catalog = catalog();
        let book = catalog.find_book("Cosmos").unwrap();
        assert_eq!(book.author, "Carl Sagan");

        assert!(catalog.find_book("cosmos").is_none());
        assert!(catalog.find_book("Solaris").is_none());
    }

    #[test]
    fn test_books_by_category() {
        let catalog = catalog();
        let titles: Vec<&str> = catalog
            .books_by_category("Ciencia")
            .iter()
            .map(|b| b.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Cosmos", "De la tierra a la luna"]);

        assert!(catalog.books_by_category("Poesia").is_empty());
    }

    #[test]
    fn test_books_by_author_fragment() {
        let catalog = catalog();
        let titles: Vec<&str> = catalog
            .books_by_author("ulio v")
            .iter()
            .map(|b| b.title.as_str())
            .collect();
        // Category order first: Aventura, Ciencia, Novela
        assert_eq!(
            titles,
            vec!["La vuelta al mundo", "De la tierra a la luna", "Veinte mil leguas"]
        );

        assert!(catalog.books_by_author("borges").is_empty());
    }

    #[test]
    fn test_categories_by_author_is_exact() {
        let catalog = catalog();
        let names: Vec<&str> = catalog
            .categories_by_author("Julio Verne")
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Aventura", "Ciencia"]);

        assert!(catalog.categories_by_author("Julio").is_empty());
    }
}
