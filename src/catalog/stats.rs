//! Aggregate statistics over a loaded catalog.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::catalog::store::{Catalog, CatalogError};
use crate::core::category::Category;
use crate::core::types::CategoryId;

/// Helper function to convert usize count to f64 with explicit precision loss allowance
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

impl Catalog {
    /// Mean rating over every book in the catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::EmptyCatalog` when there are no books.
    pub fn average_rating(&self) -> Result<f64, CatalogError> {
        if self.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        let total: f64 = self.books().iter().map(|book| book.rating).sum();
        Ok(total / count_to_f64(self.len()))
    }

    #[must_use]
    pub fn category_book_count(&self, id: CategoryId) -> usize {
        self.books_in(id).count()
    }

    /// Mean rating of a category's books, `None` if it has none
    #[must_use]
    pub fn category_average_rating(&self, id: CategoryId) -> Option<f64> {
        let (total, count) = self
            .books_in(id)
            .fold((0.0, 0usize), |(total, count), book| {
                (total + book.rating, count + 1)
            });
        (count > 0).then(|| total / count_to_f64(count))
    }

    /// Category with the most books; the first one wins a tie
    #[must_use]
    pub fn category_with_most_books(&self) -> Option<&Category> {
        let mut best: Option<(CategoryId, usize)> = None;
        for id in self.category_ids() {
            let count = self.category_book_count(id);
            if best.map_or(true, |(_, most)| count > most) {
                best = Some((id, count));
            }
        }
        best.and_then(|(id, _)| self.category(id))
    }

    /// Category with the highest mean rating; the first one wins a tie.
    ///
    /// Categories without books have no mean and never win, and neither does
    /// a NaN mean. Returns `None` when no category has a comparable mean.
    #[must_use]
    pub fn category_with_best_average_rating(&self) -> Option<&Category> {
        let mut best: Option<CategoryId> = None;
        let mut best_average = f64::NEG_INFINITY;
        for id in self.category_ids() {
            let Some(average) = self
                .category_average_rating(id)
                .filter(|average| !average.is_nan())
            else {
                continue;
            };
            if best.is_none() || average > best_average {
                best = Some(id);
                best_average = average;
            }
        }
        best.and_then(|id| self.category(id))
    }

    /// Books that had no cover asset when the catalog was loaded
    #[must_use]
    pub fn count_books_without_cover(&self) -> usize {
        self.books().iter().filter(|book| !book.has_cover()).count()
    }

    /// Whether some author has books under two or more category names
    #[must_use]
    pub fn has_author_in_multiple_categories(&self) -> bool {
        let mut seen: HashMap<&str, HashSet<&str>> = HashMap::new();
        for book in self.books() {
            let category = self.category_of(book).name.as_str();
            let names = seen.entry(book.author.as_str()).or_default();
            names.insert(category);
            if names.len() > 1 {
                return true;
            }
        }
        false
    }

    /// Gather every aggregate into one report
    #[must_use]
    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            categories: self.categories().len(),
            books: self.len(),
            average_rating: self.average_rating().ok(),
            most_books: self
                .category_with_most_books()
                .map(|c| c.name.clone()),
            best_rated: self
                .category_with_best_average_rating()
                .map(|c| c.name.clone()),
            without_cover: self.count_books_without_cover(),
            author_in_multiple_categories: self.has_author_in_multiple_categories(),
            dynamic_categories: self
                .dynamic_category_counts()
                .into_iter()
                .map(|(c, count)| (c.name.clone(), count))
                .collect(),
        }
    }
}

/// Aggregate report for a catalog
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary {
    pub categories: usize,
    pub books: usize,
    pub average_rating: Option<f64>,
    pub most_books: Option<String>,
    pub best_rated: Option<String>,
    pub without_cover: usize,
    pub author_in_multiple_categories: bool,
    pub dynamic_categories: Vec<(String, usize)>,
}

impl std::fmt::Display for CatalogSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Catalog Summary")?;
        writeln!(f, "===============")?;
        writeln!(f, "Categories:      {}", self.categories)?;
        writeln!(f, "Books:           {}", self.books)?;
        match self.average_rating {
            Some(avg) => writeln!(f, "Average rating:  {avg:.2}")?,
            None => writeln!(f, "Average rating:  n/a (no books)")?,
        }
        writeln!(
            f,
            "Most books:      {}",
            self.most_books.as_deref().unwrap_or("-")
        )?;
        writeln!(
            f,
            "Best rated:      {}",
            self.best_rated.as_deref().unwrap_or("-")
        )?;
        writeln!(f, "Without cover:   {}", self.without_cover)?;
        writeln!(
            f,
            "Author in multiple categories: {}",
            if self.author_in_multiple_categories {
                "yes"
            } else {
                "no"
            }
        )?;
        if !self.dynamic_categories.is_empty() {
            writeln!(f, "\nSynthesized categories:")?;
            for (name, count) in &self.dynamic_categories {
                writeln!(f, "  - {name}: {count} book(s)")?;
            }
        }
        Ok(())
    }
}
