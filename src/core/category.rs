use serde::{Deserialize, Serialize};

use crate::core::types::CategoryOrigin;

/// A named grouping of books
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name, matched exactly (case-sensitive) when resolving books
    pub name: String,

    /// Fiction flag from the category file; synthesized categories are non-fiction
    pub is_fiction: bool,

    /// Whether this category was declared or synthesized during load
    pub origin: CategoryOrigin,
}

impl Category {
    pub fn new(name: impl Into<String>, is_fiction: bool) -> Self {
        Self {
            name: name.into(),
            is_fiction,
            origin: CategoryOrigin::Declared,
        }
    }

    /// Create the non-fiction category used when a book names an unknown category
    pub fn synthesized(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_fiction: false,
            origin: CategoryOrigin::Synthesized,
        }
    }

    #[must_use]
    pub fn is_synthesized(&self) -> bool {
        self.origin == CategoryOrigin::Synthesized
    }

    /// Short label used in text and TSV output
    #[must_use]
    pub fn kind_label(&self) -> &'static str {
        if self.is_fiction {
            "fiction"
        } else {
            "non-fiction"
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesized_is_non_fiction() {
        let category = Category::synthesized("Cocina");
        assert!(!category.is_fiction);
        assert!(category.is_synthesized());
        assert_eq!(category.kind_label(), "non-fiction");
    }

    #[test]
    fn test_declared_category() {
        let category = Category::new("Novela", true);
        assert!(!category.is_synthesized());
        assert_eq!(category.kind_label(), "fiction");
        assert_eq!(category.to_string(), "Novela");
    }
}
