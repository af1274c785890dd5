use serde::{Deserialize, Serialize};

use crate::core::types::CategoryId;

/// Cover art attached to a book when its image file was present at load time.
///
/// Width and height are taken from the book record as declared; the image
/// itself is never opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverImage {
    /// Filename relative to the asset directory
    pub file: String,

    /// Declared width in pixels, not validated
    pub width: i32,

    /// Declared height in pixels
    pub height: i32,
}

impl CoverImage {
    pub fn new(file: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            file: file.into(),
            width,
            height,
        }
    }
}

/// A single book in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,

    pub author: String,

    /// Rating as loaded; no bounds are enforced
    pub rating: f64,

    /// Category this book was filed under at load time
    pub category: CategoryId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<CoverImage>,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        rating: f64,
        category: CategoryId,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            rating,
            category,
            cover: None,
        }
    }

    #[must_use]
    pub fn with_cover(mut self, cover: CoverImage) -> Self {
        self.cover = Some(cover);
        self
    }

    #[must_use]
    pub fn has_cover(&self) -> bool {
        self.cover.is_some()
    }

    /// Case-insensitive substring match against the author.
    ///
    /// `needle_lower` must already be lowercased so callers scanning many
    /// books only lowercase the query once.
    #[must_use]
    pub fn author_contains(&self, needle_lower: &str) -> bool {
        self.author.to_lowercase().contains(needle_lower)
    }
}
