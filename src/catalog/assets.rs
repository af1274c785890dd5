//! Cover asset presence lookups.
//!
//! The catalog never reads cover images; it only asks whether a file with the
//! book's cover filename exists. That question is answered by an
//! [`AssetLookup`] implementation chosen by the caller.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::utils::validation::validate_asset_name;

/// Default directory searched for cover images
pub const DEFAULT_ASSET_DIR: &str = "data";

/// Answers whether a cover asset exists for a filename
pub trait AssetLookup {
    fn exists(&self, file: &str) -> bool;
}

/// Looks for cover files directly inside a directory
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for DirectoryAssets {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_DIR)
    }
}

impl AssetLookup for DirectoryAssets {
    fn exists(&self, file: &str) -> bool {
        // Names that could escape the asset directory never match
        match validate_asset_name(file) {
            Ok(name) => self.root.join(name).exists(),
            Err(e) => {
                debug!("Ignoring cover '{}': {}", file, e);
                false
            }
        }
    }
}

/// Lookup for catalogs loaded without any cover art
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssets;

impl AssetLookup for NoAssets {
    fn exists(&self, _file: &str) -> bool {
        false
    }
}

impl AssetLookup for HashSet<String> {
    fn exists(&self, file: &str) -> bool {
        self.contains(file)
    }
}
