//! Parsers for the delimited category and book files.
//!
//! This module provides:
//!
//! - **Record source**: [`records::RecordReader`] turns any buffered reader
//!   into numbered rows of fields
//! - **Category rows**: `name,isFiction`
//! - **Book rows**: `title,author,rating,category,cover,width,height`
//!
//! ## Example
//!
//! ```rust,no_run
//! use book_catalog::parsing::records::read_records_file;
//! use book_catalog::parsing::category::load_categories;
//! use std::path::Path;
//!
//! let rows = read_records_file(Path::new("data/categorias.csv"), ',').unwrap();
//! let categories = load_categories(rows).unwrap();
//! ```
//!
//! ## Row Format
//!
//! | File       | Columns |
//! |------------|---------|
//! | categories | name, isFiction (`true` means fiction, anything else does not) |
//! | books      | title, author, rating, category, cover file, cover width, cover height |
//!
//! The first row of each file is a header and is discarded.

use thiserror::Error;

pub mod book;
pub mod category;
pub mod records;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Record source unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
}

impl ParseError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}
