//! Core data types for the book catalog.
//!
//! This module provides the value types used throughout the library:
//!
//! - [`Category`]: A named grouping of books with a fiction/non-fiction flag
//! - [`Book`]: A single titled work with author, rating, category and optional cover
//! - [`CoverImage`]: Cover art descriptor attached to a book at load time
//! - [`CategoryId`]: Position of a category inside a loaded catalog
//!
//! ## Identity
//!
//! Categories are identified by position, not by name. Two categories declared
//! with the same name stay distinct; name lookups always resolve to the first
//! one in catalog order.

pub mod book;
pub mod category;
pub mod types;
