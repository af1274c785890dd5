use tracing::{debug, warn};

use crate::core::category::Category;
use crate::parsing::records::{skip_header, Record};
use crate::parsing::ParseError;

/// Parse one `name,isFiction` row.
///
/// Only the exact literal `true` marks a category as fiction.
///
/// # Errors
///
/// Returns `ParseError::MalformedRecord` if the row has fewer than 2 fields.
pub fn parse_category_record(record: &Record) -> Result<Category, ParseError> {
    record.require_fields(2)?;
    let name = record.field(0);
    let is_fiction = record.field(1) == "true";
    Ok(Category::new(name, is_fiction))
}

/// Load categories from a record source, discarding its header row.
///
/// Duplicate names are kept; later lookups resolve to the first one.
///
/// # Errors
///
/// Returns `ParseError::Unavailable` if the source fails while reading, or
/// `ParseError::MalformedRecord` for a short row.
pub fn load_categories<I>(rows: I) -> Result<Vec<Category>, ParseError>
where
    I: IntoIterator<Item = Result<Record, ParseError>>,
{
    let mut rows = rows.into_iter();
    skip_header(&mut rows)?;

    let mut categories: Vec<Category> = Vec::new();
    for row in rows {
        let record = row?;
        let category = parse_category_record(&record)?;
        if categories.iter().any(|c| c.name == category.name) {
            warn!(
                "Duplicate category '{}' on line {}; books will resolve to the first one",
                category.name, record.line
            );
        }
        categories.push(category);
    }

    debug!("Loaded {} categories", categories.len());
    Ok(categories)
}
