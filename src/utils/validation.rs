//! Centralized validation and helper functions.

use std::path::{Component, Path};

/// Longest cover filename that will be looked up on disk
pub const MAX_FILENAME_LENGTH: usize = 255;

/// Validation error types
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Filename too long: exceeds {MAX_FILENAME_LENGTH} characters")]
    FilenameTooLong,
    #[error("Invalid filename: contains path traversal or invalid characters")]
    InvalidFilename,
    #[error("Empty filename provided")]
    EmptyFilename,
    #[error("Invalid delimiter '{0}': expected a single character or 'tab'")]
    InvalidDelimiter(String),
}

/// Validate a cover filename before it is joined onto the asset directory.
///
/// Rejects:
/// - empty names
/// - names over the length limit
/// - `..` path components and path separators (`/`, `\`)
/// - null bytes and other control characters
///
/// The name is returned unchanged; unlike upload sanitizing, a lookup must
/// use the exact name from the book record.
///
/// # Errors
///
/// Returns `ValidationError::EmptyFilename` if the filename is empty,
/// `ValidationError::FilenameTooLong` if it exceeds the limit, or
/// `ValidationError::InvalidFilename` if it contains invalid characters.
pub fn validate_asset_name(filename: &str) -> Result<&str, ValidationError> {
    if filename.trim().is_empty() {
        return Err(ValidationError::EmptyFilename);
    }

    if filename.len() > MAX_FILENAME_LENGTH {
        return Err(ValidationError::FilenameTooLong);
    }

    if filename.contains('/') || filename.contains('\\') {
        return Err(ValidationError::InvalidFilename);
    }

    if Path::new(filename)
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return Err(ValidationError::InvalidFilename);
    }

    if filename.chars().any(char::is_control) {
        return Err(ValidationError::InvalidFilename);
    }

    Ok(filename)
}

/// Parse a field delimiter given on the command line.
///
/// Accepts a single character, or `tab` / `\t` for a tab.
///
/// # Errors
///
/// Returns `ValidationError::InvalidDelimiter` for anything else.
pub fn parse_delimiter(s: &str) -> Result<char, ValidationError> {
    if s == "tab" || s == "\\t" {
        return Ok('\t');
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c != '\n' && c != '\r' => Ok(c),
        _ => Err(ValidationError::InvalidDelimiter(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_asset_name_safe() {
        assert_eq!(validate_asset_name("rayuela.jpg"), Ok("rayuela.jpg"));
        assert!(validate_asset_name("my-cover_2.png").is_ok());
        assert!(validate_asset_name("cover with spaces.jpg").is_ok());
        assert_eq!(validate_asset_name("vol..2.jpg"), Ok("vol..2.jpg"));
    }

    #[test]
    fn test_validate_asset_name_dangerous() {
        // Directory traversal attempts
        assert_eq!(
            validate_asset_name("../etc/passwd"),
            Err(ValidationError::InvalidFilename)
        );
        assert!(validate_asset_name("..\\windows\\system32").is_err());
        assert!(validate_asset_name("covers/rayuela.jpg").is_err());
        assert_eq!(validate_asset_name(".."), Err(ValidationError::InvalidFilename));

        // Null bytes and control characters
        assert!(validate_asset_name("cover\0.jpg").is_err());
        assert!(validate_asset_name("cover\x07.jpg").is_err());
    }

    #[test]
    fn test_validate_asset_name_limits() {
        assert_eq!(validate_asset_name(""), Err(ValidationError::EmptyFilename));
        assert_eq!(validate_asset_name("   "), Err(ValidationError::EmptyFilename));

        let long_name = "a".repeat(MAX_FILENAME_LENGTH + 1);
        assert_eq!(
            validate_asset_name(&long_name),
            Err(ValidationError::FilenameTooLong)
        );
    }

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(","), Ok(','));
        assert_eq!(parse_delimiter(";"), Ok(';'));
        assert_eq!(parse_delimiter("tab"), Ok('\t'));
        assert_eq!(parse_delimiter("\\t"), Ok('\t'));
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter(",,").is_err());
    }
}
