use crate::parsing::records::Record;
use crate::parsing::ParseError;

/// Number of columns in a book row
pub const BOOK_FIELDS: usize = 7;

/// A parsed book row, before its category is resolved
#[derive(Debug, Clone, PartialEq)]
pub struct BookRecord {
    pub line: usize,
    pub title: String,
    pub author: String,
    pub rating: f64,
    pub category: String,
    pub cover_file: String,
    pub cover_width: i32,
    pub cover_height: i32,
}

/// Parse one `title,author,rating,category,cover,width,height` row.
///
/// Numeric columns are trimmed and parsed with locale-invariant decimal
/// rules; text columns are kept verbatim.
///
/// # Errors
///
/// Returns `ParseError::MalformedRecord` if the row has fewer than 7 fields,
/// the rating is not a number, or a cover dimension is not an integer.
pub fn parse_book_record(record: &Record) -> Result<BookRecord, ParseError> {
    record.require_fields(BOOK_FIELDS)?;
    let line = record.line;

    let rating_text = record.field(2).trim();
    let rating: f64 = rating_text.parse().map_err(|_| {
        ParseError::malformed(line, format!("invalid rating '{rating_text}'"))
    })?;

    Ok(BookRecord {
        line,
        title: record.field(0).to_string(),
        author: record.field(1).to_string(),
        rating,
        category: record.field(3).to_string(),
        cover_file: record.field(4).to_string(),
        cover_width: parse_dimension(record, 5, "width")?,
        cover_height: parse_dimension(record, 6, "height")?,
    })
}

fn parse_dimension(record: &Record, index: usize, what: &str) -> Result<i32, ParseError> {
    let text = record.field(index).trim();
    text.parse().map_err(|_| {
        ParseError::malformed(record.line, format!("invalid cover {what} '{text}'"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(line: &str) -> Record {
        Record::new(2, line.split(',').map(str::to_string).collect())
    }

    #[test]
    fn test_parse_book_record() {
        let book = parse_book_record(&record(
            "Ficciones,Jorge Luis Borges,4.8,Cuento,ficciones.jpg,200,300",
        ))
        .unwrap();

        assert_eq!(book.title, "Ficciones");
        assert_eq!(book.author, "Jorge Luis Borges");
        assert!((book.rating - 4.8).abs() < f64::EPSILON);
        assert_eq!(book.category, "Cuento");
        assert_eq!(book.cover_file, "ficciones.jpg");
        assert_eq!((book.cover_width, book.cover_height), (200, 300));
    }

    #[test]
    fn test_rating_has_no_bounds() {
        let book = parse_book_record(&record("T,A,-12.25,C,f.jpg,1,1")).unwrap();
        assert!((book.rating + 12.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_rating() {
        let err = parse_book_record(&record("T,A,excellent,C,f.jpg,1,1")).unwrap_err();
        assert!(err.to_string().contains("invalid rating 'excellent'"));
    }

    #[test]
    fn test_negative_dimensions_are_accepted() {
        let book =
            parse_book_record(&record("Rayuela,Julio Cortazar,4.5,Novela,r.jpg,-1,300")).unwrap();
        assert_eq!((book.cover_width, book.cover_height), (-1, 300));
    }

    #[test]
    fn test_non_integer_dimensions() {
        let err = parse_book_record(&record("T,A,4.0,C,f.jpg,2.5,1")).unwrap_err();
        assert!(matches!(err, ParseError::MalformedRecord { line: 2, .. }));

        let err = parse_book_record(&record("T,A,4.0,C,f.jpg,1,tall")).unwrap_err();
        assert!(err.to_string().contains("height"));
    }

    #[test]
    fn test_too_few_fields() {
        let err = parse_book_record(&record("T,A,4.0,C")).unwrap_err();
        assert!(err.to_string().contains("expected at least 7 fields, found 4"));
    }
}
