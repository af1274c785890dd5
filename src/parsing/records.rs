use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

use crate::parsing::ParseError;

/// A single data row from a delimited source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number in the source
    pub line: usize,

    /// Fields in column order, not individually trimmed
    pub fields: Vec<String>,
}

impl Record {
    pub fn new(line: usize, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    /// Fail unless the row has at least `count` fields
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MalformedRecord` naming the line and the counts.
    pub fn require_fields(&self, count: usize) -> Result<(), ParseError> {
        if self.fields.len() < count {
            return Err(ParseError::malformed(
                self.line,
                format!(
                    "expected at least {count} fields, found {}",
                    self.fields.len()
                ),
            ));
        }
        Ok(())
    }

    /// Field at `index`; callers check the field count first
    #[must_use]
    pub fn field(&self, index: usize) -> &str {
        self.fields.get(index).map_or("", String::as_str)
    }
}

/// Iterator over the rows of a delimited source.
///
/// Each line is trimmed and split on the delimiter. Blank lines are skipped.
/// Read failures are yielded as `ParseError::Unavailable` and end iteration.
pub struct RecordReader<R> {
    reader: R,
    delimiter: char,
    line: usize,
    failed: bool,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(reader: R, delimiter: char) -> Self {
        Self {
            reader,
            delimiter,
            line: 0,
            failed: false,
        }
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<Record, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let mut buf = String::new();
        loop {
            buf.clear();
            match self.reader.read_line(&mut buf) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line += 1;
                    let line = buf.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let fields = line.split(self.delimiter).map(str::to_string).collect();
                    return Some(Ok(Record::new(self.line, fields)));
                }
                Err(e) => {
                    self.failed = true;
                    return Some(Err(ParseError::Unavailable(e)));
                }
            }
        }
    }
}

/// Open a delimited file as a record source
///
/// # Errors
///
/// Returns `ParseError::Unavailable` if the file cannot be opened.
pub fn read_records_file(
    path: &Path,
    delimiter: char,
) -> Result<RecordReader<BufReader<File>>, ParseError> {
    let file = File::open(path)?;
    Ok(RecordReader::new(BufReader::new(file), delimiter))
}

/// Record source over in-memory text
pub fn records_from_text(text: &str, delimiter: char) -> RecordReader<Cursor<&[u8]>> {
    RecordReader::new(Cursor::new(text.as_bytes()), delimiter)
}

/// Consume the header row of a source, surfacing a read error if it has one
pub(crate) fn skip_header<I>(rows: &mut I) -> Result<(), ParseError>
where
    I: Iterator<Item = Result<Record, ParseError>>,
{
    if let Some(header) = rows.next() {
        header?;
    }
    Ok(())
}
