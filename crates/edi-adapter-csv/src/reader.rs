//! Specification-table reader

use crate::errors::{CsvError, CsvResult};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Reader for CSV specification tables.
///
/// Rows are returned verbatim as ordered string cells, header included as
/// row 0: column interpretation belongs to the conversion engine's
/// positional binding, not the adapter. Rows of uneven width are allowed —
/// real specification exports routinely omit trailing cells.
#[derive(Debug, Clone)]
pub struct SpecTableReader {
    delimiter: u8,
}

impl SpecTableReader {
    /// Create a reader for comma-delimited tables
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter as u8;
        self
    }

    /// Read all rows from an input source
    ///
    /// # Errors
    ///
    /// Returns [`CsvError::Read`] with line context when a record cannot
    /// be parsed.
    pub fn read_rows<R: Read>(&self, input: R) -> CsvResult<Vec<Vec<String>>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(input);

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|e| CsvError::read_at(index + 1, e.to_string()))?;
            rows.push(record.iter().map(|cell| cell.to_string()).collect());
        }

        debug!(rows = rows.len(), "loaded specification table");
        Ok(rows)
    }

    /// Read all rows from a file
    ///
    /// # Errors
    ///
    /// Returns [`CsvError::Io`] when the file cannot be opened and
    /// [`CsvError::Read`] when a record cannot be parsed.
    pub fn read_rows_from_path(&self, path: impl AsRef<Path>) -> CsvResult<Vec<Vec<String>>> {
        let file = std::fs::File::open(path)?;
        self.read_rows(file)
    }
}

impl Default for SpecTableReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_rows_preserves_header_and_order() {
        let data = "h1,h2,h3\nREF,R1,1:1\nREF,R2,0:1\n";
        let rows = SpecTableReader::new().read_rows(Cursor::new(data)).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["h1", "h2", "h3"]);
        assert_eq!(rows[1], vec!["REF", "R1", "1:1"]);
    }

    #[test]
    fn test_read_rows_allows_uneven_widths() {
        let data = "h1,h2,h3\nREF\nREF,R2,0:1,extra\n";
        let rows = SpecTableReader::new().read_rows(Cursor::new(data)).unwrap();

        assert_eq!(rows[1], vec!["REF"]);
        assert_eq!(rows[2].len(), 4);
    }

    #[test]
    fn test_read_rows_custom_delimiter() {
        let data = "h1;h2\nREF;R1\n";
        let rows = SpecTableReader::new()
            .with_delimiter(';')
            .read_rows(Cursor::new(data))
            .unwrap();

        assert_eq!(rows[1], vec!["REF", "R1"]);
    }

    #[test]
    fn test_read_error_reports_line() {
        let data: Vec<u8> = b"h1,h2\nREF,\xff\xfe\n".to_vec();
        let err = SpecTableReader::new()
            .read_rows(Cursor::new(data))
            .unwrap_err();

        assert!(matches!(err, CsvError::Read { .. }));
        assert_eq!(err.line_number(), Some(2));
    }

    #[test]
    fn test_empty_input_yields_no_rows() {
        let rows = SpecTableReader::new().read_rows(Cursor::new("")).unwrap();
        assert!(rows.is_empty());
    }
}
