//! Row-by-row CSV reader
//!
//! Iterates over the rows of a CSV input, converting each one into its
//! domain type. Format concerns (columns, conversions) live with the row
//! types in the `csv_format` module.
//!
//! # Error Handling
//!
//! - Individual row errors are yielded as `Err` items carrying the line number
//! - `collect_valid()` drops those rows with a logged warning, so one bad
//!   row never invalidates the rest of the file

use crate::types::ReviewError;
use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use std::io::Read;
use std::marker::PhantomData;
use tracing::warn;

/// A CSV row that converts into a domain value
pub trait CsvRow: DeserializeOwned {
    type Output;

    /// What the rows describe, for log messages
    const KIND: &'static str;

    fn convert(self) -> Result<Self::Output, ReviewError>;
}

/// Streaming CSV reader over rows of type `T`
#[derive(Debug)]
pub struct CsvReader<R, T> {
    reader: csv::Reader<R>,
    line_num: u64,
    row: PhantomData<T>,
}

impl<R: Read, T: CsvRow> CsvReader<R, T> {
    /// Create a reader over CSV data with a header row
    ///
    /// Fields are trimmed and rows may have fewer fields than the header.
    pub fn new(input: R) -> Self {
        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(input);

        Self {
            reader,
            line_num: 1,
            row: PhantomData,
        }
    }

    /// Every row that converts, skipping the others with a warning
    pub fn collect_valid(self) -> Vec<T::Output> {
        self.filter_map(|row| match row {
            Ok(value) => Some(value),
            Err(error) => {
                warn!(kind = T::KIND, %error, "skipping malformed row");
                None
            }
        })
        .collect()
    }
}

impl<R: Read, T: CsvRow> Iterator for CsvReader<R, T> {
    type Item = Result<T::Output, ReviewError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut rows = self.reader.deserialize::<T>();
        let row = rows.next()?;
        self.line_num += 1;

        Some(match row {
            Ok(row) => row.convert().map_err(|e| ReviewError::ParseError {
                line: Some(self.line_num),
                message: e.to_string(),
            }),
            Err(e) => Err(ReviewError::from(e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct PairRow {
        left: String,
        right: String,
    }

    impl CsvRow for PairRow {
        type Output = (u32, u32);
        const KIND: &'static str = "pair";

        fn convert(self) -> Result<Self::Output, ReviewError> {
            let parse = |s: &str| s.parse::<u32>().map_err(|_| ReviewError::invalid_amount(s));
            Ok((parse(&self.left)?, parse(&self.right)?))
        }
    }

    #[test]
    fn test_reader_yields_rows_with_line_numbers() {
        let input = "left,right\n1,2\nx,3\n 4 , 5 \n";
        let rows: Vec<_> = CsvReader::<_, PairRow>::new(input.as_bytes()).collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], Ok((1, 2)));
        assert_eq!(
            rows[1],
            Err(ReviewError::ParseError {
                line: Some(3),
                message: "Invalid amount 'x'".to_string(),
            })
        );
        assert_eq!(rows[2], Ok((4, 5)));
    }

    #[test]
    fn test_collect_valid_skips_bad_rows() {
        let input = "left,right\n1,2\n3\nx,y\n6,7\n";
        let rows = CsvReader::<_, PairRow>::new(input.as_bytes()).collect_valid();
        assert_eq!(rows, vec![(1, 2), (6, 7)]);
    }

    #[test]
    fn test_header_only_input() {
        let rows = CsvReader::<_, PairRow>::new("left,right\n".as_bytes()).collect_valid();
        assert!(rows.is_empty());
    }
}
