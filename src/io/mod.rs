//! I/O module
//!
//! Handles input decoding and report output.
//!
//! # Components
//!
//! - `instruction_json` - Ledger JSON instruction decoding
//! - `csv_format` - Trust line and issuer directory CSV rows
//! - `csv_reader` - Row-by-row CSV reader with malformed-row skipping
//! - `report` - Plain-text review report

pub mod csv_format;
pub mod csv_reader;
pub mod instruction_json;
pub mod report;

pub use csv_format::{DirectoryRow, TrustLineRow};
pub use csv_reader::{CsvReader, CsvRow};
pub use instruction_json::{decode_instruction, read_instruction, JsonAmount, JsonInstruction};
pub use report::write_review_report;

use crate::core::DirectoryEntry;
use crate::types::{ReviewError, TrustLine};
use std::io::ErrorKind;
use std::path::Path;

/// Read a whole input file
///
/// A missing file is reported as `FileNotFound`, other failures as I/O errors.
pub async fn read_input(path: &Path) -> Result<Vec<u8>, ReviewError> {
    tokio::fs::read(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => ReviewError::file_not_found(&path.display().to_string()),
        _ => ReviewError::from(e),
    })
}

/// Read the trust lines of the signing account, skipping malformed rows
pub async fn read_trust_lines(path: &Path) -> Result<Vec<TrustLine>, ReviewError> {
    let input = read_input(path).await?;
    Ok(CsvReader::<_, TrustLineRow>::new(input.as_slice()).collect_valid())
}

/// Read the issuer directory, skipping malformed rows
pub async fn read_directory(path: &Path) -> Result<Vec<DirectoryEntry>, ReviewError> {
    let input = read_input(path).await?;
    Ok(CsvReader::<_, DirectoryRow>::new(input.as_slice()).collect_valid())
}
