//! CSV file reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Rows polars looks at to infer column dtypes.
const INFER_SCHEMA_ROWS: usize = 100;

/// Check file size against a limit.
pub fn check_file_size(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::from_io(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Rejects UTF-16 input. A UTF-8 BOM is fine.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file
        .read(&mut buffer)
        .map_err(|e| IngestError::from_io(path, e))?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Validate DataFrame shape after loading.
pub fn validate_dataframe_shape(df: &DataFrame, path: &Path) -> Result<()> {
    if df.height() == 0 {
        return Err(IngestError::EmptyDataFrame {
            path: path.to_path_buf(),
        });
    }

    for name in df.get_column_names() {
        if name.trim().is_empty() {
            return Err(IngestError::EmptyColumnName {
                path: path.to_path_buf(),
            });
        }
    }

    Ok(())
}

/// Reads the dataset CSV (single header row) into a DataFrame.
pub fn read_dataset_frame(path: &Path) -> Result<DataFrame> {
    check_file_size(path, MAX_CSV_FILE_SIZE)?;
    validate_encoding(path)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    validate_dataframe_shape(&df, path)?;
    Ok(df)
}
