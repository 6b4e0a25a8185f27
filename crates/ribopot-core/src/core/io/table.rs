use crate::core::stats::buckets::{BUCKET_COUNT, BUCKET_LABELS};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the row-label column leading every report table.
pub const LABEL_COLUMN: &str = "Bases";

#[derive(Debug, Error)]
pub enum TableError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Malformed table '{path}': {reason}")]
    Shape { path: String, reason: String },
    #[error("Invalid value '{value}' in row '{row}' of '{path}'")]
    Value {
        path: String,
        row: String,
        value: String,
    },
}

/// A report table as read from disk: row labels plus unparsed cell text, one
/// entry per bucket column. Interpreting the cells is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub labels: Vec<String>,
    pub cells: Vec<Vec<String>>,
}

/// Writes one report table: a header of `Bases` plus the bucket labels, then
/// one row per label with the cell text produced by `cell(row, bucket)`.
///
/// The full content is assembled in memory and lands at `path` through a
/// sibling temp file and a rename, so an interrupted run never leaves a
/// truncated table behind.
pub fn write_report<F>(path: &Path, labels: &[&str], mut cell: F) -> Result<(), TableError>
where
    F: FnMut(usize, usize) -> String,
{
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    let mut header = Vec::with_capacity(BUCKET_COUNT + 1);
    header.push(LABEL_COLUMN.to_string());
    header.extend(BUCKET_LABELS.iter().map(|label| label.to_string()));
    writer
        .write_record(&header)
        .map_err(|e| csv_error(path, e))?;

    for (row, label) in labels.iter().enumerate() {
        let mut fields = Vec::with_capacity(BUCKET_COUNT + 1);
        fields.push((*label).to_string());
        for bucket in 0..BUCKET_COUNT {
            fields.push(cell(row, bucket));
        }
        writer
            .write_record(&fields)
            .map_err(|e| csv_error(path, e))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| io_error(path, e.into_error()))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }
    }
    let staged = path.with_extension("tmp");
    fs::write(&staged, bytes).map_err(|e| io_error(&staged, e))?;
    fs::rename(&staged, path).map_err(|e| io_error(path, e))
}

/// Reads one report table, validating the header and the column count of
/// every row.
pub fn read_report(path: &Path) -> Result<RawTable, TableError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;

    let mut records = reader.records();
    let header = records
        .next()
        .ok_or_else(|| shape_error(path, "table is empty"))?
        .map_err(|e| csv_error(path, e))?;
    validate_header(path, &header)?;

    let mut labels = Vec::new();
    let mut cells = Vec::new();
    for result in records {
        let row = result.map_err(|e| csv_error(path, e))?;
        if row.len() != BUCKET_COUNT + 1 {
            return Err(shape_error(
                path,
                &format!(
                    "row {} has {} columns, expected {}",
                    labels.len() + 2,
                    row.len(),
                    BUCKET_COUNT + 1
                ),
            ));
        }
        labels.push(row.get(0).unwrap_or("").to_string());
        cells.push(row.iter().skip(1).map(str::to_string).collect());
    }

    Ok(RawTable { labels, cells })
}

fn validate_header(path: &Path, header: &csv::StringRecord) -> Result<(), TableError> {
    if header.len() != BUCKET_COUNT + 1 {
        return Err(shape_error(
            path,
            &format!(
                "header has {} columns, expected {}",
                header.len(),
                BUCKET_COUNT + 1
            ),
        ));
    }
    if header.get(0) != Some(LABEL_COLUMN) {
        return Err(shape_error(
            path,
            &format!("header must start with '{LABEL_COLUMN}'"),
        ));
    }
    for (index, expected) in BUCKET_LABELS.iter().enumerate() {
        if header.get(index + 1) != Some(*expected) {
            return Err(shape_error(
                path,
                &format!(
                    "bucket column {} is labeled '{}', expected '{}'",
                    index + 1,
                    header.get(index + 1).unwrap_or(""),
                    expected
                ),
            ));
        }
    }
    Ok(())
}

pub(crate) fn io_error(path: &Path, source: std::io::Error) -> TableError {
    TableError::Io {
        path: path.to_string_lossy().to_string(),
        source,
    }
}

fn csv_error(path: &Path, source: csv::Error) -> TableError {
    TableError::Csv {
        path: path.to_string_lossy().to_string(),
        source,
    }
}

pub(crate) fn shape_error(path: &Path, reason: &str) -> TableError {
    TableError::Shape {
        path: path.to_string_lossy().to_string(),
        reason: reason.to_string(),
    }
}

pub(crate) fn value_error(path: &Path, row: &str, value: &str) -> TableError {
    TableError::Value {
        path: path.to_string_lossy().to_string(),
        row: row.to_string(),
        value: value.to_string(),
    }
}
