use crate::core::models::atom::AtomRecord;
use crate::core::models::model::Model;
use nalgebra::Point3;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File extension of per-model extract files.
pub const EXTRACT_EXTENSION: &str = "mdl";

const FIELDS_PER_RECORD: usize = 12;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Malformed record {record} in '{path}': {reason}")]
    Malformed {
        path: String,
        record: usize,
        reason: String,
    },
}

/// Returns the extract path of one model of a structure: `<id>_m<n>.mdl`.
///
/// Model numbers are 1-based, matching the numbering of `MODEL` records in the
/// source files.
pub fn extract_path(dir: &Path, id: &str, model_no: usize) -> PathBuf {
    dir.join(format!("{id}_m{model_no}.{EXTRACT_EXTENSION}"))
}

/// Writes one model's records to its extract file, creating `dir` if needed.
///
/// Every record is stored as one semicolon-delimited row with the same twelve
/// fields the extractor parsed, so an extract can be read back into an equal
/// [`Model`].
pub fn write_model(
    dir: &Path,
    id: &str,
    model_no: usize,
    model: &Model,
) -> Result<PathBuf, ExtractError> {
    std::fs::create_dir_all(dir).map_err(|e| io_error(dir, e))?;
    let path = extract_path(dir, id, model_no);

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(&path)
        .map_err(|e| csv_error(&path, e))?;

    for record in model.records() {
        let fields = [
            record.record_kind.clone(),
            record.serial.to_string(),
            record.name.clone(),
            record.base.clone(),
            record.chain_id.clone(),
            record.residue_seq.to_string(),
            record.position.x.to_string(),
            record.position.y.to_string(),
            record.position.z.to_string(),
            record.occupancy.to_string(),
            record.temp_factor.to_string(),
            record.element.clone(),
        ];
        writer.write_record(&fields).map_err(|e| csv_error(&path, e))?;
    }
    writer.flush().map_err(|e| io_error(&path, e))?;

    Ok(path)
}

/// Reads an extract file back into a model, preserving record order.
pub fn read_model(path: &Path) -> Result<Model, ExtractError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;

    let mut model = Model::new();
    for (index, result) in reader.records().enumerate() {
        let row = result.map_err(|e| csv_error(path, e))?;
        model.push(parse_row(&row, path, index + 1)?);
    }
    Ok(model)
}

fn parse_row(
    row: &csv::StringRecord,
    path: &Path,
    record_no: usize,
) -> Result<AtomRecord, ExtractError> {
    if row.len() != FIELDS_PER_RECORD {
        return Err(ExtractError::Malformed {
            path: display(path),
            record: record_no,
            reason: format!(
                "expected {} fields, found {}",
                FIELDS_PER_RECORD,
                row.len()
            ),
        });
    }

    Ok(AtomRecord {
        record_kind: field(row, 0).to_string(),
        serial: parse_field(row, 1, "serial", path, record_no)?,
        name: field(row, 2).to_string(),
        base: field(row, 3).to_string(),
        chain_id: field(row, 4).to_string(),
        residue_seq: parse_field(row, 5, "residue_seq", path, record_no)?,
        position: Point3::new(
            parse_field(row, 6, "x", path, record_no)?,
            parse_field(row, 7, "y", path, record_no)?,
            parse_field(row, 8, "z", path, record_no)?,
        ),
        occupancy: parse_field(row, 9, "occupancy", path, record_no)?,
        temp_factor: parse_field(row, 10, "temp_factor", path, record_no)?,
        element: field(row, 11).to_string(),
    })
}

fn field<'a>(row: &'a csv::StringRecord, index: usize) -> &'a str {
    row.get(index).unwrap_or("")
}

fn parse_field<T: std::str::FromStr>(
    row: &csv::StringRecord,
    index: usize,
    name: &'static str,
    path: &Path,
    record_no: usize,
) -> Result<T, ExtractError> {
    let raw = field(row, index);
    raw.parse().map_err(|_| ExtractError::Malformed {
        path: display(path),
        record: record_no,
        reason: format!("invalid value '{raw}' for field '{name}'"),
    })
}

fn io_error(path: &Path, source: std::io::Error) -> ExtractError {
    ExtractError::Io {
        path: display(path),
        source,
    }
}

fn csv_error(path: &Path, source: csv::Error) -> ExtractError {
    ExtractError::Csv {
        path: display(path),
        source,
    }
}

fn display(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
