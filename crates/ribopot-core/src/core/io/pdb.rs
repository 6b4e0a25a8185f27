use crate::core::models::atom::AtomRecord;
use crate::core::models::model::{Model, Structure};
use nalgebra::Point3;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Record type of the coordinate lines the extractor keeps.
pub const TRACKED_RECORD_KIND: &str = "ATOM";
/// Atom name of the tracked backbone marker, one per residue.
pub const TRACKED_ATOM_NAME: &str = "C3'";

const FIELDS_PER_RECORD: usize = 12;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
    #[error(
        "Found {markers} model boundary markers, but {models} declared models need {required}"
    )]
    ModelBounds {
        markers: usize,
        required: usize,
        models: usize,
    },
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer in field '{field}' (value: '{value}')")]
    InvalidInt {
        field: &'static str,
        value: String,
    },
    #[error("Invalid float in field '{field}' (value: '{value}')")]
    InvalidFloat {
        field: &'static str,
        value: String,
    },
    #[error("Record has {found} fields, expected at least {expected}")]
    TooFewFields { expected: usize, found: usize },
}

/// Reads a structure, extracting the tracked records of every declared model.
///
/// The declared model count comes from the `NUMMDL` record and defaults to one.
/// Single-model files are filtered in one pass over the whole file; multi-model
/// files are segmented at `MODEL`/`END` marker lines first, and each model keeps
/// the records between its opening marker and the next one.
pub fn read_from(reader: &mut impl BufRead, id: &str) -> Result<Structure, PdbError> {
    let lines = reader.lines().collect::<Result<Vec<_>, io::Error>>()?;
    let num_models = declared_models(&lines)?;
    let models = segment_models(&lines, num_models)?;
    Ok(Structure::new(id, models))
}

/// Convenience wrapper that opens `path` and parses it with [`read_from`].
pub fn read_from_path(path: &Path, id: &str) -> Result<Structure, PdbError> {
    let mut reader = BufReader::new(File::open(path)?);
    read_from(&mut reader, id)
}

/// Returns the model count a file declares via `NUMMDL`, defaulting to one.
pub fn count_models(reader: &mut impl BufRead) -> Result<usize, PdbError> {
    let lines = reader.lines().collect::<Result<Vec<_>, io::Error>>()?;
    declared_models(&lines)
}

fn declared_models(lines: &[String]) -> Result<usize, PdbError> {
    for (index, line) in lines.iter().enumerate() {
        if line.starts_with("NUMMDL") {
            let value = line.split_whitespace().nth(1).unwrap_or("");
            return value.parse().map_err(|_| PdbError::Parse {
                line: index + 1,
                kind: PdbParseErrorKind::InvalidInt {
                    field: "NUMMDL",
                    value: value.to_string(),
                },
            });
        }
    }
    Ok(1)
}

fn segment_models(lines: &[String], num_models: usize) -> Result<Vec<Model>, PdbError> {
    match num_models {
        0 => Ok(Vec::new()),
        1 => Ok(vec![collect_model(
            lines.iter().enumerate().map(|(index, line)| (index, line.as_str())),
        )?]),
        _ => {
            let bounds: Vec<usize> = lines
                .iter()
                .enumerate()
                .filter(|(_, line)| is_boundary(line))
                .map(|(index, _)| index)
                .collect();
            // Model k owns the lines between the k-th marker and the next one,
            // so n models need n + 1 markers.
            if bounds.len() < num_models + 1 {
                return Err(PdbError::ModelBounds {
                    markers: bounds.len(),
                    required: num_models + 1,
                    models: num_models,
                });
            }

            let mut models = Vec::with_capacity(num_models);
            for model_no in 1..=num_models {
                let (start, end) = (bounds[model_no - 1], bounds[model_no]);
                models.push(collect_model(
                    lines[start..=end]
                        .iter()
                        .enumerate()
                        .map(|(offset, line)| (start + offset, line.as_str())),
                )?);
            }
            Ok(models)
        }
    }
}

fn is_boundary(line: &str) -> bool {
    matches!(line.split_whitespace().next(), Some("MODEL") | Some("END"))
}

fn collect_model<'a>(
    lines: impl Iterator<Item = (usize, &'a str)>,
) -> Result<Model, PdbError> {
    let mut model = Model::new();
    for (index, line) in lines {
        // Wide coordinates can fuse with a following negative number into one
        // column, so negatives are space-padded before tokenizing.
        let padded = line.replace('-', " -");
        let fields: Vec<&str> = padded.split_whitespace().collect();
        if fields.first() != Some(&TRACKED_RECORD_KIND) || fields.get(2) != Some(&TRACKED_ATOM_NAME)
        {
            continue;
        }
        model.push(parse_record(&fields, index + 1)?);
    }
    Ok(model)
}

fn parse_record(fields: &[&str], line_num: usize) -> Result<AtomRecord, PdbError> {
    if fields.len() < FIELDS_PER_RECORD {
        return Err(PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::TooFewFields {
                expected: FIELDS_PER_RECORD,
                found: fields.len(),
            },
        });
    }

    let serial = parse_int(fields[1], "serial", line_num)?;
    let residue_seq = parse_int(fields[5], "residue_seq", line_num)?;
    let x = parse_float(fields[6], "x", line_num)?;
    let y = parse_float(fields[7], "y", line_num)?;
    let z = parse_float(fields[8], "z", line_num)?;
    let occupancy = parse_float(fields[9], "occupancy", line_num)?;
    let temp_factor = parse_float(fields[10], "temp_factor", line_num)?;

    Ok(AtomRecord {
        record_kind: fields[0].to_string(),
        serial,
        name: fields[2].to_string(),
        base: fields[3].to_string(),
        chain_id: fields[4].to_string(),
        residue_seq,
        position: Point3::new(x, y, z),
        occupancy,
        temp_factor,
        element: fields[11].to_string(),
    })
}

fn parse_int<T: std::str::FromStr>(
    value: &str,
    field: &'static str,
    line_num: usize,
) -> Result<T, PdbError> {
    value.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidInt {
            field,
            value: value.to_string(),
        },
    })
}

fn parse_float(value: &str, field: &'static str, line_num: usize) -> Result<f64, PdbError> {
    value.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidFloat {
            field,
            value: value.to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SINGLE_MODEL: &str = "\
HEADER    RIBONUCLEIC ACID                        01-JAN-20   TEST
ATOM      1  P     G A   1       1.000   2.000   3.000  1.00  0.50           P
ATOM      2  C3'   G A   1       4.000   5.000   6.000  1.00  0.50           C
ATOM      3  C3'   A A   2       7.000   8.000   9.000  1.00  0.50           C
HETATM    4  C3'   U A   3       1.000   1.000   1.000  1.00  0.50           C
TER       5        A A   3
END
";

    #[test]
    fn single_model_keeps_only_tracked_records_in_order() {
        let structure = read_from(&mut Cursor::new(SINGLE_MODEL), "TEST").unwrap();

        assert_eq!(structure.id, "TEST");
        assert_eq!(structure.num_models(), 1);
        let records = structure.models[0].records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].base, "G");
        assert_eq!(records[0].serial, 2);
        assert_eq!(records[1].base, "A");
        assert_eq!(records[1].residue_seq, 2);
    }

    #[test]
    fn record_fields_are_parsed_positionally() {
        let structure = read_from(&mut Cursor::new(SINGLE_MODEL), "TEST").unwrap();
        let record = &structure.models[0].records()[0];

        assert_eq!(record.record_kind, "ATOM");
        assert_eq!(record.name, "C3'");
        assert_eq!(record.chain_id, "A");
        assert_eq!(record.position, Point3::new(4.0, 5.0, 6.0));
        assert_eq!(record.occupancy, 1.0);
        assert_eq!(record.temp_factor, 0.5);
        assert_eq!(record.element, "C");
    }

    #[test]
    fn fused_negative_coordinates_are_split() {
        let line = "ATOM      1  C3'   G A   1      51.040-123.456  -7.000  1.00  0.00           C\n";
        let structure = read_from(&mut Cursor::new(line), "X").unwrap();
        let record = &structure.models[0].records()[0];

        assert_eq!(record.position, Point3::new(51.04, -123.456, -7.0));
    }

    #[test]
    fn count_models_defaults_to_one() {
        assert_eq!(count_models(&mut Cursor::new(SINGLE_MODEL)).unwrap(), 1);
    }

    #[test]
    fn count_models_reads_nummdl() {
        let content = "NUMMDL    3\nEND\n";
        assert_eq!(count_models(&mut Cursor::new(content)).unwrap(), 3);
    }

    #[test]
    fn count_models_rejects_malformed_nummdl() {
        let content = "NUMMDL    many\nEND\n";
        let err = count_models(&mut Cursor::new(content)).unwrap_err();
        assert!(matches!(
            err,
            PdbError::Parse {
                line: 1,
                kind: PdbParseErrorKind::InvalidInt { field: "NUMMDL", .. },
            }
        ));
    }

    fn two_model_file() -> String {
        "\
NUMMDL    2
ATOM      9  C3'   G A   0       9.000   9.000   9.000  1.00  0.00           C
MODEL        1
ATOM      1  C3'   G A   1       1.000   0.000   0.000  1.00  0.00           C
ATOM      2  C3'   C A   2       2.000   0.000   0.000  1.00  0.00           C
ENDMDL
MODEL        2
ATOM      1  C3'   G A   1       5.000   0.000   0.000  1.00  0.00           C
ENDMDL
END
"
        .to_string()
    }

    #[test]
    fn multi_model_files_are_segmented_at_markers() {
        let structure = read_from(&mut Cursor::new(two_model_file()), "PAIR").unwrap();

        assert_eq!(structure.num_models(), 2);
        assert_eq!(structure.models[0].len(), 2);
        assert_eq!(structure.models[1].len(), 1);
        assert_eq!(structure.models[1].records()[0].position.x, 5.0);
    }

    #[test]
    fn records_before_the_first_marker_belong_to_no_model() {
        let structure = read_from(&mut Cursor::new(two_model_file()), "PAIR").unwrap();
        let xs: Vec<f64> = structure.models[0]
            .records()
            .iter()
            .map(|r| r.position.x)
            .collect();
        assert!(!xs.contains(&9.0));
    }

    #[test]
    fn missing_end_marker_is_a_bounds_error() {
        let content = "\
NUMMDL    2
MODEL        1
ATOM      1  C3'   G A   1       1.000   0.000   0.000  1.00  0.00           C
MODEL        2
ATOM      1  C3'   G A   1       5.000   0.000   0.000  1.00  0.00           C
";
        let err = read_from(&mut Cursor::new(content), "PAIR").unwrap_err();
        assert!(matches!(
            err,
            PdbError::ModelBounds {
                markers: 2,
                required: 3,
                models: 2,
            }
        ));
    }

    #[test]
    fn malformed_coordinate_is_a_parse_error() {
        let content = "ATOM      1  C3'   G A   1       1.0q0   0.000   0.000  1.00  0.00           C\n";
        let err = read_from(&mut Cursor::new(content), "X").unwrap_err();
        assert!(matches!(
            err,
            PdbError::Parse {
                line: 1,
                kind: PdbParseErrorKind::InvalidFloat { field: "x", .. },
            }
        ));
    }

    #[test]
    fn short_tracked_record_is_a_parse_error() {
        let content = "ATOM      1  C3'   G A\n";
        let err = read_from(&mut Cursor::new(content), "X").unwrap_err();
        assert!(matches!(
            err,
            PdbError::Parse {
                kind: PdbParseErrorKind::TooFewFields { .. },
                ..
            }
        ));
    }
}
