use crate::core::io::table::{self, RawTable, TableError};
use crate::core::models::pairs::{DirectedPair, PairKind};
use crate::core::stats::buckets::BUCKET_COUNT;
use crate::core::stats::counts::{CountTable, DirectedCountTable};
use crate::core::stats::frequency::FrequencyTable;
use crate::core::stats::potential::PotentialTable;
use std::path::{Path, PathBuf};

/// File name of the persisted directed accumulator.
pub const DIRECTED_COUNTS_FILE: &str = "directed_counts.txt";
/// File name of the merged canonical counts.
pub const COUNTS_FILE: &str = "counts.txt";
/// File name of the observed (row-normalized) frequency table.
pub const OBS_FREQ_FILE: &str = "obs_freq.txt";
/// File name of the reference (column-normalized) frequency table.
pub const REF_FREQ_FILE: &str = "ref_freq.txt";
/// File name of the potential table.
pub const POTENTIAL_FILE: &str = "potential.txt";

/// Reads and rewrites the tabular artifacts of training runs.
///
/// The directed accumulator is the one long-lived statistic: it is reloaded
/// and extended by later runs. The four derived tables are rewritten wholesale
/// every run. All writes are atomic per artifact; loads validate row labels
/// and shape before any value is trusted.
pub struct ReportStore {
    dir: PathBuf,
}

impl ReportStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn directed_counts_path(&self) -> PathBuf {
        self.dir.join(DIRECTED_COUNTS_FILE)
    }

    pub fn counts_path(&self) -> PathBuf {
        self.dir.join(COUNTS_FILE)
    }

    pub fn observed_path(&self) -> PathBuf {
        self.dir.join(OBS_FREQ_FILE)
    }

    pub fn reference_path(&self) -> PathBuf {
        self.dir.join(REF_FREQ_FILE)
    }

    pub fn potential_path(&self) -> PathBuf {
        self.dir.join(POTENTIAL_FILE)
    }

    pub fn save_directed_counts(&self, counts: &DirectedCountTable) -> Result<(), TableError> {
        table::write_report(&self.directed_counts_path(), &directed_labels(), |row, bucket| {
            counts.get(DirectedPair::ROW_ORDER[row], bucket).to_string()
        })
    }

    /// Loads the persisted accumulator, or `None` when no run has written one.
    pub fn load_directed_counts(&self) -> Result<Option<DirectedCountTable>, TableError> {
        let path = self.directed_counts_path();
        if !path.exists() {
            return Ok(None);
        }
        let raw = table::read_report(&path)?;
        expect_labels(&path, &raw, &directed_labels())?;

        let mut counts = DirectedCountTable::zeroed();
        for (row, pair) in DirectedPair::ROW_ORDER.iter().enumerate() {
            counts.set_row(*pair, parse_row(&path, &raw, row)?);
        }
        Ok(Some(counts))
    }

    pub fn save_counts(&self, counts: &CountTable) -> Result<(), TableError> {
        table::write_report(&self.counts_path(), &canonical_labels(), |row, bucket| {
            counts.get(PairKind::ALL[row], bucket).to_string()
        })
    }

    pub fn load_counts(&self) -> Result<CountTable, TableError> {
        let path = self.counts_path();
        let raw = table::read_report(&path)?;
        expect_labels(&path, &raw, &canonical_labels())?;

        let mut counts = CountTable::zeroed();
        for (row, kind) in PairKind::ALL.iter().enumerate() {
            counts.set_row(*kind, parse_row(&path, &raw, row)?);
        }
        Ok(counts)
    }

    pub fn save_observed(&self, observed: &FrequencyTable) -> Result<(), TableError> {
        save_frequency(&self.observed_path(), observed)
    }

    pub fn load_observed(&self) -> Result<FrequencyTable, TableError> {
        load_frequency(&self.observed_path())
    }

    pub fn save_reference(&self, reference: &FrequencyTable) -> Result<(), TableError> {
        save_frequency(&self.reference_path(), reference)
    }

    pub fn load_reference(&self) -> Result<FrequencyTable, TableError> {
        load_frequency(&self.reference_path())
    }

    pub fn save_potential(&self, potential: &PotentialTable) -> Result<(), TableError> {
        table::write_report(&self.potential_path(), &canonical_labels(), |row, bucket| {
            potential.get(PairKind::ALL[row], bucket).to_string()
        })
    }

    /// Loads the potential table, validating labels and shape.
    ///
    /// Existence is the caller's concern: scoring treats a missing file as a
    /// state error with its own message, so the check lives there.
    pub fn load_potential(&self) -> Result<PotentialTable, TableError> {
        let path = self.potential_path();
        let raw = table::read_report(&path)?;
        expect_labels(&path, &raw, &canonical_labels())?;

        let mut rows = [[0.0; BUCKET_COUNT]; PairKind::COUNT];
        for row in 0..PairKind::COUNT {
            rows[row] = parse_row(&path, &raw, row)?;
        }
        Ok(PotentialTable::from_rows(rows))
    }
}

fn directed_labels() -> Vec<&'static str> {
    DirectedPair::ROW_ORDER.iter().map(|p| p.label()).collect()
}

fn canonical_labels() -> Vec<&'static str> {
    PairKind::ALL.iter().map(|k| k.label()).collect()
}

fn save_frequency(path: &Path, table: &FrequencyTable) -> Result<(), TableError> {
    table::write_report(path, &canonical_labels(), |row, bucket| {
        table.get(PairKind::ALL[row], bucket).to_string()
    })
}

fn load_frequency(path: &Path) -> Result<FrequencyTable, TableError> {
    let raw = table::read_report(path)?;
    expect_labels(path, &raw, &canonical_labels())?;

    let mut rows = [[0.0; BUCKET_COUNT]; PairKind::COUNT];
    for row in 0..PairKind::COUNT {
        rows[row] = parse_row(path, &raw, row)?;
    }
    Ok(FrequencyTable::from_rows(rows))
}

fn expect_labels(path: &Path, raw: &RawTable, expected: &[&str]) -> Result<(), TableError> {
    if raw.labels.len() != expected.len() {
        return Err(table::shape_error(
            path,
            &format!("{} rows, expected {}", raw.labels.len(), expected.len()),
        ));
    }
    for (index, label) in expected.iter().enumerate() {
        if raw.labels[index] != *label {
            return Err(table::shape_error(
                path,
                &format!(
                    "row {} is labeled '{}', expected '{}'",
                    index + 1,
                    raw.labels[index],
                    label
                ),
            ));
        }
    }
    Ok(())
}

fn parse_row<T>(path: &Path, raw: &RawTable, row: usize) -> Result<[T; BUCKET_COUNT], TableError>
where
    T: Copy + Default + std::str::FromStr,
{
    let mut values = [T::default(); BUCKET_COUNT];
    for (bucket, text) in raw.cells[row].iter().enumerate() {
        values[bucket] = text
            .parse()
            .map_err(|_| table::value_error(path, &raw.labels[row], text))?;
    }
    Ok(values)
}
