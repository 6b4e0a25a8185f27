use super::buckets::BUCKET_COUNT;
use crate::core::models::pairs::{DirectedPair, PairKind};

/// Distance histogram over the sixteen directed base pairs.
///
/// This is the table training accumulates into, one row per ordered pair as it
/// was encountered in the walk. It is the only mutable statistic of the
/// pipeline; everything downstream is derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedCountTable {
    rows: [[u64; BUCKET_COUNT]; DirectedPair::COUNT],
}

impl DirectedCountTable {
    /// Creates an empty table with every cell at zero.
    pub fn zeroed() -> Self {
        Self {
            rows: [[0; BUCKET_COUNT]; DirectedPair::COUNT],
        }
    }

    /// Adds one observation of `pair` at `bucket`.
    pub fn increment(&mut self, pair: DirectedPair, bucket: usize) {
        self.rows[pair.row_index()][bucket] += 1;
    }

    pub fn get(&self, pair: DirectedPair, bucket: usize) -> u64 {
        self.rows[pair.row_index()][bucket]
    }

    pub fn row(&self, pair: DirectedPair) -> &[u64; BUCKET_COUNT] {
        &self.rows[pair.row_index()]
    }

    /// Sets one row wholesale; used when restoring a persisted table.
    pub fn set_row(&mut self, pair: DirectedPair, row: [u64; BUCKET_COUNT]) {
        self.rows[pair.row_index()] = row;
    }

    /// Total number of observations across all rows and buckets.
    pub fn total(&self) -> u64 {
        self.rows.iter().flatten().sum()
    }

    /// Merges the directed rows into the ten canonical classes.
    ///
    /// Each asymmetric class gets the bucket-wise sum of its two directed rows;
    /// same-base classes pass through unchanged. The merge is independent of
    /// which direction each observation was recorded under.
    pub fn merged(&self) -> CountTable {
        let mut merged = CountTable::zeroed();
        for kind in PairKind::ALL {
            let (a, b) = kind.bases();
            let forward = DirectedPair::new(a, b);
            let mut row = *self.row(forward);
            if a != b {
                for (cell, add) in row.iter_mut().zip(self.row(forward.reversed())) {
                    *cell += add;
                }
            }
            merged.rows[kind.row_index()] = row;
        }
        merged
    }
}

impl Default for DirectedCountTable {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// Distance histogram over the ten canonical pair classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountTable {
    rows: [[u64; BUCKET_COUNT]; PairKind::COUNT],
}

impl CountTable {
    pub fn zeroed() -> Self {
        Self {
            rows: [[0; BUCKET_COUNT]; PairKind::COUNT],
        }
    }

    pub fn get(&self, kind: PairKind, bucket: usize) -> u64 {
        self.rows[kind.row_index()][bucket]
    }

    pub fn row(&self, kind: PairKind) -> &[u64; BUCKET_COUNT] {
        &self.rows[kind.row_index()]
    }

    pub fn set_row(&mut self, kind: PairKind, row: [u64; BUCKET_COUNT]) {
        self.rows[kind.row_index()] = row;
    }

    /// Sum of one class row across all buckets.
    pub fn row_total(&self, kind: PairKind) -> u64 {
        self.row(kind).iter().sum()
    }

    /// Sum of one bucket column across all classes.
    pub fn column_total(&self, bucket: usize) -> u64 {
        self.rows.iter().map(|row| row[bucket]).sum()
    }

    pub fn total(&self) -> u64 {
        self.rows.iter().flatten().sum()
    }
}

impl Default for CountTable {
    fn default() -> Self {
        Self::zeroed()
    }
}
