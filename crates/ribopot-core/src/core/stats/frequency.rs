use super::buckets::BUCKET_COUNT;
use super::counts::CountTable;
use crate::core::models::pairs::PairKind;

/// A normalized view of the canonical count table.
///
/// Observed tables divide each cell by its row total, reference tables by its
/// bucket-column total. Cells whose normalizing total is zero are undefined
/// and stored as NaN; the potential derivation resolves them to the configured
/// penalty, so NaN never escapes past that step.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    rows: [[f64; BUCKET_COUNT]; PairKind::COUNT],
}

impl FrequencyTable {
    /// Row-normalized frequencies: how a class distributes over distance.
    pub fn observed(counts: &CountTable) -> Self {
        let mut rows = [[f64::NAN; BUCKET_COUNT]; PairKind::COUNT];
        for kind in PairKind::ALL {
            let total = counts.row_total(kind);
            if total == 0 {
                continue;
            }
            for bucket in 0..BUCKET_COUNT {
                rows[kind.row_index()][bucket] = counts.get(kind, bucket) as f64 / total as f64;
            }
        }
        Self { rows }
    }

    /// Column-normalized frequencies: how a bucket distributes over classes.
    pub fn reference(counts: &CountTable) -> Self {
        let mut rows = [[f64::NAN; BUCKET_COUNT]; PairKind::COUNT];
        for bucket in 0..BUCKET_COUNT {
            let total = counts.column_total(bucket);
            if total == 0 {
                continue;
            }
            for kind in PairKind::ALL {
                rows[kind.row_index()][bucket] = counts.get(kind, bucket) as f64 / total as f64;
            }
        }
        Self { rows }
    }

    pub fn get(&self, kind: PairKind, bucket: usize) -> f64 {
        self.rows[kind.row_index()][bucket]
    }

    pub(crate) fn from_rows(rows: [[f64; BUCKET_COUNT]; PairKind::COUNT]) -> Self {
        Self { rows }
    }

    pub(crate) fn row(&self, kind: PairKind) -> &[f64; BUCKET_COUNT] {
        &self.rows[kind.row_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::pairs::DirectedPair;
    use crate::core::stats::counts::DirectedCountTable;

    const TOLERANCE: f64 = 1e-9;

    fn counts_with(observations: &[(&str, usize, u64)]) -> CountTable {
        let mut directed = DirectedCountTable::zeroed();
        for (label, bucket, times) in observations {
            let pair = DirectedPair::from_label(label).unwrap();
            for _ in 0..*times {
                directed.increment(pair, *bucket);
            }
        }
        directed.merged()
    }

    #[test]
    fn observed_rows_sum_to_one() {
        let counts = counts_with(&[("AU", 2, 3), ("UA", 5, 1), ("GG", 0, 2)]);
        let observed = FrequencyTable::observed(&counts);

        for kind in [PairKind::AU, PairKind::GG] {
            let sum: f64 = observed.row(kind).iter().sum();
            assert!((sum - 1.0).abs() < TOLERANCE);
        }
        assert!((observed.get(PairKind::AU, 2) - 0.75).abs() < TOLERANCE);
        assert!((observed.get(PairKind::AU, 5) - 0.25).abs() < TOLERANCE);
    }

    #[test]
    fn observed_zero_rows_are_nan() {
        let counts = counts_with(&[("AU", 2, 3)]);
        let observed = FrequencyTable::observed(&counts);

        assert!(observed.get(PairKind::CC, 0).is_nan());
        assert!(observed.get(PairKind::CC, 19).is_nan());
    }

    #[test]
    fn reference_columns_sum_to_one() {
        let counts = counts_with(&[("AU", 2, 1), ("GG", 2, 3), ("CC", 2, 4)]);
        let reference = FrequencyTable::reference(&counts);

        let sum: f64 = PairKind::ALL
            .iter()
            .map(|kind| reference.get(*kind, 2))
            .sum();
        assert!((sum - 1.0).abs() < TOLERANCE);
        assert!((reference.get(PairKind::CC, 2) - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn reference_zero_columns_are_nan() {
        let counts = counts_with(&[("AU", 2, 1)]);
        let reference = FrequencyTable::reference(&counts);

        assert!(reference.get(PairKind::AU, 3).is_nan());
        assert!(reference.get(PairKind::GG, 3).is_nan());
    }

    #[test]
    fn observed_cell_in_populated_row_can_still_be_zero() {
        let counts = counts_with(&[("AU", 2, 1)]);
        let observed = FrequencyTable::observed(&counts);

        assert_eq!(observed.get(PairKind::AU, 3), 0.0);
    }
}
