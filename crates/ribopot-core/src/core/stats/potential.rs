use super::buckets::{BUCKET_COUNT, bucket_index};
use super::frequency::FrequencyTable;
use super::params::EnergyParams;
use crate::core::models::pairs::PairKind;

/// The trained pseudo-energy table: −log10 of observed over reference.
///
/// Low energies mark distances a class is seen at more often than chance,
/// high energies the opposite. Cells where the ratio is undefined or zero
/// carry the configured penalty, so every cell of a derived table is finite.
#[derive(Debug, Clone, PartialEq)]
pub struct PotentialTable {
    rows: [[f64; BUCKET_COUNT]; PairKind::COUNT],
}

impl PotentialTable {
    /// Derives the potential from an observed and a reference frequency table.
    pub fn derive(
        observed: &FrequencyTable,
        reference: &FrequencyTable,
        params: &EnergyParams,
    ) -> Self {
        let mut rows = [[0.0; BUCKET_COUNT]; PairKind::COUNT];
        for kind in PairKind::ALL {
            for bucket in 0..BUCKET_COUNT {
                let ratio = observed.get(kind, bucket) / reference.get(kind, bucket);
                // NaN or infinite ratios come from empty rows or columns; a
                // zero ratio would send the logarithm to infinity. Both mean
                // "never observed" and take the penalty.
                rows[kind.row_index()][bucket] = if ratio.is_finite() && ratio > 0.0 {
                    -ratio.log10()
                } else {
                    params.unobserved_penalty
                };
            }
        }
        Self { rows }
    }

    pub fn get(&self, kind: PairKind, bucket: usize) -> f64 {
        self.rows[kind.row_index()][bucket]
    }

    /// Interpolated pseudo-energy at an exact distance, `None` outside the
    /// binned range.
    ///
    /// The value is linear between the bucket containing the distance and the
    /// next one, clamped at the table edge. Integral distances therefore land
    /// exactly on their bucket value, and every distance in the last bucket
    /// takes that bucket's value.
    pub fn value_at(&self, kind: PairKind, distance: f64) -> Option<f64> {
        let lower = bucket_index(distance)?;
        let upper = (lower + 1).min(BUCKET_COUNT - 1);
        let fraction = distance - distance.floor();
        let y1 = self.get(kind, lower);
        let y2 = self.get(kind, upper);
        Some(y1 + fraction * (y2 - y1))
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

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn table_from(observations: &[(&str, usize, u64)], params: &EnergyParams) -> PotentialTable {
        let mut directed = DirectedCountTable::zeroed();
        for (label, bucket, times) in observations {
            let pair = DirectedPair::from_label(label).unwrap();
            for _ in 0..*times {
                directed.increment(pair, *bucket);
            }
        }
        let merged = directed.merged();
        PotentialTable::derive(
            &FrequencyTable::observed(&merged),
            &FrequencyTable::reference(&merged),
            params,
        )
    }

    #[test]
    fn derive_takes_negative_log10_of_the_ratio() {
        // Bucket 2: AU has 1 of its 2 observations there (observed 0.5) and
        // 1 of the 4 total in that bucket (reference 0.25).
        let table = table_from(
            &[("AU", 2, 1), ("AU", 7, 1), ("GG", 2, 3)],
            &EnergyParams::default(),
        );

        let expected = -(0.5f64 / 0.25).log10();
        assert!(f64_approx_equal(table.get(PairKind::AU, 2), expected));
    }

    #[test]
    fn unobserved_cells_take_the_penalty() {
        let params = EnergyParams {
            unobserved_penalty: 4.5,
        };
        let table = table_from(&[("AU", 2, 1)], &params);

        // Empty class row and empty bucket column.
        assert_eq!(table.get(PairKind::CC, 2), 4.5);
        assert_eq!(table.get(PairKind::AU, 3), 4.5);
    }

    #[test]
    fn matching_observed_and_reference_score_exactly_zero() {
        // With a single populated cell, observed and reference are both 1.
        let table = table_from(&[("AU", 2, 5)], &EnergyParams::default());
        assert_eq!(table.get(PairKind::AU, 2), 0.0);
    }

    #[test]
    fn value_at_integral_distance_is_the_bucket_value() {
        let table = table_from(&[("AU", 2, 1), ("AU", 3, 1)], &EnergyParams::default());
        let at_three = table.value_at(PairKind::AU, 3.0).unwrap();
        assert!(f64_approx_equal(at_three, table.get(PairKind::AU, 3)));
    }

    #[test]
    fn value_at_interpolates_between_adjacent_buckets() {
        let mut rows = [[0.0; BUCKET_COUNT]; PairKind::COUNT];
        rows[PairKind::AU.row_index()][3] = 1.0;
        rows[PairKind::AU.row_index()][4] = 3.0;
        let table = PotentialTable::from_rows(rows);

        let midpoint = table.value_at(PairKind::AU, 3.5).unwrap();
        assert!(f64_approx_equal(midpoint, 2.0));
        let quarter = table.value_at(PairKind::AU, 3.25).unwrap();
        assert!(f64_approx_equal(quarter, 1.5));
    }

    #[test]
    fn value_at_clamps_inside_the_last_bucket() {
        let mut rows = [[0.0; BUCKET_COUNT]; PairKind::COUNT];
        rows[PairKind::GG.row_index()][19] = 2.5;
        let table = PotentialTable::from_rows(rows);

        assert!(f64_approx_equal(
            table.value_at(PairKind::GG, 19.5).unwrap(),
            2.5
        ));
        assert!(f64_approx_equal(
            table.value_at(PairKind::GG, 20.0).unwrap(),
            2.5
        ));
    }

    #[test]
    fn value_at_is_none_outside_the_range() {
        let table = table_from(&[("AU", 2, 1)], &EnergyParams::default());
        assert_eq!(table.value_at(PairKind::AU, 20.1), None);
        assert_eq!(table.value_at(PairKind::AU, -0.1), None);
    }
}
