use super::buckets::{DISTANCE_CUTOFF, bucket_index};
use super::counts::DirectedCountTable;
use crate::core::models::model::Model;
use crate::core::models::pairs::DirectedPair;

/// Minimum index separation between the two records of a pair.
pub const MIN_SEPARATION: usize = 4;

/// One qualifying record pair: its directed bases and Euclidean distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualifyingPair {
    pub pair: DirectedPair,
    pub distance: f64,
}

/// Enumerates the qualifying pairs of one model in walk order.
///
/// A record pair `(i, j)` qualifies when `j >= i + MIN_SEPARATION`, both
/// records lie on the same chain, both residues are standard bases, and their
/// distance is within the binned range. Near neighbors along the sequence are
/// excluded because backbone connectivity fixes their geometry regardless of
/// the fold.
pub fn qualifying_pairs(model: &Model) -> impl Iterator<Item = QualifyingPair> + '_ {
    let records = model.records();
    records.iter().enumerate().flat_map(move |(index, first)| {
        records
            .iter()
            .skip(index + MIN_SEPARATION)
            .filter_map(move |second| {
                if first.chain_id != second.chain_id {
                    return None;
                }
                let pair = DirectedPair::new(first.nucleobase()?, second.nucleobase()?);
                let distance = (first.position - second.position).norm();
                (distance <= DISTANCE_CUTOFF).then_some(QualifyingPair { pair, distance })
            })
    })
}

/// Accumulates one model's qualifying pairs into the directed count table.
///
/// Returns the number of pairs binned. Models are binned in isolation; records
/// of other models never pair with this one's.
pub fn bin_model(model: &Model, counts: &mut DirectedCountTable) -> u64 {
    let mut binned = 0;
    for qualifying in qualifying_pairs(model) {
        if let Some(bucket) = bucket_index(qualifying.distance) {
            counts.increment(qualifying.pair, bucket);
            binned += 1;
        }
    }
    binned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::AtomRecord;
    use crate::core::models::pairs::PairKind;
    use nalgebra::Point3;

    fn record(base: &str, chain: &str, seq: i32, x: f64) -> AtomRecord {
        AtomRecord {
            record_kind: "ATOM".to_string(),
            serial: seq as u32,
            name: "C3'".to_string(),
            base: base.to_string(),
            chain_id: chain.to_string(),
            residue_seq: seq,
            position: Point3::new(x, 0.0, 0.0),
            occupancy: 1.0,
            temp_factor: 0.0,
            element: "C".to_string(),
        }
    }

    fn model(records: Vec<AtomRecord>) -> Model {
        Model::from_records(records)
    }

    #[test]
    fn pairs_respect_the_minimum_separation() {
        // Indices 0..=4; only (0, 4) is far enough apart in sequence.
        let m = model(vec![
            record("A", "A", 1, 0.0),
            record("U", "A", 2, 1.0),
            record("C", "A", 3, 2.0),
            record("G", "A", 4, 3.0),
            record("U", "A", 5, 4.0),
        ]);

        let pairs: Vec<_> = qualifying_pairs(&m).collect();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].pair.label(), "AU");
        assert_eq!(pairs[0].distance, 4.0);
    }

    #[test]
    fn cross_chain_pairs_are_excluded() {
        let m = model(vec![
            record("A", "A", 1, 0.0),
            record("U", "A", 2, 1.0),
            record("C", "A", 3, 2.0),
            record("G", "A", 4, 3.0),
            record("U", "B", 5, 4.0),
        ]);

        assert_eq!(qualifying_pairs(&m).count(), 0);
    }

    #[test]
    fn pairs_with_nonstandard_bases_are_skipped() {
        let m = model(vec![
            record("A", "A", 1, 0.0),
            record("U", "A", 2, 1.0),
            record("C", "A", 3, 2.0),
            record("G", "A", 4, 3.0),
            record("PSU", "A", 5, 4.0),
        ]);

        assert_eq!(qualifying_pairs(&m).count(), 0);
    }

    #[test]
    fn distances_beyond_the_cutoff_are_discarded() {
        let m = model(vec![
            record("A", "A", 1, 0.0),
            record("U", "A", 2, 1.0),
            record("C", "A", 3, 2.0),
            record("G", "A", 4, 3.0),
            record("U", "A", 5, 20.5),
        ]);

        let mut counts = DirectedCountTable::zeroed();
        assert_eq!(bin_model(&m, &mut counts), 0);
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn cutoff_distance_lands_in_the_last_bucket() {
        let m = model(vec![
            record("A", "A", 1, 0.0),
            record("U", "A", 2, 1.0),
            record("C", "A", 3, 2.0),
            record("G", "A", 4, 3.0),
            record("U", "A", 5, 20.0),
        ]);

        let mut counts = DirectedCountTable::zeroed();
        assert_eq!(bin_model(&m, &mut counts), 1);
        assert_eq!(
            counts.get(DirectedPair::from_label("AU").unwrap(), 19),
            1
        );
    }

    #[test]
    fn direction_is_recorded_as_encountered() {
        let m = model(vec![
            record("G", "A", 1, 0.0),
            record("U", "A", 2, 1.0),
            record("C", "A", 3, 2.0),
            record("A", "A", 4, 3.0),
            record("A", "A", 5, 4.0),
        ]);

        let mut counts = DirectedCountTable::zeroed();
        bin_model(&m, &mut counts);

        // (0, 4) walks G then A, so the GA row is hit, not AG.
        assert_eq!(counts.get(DirectedPair::from_label("GA").unwrap(), 4), 1);
        assert_eq!(counts.get(DirectedPair::from_label("AG").unwrap(), 4), 0);
    }

    #[test]
    fn two_atoms_five_residues_apart_bin_once() {
        // Fillers carry a nonstandard base so only the A/U pair can qualify.
        let m = model(vec![
            record("A", "A", 1, 0.0),
            record("N", "A", 2, 50.0),
            record("N", "A", 3, 60.0),
            record("N", "A", 4, 70.0),
            record("N", "A", 5, 80.0),
            record("U", "A", 6, 3.0),
        ]);

        let mut counts = DirectedCountTable::zeroed();
        assert_eq!(bin_model(&m, &mut counts), 1);
        assert_eq!(counts.get(DirectedPair::from_label("AU").unwrap(), 3), 1);
        assert_eq!(counts.merged().get(PairKind::AU, 3), 1);
    }

    #[test]
    fn accumulation_is_additive_across_models() {
        let one = model(vec![
            record("A", "A", 1, 0.0),
            record("N", "A", 2, 50.0),
            record("N", "A", 3, 60.0),
            record("N", "A", 4, 70.0),
            record("U", "A", 5, 3.5),
        ]);

        let mut counts = DirectedCountTable::zeroed();
        bin_model(&one, &mut counts);
        bin_model(&one, &mut counts);

        assert_eq!(counts.get(DirectedPair::from_label("AU").unwrap(), 3), 2);
        assert_eq!(counts.total(), 2);
    }
}
