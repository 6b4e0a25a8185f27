use super::binning::qualifying_pairs;
use super::potential::PotentialTable;
use crate::core::models::model::Model;
use std::ops::{Add, AddAssign};

/// Accumulated pseudo-energy over one or more scored models.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GibbsEstimate {
    /// Summed interpolated pseudo-energy of every scored pair.
    pub energy: f64,
    /// Number of qualifying pairs that contributed to the sum.
    pub pairs_scored: u64,
}

impl Add for GibbsEstimate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            energy: self.energy + rhs.energy,
            pairs_scored: self.pairs_scored + rhs.pairs_scored,
        }
    }
}

impl AddAssign for GibbsEstimate {
    fn add_assign(&mut self, rhs: Self) {
        self.energy += rhs.energy;
        self.pairs_scored += rhs.pairs_scored;
    }
}

/// Scores one model against a trained potential.
///
/// Walks the same qualifying pairs training would bin, but instead of
/// counting, looks each pair up in the potential at its exact distance and
/// sums the interpolated values. Nothing is accumulated into any count table.
pub fn score_model(model: &Model, potential: &PotentialTable) -> GibbsEstimate {
    let mut estimate = GibbsEstimate::default();
    for qualifying in qualifying_pairs(model) {
        if let Some(value) = potential.value_at(qualifying.pair.canonical(), qualifying.distance) {
            estimate.energy += value;
            estimate.pairs_scored += 1;
        }
    }
    estimate
}

/// Scores every model of a structure and sums the per-model estimates.
pub fn score_models(models: &[Model], potential: &PotentialTable) -> GibbsEstimate {
    models
        .iter()
        .fold(GibbsEstimate::default(), |total, model| {
            total + score_model(model, potential)
        })
}
