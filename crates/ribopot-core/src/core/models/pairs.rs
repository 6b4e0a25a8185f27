use super::base::Nucleobase;
use phf::{Map, phf_map};
use std::fmt;

/// Row index of every two-letter pair label in the canonical table.
///
/// Both orderings of each asymmetric pair map to the same row, so a label read
/// back from a report resolves to its class regardless of base order.
static CANONICAL_ROW_INDEX: Map<&'static str, usize> = phf_map! {
    "AA" => 0,
    "AU" => 1, "UA" => 1,
    "AC" => 2, "CA" => 2,
    "AG" => 3, "GA" => 3,
    "UU" => 4,
    "UC" => 5, "CU" => 5,
    "UG" => 6, "GU" => 6,
    "CC" => 7,
    "CG" => 8, "GC" => 8,
    "GG" => 9,
};

/// An ordered base pair as encountered during the pair walk.
///
/// The first base belongs to the earlier record of the pair, the second to the
/// later one. Direction matters only in the accumulation table; classes merge
/// both directions before any statistics are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectedPair {
    /// Base of the earlier record in the pair.
    pub first: Nucleobase,
    /// Base of the later record in the pair.
    pub second: Nucleobase,
}

impl DirectedPair {
    /// Number of directed base pairs.
    pub const COUNT: usize = 16;

    /// All directed pairs in the fixed row order of the accumulation table.
    pub const ROW_ORDER: [DirectedPair; Self::COUNT] = [
        DirectedPair::new(Nucleobase::A, Nucleobase::A),
        DirectedPair::new(Nucleobase::A, Nucleobase::U),
        DirectedPair::new(Nucleobase::A, Nucleobase::C),
        DirectedPair::new(Nucleobase::A, Nucleobase::G),
        DirectedPair::new(Nucleobase::U, Nucleobase::U),
        DirectedPair::new(Nucleobase::U, Nucleobase::C),
        DirectedPair::new(Nucleobase::U, Nucleobase::G),
        DirectedPair::new(Nucleobase::C, Nucleobase::C),
        DirectedPair::new(Nucleobase::C, Nucleobase::G),
        DirectedPair::new(Nucleobase::G, Nucleobase::G),
        DirectedPair::new(Nucleobase::G, Nucleobase::C),
        DirectedPair::new(Nucleobase::G, Nucleobase::U),
        DirectedPair::new(Nucleobase::C, Nucleobase::U),
        DirectedPair::new(Nucleobase::G, Nucleobase::A),
        DirectedPair::new(Nucleobase::C, Nucleobase::A),
        DirectedPair::new(Nucleobase::U, Nucleobase::A),
    ];

    /// Creates a directed pair from its two bases in walk order.
    pub const fn new(first: Nucleobase, second: Nucleobase) -> Self {
        Self { first, second }
    }

    /// Returns the two-letter label of the pair (e.g. "GC").
    pub fn label(&self) -> &'static str {
        use Nucleobase::*;
        match (self.first, self.second) {
            (A, A) => "AA",
            (A, U) => "AU",
            (A, C) => "AC",
            (A, G) => "AG",
            (U, A) => "UA",
            (U, U) => "UU",
            (U, C) => "UC",
            (U, G) => "UG",
            (C, A) => "CA",
            (C, U) => "CU",
            (C, C) => "CC",
            (C, G) => "CG",
            (G, A) => "GA",
            (G, U) => "GU",
            (G, C) => "GC",
            (G, G) => "GG",
        }
    }

    /// Returns the row index of this pair in the accumulation table.
    pub fn row_index(&self) -> usize {
        use Nucleobase::*;
        // The historical row layout is not 4 * first + second; it lists the ten
        // canonical orderings first, then the six reversals.
        match (self.first, self.second) {
            (A, A) => 0,
            (A, U) => 1,
            (A, C) => 2,
            (A, G) => 3,
            (U, U) => 4,
            (U, C) => 5,
            (U, G) => 6,
            (C, C) => 7,
            (C, G) => 8,
            (G, G) => 9,
            (G, C) => 10,
            (G, U) => 11,
            (C, U) => 12,
            (G, A) => 13,
            (C, A) => 14,
            (U, A) => 15,
        }
    }

    /// Parses a two-letter label back into a directed pair.
    pub fn from_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        Self::ROW_ORDER.iter().find(|p| p.label() == trimmed).copied()
    }

    /// Returns the pair with its direction flipped.
    pub fn reversed(&self) -> Self {
        Self::new(self.second, self.first)
    }

    /// Returns the canonical class this directed pair belongs to.
    pub fn canonical(&self) -> PairKind {
        PairKind::from_bases(self.first, self.second)
    }
}

impl fmt::Display for DirectedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the ten canonical base-pair classes of the potential.
///
/// A class identifies an unordered pair of bases; the directed pairs XY and YX
/// both belong to the class labeled with the ordering listed here. Variants are
/// declared in the fixed row order of the count, frequency, and potential
/// tables, so the discriminant doubles as the row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairKind {
    /// Adenine with adenine.
    AA,
    /// Adenine with uracil.
    AU,
    /// Adenine with cytosine.
    AC,
    /// Adenine with guanine.
    AG,
    /// Uracil with uracil.
    UU,
    /// Uracil with cytosine.
    UC,
    /// Uracil with guanine.
    UG,
    /// Cytosine with cytosine.
    CC,
    /// Cytosine with guanine.
    CG,
    /// Guanine with guanine.
    GG,
}

impl PairKind {
    /// Number of canonical pair classes.
    pub const COUNT: usize = 10;

    /// All classes in table-row order.
    pub const ALL: [PairKind; Self::COUNT] = [
        PairKind::AA,
        PairKind::AU,
        PairKind::AC,
        PairKind::AG,
        PairKind::UU,
        PairKind::UC,
        PairKind::UG,
        PairKind::CC,
        PairKind::CG,
        PairKind::GG,
    ];

    /// Returns the class of an unordered base pair.
    pub fn from_bases(a: Nucleobase, b: Nucleobase) -> Self {
        use Nucleobase::*;
        match (a, b) {
            (A, A) => PairKind::AA,
            (A, U) | (U, A) => PairKind::AU,
            (A, C) | (C, A) => PairKind::AC,
            (A, G) | (G, A) => PairKind::AG,
            (U, U) => PairKind::UU,
            (U, C) | (C, U) => PairKind::UC,
            (U, G) | (G, U) => PairKind::UG,
            (C, C) => PairKind::CC,
            (C, G) | (G, C) => PairKind::CG,
            (G, G) => PairKind::GG,
        }
    }

    /// Resolves a two-letter label, in either base order, to its class.
    pub fn from_label(label: &str) -> Option<Self> {
        CANONICAL_ROW_INDEX
            .get(label.trim())
            .map(|&index| Self::ALL[index])
    }

    /// Returns the two-letter label of the class in canonical order.
    pub fn label(&self) -> &'static str {
        let (a, b) = self.bases();
        DirectedPair::new(a, b).label()
    }

    /// Returns the row index of the class in the canonical tables.
    pub fn row_index(&self) -> usize {
        *self as usize
    }

    /// Returns the two bases of the class in canonical order.
    pub fn bases(&self) -> (Nucleobase, Nucleobase) {
        use Nucleobase::*;
        match self {
            PairKind::AA => (A, A),
            PairKind::AU => (A, U),
            PairKind::AC => (A, C),
            PairKind::AG => (A, G),
            PairKind::UU => (U, U),
            PairKind::UC => (U, C),
            PairKind::UG => (U, G),
            PairKind::CC => (C, C),
            PairKind::CG => (C, G),
            PairKind::GG => (G, G),
        }
    }
}

impl fmt::Display for PairKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directed_row_order_covers_all_pairs_once() {
        for (index, pair) in DirectedPair::ROW_ORDER.iter().enumerate() {
            assert_eq!(pair.row_index(), index);
        }
        let labels: std::collections::HashSet<_> =
            DirectedPair::ROW_ORDER.iter().map(|p| p.label()).collect();
        assert_eq!(labels.len(), DirectedPair::COUNT);
    }

    #[test]
    fn directed_row_order_starts_with_historical_layout() {
        let head: Vec<_> = DirectedPair::ROW_ORDER[..4]
            .iter()
            .map(|p| p.label())
            .collect();
        assert_eq!(head, ["AA", "AU", "AC", "AG"]);
        assert_eq!(DirectedPair::ROW_ORDER[15].label(), "UA");
    }

    #[test]
    fn directed_label_round_trips() {
        for pair in DirectedPair::ROW_ORDER {
            assert_eq!(DirectedPair::from_label(pair.label()), Some(pair));
        }
        assert_eq!(DirectedPair::from_label("AUX"), None);
        assert_eq!(DirectedPair::from_label("A"), None);
        assert_eq!(DirectedPair::from_label("XY"), None);
    }

    #[test]
    fn reversed_swaps_direction() {
        let gc = DirectedPair::new(Nucleobase::G, Nucleobase::C);
        assert_eq!(gc.reversed().label(), "CG");
        assert_eq!(gc.reversed().reversed(), gc);
    }

    #[test]
    fn canonical_merges_both_directions() {
        let au = DirectedPair::new(Nucleobase::A, Nucleobase::U);
        assert_eq!(au.canonical(), PairKind::AU);
        assert_eq!(au.reversed().canonical(), PairKind::AU);

        let gg = DirectedPair::new(Nucleobase::G, Nucleobase::G);
        assert_eq!(gg.canonical(), PairKind::GG);
    }

    #[test]
    fn class_order_matches_row_indices() {
        let labels: Vec<_> = PairKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(
            labels,
            ["AA", "AU", "AC", "AG", "UU", "UC", "UG", "CC", "CG", "GG"]
        );
        for (index, kind) in PairKind::ALL.iter().enumerate() {
            assert_eq!(kind.row_index(), index);
        }
    }

    #[test]
    fn from_bases_is_symmetric() {
        for a in [Nucleobase::A, Nucleobase::U, Nucleobase::C, Nucleobase::G] {
            for b in [Nucleobase::A, Nucleobase::U, Nucleobase::C, Nucleobase::G] {
                assert_eq!(PairKind::from_bases(a, b), PairKind::from_bases(b, a));
            }
        }
    }

    #[test]
    fn from_label_accepts_either_base_order() {
        assert_eq!(PairKind::from_label("CG"), Some(PairKind::CG));
        assert_eq!(PairKind::from_label("GC"), Some(PairKind::CG));
        assert_eq!(PairKind::from_label("UA"), Some(PairKind::AU));
        assert_eq!(PairKind::from_label("ZZ"), None);
    }
}
