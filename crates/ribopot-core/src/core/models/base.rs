use std::fmt;
use std::str::FromStr;

/// Represents one of the four standard ribonucleotide bases.
///
/// This enum is the alphabet of the statistical potential: only records whose
/// residue field names one of these bases participate in pair counting and
/// scoring. Modified or unknown residues are carried through extraction but
/// never paired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Nucleobase {
    /// Adenine.
    A,
    /// Uracil.
    U,
    /// Cytosine.
    C,
    /// Guanine.
    G,
}

impl Nucleobase {
    /// Parses a residue symbol into a `Nucleobase`.
    ///
    /// Matches the single-letter residue names used in RNA structure files
    /// ("A", "U", "C", "G") after trimming surrounding whitespace. Anything
    /// else, including modified-base names like "PSU" or "1MA", yields `None`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol.trim() {
            "A" => Some(Nucleobase::A),
            "U" => Some(Nucleobase::U),
            "C" => Some(Nucleobase::C),
            "G" => Some(Nucleobase::G),
            _ => None,
        }
    }

    /// Returns the single-letter symbol of the base.
    pub fn symbol(&self) -> &'static str {
        match self {
            Nucleobase::A => "A",
            Nucleobase::U => "U",
            Nucleobase::C => "C",
            Nucleobase::G => "G",
        }
    }
}

impl fmt::Display for Nucleobase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Nucleobase {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or(())
    }
}
