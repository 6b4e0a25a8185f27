use super::base::Nucleobase;
use nalgebra::Point3;

/// Represents one filtered coordinate record from a structure file.
///
/// The potential tracks a single backbone marker per residue, so each record
/// stands for one residue of one model. Fields keep the values of the source
/// line verbatim; residue symbols that are not standard bases survive here and
/// are only excluded later, when pairs are formed.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// The record type of the source line (e.g. "ATOM").
    pub record_kind: String,
    /// The atom serial number.
    pub serial: u32,
    /// The atom name (the tracked backbone marker, e.g. "C3'").
    pub name: String,
    /// The residue symbol as written in the source file (e.g. "A", "PSU").
    pub base: String,
    /// The chain identifier the residue belongs to.
    pub chain_id: String,
    /// The residue sequence number within the chain.
    pub residue_seq: i32,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// The crystallographic occupancy.
    pub occupancy: f64,
    /// The temperature factor (B-factor).
    pub temp_factor: f64,
    /// The element symbol.
    pub element: String,
}

impl AtomRecord {
    /// Returns the standard base of this record, or `None` for modified or
    /// unknown residues.
    pub fn nucleobase(&self) -> Option<Nucleobase> {
        Nucleobase::from_symbol(&self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(base: &str) -> AtomRecord {
        AtomRecord {
            record_kind: "ATOM".to_string(),
            serial: 1,
            name: "C3'".to_string(),
            base: base.to_string(),
            chain_id: "A".to_string(),
            residue_seq: 1,
            position: Point3::new(0.0, 0.0, 0.0),
            occupancy: 1.0,
            temp_factor: 0.0,
            element: "C".to_string(),
        }
    }

    #[test]
    fn nucleobase_resolves_standard_bases() {
        assert_eq!(record("G").nucleobase(), Some(Nucleobase::G));
        assert_eq!(record("U").nucleobase(), Some(Nucleobase::U));
    }

    #[test]
    fn nucleobase_is_none_for_modified_residues() {
        assert_eq!(record("PSU").nucleobase(), None);
        assert_eq!(record("GTP").nucleobase(), None);
    }
}
