use super::atom::AtomRecord;

/// One conformational model: the tracked records of a structure in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    pub(crate) records: Vec<AtomRecord>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<AtomRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[AtomRecord] {
        &self.records
    }

    pub fn push(&mut self, record: AtomRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A parsed structure: its identifier and every model it declares.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    pub id: String,                // Structure identifier (e.g., a PDB code)
    pub models: Vec<Model>,        // Conformational models in declaration order
}

impl Structure {
    pub fn new(id: impl Into<String>, models: Vec<Model>) -> Self {
        Self {
            id: id.into(),
            models,
        }
    }

    pub fn num_models(&self) -> usize {
        self.models.len()
    }
}
