use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Access to structure files by identifier.
///
/// The workflows see corpora only through this trait: where a structure file
/// lives, which identifiers exist, and whether a structure is RNA at all. A
/// retrieval backend that mirrors structures from elsewhere plugs in here
/// without touching the workflows.
pub trait StructureSource {
    /// Resolves an identifier to a readable file path, if the source has it.
    fn resolve(&self, id: &str) -> Option<PathBuf>;

    /// Lists every identifier the source can resolve, in stable order.
    fn list(&self) -> Vec<String>;

    /// Whether the identified structure is classified as RNA.
    ///
    /// Classification reads the first line of the file and looks for an "RNA"
    /// token, the convention of PDB `HEADER` records. Unresolvable or
    /// unreadable structures are not RNA.
    fn is_rna(&self, id: &str) -> bool;
}

/// A local directory of `.pdb` files, one per structure identifier.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    allowlist: Option<Vec<String>>,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            allowlist: None,
        }
    }

    /// Restricts [`StructureSource::list`] to the given identifiers.
    ///
    /// Matching ignores ASCII case, so a lowercase identifier list still
    /// selects uppercase-named files.
    pub fn with_allowlist(mut self, ids: Vec<String>) -> Self {
        self.allowlist = Some(ids);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn candidates(&self, id: &str) -> [PathBuf; 2] {
        [
            self.root.join(format!("{id}.pdb")),
            self.root.join(format!("{id}.PDB")),
        ]
    }
}

impl StructureSource for DirectorySource {
    fn resolve(&self, id: &str) -> Option<PathBuf> {
        self.candidates(id).into_iter().find(|path| path.is_file())
    }

    fn list(&self) -> Vec<String> {
        let mut ids: Vec<String> = fs::read_dir(&self.root)
            .map(|entries| {
                entries
                    .filter_map(Result::ok)
                    .filter_map(|entry| {
                        let path = entry.path();
                        if !path.is_file() {
                            return None;
                        }
                        let extension = path.extension()?.to_str()?;
                        if !extension.eq_ignore_ascii_case("pdb") {
                            return None;
                        }
                        Some(path.file_stem()?.to_string_lossy().to_string())
                    })
                    .collect()
            })
            .unwrap_or_default();

        if let Some(allow) = &self.allowlist {
            ids.retain(|id| allow.iter().any(|allowed| allowed.eq_ignore_ascii_case(id)));
        }
        ids.sort();
        ids
    }

    fn is_rna(&self, id: &str) -> bool {
        let Some(path) = self.resolve(id) else {
            return false;
        };
        let Ok(file) = fs::File::open(path) else {
            return false;
        };
        let mut first_line = String::new();
        if BufReader::new(file).read_line(&mut first_line).is_err() {
            return false;
        }
        first_line.split_whitespace().any(|token| token == "RNA")
    }
}
