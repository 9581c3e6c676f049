use phf::{Map, phf_map};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

// Heavy-atom names of the 20 standard amino-acid types, PDB naming.
static STANDARD_RESIDUE_ATOMS: Map<&'static str, &'static [&'static str]> = phf_map! {
    "ALA" => &["N", "CA", "C", "O", "CB"],
    "ARG" => &["N", "CA", "C", "O", "CB", "CG", "CD", "NE", "CZ", "NH1", "NH2"],
    "ASN" => &["N", "CA", "C", "O", "CB", "CG", "OD1", "ND2"],
    "ASP" => &["N", "CA", "C", "O", "CB", "CG", "OD1", "OD2"],
    "CYS" => &["N", "CA", "C", "O", "CB", "SG"],
    "GLN" => &["N", "CA", "C", "O", "CB", "CG", "CD", "OE1", "NE2"],
    "GLU" => &["N", "CA", "C", "O", "CB", "CG", "CD", "OE1", "OE2"],
    "GLY" => &["N", "CA", "C", "O"],
    "HIS" => &["N", "CA", "C", "O", "CB", "CG", "ND1", "CD2", "CE1", "NE2"],
    "ILE" => &["N", "CA", "C", "O", "CB", "CG1", "CG2", "CD1"],
    "LEU" => &["N", "CA", "C", "O", "CB", "CG", "CD1", "CD2"],
    "LYS" => &["N", "CA", "C", "O", "CB", "CG", "CD", "CE", "NZ"],
    "MET" => &["N", "CA", "C", "O", "CB", "CG", "SD", "CE"],
    "PHE" => &["N", "CA", "C", "O", "CB", "CG", "CD1", "CD2", "CE1", "CE2", "CZ"],
    "PRO" => &["N", "CA", "C", "O", "CB", "CG", "CD"],
    "SER" => &["N", "CA", "C", "O", "CB", "OG"],
    "THR" => &["N", "CA", "C", "O", "CB", "OG1", "CG2"],
    "TRP" => &["N", "CA", "C", "O", "CB", "CG", "CD1", "CD2", "NE1", "CE2", "CE3", "CZ2", "CZ3", "CH2"],
    "TYR" => &["N", "CA", "C", "O", "CB", "CG", "CD1", "CD2", "CE1", "CE2", "CZ", "OH"],
    "VAL" => &["N", "CA", "C", "O", "CB", "CG1", "CG2"],
};

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ResidueDefinition {
    pub atoms: Vec<String>,
}

/// Immutable residue-type metadata, constructed once at startup and passed
/// explicitly to consumers such as the correspondence-table builder.
#[derive(Debug, Clone, Default)]
pub struct ResidueRegistry {
    registry: HashMap<String, ResidueDefinition>,
}

impl ResidueRegistry {
    /// Builds the registry of the 20 standard amino-acid types.
    pub fn standard() -> Self {
        let registry = STANDARD_RESIDUE_ATOMS
            .entries()
            .map(|(name, atoms)| {
                (
                    name.to_string(),
                    ResidueDefinition {
                        atoms: atoms.iter().map(|a| a.to_string()).collect(),
                    },
                )
            })
            .collect();
        Self { registry }
    }

    /// Loads residue definitions from a TOML file of `[RES] atoms = [...]` tables.
    pub fn load(path: &Path) -> Result<Self, RegistryLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| RegistryLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let registry: HashMap<String, ResidueDefinition> =
            toml::from_str(&content).map_err(|e| RegistryLoadError::Toml {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
        Ok(Self { registry })
    }

    pub fn get(&self, residue_name: &str) -> Option<&ResidueDefinition> {
        self.registry.get(residue_name)
    }

    /// Registered residue-type names, sorted for deterministic iteration.
    pub fn residue_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.registry.keys().map(|n| n.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum RegistryLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}
