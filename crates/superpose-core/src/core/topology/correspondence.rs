use std::collections::HashMap;

use super::registry::ResidueRegistry;

//    NOTE:
//    The first build pass registers the back-bone atoms for every residue-type
//    pair, and 'CB' for every pair not involving GLY. The second pass adds all
//    remaining atoms for self-pairs (ASP-ASP, VAL-VAL, ...). The final section
//    registers the residue-pair specific side-chain equivalences, mirrored so
//    the table stays symmetric.

const BACKBONE_ATOMS: [&str; 4] = ["N", "CA", "C", "O"];
const GLYCINE: &str = "GLY";

type AtomPairs = Vec<(String, String)>;

/// Ordered atom-name pairs considered equivalent between two residue types,
/// as consumed by overlap scoring.
///
/// Symmetric by construction: a pair registered for `(A, B)` has a mirrored
/// entry registered for `(B, A)`.
#[derive(Debug, Clone, Default)]
pub struct CorrespondenceTable {
    table: HashMap<String, HashMap<String, AtomPairs>>,
}

impl CorrespondenceTable {
    pub fn build(registry: &ResidueRegistry) -> Self {
        let mut built = Self::default();
        let names = registry.residue_names();

        for &res1 in &names {
            let row = built.table.entry(res1.to_string()).or_default();
            for &res2 in &names {
                let mut pairs: AtomPairs = BACKBONE_ATOMS
                    .iter()
                    .map(|a| (a.to_string(), a.to_string()))
                    .collect();
                if res1 != GLYCINE && res2 != GLYCINE {
                    pairs.push(("CB".to_string(), "CB".to_string()));
                }
                row.insert(res2.to_string(), pairs);
            }
        }

        for &res in &names {
            if let Some(definition) = registry.get(res) {
                let remaining = definition
                    .atoms
                    .iter()
                    .filter(|a| !matches!(a.as_str(), "N" | "CA" | "CB" | "C" | "O"));
                for atom in remaining {
                    built.push_pair(res, res, atom, atom);
                }
            }
        }

        built.extend_pairs(registry, "ASN", &["CG"], "ARG", &["CG"]);
        built.extend_pairs(registry, "ASP", &["CG"], "ARG", &["CG"]);
        built.extend_pairs(registry, "ASP", &["OD1", "OD2"], "ASN", &["OD1", "ND2"]);
        built.extend_pairs(registry, "GLN", &["CG", "CD"], "ARG", &["CG", "CD"]);
        built.extend_pairs(registry, "GLN", &["CG"], "ASN", &["CG"]);
        built.extend_pairs(registry, "GLN", &["CG"], "ASP", &["CG"]);
        built.extend_pairs(registry, "TYR", &["CG"], "LYS", &["CG"]);

        built
    }

    /// Returns the ordered pair list for `(res1, res2)`, or `None` when either
    /// type is not registered.
    pub fn get(&self, res1: &str, res2: &str) -> Option<&[(String, String)]> {
        self.table.get(res1)?.get(res2).map(|pairs| pairs.as_slice())
    }

    /// Number of registered residue-type pairs.
    pub fn len(&self) -> usize {
        self.table.values().map(|row| row.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    // Registers the positional equivalences of `atoms1` against `atoms2`, and
    // their mirror for the reversed residue-type pair. Pairs naming a residue
    // type absent from the registry are skipped.
    fn extend_pairs(
        &mut self,
        registry: &ResidueRegistry,
        res1: &str,
        atoms1: &[&str],
        res2: &str,
        atoms2: &[&str],
    ) {
        if registry.get(res1).is_none() || registry.get(res2).is_none() {
            return;
        }
        for (atom1, atom2) in atoms1.iter().zip(atoms2.iter()) {
            self.push_pair(res1, res2, atom1, atom2);
            self.push_pair(res2, res1, atom2, atom1);
        }
    }

    fn push_pair(&mut self, res1: &str, res2: &str, atom1: &str, atom2: &str) {
        if let Some(pairs) = self
            .table
            .get_mut(res1)
            .and_then(|row| row.get_mut(res2))
        {
            pairs.push((atom1.to_string(), atom2.to_string()));
        }
    }
}
