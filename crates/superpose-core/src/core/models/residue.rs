use super::atom::Atom;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Residue {
    pub name: String,                      // Residue type name (e.g., "ASP", "GLY")
    atoms: Vec<Atom>,                      // Atoms owned by this residue
    atom_name_map: HashMap<String, usize>, // Map from atom name to its index in `atoms`
}

impl Residue {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            atoms: Vec::new(),
            atom_name_map: HashMap::new(),
        }
    }

    pub fn add_atom(&mut self, atom: Atom) {
        self.atom_name_map
            .insert(atom.name.clone(), self.atoms.len());
        self.atoms.push(atom);
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn atoms_mut(&mut self) -> &mut [Atom] {
        &mut self.atoms
    }

    pub fn get_atom_by_name(&self, name: &str) -> Option<&Atom> {
        self.atom_name_map.get(name).map(|&i| &self.atoms[i])
    }

    pub fn get_atom_mut_by_name(&mut self, name: &str) -> Option<&mut Atom> {
        match self.atom_name_map.get(name) {
            Some(&i) => self.atoms.get_mut(i),
            None => None,
        }
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}
