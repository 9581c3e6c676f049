use nalgebra::{Point3, Rotation3, Vector3};
use std::collections::HashMap;

/// Represents a physical atom with a primary coordinate and alternate conformer placements.
///
/// An atom carries the coordinate actually used by geometric queries (`position`)
/// together with a keyed collection of alternate modeled placements of the same
/// physical atom, as produced by multi-conformer structure models. One conformer
/// label is designated as the reference placement; the primary coordinate is
/// always kept in sync with it.
///
/// # Invariants
///
/// - The reference label is always present in the conformer collection
///   (`Atom::new` seeds it with the primary coordinate).
/// - Rigid transforms (translations, pivot rotations) move the primary
///   coordinate and every conformer by the same map, so the two never diverge.
/// - Origin rotations of the conformer collection re-derive the primary
///   coordinate from the reference conformer afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The name of the atom (e.g., "CA", "N", "O").
    pub name: String,
    /// The primary 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    reference: String,
    conformers: HashMap<String, Point3<f64>>,
}

impl Atom {
    /// Creates a new `Atom` whose reference conformer is seeded with `position`.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the atom.
    /// * `position` - The primary 3D coordinates of the atom.
    /// * `reference` - The label of the reference conformer.
    pub fn new(name: &str, position: Point3<f64>, reference: &str) -> Self {
        let mut conformers = HashMap::new();
        conformers.insert(reference.to_string(), position);
        Self {
            name: name.to_string(),
            position,
            reference: reference.to_string(),
            conformers,
        }
    }

    /// Returns the label of the reference conformer.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Returns the coordinate of the reference conformer.
    pub fn reference_position(&self) -> Point3<f64> {
        self.conformers
            .get(&self.reference)
            .copied()
            .unwrap_or(self.position)
    }

    /// Inserts or replaces a conformer placement.
    ///
    /// Setting the reference conformer also updates the primary coordinate,
    /// keeping the two in sync.
    pub fn set_conformer(&mut self, label: &str, position: Point3<f64>) {
        self.conformers.insert(label.to_string(), position);
        if label == self.reference {
            self.position = position;
        }
    }

    /// Returns the placement stored under `label`, if any.
    pub fn conformer(&self, label: &str) -> Option<Point3<f64>> {
        self.conformers.get(label).copied()
    }

    /// Iterates over all conformer placements in unspecified order.
    pub fn conformers(&self) -> impl Iterator<Item = (&str, &Point3<f64>)> {
        self.conformers.iter().map(|(label, p)| (label.as_str(), p))
    }

    /// Returns the number of conformer placements (at least one).
    pub fn conformer_count(&self) -> usize {
        self.conformers.len()
    }

    /// Shifts the primary coordinate and every conformer by `shift`.
    pub fn translate(&mut self, shift: &Vector3<f64>) {
        self.position += shift;
        for coord in self.conformers.values_mut() {
            *coord += shift;
        }
    }

    /// Applies the rigid map `p ← pivot + R·(p − pivot)` to the primary
    /// coordinate and every conformer.
    pub fn rotate_about(&mut self, pivot: &Point3<f64>, rotation: &Rotation3<f64>) {
        self.position = pivot + rotation * (self.position - pivot);
        for coord in self.conformers.values_mut() {
            *coord = pivot + rotation * (*coord - pivot);
        }
    }

    /// Rotates every conformer about the origin, then re-derives the primary
    /// coordinate from the reference conformer.
    ///
    /// Callers owning a pivot must translate before and after; this is a pure
    /// rotation about the origin.
    pub fn rotate_conformers(&mut self, rotation: &Rotation3<f64>) {
        for coord in self.conformers.values_mut() {
            *coord = rotation * *coord;
        }
        self.position = self.reference_position();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point3, Vector3};
    use std::f64::consts::FRAC_PI_2;

    fn quarter_turn_z() -> Rotation3<f64> {
        crate::core::geometry::rotation::rotation_from_axis_angle(
            &Vector3::new(0.0, 0.0, 1.0),
            FRAC_PI_2,
        )
        .unwrap()
    }

    #[test]
    fn new_atom_seeds_reference_conformer_with_primary_position() {
        let atom = Atom::new("CA", Point3::new(1.0, 2.0, 3.0), "A");

        assert_eq!(atom.name, "CA");
        assert_eq!(atom.reference(), "A");
        assert_eq!(atom.conformer_count(), 1);
        assert_eq!(atom.conformer("A"), Some(Point3::new(1.0, 2.0, 3.0)));
        assert_eq!(atom.reference_position(), atom.position);
    }

    #[test]
    fn set_conformer_on_reference_label_updates_primary_position() {
        let mut atom = Atom::new("CB", Point3::origin(), "A");
        atom.set_conformer("A", Point3::new(4.0, 5.0, 6.0));

        assert_eq!(atom.position, Point3::new(4.0, 5.0, 6.0));
        assert_eq!(atom.reference_position(), atom.position);
    }

    #[test]
    fn set_conformer_on_other_label_leaves_primary_position_unchanged() {
        let mut atom = Atom::new("CB", Point3::new(1.0, 0.0, 0.0), "A");
        atom.set_conformer("B", Point3::new(9.0, 9.0, 9.0));

        assert_eq!(atom.position, Point3::new(1.0, 0.0, 0.0));
        assert_eq!(atom.conformer_count(), 2);
    }

    #[test]
    fn translate_shifts_primary_position_and_all_conformers() {
        let mut atom = Atom::new("N", Point3::new(1.0, 1.0, 1.0), "A");
        atom.set_conformer("B", Point3::new(2.0, 2.0, 2.0));
        atom.translate(&Vector3::new(1.0, -1.0, 0.5));

        assert_eq!(atom.position, Point3::new(2.0, 0.0, 1.5));
        assert_eq!(atom.conformer("A"), Some(Point3::new(2.0, 0.0, 1.5)));
        assert_eq!(atom.conformer("B"), Some(Point3::new(3.0, 1.0, 2.5)));
    }

    #[test]
    fn rotate_about_applies_same_rigid_map_to_all_placements() {
        let mut atom = Atom::new("O", Point3::new(2.0, 0.0, 0.0), "A");
        atom.set_conformer("B", Point3::new(3.0, 0.0, 0.0));
        let pivot = Point3::new(1.0, 0.0, 0.0);
        atom.rotate_about(&pivot, &quarter_turn_z());

        let expect_primary = Point3::new(1.0, 1.0, 0.0);
        let expect_alt = Point3::new(1.0, 2.0, 0.0);
        assert!((atom.position - expect_primary).norm() < 1e-12);
        assert!((atom.conformer("B").unwrap() - expect_alt).norm() < 1e-12);
        assert!((atom.reference_position() - atom.position).norm() < 1e-12);
    }

    #[test]
    fn rotate_conformers_resyncs_primary_position_from_reference() {
        let mut atom = Atom::new("CG", Point3::new(1.0, 0.0, 0.0), "A");
        atom.set_conformer("B", Point3::new(0.0, 1.0, 0.0));
        atom.rotate_conformers(&quarter_turn_z());

        assert!((atom.conformer("A").unwrap() - Point3::new(0.0, 1.0, 0.0)).norm() < 1e-12);
        assert!((atom.conformer("B").unwrap() - Point3::new(-1.0, 0.0, 0.0)).norm() < 1e-12);
        assert!((atom.position - atom.reference_position()).norm() < 1e-12);
    }
}
