use nalgebra::{Point3, Rotation3, Vector3};
use thiserror::Error;
use tracing::instrument;

use super::rotation::{self, RotationError};
use super::vector;
use crate::core::models::atom::Atom;
use crate::core::models::position::PositionSet;
use crate::core::models::residue::Residue;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("pivot key '{key}' is not present in the target aggregate")]
    MissingKey { key: String },
    #[error("pivot selection is empty, no centroid exists")]
    EmptyPivot,
    #[error(transparent)]
    Rotation(#[from] RotationError),
}

/// Returns `point` shifted by `shift`. Pure; the input is not modified.
pub fn translate_point(point: &Point3<f64>, shift: &Vector3<f64>) -> Point3<f64> {
    point + shift
}

/// Shifts every point of `set` by `shift`, in place.
pub fn translate_position_set(set: &mut PositionSet, shift: &Vector3<f64>) {
    for (_, position) in set.iter_mut() {
        *position += shift;
    }
}

/// Shifts every atom's primary coordinate and every conformer by `shift`, in place.
pub fn translate_atoms(atoms: &mut [Atom], shift: &Vector3<f64>) {
    for atom in atoms.iter_mut() {
        atom.translate(shift);
    }
}

/// Rotates every point of `set` by `theta` about `axis`, pivoting on the
/// centroid of the points named by `pivot_keys` (all points when `None`).
///
/// The pivot-subset centroid is a fixed point of the transform. Fails before
/// mutating anything: on an absent pivot key, an empty pivot selection, or a
/// near-zero axis, `set` is left unchanged.
#[instrument(level = "trace", skip_all, fields(points = set.len(), theta))]
pub fn rotate_position_set(
    set: &mut PositionSet,
    axis: &Vector3<f64>,
    theta: f64,
    pivot_keys: Option<&[&str]>,
) -> Result<(), TransformError> {
    let pivot = position_set_pivot(set, pivot_keys)?;
    let rotation = rotation::rotation_from_axis_angle(axis, theta)?;
    for (_, position) in set.iter_mut() {
        *position = pivot + rotation * (*position - pivot);
    }
    Ok(())
}

/// Rotates a collection of atoms by `theta` about `axis`, pivoting on the
/// centroid of the primary coordinates of the atoms named by `pivot_names`
/// (all atoms when `None`).
///
/// The same pivot and matrix are applied to every atom's primary coordinate
/// and to every conformer, so alternate placements stay rigidly attached.
/// Fails before mutating anything, with the same atomicity as
/// [`rotate_position_set`].
#[instrument(level = "trace", skip_all, fields(atoms = atoms.len(), theta))]
pub fn rotate_atoms(
    atoms: &mut [Atom],
    axis: &Vector3<f64>,
    theta: f64,
    pivot_names: Option<&[&str]>,
) -> Result<(), TransformError> {
    let pivot = atom_pivot(atoms, pivot_names)?;
    let rotation = rotation::rotation_from_axis_angle(axis, theta)?;
    for atom in atoms.iter_mut() {
        atom.rotate_about(&pivot, &rotation);
    }
    Ok(())
}

/// Applies `rotation` about the origin to every conformer of every atom in
/// `residue`, then re-derives each atom's primary coordinate from its
/// reference conformer.
///
/// No translation or recentring is performed; callers are responsible for any
/// pre/post translation.
pub fn rotate_residue_by_matrix(rotation: &Rotation3<f64>, residue: &mut Residue) {
    for atom in residue.atoms_mut() {
        atom.rotate_conformers(rotation);
    }
}

fn position_set_pivot(
    set: &PositionSet,
    pivot_keys: Option<&[&str]>,
) -> Result<Point3<f64>, TransformError> {
    match pivot_keys {
        Some(keys) => {
            let mut selected = Vec::with_capacity(keys.len());
            for &key in keys {
                let position = set.get(key).ok_or_else(|| TransformError::MissingKey {
                    key: key.to_string(),
                })?;
                selected.push(position);
            }
            vector::centroid(selected.iter()).ok_or(TransformError::EmptyPivot)
        }
        None => vector::centroid(set.iter().map(|(_, p)| p)).ok_or(TransformError::EmptyPivot),
    }
}

fn atom_pivot(
    atoms: &[Atom],
    pivot_names: Option<&[&str]>,
) -> Result<Point3<f64>, TransformError> {
    match pivot_names {
        Some(names) => {
            let mut selected = Vec::with_capacity(names.len());
            for &name in names {
                let atom = atoms.iter().find(|a| a.name == name).ok_or_else(|| {
                    TransformError::MissingKey {
                        key: name.to_string(),
                    }
                })?;
                selected.push(atom.position);
            }
            vector::centroid(selected.iter()).ok_or(TransformError::EmptyPivot)
        }
        None => vector::centroid(atoms.iter().map(|a| &a.position)).ok_or(TransformError::EmptyPivot),
    }
}
