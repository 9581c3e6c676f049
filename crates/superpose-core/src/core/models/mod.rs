//! # Core Models Module
//!
//! Data structures for the coordinate aggregates the transformation engine
//! operates on.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom with a primary coordinate and alternate conformer placements
//! - [`residue`] - Amino-acid residue owning a named collection of atoms
//! - [`position`] - Ad hoc named point groups transformed as a unit
//!
//! Instances are created upstream (by a structure provider) and passed into
//! the transformation operations, which mutate them in place behind `&mut`
//! references; ownership stays with the caller throughout.

pub mod atom;
pub mod position;
pub mod residue;
