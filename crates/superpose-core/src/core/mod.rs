//! # Core Module
//!
//! The foundation of the library: stateless data models for atoms, residues,
//! and position sets, the geometric transformation engine built on them, and
//! the residue-type metadata consumed by overlap scoring.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atoms with multi-conformer
//!   placements, residues, and named position sets
//! - **Geometric Engine** ([`geometry`]) - Rotation-matrix construction,
//!   rigid-body transforms, and deviation measures
//! - **Structural Knowledge** ([`topology`]) - Residue-type registry and the
//!   residue-pair atom-correspondence table

pub mod geometry;
pub mod models;
pub mod topology;
