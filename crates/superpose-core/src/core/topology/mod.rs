//! Residue-type metadata and the derived atom-correspondence table.
//!
//! The [`registry`] holds immutable residue-type definitions (standard
//! amino acids or custom sets loaded from TOML); the [`correspondence`]
//! table derives from it the atom-name pairs compared between residue types
//! during structural overlap.

pub mod correspondence;
pub mod registry;
