//! # Engine Module
//!
//! Stochastic search support for superposition fitting. The [`sampling`]
//! module draws the trial rigid-body perturbations (random axes,
//! displacements, and rotation angles) that iterative fitting procedures
//! evaluate against the deviation measures in [`crate::core::geometry`].
//!
//! All randomness flows through a caller-supplied [`rand::Rng`], so tests can
//! inject seeded generators and concurrent callers can keep their own state.

pub mod sampling;
