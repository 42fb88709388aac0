//! # Core Module
//!
//! Fundamental building blocks for receptor preparation and docking geometry.
//!
//! - **Molecular Representation** ([`models`]) - AutoDock atom typing, the annotated
//!   receptor atom list, and the spatial partition grid.
//! - **File I/O** ([`io`]) - fixed-column PDBQT parsing with residue-scoped
//!   chemistry reclassification.
//! - **Geometry** ([`geometry`]) - the axis-aligned search box and the
//!   quaternion/rotation-matrix algebra used to orient ligands.
//! - **Scoring Constants** ([`scoring`]) - the proximity cutoff shared with the
//!   downstream scoring function.

pub mod geometry;
pub mod io;
pub mod models;
pub mod scoring;
