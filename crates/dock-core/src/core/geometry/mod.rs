//! Provides the docking geometry primitives.
//!
//! This module contains the axis-aligned search box with its spatial partition
//! layout, and the quaternion/rotation-matrix algebra used by the search to
//! sample and apply rigid-body ligand orientations.

pub mod bbox;
pub mod rotation;
