//! Provides the molecular data model for receptor preparation.
//!
//! This module contains the AutoDock atom type table, the annotated receptor
//! atom representation, and the immutable receptor with its spatial partition
//! grid. Atoms are stored in an append-only list and referenced by index;
//! chemistry flags are finalized during parsing and never change afterwards.

pub mod atom;
pub mod receptor;
pub mod types;
