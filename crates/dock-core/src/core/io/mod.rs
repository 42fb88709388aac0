//! Provides input functionality for the fixed-column PDBQT receptor format.
//!
//! Parsing and chemistry annotation happen in a single pass: each atom's
//! hydrogen-bond-donor and hydrophobicity flags are finalized against the
//! atoms already read from the same residue, before the next record is
//! consumed.

pub mod pdbqt;
