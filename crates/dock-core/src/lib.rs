//! # Dockcore Library
//!
//! A receptor-preparation and rigid-body geometry core for protein-ligand docking.
//!
//! The crate covers the work that must happen before a conformational search can
//! run: reading a rigid receptor from a PDBQT file, annotating each atom with the
//! chemical role information consumed by the scoring function, and bucketing the
//! atoms into a 3D spatial partition grid for fast proximity queries. It also
//! provides the quaternion and rotation-matrix primitives used by the search to
//! represent and apply rigid-body ligand orientations.
//!
//! - **[`core::models`]** - atom typing, the annotated receptor, and its partition grid.
//! - **[`core::io`]** - the fixed-column PDBQT receptor reader.
//! - **[`core::geometry`]** - the search box and quaternion/rotation algebra.
//! - **[`core::scoring`]** - the proximity cutoff constants the grid consumes.
//!
//! Energy evaluation, ligand handling, and the conformational search itself live
//! outside this crate; a built [`core::models::receptor::Receptor`] is immutable
//! and may be shared freely across search threads.

pub mod core;
