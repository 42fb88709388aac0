use super::atom::Atom;
use crate::core::geometry::bbox::DockingBox;
use crate::core::io::pdbqt::{self, PdbqtError};
use crate::core::scoring::ScoringFunction;
use std::path::Path;
use tracing::info;

/// A 3D array of atom-index buckets, one per partition cell.
///
/// Buckets hold indices into the receptor's atom list. The partition is not
/// disjoint: an atom within cutoff of several cells appears in every one of
/// their buckets, because the scoring function needs every atom that can
/// influence a cell, not a nearest-cell assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionGrid {
    dims: [usize; 3],
    cells: Vec<Vec<usize>>,
}

impl PartitionGrid {
    fn new(dims: [usize; 3]) -> Self {
        Self {
            dims,
            cells: vec![Vec::new(); dims[0] * dims[1] * dims[2]],
        }
    }

    fn flat_index(&self, index: [usize; 3]) -> usize {
        (index[0] * self.dims[1] + index[1]) * self.dims[2] + index[2]
    }

    /// Returns the number of cells along each axis.
    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Returns the atom-index bucket of the cell at `index`.
    pub fn cell(&self, index: [usize; 3]) -> &[usize] {
        &self.cells[self.flat_index(index)]
    }

    fn cell_mut(&mut self, index: [usize; 3]) -> &mut Vec<usize> {
        let flat = self.flat_index(index);
        &mut self.cells[flat]
    }
}

/// A rigid receptor: the annotated atom list plus its spatial partition grid.
///
/// Built once at startup and read-only afterwards; safe to share across
/// search threads by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Receptor {
    atoms: Vec<Atom>,
    partitions: PartitionGrid,
}

impl Receptor {
    /// Reads a receptor from a PDBQT file and partitions its atoms against
    /// the given search box.
    ///
    /// # Errors
    ///
    /// Returns an error only if the file cannot be opened or read; malformed
    /// individual records are skipped during parsing.
    pub fn from_path<P: AsRef<Path>>(path: P, bbox: &DockingBox) -> Result<Self, PdbqtError> {
        let atoms = pdbqt::read_atoms_from_path(path)?;
        Ok(Self::new(atoms, bbox))
    }

    /// Builds a receptor from an already-parsed atom list.
    ///
    /// Atoms farther than the scoring cutoff from the box are kept in the
    /// atom list but never appear in any partition bucket. Within the box
    /// neighborhood, each atom is added to the bucket of every cell whose
    /// region it can influence; the cutoff boundary is open, so an atom at
    /// exactly the cutoff distance is excluded.
    pub fn new(atoms: Vec<Atom>, bbox: &DockingBox) -> Self {
        let mut within_cutoff: Vec<usize> = Vec::with_capacity(atoms.len());
        for (i, atom) in atoms.iter().enumerate() {
            if bbox.projected_distance_sqr(&atom.position) < ScoringFunction::CUTOFF_SQR {
                within_cutoff.push(i);
            }
        }
        info!(
            "Partitioning {} of {} receptor atoms near the search box",
            within_cutoff.len(),
            atoms.len()
        );

        let dims = bbox.num_partitions();
        let mut partitions = PartitionGrid::new(dims);
        for x in 0..dims[0] {
            for y in 0..dims[1] {
                for z in 0..dims[2] {
                    let corner1 = bbox.partition_corner([x, y, z]);
                    let corner2 = bbox.partition_corner([x + 1, y + 1, z + 1]);
                    let bucket = partitions.cell_mut([x, y, z]);
                    bucket.reserve(within_cutoff.len());
                    for &i in &within_cutoff {
                        let dist_sqr = DockingBox::projected_distance_sqr_to_region(
                            &corner1,
                            &corner2,
                            &atoms[i].position,
                        );
                        if dist_sqr < ScoringFunction::CUTOFF_SQR {
                            bucket.push(i);
                        }
                    }
                }
            }
        }
        Self { atoms, partitions }
    }

    /// Returns all receptor atoms in file order.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Returns the atom at `index`, if it exists.
    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    /// Returns the spatial partition grid.
    pub fn partitions(&self) -> &PartitionGrid {
        &self.partitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::types::AutoDockType;
    use nalgebra::{Point3, Vector3};

    fn atom_at(serial: u32, position: Point3<f64>) -> Atom {
        Atom::new(
            serial,
            "CA".to_string(),
            "A:GLY   1:CA".to_string(),
            position,
            AutoDockType::C,
        )
    }

    fn bucket_count(receptor: &Receptor, atom_index: usize) -> usize {
        let dims = receptor.partitions().dims();
        let mut count = 0;
        for x in 0..dims[0] {
            for y in 0..dims[1] {
                for z in 0..dims[2] {
                    if receptor.partitions().cell([x, y, z]).contains(&atom_index) {
                        count += 1;
                    }
                }
            }
        }
        count
    }

    #[test]
    fn empty_atom_list_yields_all_empty_grid() {
        let bbox = DockingBox::new(Point3::origin(), Vector3::new(6.0, 6.0, 6.0));
        let receptor = Receptor::new(Vec::new(), &bbox);
        assert_eq!(receptor.partitions().dims(), [2, 2, 2]);
        assert_eq!(bucket_count(&receptor, 0), 0);
    }

    #[test]
    fn central_atom_lands_in_every_nearby_cell() {
        let bbox = DockingBox::new(Point3::origin(), Vector3::new(6.0, 6.0, 6.0));
        let receptor = Receptor::new(vec![atom_at(1, Point3::origin())], &bbox);
        // Every cell corner touches the origin, so all 8 buckets hold it.
        assert_eq!(bucket_count(&receptor, 0), 8);
    }

    #[test]
    fn atom_at_exact_cutoff_is_excluded_everywhere() {
        let bbox = DockingBox::new(Point3::origin(), Vector3::new(6.0, 6.0, 6.0));
        // Box face at x = 3; the atom sits exactly 8 A beyond it.
        let receptor = Receptor::new(vec![atom_at(1, Point3::new(11.0, 0.0, 0.0))], &bbox);
        assert_eq!(bucket_count(&receptor, 0), 0);
    }

    #[test]
    fn atom_just_inside_cutoff_is_indexed() {
        let bbox = DockingBox::new(Point3::origin(), Vector3::new(6.0, 6.0, 6.0));
        let receptor = Receptor::new(vec![atom_at(1, Point3::new(10.999, 0.0, 0.0))], &bbox);
        assert!(bucket_count(&receptor, 0) >= 1);
        // Too far from the cells on the -x side of the box.
        assert!(receptor.partitions().cell([0, 0, 0]).is_empty());
        assert!(receptor.partitions().cell([1, 0, 0]).contains(&0));
    }

    #[test]
    fn far_atom_is_kept_in_the_atom_list() {
        let bbox = DockingBox::new(Point3::origin(), Vector3::new(6.0, 6.0, 6.0));
        let receptor = Receptor::new(vec![atom_at(7, Point3::new(100.0, 0.0, 0.0))], &bbox);
        assert_eq!(receptor.atoms().len(), 1);
        assert_eq!(receptor.atom(0).map(|a| a.serial), Some(7));
        assert_eq!(bucket_count(&receptor, 0), 0);
    }

    #[test]
    fn atom_lookup_out_of_range_is_none() {
        let bbox = DockingBox::new(Point3::origin(), Vector3::new(6.0, 6.0, 6.0));
        let receptor = Receptor::new(Vec::new(), &bbox);
        assert!(receptor.atom(0).is_none());
    }
}
