use super::types::AutoDockType;
use nalgebra::Point3;

/// Represents a single receptor atom with its finalized chemical annotations.
///
/// Atoms are created by the PDBQT parser and appended to the receptor's atom
/// list in file order. The `donor` and `hydrophobic` flags start from the
/// defaults implied by the AutoDock type and are adjusted exactly once, during
/// the residue-scoped reclassification pass that runs while the owning residue
/// is still being parsed. After that they never change.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The file-assigned serial number. Positive but not necessarily contiguous.
    pub serial: u32,
    /// The trimmed atom name within its residue (e.g. "CA", "OD1").
    pub name: String,
    /// A `chain:RESseq:name` composite used for external lookup and debugging.
    pub key: String,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// The AutoDock4 atom type parsed from the record's trailing columns.
    pub autodock_type: AutoDockType,
    /// True once the atom is proven to be bonded to a polar hydrogen.
    pub donor: bool,
    /// True while the atom counts as hydrophobic for the scoring function.
    pub hydrophobic: bool,
}

impl Atom {
    /// Creates an atom with the default chemistry flags for its type.
    ///
    /// Carbons start hydrophobic, everything else does not; no atom starts as
    /// a confirmed hydrogen bond donor.
    pub fn new(
        serial: u32,
        name: String,
        key: String,
        position: Point3<f64>,
        autodock_type: AutoDockType,
    ) -> Self {
        Self {
            serial,
            name,
            key,
            position,
            autodock_type,
            donor: false,
            hydrophobic: autodock_type.is_hydrophobic_default(),
        }
    }

    /// Returns true if the atom is neither carbon nor hydrogen.
    pub fn is_hetero(&self) -> bool {
        self.autodock_type.is_hetero()
    }

    /// Returns true if the two atoms are close enough to be covalently bonded.
    ///
    /// The test is symmetric: the squared distance must fall strictly below the
    /// square of the sum of the two covalent radii.
    pub fn is_neighbor(&self, other: &Atom) -> bool {
        let threshold =
            self.autodock_type.covalent_radius() + other.autodock_type.covalent_radius();
        (self.position - other.position).norm_squared() < threshold * threshold
    }

    /// Marks the atom as a confirmed hydrogen bond donor.
    pub fn donorize(&mut self) {
        self.donor = true;
    }

    /// Clears the hydrophobic flag. One-directional; never set again.
    pub fn dehydrophobicize(&mut self) {
        self.hydrophobic = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(name: &str, ty: AutoDockType, position: Point3<f64>) -> Atom {
        Atom::new(1, name.to_string(), format!("A:GLY   1:{}", name), position, ty)
    }

    #[test]
    fn new_carbon_starts_hydrophobic_and_not_donor() {
        let a = atom("CB", AutoDockType::C, Point3::origin());
        assert!(a.hydrophobic);
        assert!(!a.donor);
        assert!(!a.is_hetero());
    }

    #[test]
    fn new_hetero_atom_starts_non_hydrophobic() {
        let a = atom("OD1", AutoDockType::Oa, Point3::origin());
        assert!(!a.hydrophobic);
        assert!(a.is_hetero());
    }

    #[test]
    fn is_neighbor_accepts_bond_length_separation() {
        let n = atom("N", AutoDockType::N, Point3::origin());
        let h = atom("H", AutoDockType::Hd, Point3::new(1.0, 0.0, 0.0));
        assert!(n.is_neighbor(&h));
        assert!(h.is_neighbor(&n));
    }

    #[test]
    fn is_neighbor_rejects_non_bonded_separation() {
        let n = atom("N", AutoDockType::N, Point3::origin());
        let h = atom("H", AutoDockType::Hd, Point3::new(2.0, 0.0, 0.0));
        assert!(!n.is_neighbor(&h));
    }

    #[test]
    fn is_neighbor_boundary_is_open() {
        let n = atom("N", AutoDockType::N, Point3::origin());
        let threshold =
            AutoDockType::N.covalent_radius() + AutoDockType::Hd.covalent_radius();
        let h = atom("H", AutoDockType::Hd, Point3::new(threshold, 0.0, 0.0));
        assert!(!n.is_neighbor(&h));
    }

    #[test]
    fn donorize_and_dehydrophobicize_are_idempotent() {
        let mut a = atom("CB", AutoDockType::C, Point3::origin());
        a.dehydrophobicize();
        assert!(!a.hydrophobic);
        a.dehydrophobicize();
        assert!(!a.hydrophobic);

        let mut n = atom("N", AutoDockType::N, Point3::origin());
        n.donorize();
        assert!(n.donor);
        n.donorize();
        assert!(n.donor);
    }
}
