use phf::{Map, phf_map};

/// The closed set of AutoDock4 atom types accepted on receptor atom records.
///
/// Tokens outside this set are rejected at the lookup layer; the parser drops
/// the whole record, so an unrecognized type never reaches the atom list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AutoDockType {
    /// Non-polar hydrogen. Recognized but never stored on a receptor.
    H,
    /// Polar hydrogen, capable of donating a hydrogen bond.
    Hd,
    /// Aliphatic carbon.
    C,
    /// Aromatic carbon.
    A,
    /// Nitrogen.
    N,
    /// Nitrogen, hydrogen bond acceptor.
    Na,
    /// Oxygen, hydrogen bond acceptor.
    Oa,
    /// Sulfur.
    S,
    /// Sulfur, hydrogen bond acceptor.
    Sa,
    /// Selenium.
    Se,
    /// Phosphorus.
    P,
    /// Fluorine.
    F,
    /// Chlorine.
    Cl,
    /// Bromine.
    Br,
    /// Iodine.
    I,
}

static AUTODOCK_TYPE_TOKENS: Map<&'static str, AutoDockType> = phf_map! {
    "H" => AutoDockType::H,
    "HD" => AutoDockType::Hd,
    "C" => AutoDockType::C,
    "A" => AutoDockType::A,
    "N" => AutoDockType::N,
    "NA" => AutoDockType::Na,
    "OA" => AutoDockType::Oa,
    "S" => AutoDockType::S,
    "SA" => AutoDockType::Sa,
    "SE" => AutoDockType::Se,
    "Se" => AutoDockType::Se,
    "P" => AutoDockType::P,
    "F" => AutoDockType::F,
    "Cl" => AutoDockType::Cl,
    "CL" => AutoDockType::Cl,
    "Br" => AutoDockType::Br,
    "BR" => AutoDockType::Br,
    "I" => AutoDockType::I,
};

impl AutoDockType {
    /// Resolves the 1-2 character PDBQT type token into an `AutoDockType`.
    ///
    /// Returns `None` for tokens outside the supported set.
    pub fn from_token(token: &str) -> Option<Self> {
        AUTODOCK_TYPE_TOKENS.get(token).copied()
    }

    /// Returns the canonical PDBQT token for this type.
    pub fn token(self) -> &'static str {
        match self {
            AutoDockType::H => "H",
            AutoDockType::Hd => "HD",
            AutoDockType::C => "C",
            AutoDockType::A => "A",
            AutoDockType::N => "N",
            AutoDockType::Na => "NA",
            AutoDockType::Oa => "OA",
            AutoDockType::S => "S",
            AutoDockType::Sa => "SA",
            AutoDockType::Se => "SE",
            AutoDockType::P => "P",
            AutoDockType::F => "F",
            AutoDockType::Cl => "Cl",
            AutoDockType::Br => "Br",
            AutoDockType::I => "I",
        }
    }

    /// Returns true for hydrogen types, polar or not.
    pub fn is_hydrogen(self) -> bool {
        matches!(self, AutoDockType::H | AutoDockType::Hd)
    }

    /// Returns true for the polar hydrogen type, which can donate a hydrogen bond.
    pub fn is_donor_hydrogen(self) -> bool {
        self == AutoDockType::Hd
    }

    /// Returns true for hetero types, i.e. anything that is neither carbon nor hydrogen.
    pub fn is_hetero(self) -> bool {
        !matches!(
            self,
            AutoDockType::H | AutoDockType::Hd | AutoDockType::C | AutoDockType::A
        )
    }

    /// Returns true for types that start out hydrophobic (the carbons).
    ///
    /// The flag may later be cleared by residue-scoped reclassification when
    /// the atom is proven covalently bonded to a hetero atom.
    pub fn is_hydrophobic_default(self) -> bool {
        matches!(self, AutoDockType::C | AutoDockType::A)
    }

    /// Returns the covalent radius in Angstroms, pre-scaled by 1.1 to give a
    /// tolerant bond-detection threshold when two radii are summed.
    pub fn covalent_radius(self) -> f64 {
        match self {
            AutoDockType::H | AutoDockType::Hd => 0.407,
            AutoDockType::C | AutoDockType::A => 0.847,
            AutoDockType::N | AutoDockType::Na => 0.825,
            AutoDockType::Oa => 0.803,
            AutoDockType::S | AutoDockType::Sa => 1.122,
            AutoDockType::Se => 1.276,
            AutoDockType::P => 1.166,
            AutoDockType::F => 0.781,
            AutoDockType::Cl => 1.089,
            AutoDockType::Br => 1.254,
            AutoDockType::I => 1.463,
        }
    }
}
