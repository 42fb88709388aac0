use crate::core::models::atom::Atom;
use crate::core::models::types::AutoDockType;
use nalgebra::Point3;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Residue tracking sentinel; no atom record carries this key, so the next
/// record always opens a new residue scope.
const NO_RESIDUE: &str = "XXXX";

#[derive(Debug, Error)]
pub enum PdbqtError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

/// Reads receptor atoms from a PDBQT stream, finalizing chemistry flags as
/// each residue is consumed.
///
/// Only `ATOM` and `HETATM` records contribute atoms; `TER` resets the
/// current residue scope. Records with an unrecognized AutoDock type, with
/// unparseable fixed-column fields, or typed as non-polar hydrogen are
/// skipped without failing the parse. Only the underlying reader can make
/// this function fail.
///
/// Each accepted atom is classified against the atoms already read from the
/// same residue, scanning backwards from the newest:
/// - a polar hydrogen marks the nearest bonded hetero atom as a donor;
/// - a hetero atom clears the hydrophobic flag of every bonded carbon;
/// - a carbon clears its own flag when bonded to any earlier hetero atom.
pub fn read_atoms(reader: &mut impl BufRead) -> Result<Vec<Atom>, PdbqtError> {
    let mut atoms: Vec<Atom> = Vec::with_capacity(5000);
    let mut residue = NO_RESIDUE.to_string();
    let mut residue_start = 0;

    for (line_num, line_res) in reader.lines().enumerate() {
        let line = line_res?;
        let line_num = line_num + 1;

        let record = line.get(0..6).unwrap_or(line.as_str());
        if record == "ATOM  " || record == "HETATM" {
            // Chain id + residue sequence, 1-based columns 22-26. A change
            // against the previous record opens a new residue scope.
            let residue_key = line.get(21..26).unwrap_or("");
            if residue_key != residue {
                residue = residue_key.to_string();
                residue_start = atoms.len();
            }

            // AutoDock type, 1-based columns 78-79; a single-character type
            // leaves column 79 blank.
            let token = line
                .get(77..79)
                .or_else(|| line.get(77..78))
                .unwrap_or("")
                .trim_end();
            let Some(autodock_type) = AutoDockType::from_token(token) else {
                debug!("Skipping line {}: unrecognized atom type '{}'", line_num, token);
                continue;
            };

            // Non-polar hydrogens contribute nothing to scoring or geometry.
            if autodock_type == AutoDockType::H {
                continue;
            }

            let Ok(serial) = slice_and_trim(&line, 6, 11).parse::<u32>() else {
                debug!("Skipping line {}: invalid serial number", line_num);
                continue;
            };
            let (Ok(x), Ok(y), Ok(z)) = (
                slice_and_trim(&line, 30, 38).parse::<f64>(),
                slice_and_trim(&line, 38, 46).parse::<f64>(),
                slice_and_trim(&line, 46, 54).parse::<f64>(),
            ) else {
                debug!("Skipping line {}: invalid coordinates", line_num);
                continue;
            };
            let name = slice_and_trim(&line, 12, 16).to_string();
            let key = format!(
                "{}:{}{}:{}",
                line.get(21..22).unwrap_or(""),
                line.get(17..20).unwrap_or(""),
                line.get(22..26).unwrap_or(""),
                name
            );

            let mut atom = Atom::new(serial, name, key, Point3::new(x, y, z), autodock_type);

            if autodock_type.is_donor_hydrogen() {
                // The nearest bonded hetero atom becomes a hydrogen bond donor.
                for i in (residue_start..atoms.len()).rev() {
                    let b = &mut atoms[i];
                    if b.is_hetero() && b.is_neighbor(&atom) {
                        b.donorize();
                        break;
                    }
                }
            } else if atom.is_hetero() {
                // Every bonded carbon loses its hydrophobic classification.
                for i in (residue_start..atoms.len()).rev() {
                    let b = &mut atoms[i];
                    if !b.is_hetero() && b.is_neighbor(&atom) {
                        b.dehydrophobicize();
                    }
                }
            } else {
                // A carbon bonded to any earlier hetero atom is not hydrophobic.
                for i in (residue_start..atoms.len()).rev() {
                    let b = &atoms[i];
                    if b.is_hetero() && b.is_neighbor(&atom) {
                        atom.dehydrophobicize();
                        break;
                    }
                }
            }
            atoms.push(atom);
        } else if record.trim_end() == "TER" {
            residue = NO_RESIDUE.to_string();
        }
    }

    info!("Parsed {} receptor atoms", atoms.len());
    Ok(atoms)
}

/// Reads receptor atoms from a PDBQT file on disk.
pub fn read_atoms_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Atom>, PdbqtError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    read_atoms(&mut reader)
}
