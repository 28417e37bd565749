// src/io/mod.rs
pub mod poscar;

use crate::error::Result;
use crate::model::Structure;
use std::path::Path;

/// Reads the reference supercell. Only Cartesian POSCAR input is accepted.
pub fn load_structure(path: &Path) -> Result<Structure> {
    let structure = poscar::parse(path)?;
    log::info!(
        "Loaded {:?}: {} atoms in {} species",
        path,
        structure.total_atoms(),
        structure.species.len()
    );
    Ok(structure)
}
