// src/utils/linalg.rs

use nalgebra::Vector3;

/// Euclidean length of a lattice row or position.
pub fn norm(v: [f64; 3]) -> f64 {
  Vector3::from(v).norm()
}

/// Reference length printed at startup: half of a 3.40 Å lattice
/// constant along <111>.
///
/// # Formula
/// ```text
/// b = a / 2 * |(1, 1, 1)|
/// ```
pub fn burgers_length(lattice_constant: f64) -> f64 {
  lattice_constant / 2.0 * norm([1.0, 1.0, 1.0])
}
