// src/model/structure.rs

use crate::error::{Result, SweepError};
use crate::utils::linalg;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateMode {
    Cartesian,
    Direct,
}

impl CoordinateMode {
    /// Only the first token of the mode line matters.
    pub fn from_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case("direct") {
            CoordinateMode::Direct
        } else {
            CoordinateMode::Cartesian
        }
    }
}

/// A POSCAR record as read from disk. Read-only after parsing; every
/// sample derives its own translated positions from it.
#[derive(Clone, Debug)]
pub struct Structure {
    pub title: String,
    pub scale: f64,
    // Lattice vectors as rows: [a_vec, b_vec, c_vec], unscaled
    pub lattice: [[f64; 3]; 3],
    pub species: Vec<String>,
    pub counts: Vec<usize>,
    pub mode: CoordinateMode,
    // Raw first token of the mode line, re-emitted as-is
    pub mode_token: String,
    pub positions: Vec<[f64; 3]>,
}

impl Structure {
    /// Saturates instead of wrapping, so an absurd count can never
    /// match the number of positions actually held.
    pub fn total_atoms(&self) -> usize {
        self.counts.iter().fold(0usize, |acc, &n| acc.saturating_add(n))
    }

    /// (Ax, Ay): |a_x| and |b|, the extents swept by the sampler.
    pub fn in_plane_extents(&self) -> (f64, f64) {
        (self.lattice[0][0].abs(), linalg::norm(self.lattice[1]))
    }

    /// Positions shifted by (dx, dy) in the plane; z is copied untouched.
    pub fn translated(&self, dx: f64, dy: f64) -> Vec<[f64; 3]> {
        self.positions
            .iter()
            .map(|p| [p[0] + dx, p[1] + dy, p[2]])
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        if self.species.len() != self.counts.len() {
            return Err(SweepError::Inconsistent(format!(
                "{} species labels but {} counts",
                self.species.len(),
                self.counts.len()
            )));
        }
        if self.total_atoms() != self.positions.len() {
            return Err(SweepError::Inconsistent(format!(
                "counts sum to {} but {} positions were read",
                self.total_atoms(),
                self.positions.len()
            )));
        }
        if self.mode != CoordinateMode::Cartesian {
            return Err(SweepError::DirectCoordinates);
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_structure() -> Structure {
        Structure {
            title: "screw dislocation".to_string(),
            scale: 1.0,
            lattice: [[10.0, 0.0, 0.0], [0.0, 5.0, 0.0], [0.0, 0.0, 2.5]],
            species: vec!["W".to_string(), "Re".to_string()],
            counts: vec![4, 2],
            mode: CoordinateMode::Cartesian,
            mode_token: "Cartesian".to_string(),
            positions: vec![
                [0.0, 0.0, 0.0],
                [1.5, 0.25, 0.125],
                [2.75, 1.0, 0.5],
                [3.0, 2.5, 1.25],
                [4.125, 3.0, 1.75],
                [9.5, 4.75, 2.25],
            ],
        }
    }

    #[test]
    fn test_mode_token() {
        assert_eq!(CoordinateMode::from_token("Direct"), CoordinateMode::Direct);
        assert_eq!(CoordinateMode::from_token("direct"), CoordinateMode::Direct);
        assert_eq!(CoordinateMode::from_token("Cartesian"), CoordinateMode::Cartesian);
        assert_eq!(CoordinateMode::from_token("cartesian"), CoordinateMode::Cartesian);
    }

    #[test]
    fn test_total_atoms() {
        assert_eq!(sample_structure().total_atoms(), 6);
    }

    #[test]
    fn test_total_atoms_saturates() {
        let mut s = sample_structure();
        s.counts = vec![usize::MAX, 1];
        s.positions.clear();
        assert_eq!(s.total_atoms(), usize::MAX);
        assert!(matches!(s.validate(), Err(SweepError::Inconsistent(_))));
    }

    #[test]
    fn test_translated_keeps_z() {
        let s = sample_structure();
        let moved = s.translated(0.5, -1.25);
        for (orig, new) in s.positions.iter().zip(&moved) {
            assert!((new[0] - (orig[0] + 0.5)).abs() < 1e-12);
            assert!((new[1] - (orig[1] - 1.25)).abs() < 1e-12);
            assert_eq!(new[2].to_bits(), orig[2].to_bits());
        }
        // Source positions untouched
        assert_eq!(s.positions[1], [1.5, 0.25, 0.125]);
    }

    #[test]
    fn test_extents() {
        let mut s = sample_structure();
        s.lattice[0] = [-10.0, 0.0, 0.0];
        s.lattice[1] = [3.0, 4.0, 0.0];
        let (ax, ay) = s.in_plane_extents();
        assert!((ax - 10.0).abs() < 1e-12);
        assert!((ay - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_validate_counts() {
        let mut s = sample_structure();
        assert!(s.validate().is_ok());
        s.positions.pop();
        assert!(matches!(s.validate(), Err(SweepError::Inconsistent(_))));
    }
}
