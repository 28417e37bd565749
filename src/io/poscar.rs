// src/io/poscar.rs

use crate::error::{Result, SweepError};
use crate::model::{CoordinateMode, Structure};
use crate::physics::GridPoint;
use crate::stage::naming;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

pub fn parse(path: &Path) -> Result<Structure> {
    let content = fs::read_to_string(path).map_err(|e| SweepError::io(path, e))?;
    parse_str(&content)
}

/// Line cursor that remembers the 1-based line number for error messages.
struct Cursor<'a> {
    lines: std::str::Lines<'a>,
    line_no: usize,
}

impl<'a> Cursor<'a> {
    fn new(content: &'a str) -> Self {
        Self { lines: content.lines(), line_no: 0 }
    }

    fn next(&mut self, expected: &'static str) -> Result<&'a str> {
        self.line_no += 1;
        self.lines.next().ok_or(SweepError::UnexpectedEof {
            line: self.line_no,
            expected,
        })
    }

    fn parse_err(&self, reason: impl Into<String>) -> SweepError {
        SweepError::Parse { line: self.line_no, reason: reason.into() }
    }

    fn vec3(&mut self, expected: &'static str) -> Result<[f64; 3]> {
        let line = self.next(expected)?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(self.parse_err(format!(
                "{} needs 3 values, found {}",
                expected,
                parts.len()
            )));
        }
        let mut v = [0.0; 3];
        for (slot, token) in v.iter_mut().zip(&parts) {
            *slot = token
                .parse::<f64>()
                .map_err(|_| self.parse_err(format!("invalid number '{}' in {}", token, expected)))?;
        }
        Ok(v)
    }
}

pub fn parse_str(content: &str) -> Result<Structure> {
    let mut cur = Cursor::new(content);

    let title = cur.next("comment line")?.to_string();

    // Scale
    let scale_line = cur.next("scale factor")?;
    let scale: f64 = scale_line
        .trim()
        .parse()
        .map_err(|_| cur.parse_err(format!("invalid scale '{}'", scale_line.trim())))?;

    // Lattice
    let mut lattice = [[0.0; 3]; 3];
    for row in lattice.iter_mut() {
        *row = cur.vec3("lattice vector")?;
    }

    // Elements & Counts
    let species: Vec<String> = cur
        .next("species labels")?
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let counts_line = cur.next("species counts")?;
    let mut counts = Vec::new();
    let mut total: usize = 0;
    for token in counts_line.split_whitespace() {
        let n: usize = token
            .parse()
            .map_err(|_| cur.parse_err(format!("invalid atom count '{}'", token)))?;
        if n == 0 {
            return Err(cur.parse_err("atom counts must be positive"));
        }
        total = total
            .checked_add(n)
            .ok_or_else(|| cur.parse_err("total atom count overflows"))?;
        counts.push(n);
    }
    if counts.is_empty() {
        return Err(cur.parse_err("no atom counts"));
    }

    // Mode
    let mode_token = cur
        .next("coordinate mode")?
        .split_whitespace()
        .next()
        .ok_or_else(|| cur.parse_err("missing coordinate mode"))?
        .to_string();
    let mode = CoordinateMode::from_token(&mode_token);
    if mode == CoordinateMode::Direct {
        return Err(SweepError::DirectCoordinates);
    }

    // Atoms; the declared total is untrusted, so no pre-allocation
    let mut positions = Vec::new();
    for _ in 0..total {
        positions.push(cur.vec3("atomic position")?);
    }

    for line in cur.lines.by_ref() {
        cur.line_no += 1;
        if !line.trim().is_empty() {
            return Err(SweepError::TrailingData { line: cur.line_no });
        }
    }

    let structure = Structure {
        title,
        scale,
        lattice,
        species,
        counts,
        mode,
        mode_token,
        positions,
    };
    structure.validate()?;
    Ok(structure)
}

/// POSCAR text for one sample: positions shifted in-plane by the point's offsets.
pub fn render_translated(structure: &Structure, point: &GridPoint) -> String {
    let mut out = String::new();

    // 1. Header carries the grid indices, not the flat sample index
    let _ = writeln!(out, "iniTMP_{}_{}", point.grid_x, point.grid_y);
    let _ = writeln!(out, "{:.6}", structure.scale);

    // 2. Lattice Vectors
    for vec in &structure.lattice {
        let _ = writeln!(out, "{:15.11} {:15.11} {:15.11}", vec[0], vec[1], vec[2]);
    }

    // 3. Species block, tokens as read
    for label in &structure.species {
        let _ = write!(out, " {}", label);
    }
    out.push('\n');
    for count in &structure.counts {
        let _ = write!(out, " {}", count);
    }
    out.push('\n');
    let _ = writeln!(out, "{}", structure.mode_token);

    // 4. Atomic Positions (Cartesian)
    for p in structure.translated(point.offset_x, point.offset_y) {
        let _ = writeln!(out, "{:15.12} {:15.12} {:15.12}", p[0], p[1], p[2]);
    }

    out
}

pub fn write_translated(dir: &Path, structure: &Structure, point: &GridPoint) -> Result<PathBuf> {
    let path = dir.join(naming::staged_file(point));
    fs::write(&path, render_translated(structure, point)).map_err(|e| SweepError::io(&path, e))?;
    Ok(path)
}
