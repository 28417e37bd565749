// src/utils/report.rs

use crate::model::structure::Structure;
use crate::physics::sampler::{Grid, GridPoint};
use crate::stage::naming;
use crate::utils::linalg;

/// Startup line: species, atom count and the reference length b.
pub fn structure_summary(structure: &Structure, lattice_constant: f64) -> String {
    let labels = structure
        .species
        .iter()
        .map(|s| format!("'{}'", s))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "SYSTEM=[{}], #_atoms={} b={}",
        labels,
        structure.total_atoms(),
        linalg::burgers_length(lattice_constant)
    )
}

/// One line per visited grid point.
pub fn progress_line(point: &GridPoint) -> String {
    format!("Ax,Ay= {:12.6},{:12.6} {:3}", point.offset_x, point.offset_y, point.sample)
}

pub fn completion_line() -> &'static str {
    "DISPLACED FILES HAS BEEN GENERATED in the X=<112>, Y=<110> ... "
}

/// Table printed by `--plan`: every grid point and the names it would use.
pub fn plan_table(grid: &Grid) -> String {
    let mut out = String::new();
    out.push_str(&format!("Ax = {:.6}  Ay = {:.6}  ({} points)\n", grid.ax, grid.ay, grid.point_count()));
    out.push_str("--------------------------------------------------------------------\n");
    out.push_str(&format!(
        "{:<6} {:<4} {:<4} {:>12} {:>12}  {:<12} {:<20}\n",
        "Index", "X", "Y", "Offset X", "Offset Y", "File", "Directory"
    ));
    out.push_str("--------------------------------------------------------------------\n");

    for p in grid.points() {
        out.push_str(&format!(
            "{:<6} {:<4} {:<4} {:>12.6} {:>12.6}  {:<12} {:<20}\n",
            p.sample,
            p.grid_x,
            p.grid_y,
            p.offset_x,
            p.offset_y,
            naming::staged_file(&p),
            naming::sample_dir(&p)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::structure::tests::sample_structure;

    #[test]
    fn test_summary() {
        let line = structure_summary(&sample_structure(), 3.40);
        assert!(line.starts_with("SYSTEM=['W', 'Re'], #_atoms=6 b=2.94"));
    }

    #[test]
    fn test_progress_line() {
        let p = GridPoint { grid_x: 1, grid_y: 2, sample: 12, offset_x: 0.5, offset_y: 1.25 };
        assert_eq!(progress_line(&p), "Ax,Ay=     0.500000,    1.250000  12");
    }

    #[test]
    fn test_plan_table_rows() {
        let table = plan_table(&Grid::new(10.0, 5.0));
        assert_eq!(table.lines().count(), 4 + 210);
        assert!(table.contains("dis_X20_Y09_209"));
        assert!(table.contains("iniTMP_00"));
    }
}
