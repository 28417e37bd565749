// src/stage/naming.rs
//
// Staged files are keyed by the flat sample index, directories and results
// by the grid indices plus the sample index. Both come from the same
// GridPoint so a rerun always lands on the same names.

use crate::physics::GridPoint;

/// `iniTMP_07`
pub fn staged_file(point: &GridPoint) -> String {
    format!("iniTMP_{:02}", point.sample)
}

/// `dis_X03_Y04_34`
pub fn sample_dir(point: &GridPoint) -> String {
    format!("dis_{}", grid_tag(point))
}

/// `disFIN_X03_Y04_34`
pub fn result_file(point: &GridPoint) -> String {
    format!("disFIN_{}", grid_tag(point))
}

fn grid_tag(point: &GridPoint) -> String {
    format!("X{:02}_Y{:02}_{:02}", point.grid_x, point.grid_y, point.sample)
}
