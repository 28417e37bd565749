// src/stage/sweep.rs

use crate::config::Config;
use crate::error::{Result, SweepError};
use crate::io::poscar;
use crate::model::Structure;
use crate::physics::sampler::{Grid, GridPoint};
use crate::stage::finalize::FinalizeTool;
use crate::stage::naming;
use crate::stage::workdir::WorkDir;
use crate::utils::report;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// What one grid point left behind.
#[derive(Debug, Clone, Serialize)]
pub struct StagedSample {
    #[serde(flatten)]
    pub point: GridPoint,
    pub staged_file: String,
    pub directory: String,
    pub result_file: String,
}

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    source: &'a str,
    tool: String,
    ax: f64,
    ay: f64,
    samples: &'a [StagedSample],
}

/// Sequential translation sweep rooted at one directory.
pub struct Sweep<'a> {
    root: PathBuf,
    config: &'a Config,
    structure: &'a Structure,
    tool: FinalizeTool,
}

impl<'a> Sweep<'a> {
    pub fn new(root: impl Into<PathBuf>, config: &'a Config, structure: &'a Structure) -> Self {
        Self {
            root: root.into(),
            config,
            structure,
            tool: FinalizeTool::from_config(config),
        }
    }

    pub fn grid(&self) -> Grid {
        let (ax, ay) = self.structure.in_plane_extents();
        Grid::new(ax, ay)
    }

    /// Stages every grid point in order. The first failure aborts the rest.
    pub fn run(&self) -> Result<Vec<StagedSample>> {
        let grid = self.grid();
        log::info!(
            "Sweeping {} points over Ax={:.6} Ay={:.6} in {:?}",
            grid.point_count(),
            grid.ax,
            grid.ay,
            self.root
        );

        let mut wd = WorkDir::new(&self.root);
        let mut staged = Vec::with_capacity(grid.point_count());
        for point in grid.points() {
            let sample = self.stage_point(&mut wd, &point).map_err(|e| {
                log::error!("sample {} failed: {}", point.sample, e);
                e
            })?;
            println!("{}", report::progress_line(&point));
            staged.push(sample);
        }

        self.write_manifest(&grid, &staged)?;
        Ok(staged)
    }

    fn stage_point(&self, wd: &mut WorkDir, point: &GridPoint) -> Result<StagedSample> {
        // 1. Translated structure next to the source
        poscar::write_translated(wd.current(), self.structure, point)?;
        let staged_file = naming::staged_file(point);
        let directory = naming::sample_dir(point);
        let result_file = naming::result_file(point);

        // 2. Fresh sample directory with the collaborator inputs
        let dir = wd.recreate_dir(&directory)?;
        wd.copy(&staged_file, &dir)?;
        for input in &self.config.inputs {
            wd.copy(input, &dir)?;
        }

        // 3. Finalize inside the sample directory
        let inside = wd.enter(&directory)?;
        inside.copy(&staged_file, &inside.resolve(&self.config.tool_input))?;
        self.tool.run(inside.current())?;

        if !inside.resolve(&self.config.tool_output).is_file() {
            return Err(SweepError::MissingOutput(inside.resolve(&self.config.tool_output)));
        }
        inside.copy(&self.config.tool_output, &inside.resolve(&result_file))?;
        inside.copy(&result_file, &self.root)?;
        drop(inside);

        Ok(StagedSample {
            point: *point,
            staged_file,
            directory,
            result_file,
        })
    }

    fn write_manifest(&self, grid: &Grid, staged: &[StagedSample]) -> Result<()> {
        let path = self.root.join(&self.config.manifest);
        let manifest = Manifest {
            source: &self.config.source,
            tool: self.tool.command_line(),
            ax: grid.ax,
            ay: grid.ay,
            samples: staged,
        };
        let file = File::create(&path).map_err(|e| SweepError::io(&path, e))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &manifest)
            .map_err(|e| SweepError::io(&path, e.into()))?;
        log::info!("Manifest written to {:?}", path);
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
