// src/stage/workdir.rs

use crate::error::{Result, SweepError};
use std::fs;
use std::io;
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

/// The sweep's notion of "current directory".
///
/// The process working directory is never touched. Relative names resolve
/// against `current()`, and child processes are started there.
#[derive(Debug)]
pub struct WorkDir {
    current: PathBuf,
}

impl WorkDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { current: root.into() }
    }

    pub fn current(&self) -> &Path {
        &self.current
    }

    pub fn resolve(&self, name: impl AsRef<Path>) -> PathBuf {
        self.current.join(name)
    }

    /// Switches into `name` until the returned guard is dropped.
    pub fn enter(&mut self, name: &str) -> Result<Entered<'_>> {
        let target = self.resolve(name);
        if !target.is_dir() {
            return Err(SweepError::io(
                &target,
                io::Error::new(io::ErrorKind::NotFound, "not a directory"),
            ));
        }
        log::trace!("enter {:?}", target);
        let saved = std::mem::replace(&mut self.current, target);
        Ok(Entered { dir: self, saved })
    }

    /// Removes `name` and everything under it, then creates it empty.
    pub fn recreate_dir(&self, name: &str) -> Result<PathBuf> {
        let path = self.resolve(name);
        match fs::remove_dir_all(&path) {
            Ok(()) => log::debug!("removed stale {:?}", path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(SweepError::io(&path, e)),
        }
        fs::create_dir(&path).map_err(|e| SweepError::io(&path, e))?;
        Ok(path)
    }

    /// Copies `from` (relative to the current directory) to `to`. A missing
    /// source is reported as a missing input.
    pub fn copy(&self, from: &str, to: &Path) -> Result<()> {
        let src = self.resolve(from);
        if !src.is_file() {
            return Err(SweepError::MissingInput(src));
        }
        let dest = if to.is_dir() { to.join(from) } else { to.to_path_buf() };
        fs::copy(&src, &dest).map_err(|e| SweepError::io(&dest, e))?;
        log::trace!("copied {:?} -> {:?}", src, dest);
        Ok(())
    }
}

/// Guard returned by [`WorkDir::enter`]; restores the previous directory on
/// drop, including on early `?` returns.
pub struct Entered<'a> {
    dir: &'a mut WorkDir,
    saved: PathBuf,
}

impl Deref for Entered<'_> {
    type Target = WorkDir;

    fn deref(&self) -> &WorkDir {
        self.dir
    }
}

impl DerefMut for Entered<'_> {
    fn deref_mut(&mut self) -> &mut WorkDir {
        self.dir
    }
}

impl Drop for Entered<'_> {
    fn drop(&mut self) {
        let saved = std::mem::take(&mut self.saved);
        log::trace!("leave {:?}", self.dir.current);
        self.dir.current = saved;
    }
}
