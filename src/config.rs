// src/config.rs

use crate::error::{Result, SweepError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Name looked up in the sweep root when no `--config` is given.
pub const LOCAL_CONFIG: &str = "dislo_sweep.json";

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
  /// Reference supercell, Cartesian POSCAR.
  pub source: String,

  /// Collaborator inputs copied into every sample directory.
  pub inputs: Vec<String>,

  pub tool: String,
  pub tool_args: Vec<String>,

  /// Name the finalize tool reads its structure from.
  pub tool_input: String,
  /// Name the finalize tool writes its structure to.
  pub tool_output: String,

  pub manifest: String,

  /// Lattice constant (Å) behind the reference length printed at startup.
  pub lattice_constant: f64,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      source: "POSCAR_perfect".to_string(),
      inputs: ["INCAR", "POTCAR", "KPOINTS", "job.sh", "input_dislo.babel"]
        .iter()
        .map(|s| s.to_string())
        .collect(),
      tool: "dislo".to_string(),
      tool_args: vec!["input_dislo.babel".to_string()],
      tool_input: "CONTCAR".to_string(),
      tool_output: "POSCAR".to_string(),
      manifest: "sweep_manifest.json".to_string(),
      lattice_constant: 3.40,
    }
  }
}

impl Config {
  /// Explicit path first, then `dislo_sweep.json` in the root, then the
  /// per-user settings file. Returns the config and where it came from.
  pub fn load(explicit: Option<&Path>, root: &Path) -> Result<(Self, String)> {
    if let Some(path) = explicit {
      let cfg = Self::read(path)?;
      return Ok((cfg, format!("Config loaded from {:?}", path)));
    }

    let local = root.join(LOCAL_CONFIG);
    if local.exists() {
      let cfg = Self::read(&local)?;
      return Ok((cfg, format!("Config loaded from {:?}", local)));
    }

    if let Some(user) = Self::user_path() {
      if user.exists() {
        let cfg = Self::read(&user)?;
        return Ok((cfg, format!("Config loaded from {:?}", user)));
      }
    }

    Ok((Self::default(), "No config found. Using defaults.".to_string()))
  }

  pub fn read(path: &Path) -> Result<Self> {
    let file = File::open(path).map_err(|e| SweepError::io(path, e))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
      .map_err(|e| SweepError::Config(format!("Error parsing {:?}: {}", path, e)))
  }

  fn user_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "mavensgroup", "dislo-sweep")
      .map(|proj| proj.config_dir().join("settings.json"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;

  #[test]
  fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.source, "POSCAR_perfect");
    assert_eq!(cfg.inputs.len(), 5);
    assert_eq!(cfg.tool, "dislo");
    assert_eq!(cfg.tool_args, vec!["input_dislo.babel"]);
  }

  #[test]
  fn test_partial_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(LOCAL_CONFIG), r#"{ "tool": "/opt/dislo/bin/dislo" }"#).unwrap();

    let (cfg, msg) = Config::load(None, dir.path()).unwrap();
    assert_eq!(cfg.tool, "/opt/dislo/bin/dislo");
    assert_eq!(cfg.source, "POSCAR_perfect");
    assert!(msg.contains(LOCAL_CONFIG));
  }

  #[test]
  fn test_explicit_path_wins() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(LOCAL_CONFIG), r#"{ "tool": "local" }"#).unwrap();
    let explicit = dir.path().join("other.json");
    fs::write(&explicit, r#"{ "tool": "explicit" }"#).unwrap();

    let (cfg, _) = Config::load(Some(explicit.as_path()), dir.path()).unwrap();
    assert_eq!(cfg.tool, "explicit");
  }

  #[test]
  fn test_bad_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(LOCAL_CONFIG), "{ not json").unwrap();
    assert!(matches!(Config::load(None, dir.path()), Err(SweepError::Config(_))));
  }

  #[test]
  fn test_missing_explicit_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    assert!(matches!(Config::load(Some(missing.as_path()), dir.path()), Err(SweepError::Io { .. })));
  }
}
