// src/stage/finalize.rs

use crate::config::Config;
use crate::error::{Result, SweepError};
use std::path::Path;
use std::process::Command;

/// External structure builder run once per sample directory.
#[derive(Debug, Clone)]
pub struct FinalizeTool {
    pub program: String,
    pub args: Vec<String>,
}

impl FinalizeTool {
    pub fn from_config(config: &Config) -> Self {
        Self {
            program: config.tool.clone(),
            args: config.tool_args.clone(),
        }
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Runs the tool in `cwd` and blocks until it exits. Any non-zero exit
    /// aborts the sweep.
    pub fn run(&self, cwd: &Path) -> Result<()> {
        log::debug!("running `{}` in {:?}", self.command_line(), cwd);
        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(cwd)
            .status()
            .map_err(|source| SweepError::ToolSpawn {
                tool: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(SweepError::ToolFailed {
                tool: self.command_line(),
                status,
            });
        }
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn shell(script: &str) -> FinalizeTool {
        FinalizeTool {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), script.to_string()],
        }
    }

    #[test]
    fn test_runs_in_given_dir() {
        let dir = tempfile::tempdir().unwrap();
        shell("echo done > marker").run(dir.path()).unwrap();
        assert!(dir.path().join("marker").is_file());
    }

    #[test]
    fn test_nonzero_exit_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = shell("exit 3").run(dir.path()).unwrap_err();
        match err {
            SweepError::ToolFailed { status, .. } => assert_eq!(status.code(), Some(3)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_program() {
        let dir = tempfile::tempdir().unwrap();
        let tool = FinalizeTool {
            program: "definitely-not-a-dislo-binary".to_string(),
            args: vec![],
        };
        assert!(matches!(tool.run(dir.path()), Err(SweepError::ToolSpawn { .. })));
    }

    #[test]
    fn test_command_line() {
        let tool = FinalizeTool::from_config(&Config::default());
        assert_eq!(tool.command_line(), "dislo input_dislo.babel");
    }
}
