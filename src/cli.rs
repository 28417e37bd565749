use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dislo-sweep")]
#[command(
    version,
    about = "Sample rigid in-plane translations of a screw-dislocation supercell and stage one dislo run per sample"
)]
pub struct Cli {
    /// Directory holding POSCAR_perfect and the collaborator inputs
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// JSON settings file (default: dislo_sweep.json in the root, then the user config dir)
    #[arg(long, env = "DISLO_SWEEP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the translation grid and the names it would use, then exit
    #[arg(long)]
    pub plan: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["dislo-sweep"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("."));
        assert!(!cli.plan);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["dislo-sweep", "--root", "/scratch/w", "--plan", "-vv"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("/scratch/w"));
        assert!(cli.plan);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["dislo-sweep", "-q", "-v"]).is_err());
    }
}
