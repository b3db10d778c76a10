//! CLI argument parsing for robocmd.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "robocmd")]
#[command(about = "Build and run robocopy command lines from TOML job profiles")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the rendered argument vector, one token per line
    Args {
        /// Path to the job profile
        #[arg(long)]
        profile: PathBuf,
    },

    /// Report switch combinations robocopy would reject or ignore
    Check {
        /// Path to the job profile
        #[arg(long)]
        profile: PathBuf,
    },

    /// Run robocopy and exit with its exit code
    Run {
        /// Path to the job profile
        #[arg(long)]
        profile: PathBuf,

        /// Refuse to run when the profile has validation findings
        #[arg(long)]
        strict: bool,

        /// Print the command line instead of running it
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the meaning of a robocopy exit code
    Describe {
        /// Exit code reported by robocopy
        #[arg(allow_negative_numbers = true)]
        code: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_run_flags() {
        let cli = Cli::try_parse_from([
            "robocmd",
            "run",
            "--profile",
            "nightly.toml",
            "--strict",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Command::Run {
                profile,
                strict,
                dry_run,
            } => {
                assert_eq!(profile, PathBuf::from("nightly.toml"));
                assert!(strict);
                assert!(!dry_run);
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn describe_accepts_negative_codes() {
        let cli = Cli::try_parse_from(["robocmd", "describe", "-1"]).unwrap();
        assert!(matches!(cli.command, Command::Describe { code: -1 }));
    }

    #[test]
    fn args_requires_profile() {
        assert!(Cli::try_parse_from(["robocmd", "args"]).is_err());
    }
}
