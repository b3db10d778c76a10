mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use robocmd_core::{ensure_valid, load_profile, logging, validate, Result};
use robocmd_hal::{describe, Robocopy, Streams, SystemHal, ROBOCOPY_PROGRAM};
use std::io;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref(), cli.verbose)
        .context("failed to initialise logging")?;

    match cli.command {
        Command::Args { profile } => {
            for arg in load_command(&profile)?.command_args() {
                println!("{}", arg);
            }
        }
        Command::Check { profile } => {
            let cmd = load_command(&profile)?;
            let findings = validate(&cmd);
            for finding in &findings {
                println!("{}", finding);
            }
            if !findings.is_empty() {
                anyhow::bail!("{} finding(s) in {}", findings.len(), profile.display());
            }
            println!("{}: ok", profile.display());
        }
        Command::Run {
            profile,
            strict,
            dry_run,
        } => {
            let code = run(&profile, strict, dry_run)?;
            std::process::exit(code);
        }
        Command::Describe { code } => println!("{}", describe(code)),
    }

    Ok(())
}

fn load_command(path: &Path) -> Result<Robocopy> {
    let profile = load_profile(path)
        .with_context(|| format!("cannot build command from {}", path.display()))?;
    Ok(profile.into_robocopy())
}

fn run(profile: &Path, strict: bool, dry_run: bool) -> Result<i32> {
    let mut cmd = load_command(profile)?;

    if strict {
        ensure_valid(&cmd).with_context(|| format!("{} failed validation", profile.display()))?;
    } else {
        for finding in validate(&cmd) {
            log::warn!("{}", finding);
        }
    }

    if dry_run {
        println!("{} {}", ROBOCOPY_PROGRAM, cmd.command_args().join(" "));
        return Ok(0);
    }

    let streams = Streams::null()
        .with_stdout(io::stdout())
        .with_stderr(io::stderr());
    let exit = cmd
        .run(&SystemHal::new(), streams)
        .with_context(|| format!("failed to run {}", ROBOCOPY_PROGRAM))?;
    println!("{}", exit);
    Ok(exit.code())
}
