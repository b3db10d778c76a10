use env_logger::Target;
use log::SetLoggerError;
use std::fs;
use std::io;
use std::path::Path;

fn open_log_file(path: &Path) -> io::Result<Target> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    Ok(Target::Pipe(Box::new(file)))
}

/// Initialise the global logger.
///
/// `RUST_LOG` overrides the default level. When `log_file` cannot be opened the
/// output falls back to stderr. Fails if a logger is already installed.
pub fn init(log_file: Option<&Path>, verbose: bool) -> Result<(), SetLoggerError> {
    let (target, open_err) = match log_file.map(|path| (path, open_log_file(path))) {
        Some((_, Ok(target))) => (target, None),
        Some((path, Err(e))) => (Target::Stderr, Some((path, e))),
        None => (Target::Stderr, None),
    };

    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(target)
        .try_init()?;

    if let Some((path, e)) = open_err {
        log::warn!(
            "cannot open log file {}: {}; logging to stderr",
            path.display(),
            e
        );
    }
    Ok(())
}
