//! Real process execution through `std::process`.

use super::{ProcessOps, Streams};
use crate::{HalError, HalResult};
use std::io::{self, Read, Write};
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};

/// Spawns real processes found through the executable search path.
#[derive(Debug, Clone, Default)]
pub struct SystemHal;

impl SystemHal {
    pub fn new() -> Self {
        Self
    }
}

fn map_command_err(program: &str, err: io::Error) -> HalError {
    if err.kind() == io::ErrorKind::NotFound {
        return HalError::CommandNotFound(program.to_string());
    }
    HalError::Io(err)
}

fn stdio_for<T>(stream: &Option<T>) -> Stdio {
    if stream.is_some() {
        Stdio::piped()
    } else {
        Stdio::null()
    }
}

fn pump_out<R>(
    pipe: Option<R>,
    sink: Option<Box<dyn Write + Send>>,
) -> Option<JoinHandle<io::Result<u64>>>
where
    R: Read + Send + 'static,
{
    match (pipe, sink) {
        (Some(mut pipe), Some(mut sink)) => Some(thread::spawn(move || {
            let copied = io::copy(&mut pipe, &mut sink)?;
            sink.flush()?;
            Ok(copied)
        })),
        _ => None,
    }
}

fn join_pump(program: &str, name: &str, handle: Option<JoinHandle<io::Result<u64>>>) {
    let Some(handle) = handle else {
        return;
    };
    match handle.join() {
        Ok(Ok(_)) => {}
        Ok(Err(err)) => log::warn!("{}: forwarding {} failed: {}", program, name, err),
        Err(_) => log::warn!("{}: {} forwarding thread panicked", program, name),
    }
}

impl ProcessOps for SystemHal {
    fn run_with_streams(
        &self,
        program: &str,
        args: &[String],
        streams: Streams,
    ) -> HalResult<Option<i32>> {
        let Streams {
            stdin,
            stdout,
            stderr,
        } = streams;

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(stdio_for(&stdin))
            .stdout(stdio_for(&stdout))
            .stderr(stdio_for(&stderr));

        log::debug!("spawning {} {:?}", program, args);
        let mut child = cmd.spawn().map_err(|e| map_command_err(program, e))?;

        // Pump every pipe on its own thread so a chatty child never blocks on a full pipe.
        let stdin_handle = match (child.stdin.take(), stdin) {
            (Some(mut pipe), Some(mut source)) => Some(thread::spawn(move || {
                // Dropping the pipe at the end closes the child's stdin.
                io::copy(&mut source, &mut pipe)
            })),
            _ => None,
        };
        let stdout_handle = pump_out(child.stdout.take(), stdout);
        let stderr_handle = pump_out(child.stderr.take(), stderr);

        let status = child.wait()?;

        join_pump(program, "stdin", stdin_handle);
        join_pump(program, "stdout", stdout_handle);
        join_pump(program, "stderr", stderr_handle);

        log::debug!("{} exited with {:?}", program, status.code());
        Ok(status.code())
    }
}
