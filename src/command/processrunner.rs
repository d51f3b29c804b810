use std::{
    ffi::OsStr,
    io::{BufRead, BufReader, Read},
    process::{Command, ExitStatus, Stdio},
    thread,
};

use tracing::{debug, error, warn};

use super::{CommandError, CommandRunner};

/// Runs a binary to completion, forwarding its output lines to the logs.
pub struct ProcessRunner {
    binary: String,
    cmd: Command,
}

impl ProcessRunner {
    pub fn new<B, I, S>(binary_path: B, args: I) -> Self
    where
        B: AsRef<OsStr>,
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let binary_path = binary_path.as_ref();
        let mut cmd = Command::new(binary_path);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        Self {
            binary: binary_path.to_string_lossy().into_owned(),
            cmd,
        }
    }
}

impl CommandRunner for ProcessRunner {
    type Error = CommandError;

    fn run(mut self) -> Result<ExitStatus, Self::Error> {
        debug!(command = %self.binary, "running {:?}", self.cmd);
        let mut process = self
            .cmd
            .spawn()
            .map_err(|err| CommandError::from_spawn(&self.binary, err))?;

        let stdout = process
            .stdout
            .take()
            .ok_or(CommandError::StreamPipeError("stdout".to_string()))?;

        let stderr = process
            .stderr
            .take()
            .ok_or(CommandError::StreamPipeError("stderr".to_string()))?;

        // Read stdout and stderr on their own threads so a full pipe never blocks the child
        let stdout_logger = thread::spawn({
            let binary = self.binary.clone();
            move || log_lines(stdout, |line| debug!(command = %binary, "{line}"))
        });
        let stderr_logger = thread::spawn({
            let binary = self.binary.clone();
            move || log_lines(stderr, |line| warn!(command = %binary, "{line}"))
        });

        let status = process.wait()?;

        for logger in [stdout_logger, stderr_logger] {
            if let Ok(Err(err)) = logger.join() {
                error!(command = %self.binary, "output stream error: {err}");
            }
        }

        debug!(command = %self.binary, "exited with {status}");
        Ok(status)
    }
}

fn log_lines<R, F>(stream: R, log: F) -> Result<(), CommandError>
where
    R: Read,
    F: Fn(&str),
{
    for line in BufReader::new(stream).lines() {
        log(&line?);
    }
    Ok(())
}
