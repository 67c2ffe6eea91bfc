use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

use super::{signal, ProcessError};
use crate::flags::Flags;
use crate::style::Painter;

/// Runs external commands in the session's working directory, relaying
/// their output and reporting the exit status.
#[derive(Clone, Copy)]
pub struct ProcessRunner {
    quiet_mode: bool,
    painter: Painter,
}

impl ProcessRunner {
    pub fn new(flags: &Flags, painter: Painter) -> Self {
        ProcessRunner {
            quiet_mode: flags.is_set("quiet"),
            painter,
        }
    }

    /// Spawns `parts[0]` with the remaining tokens as arguments and
    /// blocks until it exits. A non-zero status is a warning, not an
    /// error; an interrupted wait is surfaced to the caller.
    pub fn run(&self, parts: &[String], working_dir: &Path) -> Result<(), ProcessError> {
        let mut command = Command::new(&parts[0]);
        command
            .args(&parts[1..])
            .current_dir(working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .env_clear()
            .envs(std::env::vars());

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ProcessError::CommandNotFound(parts[0].clone()));
            }
            Err(e) => return Err(e.into()),
        };

        // The child shares the terminal's process group, so an interrupt
        // must reach it rather than the shell.
        signal::route_sigint_to_child()?;

        // One drain thread per pipe: a child filling one buffer while we
        // block on the other must not stall.
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let painter = self.painter;

        let out_thread = stdout.map(|out| {
            thread::spawn(move || {
                for line in BufReader::new(out).lines().map_while(Result::ok) {
                    println!("{}", line);
                }
            })
        });
        let err_thread = stderr.map(|err| {
            thread::spawn(move || {
                for line in BufReader::new(err).lines().map_while(Result::ok) {
                    eprintln!("{}", painter.error(&line));
                }
            })
        });

        if let Some(handle) = out_thread {
            let _ = handle.join();
        }
        if let Some(handle) = err_thread {
            let _ = handle.join();
        }

        match child.wait() {
            Ok(status) => {
                if !status.success() && !self.quiet_mode {
                    let note = match status.code() {
                        Some(code) => format!("[Process exited with code: {}]", code),
                        None => "[Process terminated by signal]".to_string(),
                    };
                    println!("{}", self.painter.warning(&note));
                }
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => {
                Err(ProcessError::Interrupted(e.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
