use crate::error::ShellResult;
use crate::process::sink::Streams;
use crate::process::which;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use thiserror::Error;

/// Status reported when a command cannot be found on the search path.
pub const NOT_FOUND_STATUS: i32 = 127;
/// Status reported when a resolved command could not be started.
pub const LAUNCH_FAILED_STATUS: i32 = 126;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("no command given")]
    EmptyCommand,
    #[error("{name}: command not found")]
    NotFound { name: String },
    #[error("{name}: {source}")]
    Spawn {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{name}: failed to wait on child process: {source}")]
    Wait {
        name: String,
        #[source]
        source: io::Error,
    },
}

/// Creates a child process and waits for it.
///
/// Implementations must treat creation as a single step: either a child is
/// running the requested program, or an error comes back and no child
/// outlives the call.
pub trait Spawn {
    fn spawn_and_wait(&self, program: &Path, argv: &[String]) -> Result<i32, LaunchError>;
}

/// Spawns real processes with [`std::process::Command`].
///
/// `Command` reports exec failures back to the parent before `spawn` returns,
/// so a child that failed to exec never runs shell code.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSpawn;

impl Spawn for SystemSpawn {
    fn spawn_and_wait(&self, program: &Path, argv: &[String]) -> Result<i32, LaunchError> {
        let Some((name, rest)) = argv.split_first() else {
            return Err(LaunchError::EmptyCommand);
        };
        let mut command = Command::new(program);
        command.args(rest);

        // Keep argv[0] as typed rather than the resolved path
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.arg0(name);
        }

        let mut child = command.spawn().map_err(|source| LaunchError::Spawn {
            name: name.clone(),
            path: program.to_path_buf(),
            source,
        })?;
        tracing::info!(pid = child.id(), program = %program.display(), "spawned child process");

        let status = child.wait().map_err(|source| LaunchError::Wait {
            name: name.clone(),
            source,
        })?;
        tracing::info!(%status, "child process finished");

        Ok(status_code(status))
    }
}

/// Map a child's exit status onto a shell status, using 128 + signal for
/// signal-terminated children.
fn status_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

/// Runs external commands found on the search path.
pub struct Launcher {
    spawner: Box<dyn Spawn>,
}

impl Launcher {
    /// Launcher that creates real processes.
    pub fn new() -> Self {
        Self::with_spawner(Box::new(SystemSpawn))
    }

    pub fn with_spawner(spawner: Box<dyn Spawn>) -> Self {
        Launcher { spawner }
    }

    /// Resolve `argv[0]`, run it with `argv` and wait for it to exit.
    ///
    /// An unresolvable name prints `<name>: command not found` on standard
    /// output; a failure to start the program prints the OS error on standard
    /// error. Neither is an error for the caller, only writing those reports
    /// can fail.
    pub fn launch(&self, argv: &[String], streams: &mut Streams) -> ShellResult<i32> {
        if argv.is_empty() {
            return Ok(0);
        }

        // Output written by builtins must land before the child's
        streams.flush()?;

        match self.run(argv) {
            Ok(code) => Ok(code),
            Err(err @ LaunchError::NotFound { .. }) => {
                writeln!(streams.out, "{err}")?;
                Ok(NOT_FOUND_STATUS)
            }
            Err(err) => {
                tracing::warn!(error = %err, "unable to launch command");
                writeln!(streams.err, "{err}")?;
                Ok(LAUNCH_FAILED_STATUS)
            }
        }
    }

    fn run(&self, argv: &[String]) -> Result<i32, LaunchError> {
        let name = argv.first().ok_or(LaunchError::EmptyCommand)?;
        let program = which::resolve(name).ok_or_else(|| LaunchError::NotFound {
            name: name.clone(),
        })?;
        self.spawner.spawn_and_wait(&program, argv)
    }
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new()
    }
}
