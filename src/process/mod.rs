//! Builtins, executable lookup and the command dispatcher.

pub mod builtin;
pub mod cd;
pub mod echo;
pub mod exit;
pub mod launch;
pub mod pwd;
pub mod sink;
pub mod r#type;
pub mod which;

use crate::error::{ShellError, ShellResult};
use crate::process::builtin::Outcome;
use crate::process::builtin::map::BuiltinMap;
use crate::process::launch::Launcher;
use crate::process::sink::Streams;

/// Execute a command, dispatching to builtins or spawning external processes.
///
/// An empty argument vector does nothing. A failure inside one command is
/// logged and turned into status 1 so it can never end the shell; only
/// `exit` produces [`Outcome::Exit`].
pub fn execute(
    builtin_map: &BuiltinMap,
    launcher: &Launcher,
    args: &[String],
    streams: &mut Streams,
) -> Outcome {
    if args.is_empty() {
        return Outcome::Status(0);
    }

    if tracing::enabled!(tracing::Level::DEBUG) {
        let line = shlex::try_join(args.iter().map(String::as_str))
            .unwrap_or_else(|_| args.join(" "));
        tracing::debug!(command = %line, "dispatching");
    }

    match dispatch(builtin_map, launcher, args, streams) {
        Ok(outcome) => outcome,
        Err(err) => {
            log_failure(&args[0], &err);
            Outcome::Status(1)
        }
    }
}

fn log_failure(command: &str, err: &ShellError) {
    tracing::warn!(command, error = %err, "command failed");
}

fn dispatch(
    builtin_map: &BuiltinMap,
    launcher: &Launcher,
    args: &[String],
    streams: &mut Streams,
) -> ShellResult<Outcome> {
    // Determine if command is builtin, and call function
    if let Some(result) = builtin_map.invoke(args, streams) {
        return result;
    }

    // Attempt to exec external process
    launcher.launch(args, streams).map(Outcome::Status)
}
