use crate::error::ShellResult;
use crate::process::builtin::{Builtin, Context, Outcome};
use crate::home::{expand_tilde, home_dir};
use std::env;
use std::io::Write;
use std::path::PathBuf;

/// The `cd` builtin: changes the shell's working directory.
///
/// With no operand the target is `$HOME`; if `HOME` is unset as well, nothing
/// happens. A leading `~` in the operand is replaced by `$HOME`. On failure
/// the working directory is left as it was and
/// `cd: <operand>: No such file or directory` goes to standard error.
pub struct Cd {}

impl Builtin for Cd {
    fn call(&self, ctx: &mut Context<'_>, args: &[String]) -> ShellResult<Outcome> {
        let operand = args.get(1).map(String::as_str);

        let Some(target) = target_dir(operand) else {
            tracing::debug!("cd: no operand and HOME is unset");
            return Ok(Outcome::Status(0));
        };

        match env::set_current_dir(&target) {
            Ok(()) => Ok(Outcome::Status(0)),
            Err(err) => {
                let shown = operand
                    .map(str::to_owned)
                    .unwrap_or_else(|| target.display().to_string());
                tracing::debug!(dir = %target.display(), error = %err, "cd failed");
                writeln!(ctx.streams.err, "cd: {shown}: No such file or directory")?;
                Ok(Outcome::Status(1))
            }
        }
    }
}

impl Cd {
    pub fn new() -> Self {
        Cd {}
    }
}

/// Work out the directory to change to, or `None` when there is nothing to do.
fn target_dir(operand: Option<&str>) -> Option<PathBuf> {
    let home = home_dir();

    match operand {
        None => home.map(PathBuf::from),
        Some(operand) => Some(expand_tilde(operand, home)),
    }
}
