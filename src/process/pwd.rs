use crate::error::ShellResult;
use crate::process::builtin::{Builtin, Context, Outcome};
use std::env;
use std::io::Write;

/// The `pwd` builtin: writes the current working directory of the shell.
///
/// Operands are ignored. The directory is the one the process is actually in,
/// as reported by the operating system, so it always reflects the last
/// successful `cd`.
pub struct Pwd {}

impl Builtin for Pwd {
    fn call(&self, ctx: &mut Context<'_>, _args: &[String]) -> ShellResult<Outcome> {
        match env::current_dir() {
            Ok(pwd) => {
                writeln!(ctx.streams.out, "{}", pwd.display())?;
                Ok(Outcome::Status(0))
            }
            Err(err) => {
                writeln!(ctx.streams.err, "pwd: {err}")?;
                Ok(Outcome::Status(1))
            }
        }
    }
}

impl Pwd {
    pub fn new() -> Self {
        Pwd {}
    }
}
