use crate::error::ShellResult;
use crate::process::builtin::{Builtin, Context, Outcome};
use crate::process::which;
use std::io::Write;

/// The `type` builtin: tells how each operand would be run as a command.
///
/// Builtins are reported as `<name> is a shell builtin` whatever `PATH`
/// holds. Other names are looked up on the search path and reported as
/// `<name> is <path>`, or `<name>: not found` when the lookup fails. Every
/// report goes to standard output; the status is 1 if any name was not found.
pub struct Type {}

impl Builtin for Type {
    fn call(&self, ctx: &mut Context<'_>, args: &[String]) -> ShellResult<Outcome> {
        let mut status = 0;

        for name in args.iter().skip(1) {
            if ctx.builtins.contains(name) {
                writeln!(ctx.streams.out, "{name} is a shell builtin")?;
            } else if let Some(path) = which::resolve(name) {
                writeln!(ctx.streams.out, "{name} is {}", path.display())?;
            } else {
                writeln!(ctx.streams.out, "{name}: not found")?;
                status = 1;
            }
        }

        Ok(Outcome::Status(status))
    }
}

impl Type {
    pub fn new() -> Self {
        Type {}
    }
}
