use crate::error::ShellResult;
use crate::process::builtin::{Builtin, Context, Outcome};
use std::io::Write;

/// Writes its operands separated by single spaces, then a newline.
pub struct Echo {}

impl Builtin for Echo {
    fn call(&self, ctx: &mut Context<'_>, args: &[String]) -> ShellResult<Outcome> {
        let operands = args.get(1..).unwrap_or_default();
        writeln!(ctx.streams.out, "{}", operands.join(" "))?;
        Ok(Outcome::Status(0))
    }
}

impl Echo {
    pub fn new() -> Self {
        Echo {}
    }
}
