pub mod map;

use crate::error::ShellResult;
use crate::process::builtin::map::BuiltinMap;
use crate::process::sink::Streams;

/// What the shell should do once a command has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading input; carries the command's exit status.
    Status(i32),
    /// Terminate the shell with this exit code.
    Exit(i32),
}

/// Everything a builtin may touch while it runs.
///
/// The registry is handed in by reference so `type` can ask which names are
/// builtins without the registry owning a handle to itself.
pub struct Context<'a> {
    pub builtins: &'a BuiltinMap,
    pub streams: &'a mut Streams,
}

pub trait Builtin {
    /// Run the builtin. `args[0]` is the name the builtin was invoked as.
    fn call(&self, ctx: &mut Context<'_>, args: &[String]) -> ShellResult<Outcome>;
}
