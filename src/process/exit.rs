use crate::error::ShellResult;
use crate::process::builtin::{Builtin, Context, Outcome};

/// Implements the `exit` builtin, asking the control loop to terminate.
pub struct Exit {}

impl Builtin for Exit {
    /// Request termination with the first operand as the exit code.
    ///
    /// A missing operand means 0. An operand that is not an integer also
    /// means 0; it is logged but never aborts the shell.
    fn call(&self, _ctx: &mut Context<'_>, args: &[String]) -> ShellResult<Outcome> {
        Ok(Outcome::Exit(exit_code(args.get(1).map(String::as_str))))
    }
}

impl Exit {
    /// Construct a new exit builtin instance.
    pub fn new() -> Self {
        Exit {}
    }
}

fn exit_code(operand: Option<&str>) -> i32 {
    let Some(operand) = operand else {
        return 0;
    };

    match operand.parse::<i32>() {
        Ok(code) => code,
        Err(err) => {
            tracing::warn!(operand, error = %err, "exit: non-numeric operand, using 0");
            0
        }
    }
}
