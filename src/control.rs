use crate::complete::ShellHelper;
use crate::conf::ConfigurationModel;
use crate::control_state::{ControlFlow, ControlState};
use crate::error::ShellResult;
use rustyline::error::ReadlineError;
use rustyline::history::{DefaultHistory, History};
use rustyline::{Editor, Helper};

/// Source of input lines for the control loop.
pub trait LineEditor {
    fn readline(&mut self, prompt: &str) -> Result<String, ReadlineError>;

    fn add_history_entry(&mut self, entry: &str) -> rustyline::Result<bool>;
}

impl<H: Helper, I: History> LineEditor for Editor<H, I> {
    fn readline(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        Editor::readline(self, prompt)
    }

    fn add_history_entry(&mut self, entry: &str) -> rustyline::Result<bool> {
        Editor::add_history_entry(self, entry)
    }
}

/// Run the shell on the terminal until `exit` or end of input.
///
/// Returns the code the process should exit with.
pub fn control_loop(config: &ConfigurationModel) -> ShellResult<i32> {
    let mut control_state = ControlState::new();
    control_state.set_prompt(config.prompt());

    let mut editor: Editor<ShellHelper, DefaultHistory> = Editor::new()?;
    if config.ui.completion_enabled() {
        let names = control_state.builtins().names();
        editor.set_helper(Some(ShellHelper::new(names)));
    }

    run_loop_with_editor(&mut control_state, &mut editor)
}

/// Drive `control_state` with lines read from `editor`.
///
/// Interrupting a line discards it and prompts again. End of input ends the
/// loop with code 0.
pub fn run_loop_with_editor(
    control_state: &mut ControlState,
    editor: &mut impl LineEditor,
) -> ShellResult<i32> {
    loop {
        let line = match editor.readline(control_state.prompt()) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return Ok(0),
            Err(err) => return Err(err.into()),
        };

        if !line.trim().is_empty() {
            if let Err(err) = editor.add_history_entry(&line) {
                tracing::warn!(error = %err, "unable to record history entry");
            }
        }

        match control_state.handle_line(&line) {
            ControlFlow::Continue => {}
            ControlFlow::Exit(code) => return Ok(code),
        }
    }
}
