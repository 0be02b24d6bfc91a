//! State backing the interactive control loop.

use crate::conf::section::ui::DEFAULT_PROMPT;
use crate::process;
use crate::process::builtin::Outcome;
use crate::process::builtin::map::BuiltinMap;
use crate::process::launch::Launcher;
use crate::process::sink::Streams;
use crate::tokenize::tokenize;

/// Signals whether the control loop should continue or exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    /// Keep reading user input.
    Continue,
    /// Terminate the shell with the given exit code.
    Exit(i32),
}

/// Everything that lives across input lines: the builtin table, the launcher
/// for external commands and the streams builtins write to.
pub struct ControlState {
    status: i32,
    prompt: String,
    builtin_map: BuiltinMap,
    launcher: Launcher,
    streams: Streams,
}

impl ControlState {
    /// Build a control state with the default builtin set and real processes.
    pub fn new() -> Self {
        Self::with_launcher(Launcher::new())
    }

    pub fn with_launcher(launcher: Launcher) -> Self {
        Self {
            status: 0,
            prompt: DEFAULT_PROMPT.to_string(),
            builtin_map: BuiltinMap::new(),
            launcher,
            streams: Streams::standard(),
        }
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Redirect builtin output, mainly so tests can capture it.
    pub fn set_streams(&mut self, streams: Streams) {
        self.streams = streams;
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Exit status of the last command that ran.
    pub fn last_status(&self) -> i32 {
        self.status
    }

    pub fn builtins(&self) -> &BuiltinMap {
        &self.builtin_map
    }

    /// Tokenize and execute a single line of user input.
    pub fn handle_line(&mut self, line: &str) -> ControlFlow {
        let tokens = tokenize(line);
        if tokens.is_empty() {
            return ControlFlow::Continue;
        }

        let outcome = process::execute(
            &self.builtin_map,
            &self.launcher,
            &tokens,
            &mut self.streams,
        );

        if let Err(err) = self.streams.flush() {
            tracing::warn!(error = %err, "unable to flush output");
        }

        match outcome {
            Outcome::Status(status) => {
                self.status = status;
                ControlFlow::Continue
            }
            Outcome::Exit(code) => ControlFlow::Exit(code),
        }
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new()
    }
}
