mod helper;

pub use helper::{ShellHelper, command_candidates};
