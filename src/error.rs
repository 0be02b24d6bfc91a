use rustyline::error::ReadlineError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("line editor error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("invalid log level '{0}'")]
    InvalidLogLevel(String),
    #[error("unable to install log subscriber: {0}")]
    Logging(String),
}

pub type ShellResult<T> = Result<T, ShellError>;
