//! A small interactive shell: a quote-aware tokenizer, a fixed set of
//! builtins and a launcher for programs found on `PATH`.

pub mod complete;
pub mod conf;
pub mod control;
pub mod control_state;
pub mod error;
pub mod home;
pub mod logging;
pub mod process;
pub mod tokenize;
