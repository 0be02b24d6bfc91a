use crate::process::which;
use rustyline::completion::{Completer, Pair};
use rustyline::hint::HistoryHinter;
use rustyline::{Context, Result};
use rustyline_derive::{Helper, Highlighter, Hinter, Validator};

/// Line editor helper that completes command names.
///
/// Only the first word of a line is completed, against builtin names and
/// entries of the directories on `PATH`.
#[derive(Helper, Highlighter, Hinter, Validator)]
pub struct ShellHelper {
    builtins: Vec<String>,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl ShellHelper {
    pub fn new<'a>(builtins: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            builtins: builtins.into_iter().map(str::to_string).collect(),
            hinter: HistoryHinter::new(),
        }
    }
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Result<(usize, Vec<Pair>)> {
        let start = word_start(&line[..pos]);
        if !line[..start].trim().is_empty() {
            return Ok((pos, Vec::new()));
        }

        let prefix = &line[start..pos];
        let mut names = command_candidates(&self.builtins, prefix);
        names.extend(which::names_with_prefix(prefix));
        names.sort();
        names.dedup();

        let candidates = names
            .into_iter()
            .map(|name| Pair {
                replacement: format!("{name} "),
                display: name,
            })
            .collect();
        Ok((start, candidates))
    }
}

/// Builtin names starting with `prefix`, sorted.
pub fn command_candidates(builtins: &[String], prefix: &str) -> Vec<String> {
    let mut names: Vec<String> = builtins
        .iter()
        .filter(|name| name.starts_with(prefix))
        .cloned()
        .collect();
    names.sort();
    names
}

/// Byte offset where the word ending at the end of `head` begins.
fn word_start(head: &str) -> usize {
    head.char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8())
}
