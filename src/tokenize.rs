//! Splits a raw input line into an argument vector.
//!
//! Whitespace separates words unless it appears inside a single- or
//! double-quoted region. Quote characters delimit regions and are dropped
//! from the output; the other quote style is literal inside a region.
//! Quoted and unquoted segments with nothing between them join into a single
//! word, so `'ab'"cd"` yields `abcd`.
//!
//! An unterminated quote is not an error: whatever was collected so far,
//! including the text after the open quote, becomes the last word.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    InSingleQuote,
    InDoubleQuote,
}

/// Tokenize `line` into a freshly allocated argument vector.
///
/// An empty or all-whitespace line yields an empty vector.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    // Tracks whether a word has started, so that `''` produces an empty word.
    let mut in_word = false;
    let mut state = State::Normal;

    for c in line.chars() {
        state = match (state, c) {
            (State::Normal, '\'') => {
                in_word = true;
                State::InSingleQuote
            }
            (State::Normal, '"') => {
                in_word = true;
                State::InDoubleQuote
            }
            (State::Normal, c) if c.is_whitespace() => {
                if in_word {
                    tokens.push(std::mem::take(&mut current));
                    in_word = false;
                }
                State::Normal
            }
            (State::InSingleQuote, '\'') | (State::InDoubleQuote, '"') => State::Normal,
            (state, c) => {
                in_word = true;
                current.push(c);
                state
            }
        };
    }

    if in_word {
        tokens.push(current);
    }

    tokens
}
