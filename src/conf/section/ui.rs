use serde::Deserialize;

/// Prompt string used when the configuration does not set one.
pub const DEFAULT_PROMPT: &str = "$ ";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct UiConfigSection {
    pub prompt: Option<String>,
    pub completion: Option<bool>,
}

impl UiConfigSection {
    pub fn prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }

    pub fn completion_enabled(&self) -> bool {
        self.completion.unwrap_or(true)
    }
}
