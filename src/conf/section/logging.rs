use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfigSection {
    /// One of `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub level: Option<String>,
}
