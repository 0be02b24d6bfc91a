mod logging;
pub mod ui;

pub use logging::LoggingConfigSection;
pub use ui::UiConfigSection;
