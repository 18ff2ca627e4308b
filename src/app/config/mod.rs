pub mod binds;
pub mod colors;
pub mod format;
pub mod i18n;
pub mod logging;
pub mod store;

pub use format::Config;
pub use logging::LoggingConfig;
