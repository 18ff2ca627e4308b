use crate::app::config::LoggingConfig;
use crate::store::UiSettings;
use flexi_logger::{Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming};
use std::path::{Path, PathBuf};

/// Initialize the file logger. The returned handle must stay alive for the
/// logger to keep flushing.
pub fn init_logger(config: &LoggingConfig) -> Result<LoggerHandle, FlexiLoggerError> {
    let spec = if cfg!(debug_assertions) {
        "debug".to_string()
    } else {
        match config.level.to_lowercase().as_str() {
            level @ ("error" | "warn" | "info" | "debug" | "trace") => level.to_string(),
            _ => "info".to_string(),
        }
    };

    let mut logger = Logger::try_with_str(&spec)?
        .log_to_file(
            FileSpec::default()
                .directory(get_log_directory())
                .basename("uisettings")
                .suppress_timestamp(),
        )
        .format_for_files(custom_log_format)
        .use_utc();

    if config.append_to_file {
        logger = logger.append();
    }

    if config.rotate_logs {
        logger = logger.rotate(
            Criterion::Size(rotation_size_bytes(config)),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(config.keep_log_files as usize),
        );
    }

    // The terminal is in raw mode while running, console output is opt-in
    if config.log_to_console {
        logger = logger.log_to_stdout();
    }

    let handle = logger.start()?;
    log::info!("Logger initialized with level: {}", spec);
    log::info!("Log file location: {}", get_log_file_path().display());

    Ok(handle)
}

fn rotation_size_bytes(config: &LoggingConfig) -> u64 {
    config.rotation_size_mb.saturating_mul(1024 * 1024)
}

/// Get the platform-specific log directory
pub fn get_log_directory() -> PathBuf {
    #[cfg(target_os = "macos")]
    return dirs::home_dir()
        .map(|h| h.join("Library/Logs/uisettings"))
        .unwrap_or_else(|| PathBuf::from("./logs"));

    #[cfg(not(target_os = "macos"))]
    return dirs::data_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".local/share")))
        .map(|d| d.join("uisettings/logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"));
}

pub fn get_log_file_path() -> PathBuf {
    get_log_directory().join("uisettings.log")
}

fn custom_log_format(
    w: &mut dyn std::io::Write,
    now: &mut flexi_logger::DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{} [{}] [{}:{}] {}",
        now.now().format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        record.args()
    )
}

pub fn ensure_log_directory() -> color_eyre::Result<()> {
    let log_dir = get_log_directory();
    if !log_dir.exists() {
        std::fs::create_dir_all(&log_dir)?;
    }
    Ok(())
}

pub fn log_startup_info() {
    log::info!("=== uisettings starting ===");
    log::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    log::info!("OS: {} ({})", std::env::consts::OS, std::env::consts::ARCH);
}

pub fn log_shutdown_info() {
    log::info!("=== uisettings shutting down ===");
}

pub fn log_config_loading(config_path: &Path, created: bool) {
    if created {
        log::info!("Created default config file at: {}", config_path.display());
    } else {
        log::info!("Loaded config file from: {}", config_path.display());
    }
}

/// Log a dialog opening or closing
pub fn log_dialog_transition(name: &str, open: bool) {
    log::info!(
        "Dialog {}: {}",
        if open { "opened" } else { "closed" },
        name
    );
}

/// Log the outcome of writing preferences to disk
pub fn log_store_commit(path: &Path, settings: &UiSettings, success: bool, error: Option<&str>) {
    if success {
        log::info!(
            "Committed UI settings to {}: dark_ui={} artist_album_sort={} album_sort={} auto_scroll_queue={}",
            path.display(),
            settings.dark_ui,
            settings.artist_album_sort.key(),
            settings.album_sort.key(),
            settings.auto_scroll_queue
        );
    } else {
        log::warn!(
            "Failed to write UI settings to {} - {}",
            path.display(),
            error.unwrap_or("Unknown error")
        );
    }
}

pub fn log_language_change(code: &str) {
    log::info!("Display language changed to: {}", code);
}

pub fn log_user_interaction(action: &str, context: Option<&str>) {
    match context {
        Some(ctx) => log::debug!("User action: {} - {}", action, ctx),
        None => log::debug!("User action: {}", action),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_size_bytes() {
        let mut config = LoggingConfig::default();
        assert_eq!(rotation_size_bytes(&config), 5 * 1024 * 1024);

        config.rotation_size_mb = u64::MAX;
        assert_eq!(rotation_size_bytes(&config), u64::MAX);
    }
}
