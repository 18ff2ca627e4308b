// Module declarations
mod app;
mod binds;
mod bus;
mod i18n;
mod panel;
mod store;
mod ui;

use app::cli::Args;
use app::config::Config;
use app::{
    App,
    main_loop::AppMainLoop,
    terminal::{init_terminal, restore_terminal},
};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    // Handle --generate-config option
    if let Some(path) = &args.generate_config {
        let config_path = if path.is_dir() {
            path.join("config.toml")
        } else {
            path.clone()
        };
        Config::generate_default(config_path)?;
        return Ok(());
    }

    let config_path = match args.config.clone() {
        Some(path) => path,
        None => Config::default_config_path()?,
    };
    let config_existed = config_path.exists();

    let (config, config_warnings) = Config::load(Some(config_path.clone()))?;

    // Keep the handle alive until shutdown so buffered lines get flushed
    let _logger = if config.logging.enabled {
        app::logging::ensure_log_directory()?;
        let handle = app::logging::init_logger(&config.logging)?;
        app::logging::log_startup_info();
        app::logging::log_config_loading(&config_path, !config_existed);
        for warning in &config_warnings {
            log::warn!("{}", warning);
        }
        Some(handle)
    } else {
        None
    };

    let mut app = App::new_with_config(config, &args)?;

    if !config_warnings.is_empty() {
        app.config_warnings = config_warnings;
        app.show_config_warnings_popup = true;
    }

    let terminal = init_terminal()?;
    let result = app.run(terminal).await;
    restore_terminal()?;

    app::logging::log_shutdown_info();
    result
}
