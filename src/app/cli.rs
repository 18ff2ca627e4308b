use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "uisettings")]
#[command(version)]
#[command(about = "A terminal settings panel for media player front-ends", long_about = None)]
pub struct Args {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the persisted settings file (overrides config)
    #[arg(short, long)]
    pub settings: Option<PathBuf>,

    /// Display language code, e.g. "de" (overrides config)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Write a default config file to the given path and exit
    #[arg(long, value_name = "PATH")]
    pub generate_config: Option<PathBuf>,
}
