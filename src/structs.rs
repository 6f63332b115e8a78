use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file (falls back to CONFIG_PATH, then config.toml).
    #[arg(long)]
    pub config: Option<String>,
    /// Create the configuration file if it does not exist, then exit.
    #[arg(long)]
    pub create_config: bool,
}
