use std::path::PathBuf;

use clap::{Args, ValueHint, builder::BoolishValueParser};

/// Flags shared by every subcommand; each overrides the matching
/// file/environment setting.
#[derive(Debug, Args, Default, Clone)]
pub struct GlobalArgs {
    /// Optional path to a configuration file.
    #[arg(
        long = "config-file",
        env = "POKEDEX_CONFIG_FILE",
        value_name = "PATH",
        value_hint = ValueHint::FilePath,
        global = true
    )]
    pub config_file: Option<PathBuf>,

    /// Base URL of the collection backend.
    #[arg(long = "api-url", env = "POKEDEX_API_URL", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub log_json: Option<bool>,
}
