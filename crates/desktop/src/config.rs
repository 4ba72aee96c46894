//! Shell configuration: built-in defaults, overridden by the environment,
//! overridden by command-line flags.

use std::path::PathBuf;

use clap::Parser;

use stockroom_inventory::DEFAULT_STORAGE_FILE;
use stockroom_observability::LogFormat;

/// Command-line interface of the `stockroom` binary.
#[derive(Parser, Debug)]
#[clap(name = "stockroom", version, about = "Storage management: inventory records kept in a CSV file")]
pub struct Cli {
    #[clap(
        long,
        short,
        env = "STOCKROOM_STORAGE_PATH",
        default_value = DEFAULT_STORAGE_FILE,
        help = "CSV file used by the load and save commands"
    )]
    pub storage: PathBuf,

    #[clap(long, help = "Print every outcome as one JSON object per line")]
    pub json: bool,

    #[clap(long, help = "Load the storage file before the first prompt")]
    pub autoload: bool,

    #[clap(long, default_value = "text", help = "Log line format: text or json")]
    pub log_format: LogFormat,
}

/// Resolved shell settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopConfig {
    pub storage_path: PathBuf,
    pub json_output: bool,
    pub autoload: bool,
    pub log_format: LogFormat,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_FILE),
            json_output: false,
            autoload: false,
            log_format: LogFormat::Text,
        }
    }
}

impl From<Cli> for DesktopConfig {
    fn from(cli: Cli) -> Self {
        Self {
            storage_path: cli.storage,
            json_output: cli.json,
            autoload: cli.autoload,
            log_format: cli.log_format,
        }
    }
}
