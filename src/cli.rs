//! Command-line interface argument parsing for salary-dash.
//!
//! Two subcommands cover the whole lifecycle:
//! - `salary-dash generate` writes the CSV input files
//! - `salary-dash serve --port 8050` loads them and serves the dashboard

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// A Rust-based web dashboard for comparing teacher salaries across US
/// states and districts.
#[derive(Parser, Debug)]
#[command(name = "salary-dash")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the synthetic and curated salary CSV files
    Generate {
        /// Directory the CSV files are written to
        #[arg(long)]
        data_dir: Option<String>,

        /// Offset applied to the per-state generator seeds
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Serve the dashboard page and its JSON API
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long, default_value = "8050")]
        port: u16,

        /// Directory the CSV files are read from
        #[arg(long)]
        data_dir: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

/// Default data directory when none is given
const DEFAULT_DATA_DIR: &str = "data";

/// Resolve the data directory flag to a concrete path
pub fn resolve_data_dir(data_dir: Option<String>) -> PathBuf {
    data_dir
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

/// Server configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from the serve subcommand's arguments
    pub fn from_serve_command(host: Option<String>, port: u16, data_dir: Option<String>) -> Self {
        AppConfig {
            host: host.unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            data_dir: resolve_data_dir(data_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::from_serve_command(None, 8050, None);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8050);
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_custom_host_and_data_dir() {
        let config = AppConfig::from_serve_command(
            Some("0.0.0.0".to_string()),
            9000,
            Some("/tmp/salary".to_string()),
        );
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/salary"));
    }
}
