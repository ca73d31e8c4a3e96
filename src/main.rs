//! salary-dash: a web dashboard for comparing teacher salaries.
//!
//! Generates synthetic per-state salary data plus a curated Alabama district
//! table, then serves an interactive comparison dashboard over HTTP.

mod aggregate;
mod cli;
mod data;
mod generate;
mod server;

use anyhow::Result;
use cli::{resolve_data_dir, AppConfig, Cli, Commands};
use data::Storage;

#[tokio::main]
async fn main() -> Result<()> {
    server::init_tracing();

    let cli = Cli::parse_args();

    match cli.command {
        Commands::Generate { data_dir, seed } => {
            let storage = Storage::new(resolve_data_dir(data_dir));
            generate::run(&storage, seed)?;
        }
        Commands::Serve {
            host,
            port,
            data_dir,
        } => {
            let config = AppConfig::from_serve_command(host, port, data_dir);
            server::run(config).await?;
        }
    }

    Ok(())
}
