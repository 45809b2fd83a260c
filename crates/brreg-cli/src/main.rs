mod clipboard;
mod commands;
mod interactive;
mod render;

use std::path::PathBuf;

use brreg_core::{clamp_page_size, PresentationMode, SearchMode};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "brreg-search")]
#[command(about = "Search the Norwegian business registry and pick a company")]
struct Cli {
    /// Page size for name and industry searches (clamped to 1-100)
    #[arg(long, global = true)]
    page_size: Option<i64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search the registry and list matching companies
    Search {
        /// Company name, organization number or industry code
        query: String,
        /// What the query is matched against: name, org-number or industry
        #[arg(long, default_value = "name")]
        mode: SearchMode,
    },
    /// Print the full registry record for an organization number
    Show {
        org_number: String,
        /// Also copy the record to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Export a company to an .xlsx spreadsheet
    Export {
        org_number: String,
        /// Target directory (defaults to `BRREG_EXPORT_DIR`)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Look up coordinates for a free-text address
    Geocode { address: String },
    /// Look up the address nearest to a coordinate
    Reverse {
        #[arg(allow_hyphen_values = true)]
        lat: f64,
        #[arg(allow_hyphen_values = true)]
        lng: f64,
    },
    /// Open the interactive search form
    Interactive {
        /// form (inline) or button (dialog); defaults to `BRREG_MODE`
        #[arg(long)]
        layout: Option<PresentationMode>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = brreg_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Some(page_size) = cli.page_size {
        config.page_size = clamp_page_size(page_size);
    }

    match cli.command {
        Some(Commands::Search { query, mode }) => {
            commands::run_search(&config, &query, mode).await?;
        }
        Some(Commands::Show { org_number, copy }) => {
            commands::run_show(&config, &org_number, copy).await?;
        }
        Some(Commands::Export { org_number, dir }) => {
            commands::run_export(&config, &org_number, dir.as_deref()).await?;
        }
        Some(Commands::Geocode { address }) => commands::run_geocode(&config, &address).await?,
        Some(Commands::Reverse { lat, lng }) => commands::run_reverse(&config, lat, lng).await?,
        Some(Commands::Interactive { layout }) => {
            config.mode = layout.unwrap_or(config.mode);
            interactive::run(&config).await?;
        }
        None => interactive::run(&config).await?,
    }

    Ok(())
}
