mod browse;
mod facets;
mod format;
mod show;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use pcat_query::{Catalog, QuerySettings};
use tracing_subscriber::EnvFilter;

use crate::browse::BrowseArgs;

#[derive(Debug, Parser)]
#[command(name = "pcat")]
#[command(about = "Browse the perfume catalog; contact us to order")]
struct Cli {
    /// Catalog file to load (overrides `PCAT_CATALOG_PATH`)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List perfumes with optional filters, sort order and page
    Browse(BrowseArgs),
    /// Show one perfume with its sizes and delivery terms
    Show {
        /// Product id, as used in `/product/<id>` links
        id: String,
        /// Size to preselect (defaults to the first listed size)
        #[arg(long)]
        size: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the brands, sizes and price bands available as filters
    Facets {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Load the catalog file and report whether it is valid
    Validate,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = pcat_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let catalog_path = cli
        .catalog
        .clone()
        .unwrap_or_else(|| config.catalog_path.clone());
    let products = pcat_core::load_catalog(&catalog_path)
        .with_context(|| format!("failed to load catalog from {}", catalog_path.display()))?;
    tracing::info!(
        path = %catalog_path.display(),
        count = products.len(),
        env = %config.env,
        "catalog loaded"
    );

    let catalog = Catalog::with_settings(products, QuerySettings::from_app_config(&config))?;

    match cli.command {
        Some(Commands::Browse(args)) => browse::run_browse(&catalog, &args)?,
        Some(Commands::Show { id, size, json }) => {
            show::run_show(&catalog, &id, size.as_deref(), json)?;
        }
        Some(Commands::Facets { json }) => facets::run_facets(&catalog, json)?,
        Some(Commands::Validate) => facets::run_validate(&catalog, &catalog_path),
        None => browse::run_browse(&catalog, &BrowseArgs::default())?,
    }

    Ok(())
}
