mod app;
mod document;
mod form;
mod renderer;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use folio_core::SiteCatalog;

#[derive(Parser)]
#[command(name = "folio", version, about = "Browse the portfolio in a terminal")]
struct Args {
    /// Catalog JSON to load instead of the bundled one
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Header lookahead in layout pixels (one terminal row is 20)
    #[arg(long)]
    lookahead: Option<f64>,
}

fn load_catalog(args: &Args) -> Result<SiteCatalog> {
    let catalog = match &args.catalog {
        Some(path) => {
            let data = std::fs::read(path)
                .with_context(|| format!("reading catalog {}", path.display()))?;
            SiteCatalog::from_json(&data)
                .with_context(|| format!("parsing catalog {}", path.display()))?
        }
        None => SiteCatalog::bundled().context("parsing bundled catalog")?,
    };
    match args.lookahead {
        Some(lookahead) => catalog
            .with_lookahead(lookahead)
            .context("applying --lookahead"),
        None => Ok(catalog),
    }
}

fn main() -> Result<()> {
    // Off unless RUST_LOG is set: stderr shares the terminal with the UI.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let args = Args::parse();
    let catalog = load_catalog(&args)?;
    log::info!(
        "starting with {} sections, {} projects",
        catalog.sections.len(),
        catalog.projects.len()
    );
    renderer::run_tui(&catalog)
}
