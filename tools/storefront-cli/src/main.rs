//! Storefront CLI - an interactive menu over an in-memory store.
//!
//! Starts from a built-in seed catalog (or a TOML catalog file passed via
//! `--catalog`) and loops over three operations: list active products,
//! show the total stock count, and make an order.

mod catalog;
mod menu;
mod output;

use anyhow::Result;
use clap::Parser;

/// Storefront - a small interactive store simulator
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Load the product catalog from a TOML file instead of the built-in seed
    #[arg(short, long)]
    catalog: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = output::Output::new(cli.verbose);

    let store = match cli.catalog.as_deref() {
        Some(path) => {
            output.debug(&format!("Loading catalog from {}", path));
            catalog::load(path)?
        }
        None => catalog::seed()?,
    };

    if let Err(e) = menu::run(store, &output) {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
