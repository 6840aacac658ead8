//! Inventaris - Inventory Management CLI
//!
//! Interactive text-menu inventory tracker. State lives in a JSON data file
//! rewritten after every mutation; the inventory can be exported to CSV.

use clap::Parser;
use inventaris::{menu, InventoryStore};
use std::io::{self, BufReader};
use std::path::PathBuf;

/// Single-user inventory tracker with a text menu and JSON persistence
#[derive(Parser, Debug)]
#[command(name = "inventaris")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the JSON data file
    #[arg(short, long, default_value = "inventory_data.json")]
    data_file: PathBuf,

    /// Path the CSV export is written to
    #[arg(short, long, default_value = "inventaris.csv")]
    export_file: PathBuf,
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    log::info!("Starting inventaris...");
    log::info!("Data file: {}", args.data_file.display());

    let mut store = match InventoryStore::open(&args.data_file) {
        Ok(store) => store,
        Err(e) => {
            log::error!("Failed to load inventory data: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut input = BufReader::new(stdin.lock());
    let mut output = io::stdout();
    if let Err(e) = menu::run(&mut store, &args.export_file, &mut input, &mut output) {
        log::error!("Console I/O error: {}", e);
        std::process::exit(1);
    }
}
