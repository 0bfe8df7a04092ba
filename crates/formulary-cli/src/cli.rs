//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Pharmacy formulary and inventory manager
#[derive(Parser, Debug)]
#[command(name = "formulary")]
#[command(version, about = "Pharmacy formulary and inventory manager")]
#[command(long_about = r#"
Interactive manager for a pharmacy formulary (approved medication names) and
its stock inventory. Both are kept as JSON files in the data directory and
created empty on first run.

FILES:
  <DATA_DIR>/formulary.json  → array of medication names
  <DATA_DIR>/inventory.json  → array of {name, strength, pack_size, total_packs}

EXIT CODES:
  0 - Normal quit
  1 - A data file is malformed or invalid, or the session failed
"#)]
pub struct Cli {
    /// Directory holding formulary.json and inventory.json
    #[arg(short, long, env = "FORMULARY_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
