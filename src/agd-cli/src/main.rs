//! AnimeGameData Research Tools
//!
//! Extracts research artifacts (compact JSON plus markdown reports) from an
//! AnimeGameData checkout.
//!
//! Usage:
//!   agd character <name|id>                  - Research a character
//!   agd weapon <name|id>                     - Research a weapon
//!   agd weapon --list-type Catalyst          - List weapons by type
//!   agd artifact <name|id>                   - Research an artifact set
//!   agd artifact --list --min-rarity 5       - List artifact sets

mod commands;
mod compact;
mod output;
mod report;

use agd::DataStore;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Output format for list commands
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "agd")]
#[command(about = "AnimeGameData Research Tools", long_about = None)]
struct Cli {
    /// Path to the AnimeGameData checkout
    #[arg(long, env = "ANIME_GAME_DATA", default_value = "AnimeGameData", global = true)]
    data_dir: PathBuf,

    /// Root directory for research output
    #[arg(long, env = "RESEARCH_DIR", default_value = ".research_info", global = true)]
    research_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Research a character
    Character {
        /// Character name (EN/CHS) or numeric id
        query: String,

        /// Override output directory (default: <research-dir>/<key>)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Only write JSON, skip the markdown report
        #[arg(long)]
        json_only: bool,
    },

    /// Research a weapon, or list weapons by type
    Weapon {
        /// Weapon name (EN/CHS) or numeric id
        query: Option<String>,

        /// List weapons of a display type instead of researching one
        #[arg(long)]
        list_type: Option<String>,

        /// Minimum rarity filter for listings
        #[arg(long, default_value_t = 1)]
        min_rarity: i64,

        /// Listing output format: table (default), json
        #[arg(long, default_value = "table")]
        format: OutputFormat,

        /// Override output directory (default: <research-dir>/weapons/<key>)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Only write JSON, skip the markdown report
        #[arg(long)]
        json_only: bool,
    },

    /// Research an artifact set, or list all sets
    Artifact {
        /// Artifact set name (EN/CHS) or numeric set id
        query: Option<String>,

        /// List artifact sets instead of researching one
        #[arg(long)]
        list: bool,

        /// Minimum rarity filter for listings
        #[arg(long, default_value_t = 1)]
        min_rarity: i64,

        /// Listing output format: table (default), json
        #[arg(long, default_value = "table")]
        format: OutputFormat,

        /// Override output directory (default: <research-dir>/artifact_sets/<key>)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Only write JSON, skip the markdown report
        #[arg(long)]
        json_only: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = DataStore::new(&cli.data_dir);

    match cli.command {
        Commands::Character {
            query,
            output_dir,
            json_only,
        } => commands::character::run(&store, &cli.research_dir, &query, output_dir, json_only),

        Commands::Weapon {
            query,
            list_type,
            min_rarity,
            format,
            output_dir,
            json_only,
        } => {
            if let Some(type_name) = list_type {
                commands::weapon::list(&store, Some(type_name.as_str()), min_rarity, format)
            } else {
                let query =
                    query.context("weapon name/id is required (or use --list-type)")?;
                commands::weapon::run(&store, &cli.research_dir, &query, output_dir, json_only)
            }
        }

        Commands::Artifact {
            query,
            list,
            min_rarity,
            format,
            output_dir,
            json_only,
        } => {
            if list {
                commands::artifact::list(&store, min_rarity, format)
            } else {
                let query = query.context("artifact set name/id is required (or use --list)")?;
                commands::artifact::run(&store, &cli.research_dir, &query, output_dir, json_only)
            }
        }
    }
}
