//! `agd artifact` - research one artifact set or list all sets.

use crate::compact;
use crate::output::{write_json, write_text};
use crate::report;
use crate::OutputFormat;
use agd::{artifact, DataStore};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub fn run(
    store: &DataStore,
    research_dir: &Path,
    query: &str,
    output_dir: Option<PathBuf>,
    json_only: bool,
) -> Result<()> {
    eprintln!("[*] Searching for artifact set: {query}");
    let found = artifact::find_artifact_set(store, query)
        .with_context(|| format!("artifact set not found: {query}"))?;

    let profile = artifact::artifact_set_profile(store, &found);
    eprintln!("[*] Found: {} (Set ID: {})", profile.name_en, profile.set_id);

    let out_dir =
        output_dir.unwrap_or_else(|| research_dir.join("artifact_sets").join(&profile.key));
    eprintln!("[*] Output directory: {}", out_dir.display());

    write_json(
        &out_dir.join(format!("artifact_{}.json", profile.key)),
        &compact::artifact_compact(&profile),
    )?;
    write_json(&out_dir.join("auto_data.json"), &profile)?;

    if !json_only {
        write_text(&out_dir.join("research.md"), &report::artifact_markdown(&profile))?;
    }

    eprintln!("\n[OK] Artifact set research complete for {}", profile.name_en);
    eprintln!("     Files written to: {}", out_dir.display());
    Ok(())
}

pub fn list(store: &DataStore, min_rarity: i64, format: OutputFormat) -> Result<()> {
    eprintln!("[*] Listing artifact sets (rarity >= {min_rarity})");
    let results = artifact::list_artifact_sets(store, min_rarity);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Table => {
            println!("\n{:<10} {:<8} {:<12} {}", "Set ID", "Rarity", "Bonuses", "Name");
            println!("{}", "-".repeat(70));
            for r in &results {
                println!(
                    "{:<10} {}\u{2605}      {:<12} {}",
                    r.set_id, r.rarity, r.bonuses, r.name_en
                );
            }
            println!("\nTotal: {} sets", results.len());
        }
    }
    Ok(())
}
