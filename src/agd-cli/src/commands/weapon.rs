//! `agd weapon` - research one weapon or list weapons by type.

use crate::compact;
use crate::output::{write_json, write_text};
use crate::report;
use crate::OutputFormat;
use agd::{weapon, DataStore};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub fn run(
    store: &DataStore,
    research_dir: &Path,
    query: &str,
    output_dir: Option<PathBuf>,
    json_only: bool,
) -> Result<()> {
    eprintln!("[*] Searching for weapon: {query}");
    let found = weapon::find_weapon(store, query)
        .with_context(|| format!("weapon not found: {query}"))?;

    let profile = weapon::weapon_profile(store, &found);
    eprintln!("[*] Found: {} (ID: {})", profile.name_en, profile.id);

    let out_dir =
        output_dir.unwrap_or_else(|| research_dir.join("weapons").join(&profile.key));
    eprintln!("[*] Output directory: {}", out_dir.display());

    write_json(
        &out_dir.join(format!("weapon_{}.json", profile.key)),
        &compact::weapon_compact(&profile),
    )?;
    write_json(&out_dir.join("auto_data.json"), &profile)?;

    if !json_only {
        write_text(&out_dir.join("research.md"), &report::weapon_markdown(&profile))?;
    }

    eprintln!("\n[OK] Weapon research complete for {}", profile.name_en);
    eprintln!("     Files written to: {}", out_dir.display());
    Ok(())
}

pub fn list(
    store: &DataStore,
    weapon_type: Option<&str>,
    min_rarity: i64,
    format: OutputFormat,
) -> Result<()> {
    if let Some(t) = weapon_type {
        eprintln!("[*] Listing {t} weapons (rarity >= {min_rarity})");
    } else {
        eprintln!("[*] Listing weapons (rarity >= {min_rarity})");
    }
    let results = weapon::list_weapons(store, weapon_type, min_rarity);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Table => {
            println!("\n{:<12} {:<8} {}", "ID", "Rarity", "Name");
            println!("{}", "-".repeat(50));
            for r in &results {
                println!("{:<12} {}\u{2605}      {}", r.id, r.rarity, r.name);
            }
            println!("\nTotal: {} weapons", results.len());
        }
    }
    Ok(())
}
