//! `agd character` - research one character.

use crate::compact;
use crate::output::{write_json, write_text};
use crate::report;
use agd::{character, DataStore};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub fn run(
    store: &DataStore,
    research_dir: &Path,
    query: &str,
    output_dir: Option<PathBuf>,
    json_only: bool,
) -> Result<()> {
    eprintln!("[*] Searching for character: {query}");
    let avatar = character::find_character(store, query).with_context(|| {
        format!("character not found: {query} (try the exact English name or numeric id)")
    })?;

    let profile = character::character_profile(store, &avatar);
    eprintln!("[*] Found: {} (ID: {})", profile.name_en, profile.id);

    let out_dir = output_dir.unwrap_or_else(|| research_dir.join(&profile.key));
    eprintln!("[*] Output directory: {}", out_dir.display());

    write_json(
        &out_dir
            .join("data")
            .join(format!("character_{}.json", profile.key)),
        &compact::character_compact(&profile),
    )?;
    write_json(&out_dir.join("auto_data.json"), &profile)?;

    if !json_only {
        write_text(&out_dir.join("research.md"), &report::character_markdown(&profile))?;
    }

    eprintln!("\n[OK] Character research complete for {}", profile.name_en);
    eprintln!("     Files written to: {}", out_dir.display());
    Ok(())
}
