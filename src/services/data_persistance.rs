use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;

use crate::domain::company::Company;

pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

/// Persist the ranked prospect snapshot as a timestamped JSON document.
pub fn save_prospects(prospects: &[Company], output_dir: &Path) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(output_dir).context("Failed to create output directory")?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let filepath = output_dir.join(format!("prospects_{}.json", timestamp));

    let document =
        serde_json::to_string_pretty(prospects).context("Failed to serialize prospects")?;
    fs::write(&filepath, document)
        .with_context(|| format!("Failed to write {}", filepath.display()))?;

    log::info!("Results saved to: {}", filepath.display());
    Ok(filepath)
}
