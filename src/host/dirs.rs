use crate::config::RenameEntry;
use anyhow::Result;
use std::{fs, path::Path};

/// Renames each `from -> to` pair under `root`. Missing sources and already
/// occupied destinations are skipped, not errors.
pub fn rename_all(root: &Path, entries: &[RenameEntry]) -> Result<()> {
    if entries.is_empty() {
        log::warn!("No renames configured");
        return Ok(());
    }

    let mut failures = 0;
    for entry in entries {
        let from = root.join(&entry.from);
        let to = root.join(&entry.to);

        if !from.exists() {
            log::info!("{} does not exist, skipping", from.display());
            continue;
        }
        if to.exists() {
            log::warn!("{} already exists, skipping {}", to.display(), entry.from);
            continue;
        }

        match fs::rename(&from, &to) {
            Ok(()) => log::info!("Renamed {} -> {}", entry.from, entry.to),
            Err(error) => {
                log::error!("Cannot rename {}: {:#}", entry.from, error);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        log::warn!("{} of {} renames failed", failures, entries.len());
    }

    Ok(())
}
