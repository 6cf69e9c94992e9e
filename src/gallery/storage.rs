use crate::item::Enchantment;
use crate::scoring::calculate_score;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::File;
use std::path::Path;

/// Load the gallery file: a JSON array of enchantment records.
pub fn load_items(path: &Path) -> Result<Vec<Enchantment>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open gallery file at {}", path.display()))?;

    let items: Vec<Enchantment> = serde_json::from_reader(file)
        .with_context(|| format!("Failed to parse gallery file at {}", path.display()))?;

    Ok(items)
}

/// Save the gallery file atomically so a crash mid-write never leaves a
/// torn file behind.
pub fn save_items(path: &Path, items: &[Enchantment]) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, items).context("Failed to serialize gallery items")?;

    file.commit().context("Failed to save gallery file")?;

    Ok(())
}

/// Attach a score to every item that doesn't have one yet. Returns how
/// many items were filled.
///
/// The score is a pure function of the item's fields, so this is safe to
/// run any number of times: items that already carry a score are left
/// untouched and a second pass fills nothing.
pub fn backfill_scores(items: &mut [Enchantment]) -> usize {
    let mut filled = 0;
    for item in items.iter_mut() {
        if item.item_score.is_none() {
            item.item_score = Some(calculate_score(item).score);
            filled += 1;
        }
    }
    filled
}
