//! Corpus loading from a directory of `.txt` files.

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Raw text of every document, keyed by file name
pub type RawCorpus = IndexMap<String, String>;

/// Load every `.txt` file directly inside `dir`, sorted by file name.
///
/// Symlinks are followed. Subdirectories are not descended into. Files that
/// are not valid UTF-8 are skipped with a warning rather than loaded as empty
/// documents.
pub fn load_corpus(dir: &Path) -> Result<RawCorpus> {
    if !dir.is_dir() {
        bail!("Corpus directory does not exist: {}", dir.display());
    }

    let mut documents = RawCorpus::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("txt") {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();

        match std::fs::read_to_string(path) {
            Ok(text) => {
                debug!(document = %name, bytes = text.len(), "loaded document");
                documents.insert(name, text);
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                warn!(document = %name, "skipping file that is not valid UTF-8");
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        }
    }

    Ok(documents)
}
