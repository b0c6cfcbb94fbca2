//! Load a corpus of `.txt` documents from a directory

use anyhow::{bail, Context, Result};
use std::path::Path;

/// Read every `.txt` file directly inside `dir` as `(file name, contents)`.
///
/// Documents are sorted by file name so the corpus order (and with it every
/// ranking tie-break) does not depend on directory iteration order. Files that
/// are not valid UTF-8 are skipped with a warning.
pub fn load_corpus(dir: impl AsRef<Path>) -> Result<Vec<(String, String)>> {
    let dir = dir.as_ref();
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read corpus directory {}", dir.display()))?;

    let mut documents = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let bytes =
            std::fs::read(&path).with_context(|| format!("failed to read {}", path.display()))?;
        match String::from_utf8(bytes) {
            Ok(text) => documents.push((name, text)),
            Err(_) => tracing::warn!(file = %path.display(), "skipping non UTF-8 document"),
        }
    }

    if documents.is_empty() {
        bail!("no .txt documents found in {}", dir.display());
    }

    documents.sort_by(|a, b| a.0.cmp(&b.0));
    tracing::debug!(documents = documents.len(), dir = %dir.display(), "loaded corpus");
    Ok(documents)
}
