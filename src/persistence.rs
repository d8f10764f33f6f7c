// File: src/persistence.rs
use crate::error::Result;
use crate::library::Library;
use log::{debug, warn};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes the library atomically: serialize into a sibling temp file, then
/// rename over `path`.
pub fn save_to_disk(library: &Library, path: &Path) -> Result<()> {
    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, library)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    debug!("saved {} texts to {}", library.len(), path.display());
    Ok(())
}

/// Decodes from an in-memory buffer so every length prefix is checked
/// against the bytes actually present.
pub fn load_from_disk(path: &Path) -> Result<Library> {
    let bytes = fs::read(path)?;
    let library: Library = bincode::deserialize(&bytes)?;
    Ok(library)
}

/// Loads `path`, falling back to the bundled samples when it is missing or
/// unreadable.
pub fn load_or_samples(path: &Path) -> Library {
    match load_from_disk(path) {
        Ok(library) => library,
        Err(e) => {
            if path.exists() {
                warn!("could not read library {}: {e}", path.display());
            }
            Library::with_samples()
        }
    }
}
