//! File I/O for journey maps.
//!
//! Maps are stored as pretty-printed JSON. This is host-side persistence:
//! the history layer never touches the filesystem, the application saves
//! the current snapshot on its own cadence.

use std::path::Path;

use anyhow::{Context, Result};

use crate::map::JourneyMap;

impl JourneyMap {
    /// Loads a map from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read map file: {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse map file: {}", path.display()))
    }

    /// Saves the map to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self).context("failed to serialize map")?;
        std::fs::write(path, text)
            .with_context(|| format!("failed to write map file: {}", path.display()))?;
        Ok(())
    }
}
