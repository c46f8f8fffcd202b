//! Save document persistence
//!
//! Features:
//! - Typed JSON document (settings + per-tier leaderboards)
//! - Write to a temp file, then rename over the save
//! - Missing or corrupt documents fall back to defaults

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::highscores::Leaderboards;
use crate::settings::Settings;

/// Environment variable that overrides the save location
pub const SAVE_PATH_ENV: &str = "DESCENT_SAVE_PATH";

/// Everything that survives a restart
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SaveDocument {
    pub settings: Settings,
    pub leaderboards: Leaderboards,
}

impl SaveDocument {
    /// Parse and validate a document. Any schema mismatch is an error.
    pub fn from_json(bytes: &[u8]) -> serde_json::Result<Self> {
        let doc: SaveDocument = serde_json::from_slice(bytes)?;
        Ok(doc.sanitized())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn sanitized(mut self) -> Self {
        self.leaderboards = self.leaderboards.sanitized();
        self
    }
}

/// File-backed store for the save document
#[derive(Debug, Clone)]
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the save location from the environment
    pub fn from_env() -> Self {
        if let Some(explicit) = std::env::var_os(SAVE_PATH_ENV) {
            return Self::new(explicit);
        }

        let base = std::env::var_os("XDG_DATA_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME").map(|home| {
                    let mut p = PathBuf::from(home);
                    p.push(".local");
                    p.push("share");
                    p
                })
            });

        match base {
            Some(mut path) => {
                path.push("vertical-descent");
                path.push("save.json");
                Self::new(path)
            }
            None => Self::new("save.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document, substituting defaults for a missing or bad file
    pub fn load(&self) -> SaveDocument {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No save at {}, using defaults", self.path.display());
                return SaveDocument::default();
            }
            Err(e) => {
                log::warn!("Failed to read {}: {}", self.path.display(), e);
                return SaveDocument::default();
            }
        };

        match SaveDocument::from_json(&bytes) {
            Ok(doc) => {
                log::info!("Loaded save from {}", self.path.display());
                doc
            }
            Err(e) => {
                log::warn!(
                    "Save at {} is corrupt ({}), using defaults",
                    self.path.display(),
                    e
                );
                SaveDocument::default()
            }
        }
    }

    /// Write the document
    pub fn save(&self, doc: &SaveDocument) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = doc
            .to_json()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }
        log::debug!("Saved to {}", self.path.display());
        Ok(())
    }
}
