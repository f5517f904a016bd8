//! Path management for findash
//!
//! Provides XDG-compliant path resolution for the durable rule stores.
//!
//! ## Path Resolution Order
//!
//! 1. `FINDASH_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/findash` or `~/.config/findash`
//! 3. Windows: `%APPDATA%\findash`

use std::path::PathBuf;

use crate::error::FindashError;

/// Manages all paths used by findash
#[derive(Debug, Clone)]
pub struct FindashPaths {
    /// Base directory for all findash data
    base_dir: PathBuf,
}

impl FindashPaths {
    /// Create a new FindashPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FindashError> {
        let base_dir = if let Ok(custom) = std::env::var("FINDASH_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FindashPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/findash/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/findash/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to categories.json (category -> keyword list)
    pub fn categories_file(&self) -> PathBuf {
        self.data_dir().join("categories.json")
    }

    /// Get the path to budgets.json (category -> budget amount)
    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir().join("budgets.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), FindashError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FindashError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FindashError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FindashError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| FindashError::Config("Could not determine home directory".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("findash"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FindashError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FindashError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("findash"))
}
