//! Tracker directory discovery and initialization

use crate::error::{HabitrError, Result};
use crate::infrastructure::{Config, SqliteStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for tracker-level operations
pub trait TrackerRepository {
    /// Get the root directory of this tracker
    fn root(&self) -> &Path;

    /// Load configuration from .habitr/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .habitr/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .habitr directory exists
    fn is_initialized(&self) -> bool;

    /// Create .habitr directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of TrackerRepository
#[derive(Debug, Clone)]
pub struct FileTrackerRepository {
    pub root: PathBuf,
}

impl FileTrackerRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileTrackerRepository { root }
    }

    /// Discover tracker root by walking up from current directory
    /// First checks HABITR_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        // 1. Check HABITR_ROOT environment variable first
        if let Ok(root_path) = std::env::var("HABITR_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_habitr_dir(&path) {
                return Ok(FileTrackerRepository::new(path));
            } else {
                return Err(HabitrError::Config(format!(
                    "HABITR_ROOT is set to '{}' but no .habitr directory found. \
                    Run 'habitr init' in that directory or unset HABITR_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover tracker root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_habitr_dir(&current) {
                return Ok(FileTrackerRepository::new(current));
            }

            // Try to move to parent directory
            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding .habitr
                    return Err(HabitrError::NotHabitrDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Path of the SQLite database inside .habitr
    pub fn db_path(&self) -> PathBuf {
        self.root.join(".habitr").join("habits.db")
    }

    /// Open the habit store, creating the schema if needed
    pub fn open_store(&self) -> Result<SqliteStore> {
        if !self.is_initialized() {
            return Err(HabitrError::NotHabitrDirectory(self.root.clone()));
        }
        SqliteStore::open(&self.db_path())
    }

    /// Check if a path contains a .habitr directory
    fn has_habitr_dir(path: &Path) -> bool {
        path.join(".habitr").is_dir()
    }
}

impl TrackerRepository for FileTrackerRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_habitr_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let habitr_dir = self.root.join(".habitr");

        if habitr_dir.exists() {
            return Err(HabitrError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&habitr_dir)?;
        Ok(())
    }
}
