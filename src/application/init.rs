//! Initialize tracker use case

use crate::domain::Periodicity;
use crate::error::Result;
use crate::infrastructure::{Config, FileTrackerRepository, TrackerRepository};
use std::fs;
use std::path::Path;

/// Initialize a new habit tracker at the specified path.
pub fn init(path: &Path, default_periodicity: Periodicity) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    // Create repository for this path
    let repo = FileTrackerRepository::new(path.to_path_buf());

    // Initialize .habitr directory
    repo.initialize()?;

    // Create default config
    let config = Config::new(default_periodicity);

    // Save config
    repo.save_config(&config)?;

    // Create the database and schema up front
    repo.open_store()?;

    println!("Initialized habitr tracker at {}", path.display());
    println!("Default periodicity: {}", default_periodicity);

    Ok(())
}
