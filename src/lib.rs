//! habitr - Terminal habit tracker
//!
//! A command-line application for tracking daily and weekly habits:
//! define habits, log completions, and inspect streak analytics.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::HabitrError;
