//! nametide - Baby name trend analysis
//!
//! Analyzes yearly state birth-name registration counts: which names are new,
//! which turn popular, and which states set or follow naming trends.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and settings
//! - [`loader`] - Per-state registration file parsing into a dataset
//! - [`models`] - Core data structures and the year index
//! - [`analytics`] - Novelty, popularity, emergence and adoption analysis
//! - [`error`] - Unified error type across module boundaries
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use nametide::analytics;
//! use nametide::loader;
//!
//! fn main() -> anyhow::Result<()> {
//!     let dataset = loader::load_dir(Path::new("data"), "TXT")?;
//!     let novel = analytics::new_names(&dataset, 2010);
//!     println!("{} names debuted in 2010", novel.len());
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::analytics::{NameShare, TrendError, TrendResult};
    pub use crate::config::Config;
    pub use crate::error::{Error, ErrorCategory, Result};
    pub use crate::loader::{LoaderError, LoaderResult};
    pub use crate::models::{Dataset, Gender, Record};
}

// Direct re-exports for convenience
pub use models::{Dataset, Gender, Record};
