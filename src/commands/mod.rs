pub mod adoption;
pub mod names;

// Re-export command functions for convenience
pub use adoption::{late_adopters, trend_setters};
pub use names::{emerging, new_names, popular};

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use nametide::config::Config;
use nametide::loader;
use nametide::models::Dataset;

/// Dataset provenance block attached to every JSON report.
#[derive(Debug, Serialize)]
pub struct DatasetSummary {
    pub records: usize,
    pub states: usize,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
}

impl DatasetSummary {
    pub fn of(dataset: &Dataset) -> Self {
        let span = dataset.year_span();
        Self {
            records: dataset.len(),
            states: dataset.states().len(),
            first_year: span.map(|(first, _)| first),
            last_year: span.map(|(_, last)| last),
        }
    }
}

pub(crate) fn load_dataset(config: &Config) -> Result<Dataset> {
    let dataset = loader::load_dir(&config.data.dir, &config.data.extension)
        .with_context(|| format!("Failed to load dataset from {}", config.data.dir.display()))?;
    Ok(dataset)
}

pub(crate) fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        println!("Output written to: {}", path.display());
    } else {
        println!("{content}");
    }
    Ok(())
}
