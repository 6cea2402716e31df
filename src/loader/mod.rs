//! Dataset loading from per-state registration files
//!
//! Each file in the data directory holds one region's rows as headerless CSV
//! in the column order `state,gender,year,name,count`. The loader walks the
//! directory, parses every matching file and assembles a single [`Dataset`].

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Dataset, Gender, Record};

/// Result type alias for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Errors raised while reading and validating registration files
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Filesystem access failed
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A row could not be parsed into the expected columns
    #[error("Malformed row in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// State code is not exactly two ASCII uppercase letters
    #[error("Invalid state code '{code}' in {path}")]
    InvalidStateCode { path: PathBuf, code: String },
}

/// One line of a registration file, in file column order.
#[derive(Debug, Deserialize)]
struct RawRow {
    state: String,
    gender: Gender,
    year: i32,
    name: String,
    count: u32,
}

impl RawRow {
    fn into_record(self, path: &Path) -> LoaderResult<Record> {
        if !is_state_code(&self.state) {
            return Err(LoaderError::InvalidStateCode {
                path: path.to_path_buf(),
                code: self.state,
            });
        }

        Ok(Record {
            name: self.name,
            gender: self.gender,
            count: self.count,
            year: self.year,
            state: self.state,
        })
    }
}

fn is_state_code(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_uppercase())
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

/// Parses a single region file into records.
///
/// Rows are validated as they stream: the first malformed row or invalid
/// state code aborts the whole file.
///
/// # Errors
///
/// Returns [`LoaderError::Io`] when the file cannot be opened,
/// [`LoaderError::Csv`] for rows that do not fit the column layout and
/// [`LoaderError::InvalidStateCode`] for state fields that are not two
/// ASCII uppercase letters.
pub fn load_file(path: &Path) -> LoaderResult<Vec<Record>> {
    let file = File::open(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut records = Vec::new();
    for row in reader.deserialize::<RawRow>() {
        let row = row.map_err(|source| LoaderError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        records.push(row.into_record(path)?);
    }

    tracing::debug!(path = %path.display(), records = records.len(), "Loaded state file");

    Ok(records)
}

/// Loads every file in `dir` carrying `extension` into a single dataset.
///
/// Files are visited in name order so repeated loads produce identical
/// datasets. A directory without matching files yields an empty dataset;
/// a missing directory is an error.
///
/// # Errors
///
/// Returns [`LoaderError::Io`] when the directory cannot be enumerated,
/// plus any per-file error from [`load_file`].
pub fn load_dir(dir: &Path, extension: &str) -> LoaderResult<Dataset> {
    let entries = std::fs::read_dir(dir).map_err(|source| LoaderError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| LoaderError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && has_extension(&path, extension) {
            paths.push(path);
        }
    }
    paths.sort();

    if paths.is_empty() {
        tracing::warn!(dir = %dir.display(), "No registration files found");
        return Ok(Dataset::from_records(Vec::new()));
    }

    let mut records = Vec::new();
    for path in &paths {
        records.extend(load_file(path)?);
    }

    tracing::info!(
        dir = %dir.display(),
        files = paths.len(),
        records = records.len(),
        "Loaded dataset"
    );

    Ok(Dataset::from_records(records))
}
