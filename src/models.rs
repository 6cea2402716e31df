// Core data structures for the name trend analyzer

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// A single registration row: one name, in one state, in one year.
///
/// Rows are assembled by the loader and never mutated afterwards; every
/// analytical operation reads them through [`Dataset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Given name as it appears in the registration file.
    pub name: String,

    /// Registered gender. Part of the schema, not used by the trend logic.
    pub gender: Gender,

    /// Number of registrations for this (name, state, year) combination.
    pub count: u32,

    /// Registration year.
    pub year: i32,

    /// Two-letter region code (e.g. "CA").
    pub state: String,
}

/// Registered gender code from the source files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "M")]
    Male,
}

impl Gender {
    /// Parse from the 1-letter file code (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "F" | "f" => Some(Self::Female),
            "M" | "m" => Some(Self::Male),
            _ => None,
        }
    }

    /// Get the 1-letter file code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "F",
            Self::Male => "M",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The combined registration table, indexed by year.
///
/// Built once from the loaded records; all queries are read-only. A secondary
/// index maps each year to the positions of its records so that windowed
/// queries touch only the years they cover instead of the whole table.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// All records in load order.
    records: Vec<Record>,

    /// Year -> positions into `records`, kept sorted by year.
    by_year: BTreeMap<i32, Vec<usize>>,
}

impl Dataset {
    /// Build a dataset from loaded records, constructing the year index.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut by_year: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
        for (idx, record) in records.iter().enumerate() {
            by_year.entry(record.year).or_default().push(idx);
        }
        Self { records, by_year }
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in load order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Earliest and latest year present, or `None` for an empty dataset.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let first = self.by_year.keys().next()?;
        let last = self.by_year.keys().next_back()?;
        Some((*first, *last))
    }

    /// Iterate over the records of a single year.
    ///
    /// Years with no records yield an empty iterator.
    pub fn records_in_year(&self, year: i32) -> impl Iterator<Item = &Record> {
        self.by_year
            .get(&year)
            .into_iter()
            .flatten()
            .map(move |&idx| &self.records[idx])
    }

    /// Distinct names reported in a single year.
    pub fn names_in_year(&self, year: i32) -> HashSet<&str> {
        self.records_in_year(year)
            .map(|record| record.name.as_str())
            .collect()
    }

    /// Distinct names reported in any year of the inclusive span.
    ///
    /// An inverted span (`start > end`) is treated as empty.
    pub fn names_in_span(&self, start: i32, end: i32) -> HashSet<&str> {
        if start > end {
            return HashSet::new();
        }

        self.by_year
            .range(start..=end)
            .flat_map(|(_, indices)| indices.iter())
            .map(|&idx| self.records[idx].name.as_str())
            .collect()
    }

    /// Distinct region codes across the whole dataset, in code order.
    pub fn states(&self) -> BTreeSet<&str> {
        self.records
            .iter()
            .map(|record| record.state.as_str())
            .collect()
    }
}
