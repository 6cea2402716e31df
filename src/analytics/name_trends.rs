//! Per-year name trend queries over the registration dataset
//!
//! This module provides functionality for:
//! - Detecting names that are new for a year (absent from the prior window)
//! - Locating the states that reported a given name in a year
//! - Ranking names by national share and taking the top decile
//! - Tracking which new names go on to rank popular within a forward horizon

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use thiserror::Error;

use crate::models::Dataset;

/// Span in years of the look-back window that decides whether a name is new.
pub const NOVELTY_WINDOW: i32 = 11;

/// Forward horizon in years (including the start year) over which a new name
/// can qualify as emergent.
pub const EMERGENCE_HORIZON: i32 = 10;

/// Fraction of a year's distinct names that makes up the top of the ranking.
pub const TOP_DECILE: f64 = 0.1;

/// Errors that can occur during trend analysis
#[derive(Debug, Error)]
pub enum TrendError {
    /// A year has records but its counts sum to zero, so national shares are
    /// undefined. Empty years are not an error; this is.
    #[error("cannot rank year {year}: records exist but their total count is zero")]
    ZeroTotalCount { year: i32 },
}

/// Result type for trend analysis operations
pub type TrendResult<T> = Result<T, TrendError>;

/// One row of a year's popularity ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameShare {
    /// Ranked name.
    pub name: String,

    /// Summed national registrations for the name in the year.
    pub count: u64,

    /// Percentage of the year's total registrations.
    pub share: f64,
}

/// Names reported in `year` that are absent from the preceding
/// [`NOVELTY_WINDOW`]-year window.
///
/// A window reaching before the earliest record is simply smaller; at the
/// start of the dataset every name is new. Reintroduced names count as new
/// again once the window has elapsed.
pub fn new_names(dataset: &Dataset, year: i32) -> HashSet<String> {
    let previous = match year.checked_sub(1) {
        Some(window_end) => {
            dataset.names_in_span(year.saturating_sub(NOVELTY_WINDOW), window_end)
        }
        None => HashSet::new(),
    };

    dataset
        .names_in_year(year)
        .into_iter()
        .filter(|name| !previous.contains(name))
        .map(str::to_string)
        .collect()
}

/// States with at least one record matching `year` and `name` exactly.
///
/// Returns an ordered set; no match yields an empty set, not an error.
pub fn states_with_name(dataset: &Dataset, year: i32, name: &str) -> BTreeSet<String> {
    dataset
        .records_in_year(year)
        .filter(|record| record.name == name)
        .map(|record| record.state.clone())
        .collect()
}

/// Full popularity ranking for a year: per-name national counts and shares,
/// sorted by share descending.
///
/// Equal shares fall back to name order so rankings are reproducible.
///
/// # Errors
///
/// [`TrendError::ZeroTotalCount`] if the year has records but their counts
/// sum to zero. A year with no records at all ranks as an empty list.
pub fn rank_names(dataset: &Dataset, year: i32) -> TrendResult<Vec<NameShare>> {
    let mut totals: HashMap<&str, u64> = HashMap::new();
    for record in dataset.records_in_year(year) {
        *totals.entry(record.name.as_str()).or_insert(0) += u64::from(record.count);
    }

    if totals.is_empty() {
        return Ok(Vec::new());
    }

    let national_total: u64 = totals.values().sum();
    if national_total == 0 {
        return Err(TrendError::ZeroTotalCount { year });
    }

    let mut ranking: Vec<NameShare> = totals
        .into_iter()
        .map(|(name, count)| NameShare {
            name: name.to_string(),
            count,
            share: (count as f64 / national_total as f64) * 100.0,
        })
        .collect();

    ranking.sort_by(|a, b| b.share.total_cmp(&a.share).then_with(|| a.name.cmp(&b.name)));

    Ok(ranking)
}

/// Names in the top [`TOP_DECILE`] of the year's ranking, as a set.
///
/// The cut is `ceil(TOP_DECILE * distinct_name_count)`; a year with no
/// records has a distinct count of zero and yields an empty set.
///
/// # Errors
///
/// Propagates [`TrendError::ZeroTotalCount`] from the ranking.
pub fn popular_names(dataset: &Dataset, year: i32) -> TrendResult<HashSet<String>> {
    let ranking = rank_names(dataset, year)?;
    let top = (ranking.len() as f64 * TOP_DECILE).ceil() as usize;

    Ok(ranking
        .into_iter()
        .take(top)
        .map(|entry| entry.name)
        .collect())
}

/// New names for `year` that rank popular in at least one year of the
/// [`EMERGENCE_HORIZON`], mapped to every horizon year in which they did.
///
/// Year lists are ascending since the horizon is walked forward; a name
/// re-qualifying in several years accumulates them all. Returns an empty map
/// when no new name ever ranks popular.
///
/// # Errors
///
/// Propagates [`TrendError::ZeroTotalCount`] from any horizon year; the call
/// fails as a whole rather than returning a partial map.
pub fn emergent_names(dataset: &Dataset, year: i32) -> TrendResult<BTreeMap<String, Vec<i32>>> {
    let novel = new_names(dataset, year);
    let mut emerged: BTreeMap<String, Vec<i32>> = BTreeMap::new();

    let horizon_end = year.saturating_add(EMERGENCE_HORIZON - 1);
    for horizon_year in year..=horizon_end {
        let popular = popular_names(dataset, horizon_year)?;
        for name in novel.intersection(&popular) {
            emerged.entry(name.clone()).or_default().push(horizon_year);
        }
    }

    Ok(emerged)
}
