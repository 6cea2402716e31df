//! Region-level adoption analysis for emergent names
//!
//! This module provides functionality for:
//! - Finding the states that carried an emergent name in its debut year
//! - Finding the states that picked a name up only after it turned popular
//! - Tallying both kinds of adoption events across a period of years

use std::collections::{BTreeSet, HashMap};

use crate::analytics::name_trends::{emergent_names, states_with_name, TrendResult};
use crate::models::Dataset;

/// Length in years of the late-adoption window that follows a name's
/// popularity year.
pub const ADOPTION_WINDOW: i32 = 3;

/// States that reported an emergent name in its debut year, as a multiset of
/// adoption events.
///
/// Each name contributes every state that carried it in `year` itself (the
/// novelty year, not the later year the name turned popular), so a state
/// backing several emergent names appears several times. Empty when no name
/// emerges.
///
/// # Errors
///
/// Propagates [`TrendError::ZeroTotalCount`] from the emergence scan.
///
/// [`TrendError::ZeroTotalCount`]: crate::analytics::TrendError::ZeroTotalCount
pub fn trend_setters(dataset: &Dataset, year: i32) -> TrendResult<Vec<String>> {
    let emerged = emergent_names(dataset, year)?;

    let mut states = Vec::new();
    for name in emerged.keys() {
        states.extend(states_with_name(dataset, year, name));
    }

    Ok(states)
}

/// Tally of trend-setting events per state across an inclusive year range.
///
/// Every occurrence in a year's multiset increments that state's counter.
/// Years contributing nothing are skipped; an inverted or out-of-range period
/// yields an empty map.
///
/// # Errors
///
/// Fails on the first year whose emergence scan fails; no partial tally is
/// returned.
pub fn trend_setters_in_period(
    dataset: &Dataset,
    start: i32,
    end: i32,
) -> TrendResult<HashMap<String, u32>> {
    let mut tally: HashMap<String, u32> = HashMap::new();
    for year in start..=end {
        for state in trend_setters(dataset, year)? {
            *tally.entry(state).or_insert(0) += 1;
        }
    }
    Ok(tally)
}

/// States that reported an emergent name only after its popularity year,
/// within the [`ADOPTION_WINDOW`] years that follow it.
///
/// For each emergent name the popularity year is the year after its first
/// horizon qualification. States reporting the name anywhere between the
/// debut year and the popularity year (exclusive) count as early and are
/// excluded from every late occurrence; the remaining late entries contribute
/// one event per reporting year. Results across names are concatenated.
///
/// # Errors
///
/// Propagates [`TrendError::ZeroTotalCount`] from the emergence scan.
///
/// [`TrendError::ZeroTotalCount`]: crate::analytics::TrendError::ZeroTotalCount
pub fn late_adopters(dataset: &Dataset, year: i32) -> TrendResult<Vec<String>> {
    let emerged = emergent_names(dataset, year)?;

    let mut states = Vec::new();
    for (name, emergence_years) in &emerged {
        // Emergence lists are ascending, so the first entry is the earliest
        // qualifying year. A name qualifying in the last representable year
        // has no year after it, hence no late window.
        let Some(first_popular) = emergence_years.first().and_then(|y| y.checked_add(1)) else {
            continue;
        };

        let mut early = BTreeSet::new();
        for early_year in year..first_popular {
            early.extend(states_with_name(dataset, early_year, name));
        }

        let window_end = first_popular.saturating_add(ADOPTION_WINDOW - 1);
        for late_year in first_popular..=window_end {
            states.extend(
                states_with_name(dataset, late_year, name)
                    .into_iter()
                    .filter(|state| !early.contains(state)),
            );
        }
    }

    Ok(states)
}

/// Tally of late-adoption events per state across an inclusive year range.
///
/// Same accumulation as [`trend_setters_in_period`], driven by
/// [`late_adopters`].
///
/// # Errors
///
/// Fails on the first year whose emergence scan fails; no partial tally is
/// returned.
pub fn late_adopters_in_period(
    dataset: &Dataset,
    start: i32,
    end: i32,
) -> TrendResult<HashMap<String, u32>> {
    let mut tally: HashMap<String, u32> = HashMap::new();
    for year in start..=end {
        for state in late_adopters(dataset, year)? {
            *tally.entry(state).or_insert(0) += 1;
        }
    }
    Ok(tally)
}
