//! Common test utilities

use nametide::models::{Dataset, Gender, Record};

/// Create a single female-name record
pub fn record(name: &str, count: u32, year: i32, state: &str) -> Record {
    Record {
        name: name.to_string(),
        gender: Gender::Female,
        count,
        year,
        state: state.to_string(),
    }
}

/// Build a dataset from (name, count, year, state) rows
pub fn dataset(rows: &[(&str, u32, i32, &str)]) -> Dataset {
    Dataset::from_records(
        rows.iter()
            .map(|&(name, count, year, state)| record(name, count, year, state))
            .collect(),
    )
}

/// A multi-year scenario around the debut of "Zara":
///
/// - 2005..=2009: nine established names, 50 registrations each in OH
/// - 2010: the establishment plus Zara debuting big in CA and TX
///   (top of the ranking, so novel and immediately emergent)
/// - 2011: Zara dips below the establishment; CA keeps reporting it
/// - 2012: Zara tops the ranking again, now reported from WA
///
/// With the popularity year 2011, CA and TX are the trend setters of 2010
/// and WA is the sole late adopter.
#[allow(dead_code)]
pub fn zara_scenario() -> Dataset {
    let established = [
        "Abigail", "Amelia", "Emily", "Emma", "Evelyn", "Harper", "Mia", "Olivia", "Sophia",
    ];

    let mut records = Vec::new();

    for year in 2005..=2012 {
        for name in established {
            records.push(record(name, 50, year, "OH"));
        }
    }

    records.push(record("Zara", 120, 2010, "CA"));
    records.push(record("Zara", 80, 2010, "TX"));
    records.push(record("Zara", 40, 2011, "CA"));
    records.push(record("Zara", 90, 2012, "WA"));

    Dataset::from_records(records)
}
