//! End-to-end analytics tests over hand-built multi-year scenarios

mod common;

use std::collections::HashSet;

use nametide::analytics;
use nametide::analytics::TrendError;

#[test]
fn test_debut_name_is_novel() {
    let data = common::zara_scenario();

    let novel = analytics::new_names(&data, 2010);
    assert_eq!(novel, HashSet::from(["Zara".to_string()]));

    assert!(analytics::new_names(&data, 2011).is_empty());
    assert!(analytics::new_names(&data, 2012).is_empty());
}

#[test]
fn test_novelty_lookback_covers_eleven_years() {
    // "Edith" last seen 12 years before 2010, outside the lookback window;
    // "Rose" sits exactly on its lower bound.
    let data = common::dataset(&[
        ("Edith", 10, 1998, "CA"),
        ("Rose", 10, 1999, "CA"),
        ("Edith", 10, 2010, "CA"),
        ("Rose", 10, 2010, "CA"),
    ]);

    let novel = analytics::new_names(&data, 2010);
    assert!(novel.contains("Edith"));
    assert!(!novel.contains("Rose"));
}

#[test]
fn test_popular_names_is_top_decile() {
    let data = common::zara_scenario();

    let popular = analytics::popular_names(&data, 2010).unwrap();
    assert_eq!(popular, HashSet::from(["Zara".to_string()]));
}

#[test]
fn test_rank_names_shares_sum_to_one() {
    let data = common::zara_scenario();

    let ranking = analytics::rank_names(&data, 2010).unwrap();
    assert_eq!(ranking.len(), 10);
    assert_eq!(ranking[0].name, "Zara");
    assert_eq!(ranking[0].count, 200);

    let total: f64 = ranking.iter().map(|entry| entry.share).sum();
    assert!((total - 100.0).abs() < 1e-9);
}

#[test]
fn test_empty_year_ranks_empty() {
    let data = common::zara_scenario();

    assert!(analytics::rank_names(&data, 1990).unwrap().is_empty());
    assert!(analytics::popular_names(&data, 1990).unwrap().is_empty());
}

#[test]
fn test_zero_total_year_is_an_error() {
    let data = common::dataset(&[("Ada", 0, 2010, "CA"), ("Bea", 0, 2010, "TX")]);

    let err = analytics::rank_names(&data, 2010).unwrap_err();
    assert!(matches!(err, TrendError::ZeroTotalCount { year: 2010 }));

    // The error surfaces through every caller that ranks the year.
    assert!(analytics::popular_names(&data, 2010).is_err());
    assert!(analytics::emergent_names(&data, 2010).is_err());
    assert!(analytics::trend_setters(&data, 2010).is_err());
    assert!(analytics::late_adopters(&data, 2010).is_err());
}

#[test]
fn test_emergence_collects_horizon_years() {
    let data = common::zara_scenario();

    let emerged = analytics::emergent_names(&data, 2010).unwrap();
    assert_eq!(emerged.len(), 1);
    assert_eq!(emerged["Zara"], vec![2010, 2012]);

    assert!(analytics::emergent_names(&data, 2011).unwrap().is_empty());
}

#[test]
fn test_trend_setters_are_debut_states() {
    let data = common::zara_scenario();

    let setters = analytics::trend_setters(&data, 2010).unwrap();
    assert_eq!(setters, vec!["CA".to_string(), "TX".to_string()]);
}

#[test]
fn test_late_adopters_join_after_popularity() {
    let data = common::zara_scenario();

    let late = analytics::late_adopters(&data, 2010).unwrap();
    assert_eq!(late, vec!["WA".to_string()]);
}

#[test]
fn test_period_tallies_match_yearly_sums() {
    let data = common::zara_scenario();

    let tally = analytics::trend_setters_in_period(&data, 2010, 2012).unwrap();
    assert_eq!(tally.len(), 2);
    assert_eq!(tally["CA"], 1);
    assert_eq!(tally["TX"], 1);

    let mut expected = std::collections::HashMap::new();
    for year in 2010..=2012 {
        for state in analytics::trend_setters(&data, year).unwrap() {
            *expected.entry(state).or_insert(0u32) += 1;
        }
    }
    assert_eq!(tally, expected);

    let late_tally = analytics::late_adopters_in_period(&data, 2010, 2012).unwrap();
    assert_eq!(late_tally.len(), 1);
    assert_eq!(late_tally["WA"], 1);
}

#[test]
fn test_operations_are_read_only() {
    let data = common::zara_scenario();

    let first = analytics::emergent_names(&data, 2010).unwrap();
    let second = analytics::emergent_names(&data, 2010).unwrap();
    assert_eq!(first, second);

    assert_eq!(
        analytics::new_names(&data, 2010),
        analytics::new_names(&data, 2010)
    );
    assert_eq!(
        analytics::late_adopters(&data, 2010).unwrap(),
        analytics::late_adopters(&data, 2010).unwrap()
    );
}

mod properties {
    use super::*;
    use nametide::models::Dataset;
    use proptest::prelude::*;

    const NAMES: [&str; 8] = ["Ada", "Bea", "Cleo", "Dora", "Eve", "Fern", "Gia", "Hana"];
    const STATES: [&str; 5] = ["CA", "NY", "OH", "TX", "WA"];

    fn build(rows: Vec<(usize, u32, i32, usize)>) -> Dataset {
        let records = rows
            .into_iter()
            .map(|(name, count, year, state)| {
                common::record(NAMES[name], count, year, STATES[state])
            })
            .collect();
        Dataset::from_records(records)
    }

    fn arb_rows() -> impl Strategy<Value = Vec<(usize, u32, i32, usize)>> {
        // Positive counts keep every populated year rankable.
        prop::collection::vec((0usize..8, 1u32..200, 2000i32..2020, 0usize..5), 0..60)
    }

    proptest! {
        /// New names belong to the probe year and to no year of the lookback window.
        #[test]
        fn prop_new_names_disjoint_from_lookback(rows in arb_rows(), year in 2000i32..2020) {
            let data = build(rows);
            let novel = analytics::new_names(&data, year);

            let current: HashSet<&str> = data.names_in_year(year);
            let window: HashSet<&str> = data.names_in_span(year - 11, year - 1);

            for name in &novel {
                prop_assert!(current.contains(name.as_str()));
                prop_assert!(!window.contains(name.as_str()));
            }
        }

        /// The popular set never exceeds a tenth of the distinct names, rounded up.
        #[test]
        fn prop_popular_size_bounded(rows in arb_rows(), year in 2000i32..2020) {
            let data = build(rows);

            let distinct = analytics::rank_names(&data, year).unwrap().len();
            let popular = analytics::popular_names(&data, year).unwrap();

            let bound = (distinct as f64 * 0.1).ceil() as usize;
            prop_assert!(popular.len() <= bound);
        }

        /// Emergent names are novel in the debut year and qualify inside the decade.
        #[test]
        fn prop_emergent_names_are_novel(rows in arb_rows(), year in 2000i32..2020) {
            let data = build(rows);

            let novel = analytics::new_names(&data, year);
            let emerged = analytics::emergent_names(&data, year).unwrap();

            for (name, years) in &emerged {
                prop_assert!(novel.contains(name));
                prop_assert!(!years.is_empty());
                for qualifying in years {
                    prop_assert!((year..year + 10).contains(qualifying));
                }
            }
        }

        /// Repeated runs over the same dataset return identical results.
        #[test]
        fn prop_operations_idempotent(rows in arb_rows(), year in 2000i32..2020) {
            let data = build(rows);

            prop_assert_eq!(
                analytics::rank_names(&data, year).unwrap(),
                analytics::rank_names(&data, year).unwrap()
            );
            prop_assert_eq!(
                analytics::emergent_names(&data, year).unwrap(),
                analytics::emergent_names(&data, year).unwrap()
            );
            prop_assert_eq!(
                analytics::late_adopters(&data, year).unwrap(),
                analytics::late_adopters(&data, year).unwrap()
            );
        }

        /// Period tallies equal the sum of the per-year multisets.
        #[test]
        fn prop_period_tally_sums_years(rows in arb_rows(), start in 2000i32..2018) {
            let data = build(rows);
            let end = start + 2;

            let tally = analytics::trend_setters_in_period(&data, start, end).unwrap();

            let mut expected = std::collections::HashMap::new();
            for year in start..=end {
                for state in analytics::trend_setters(&data, year).unwrap() {
                    *expected.entry(state).or_insert(0u32) += 1;
                }
            }
            prop_assert_eq!(tally, expected);
        }
    }
}
