use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use nametide::analytics;
use nametide::analytics::NameShare;
use nametide::config::Config;

use crate::commands::{emit, load_dataset, DatasetSummary};

#[derive(Debug, Serialize)]
struct NewNamesReport {
    command: &'static str,
    year: i32,
    generated_at: DateTime<Utc>,
    dataset: DatasetSummary,
    names: Vec<String>,
}

pub fn new_names(config: Config, year: i32, json: bool, output: Option<PathBuf>) -> Result<()> {
    let dataset = load_dataset(&config)?;

    let mut names: Vec<String> = analytics::new_names(&dataset, year).into_iter().collect();
    names.sort();

    tracing::info!(year, names = names.len(), "Computed novelty set");

    let content = if json {
        let report = NewNamesReport {
            command: "new-names",
            year,
            generated_at: Utc::now(),
            dataset: DatasetSummary::of(&dataset),
            names,
        };
        serde_json::to_string_pretty(&report).context("Failed to serialize report")?
    } else {
        let mut out = String::new();
        out.push_str(&format!("New names in {year}\n"));
        out.push_str("=================\n");
        if names.is_empty() {
            out.push_str("(none)\n");
        } else {
            for name in &names {
                out.push_str(name);
                out.push('\n');
            }
        }
        out.push_str(&format!("\nTotal: {}\n", names.len()));
        out
    };

    emit(&content, output.as_deref())
}

#[derive(Debug, Serialize)]
struct PopularReport {
    command: &'static str,
    year: i32,
    generated_at: DateTime<Utc>,
    dataset: DatasetSummary,
    names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ranking: Option<Vec<NameShare>>,
}

pub fn popular(
    config: Config,
    year: i32,
    full: bool,
    json: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let dataset = load_dataset(&config)?;

    let ranking = analytics::rank_names(&dataset, year)
        .with_context(|| format!("Failed to rank names for {year}"))?;
    let distinct = ranking.len();

    let mut names: Vec<String> = analytics::popular_names(&dataset, year)?
        .into_iter()
        .collect();
    names.sort();

    tracing::info!(year, popular = names.len(), distinct, "Ranked names");

    let content = if json {
        let report = PopularReport {
            command: "popular",
            year,
            generated_at: Utc::now(),
            dataset: DatasetSummary::of(&dataset),
            names,
            ranking: full.then_some(ranking),
        };
        serde_json::to_string_pretty(&report).context("Failed to serialize report")?
    } else {
        let mut out = String::new();
        out.push_str(&format!("Popular names in {year}\n"));
        out.push_str("=====================\n");
        if full {
            out.push_str(&format!(
                "{:>4}  {:<16}{:>10}{:>9}\n",
                "Rank", "Name", "Count", "Share"
            ));
            for (rank, entry) in ranking.iter().enumerate() {
                out.push_str(&format!(
                    "{:>4}  {:<16}{:>10}{:>8.3}%\n",
                    rank + 1,
                    entry.name,
                    entry.count,
                    entry.share
                ));
            }
        } else if names.is_empty() {
            out.push_str("(none)\n");
        } else {
            for name in &names {
                out.push_str(name);
                out.push('\n');
            }
        }
        out.push_str(&format!(
            "\nTop decile: {} of {} distinct names\n",
            names.len(),
            distinct
        ));
        out
    };

    emit(&content, output.as_deref())
}

#[derive(Debug, Serialize)]
struct EmergingReport {
    command: &'static str,
    year: i32,
    generated_at: DateTime<Utc>,
    dataset: DatasetSummary,
    emergent: BTreeMap<String, Vec<i32>>,
}

pub fn emerging(config: Config, year: i32, json: bool, output: Option<PathBuf>) -> Result<()> {
    let dataset = load_dataset(&config)?;

    let emergent = analytics::emergent_names(&dataset, year)
        .with_context(|| format!("Failed to scan emergence horizon for {year}"))?;

    tracing::info!(year, emergent = emergent.len(), "Scanned emergence horizon");

    let content = if json {
        let report = EmergingReport {
            command: "emerging",
            year,
            generated_at: Utc::now(),
            dataset: DatasetSummary::of(&dataset),
            emergent,
        };
        serde_json::to_string_pretty(&report).context("Failed to serialize report")?
    } else {
        let mut out = String::new();
        out.push_str(&format!("Names emerging from {year}\n"));
        out.push_str("========================\n");
        if emergent.is_empty() {
            out.push_str("(none)\n");
        } else {
            for (name, years) in &emergent {
                let years: Vec<String> = years.iter().map(i32::to_string).collect();
                out.push_str(&format!("{:<16}{}\n", name, years.join(", ")));
            }
        }
        out.push_str(&format!("\nTotal: {}\n", emergent.len()));
        out
    };

    emit(&content, output.as_deref())
}
