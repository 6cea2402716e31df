use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use nametide::analytics;
use nametide::config::Config;
use nametide::models::Dataset;

use crate::commands::{emit, load_dataset, DatasetSummary};

/// One state's adoption-event count within a period.
#[derive(Debug, Serialize)]
struct RegionCount {
    state: String,
    events: u32,
}

#[derive(Debug, Serialize)]
struct AdoptionReport {
    command: &'static str,
    start: i32,
    end: i32,
    generated_at: DateTime<Utc>,
    dataset: DatasetSummary,
    tally: Vec<RegionCount>,
}

pub fn trend_setters(
    config: Config,
    start: i32,
    end: Option<i32>,
    json: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let end = resolve_period(start, end)?;
    let dataset = load_dataset(&config)?;

    let tally = analytics::trend_setters_in_period(&dataset, start, end)
        .with_context(|| format!("Failed to tally trend setters for {start}-{end}"))?;
    let rows = sort_tally(tally);

    tracing::info!(start, end, states = rows.len(), "Tallied trend setters");

    let content = render(
        "trend-setters",
        "Trend setters",
        start,
        end,
        &dataset,
        rows,
        json,
    )?;
    emit(&content, output.as_deref())
}

pub fn late_adopters(
    config: Config,
    start: i32,
    end: Option<i32>,
    json: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let end = resolve_period(start, end)?;
    let dataset = load_dataset(&config)?;

    let tally = analytics::late_adopters_in_period(&dataset, start, end)
        .with_context(|| format!("Failed to tally late adopters for {start}-{end}"))?;
    let rows = sort_tally(tally);

    tracing::info!(start, end, states = rows.len(), "Tallied late adopters");

    let content = render(
        "late-adopters",
        "Late adopters",
        start,
        end,
        &dataset,
        rows,
        json,
    )?;
    emit(&content, output.as_deref())
}

fn resolve_period(start: i32, end: Option<i32>) -> Result<i32> {
    let end = end.unwrap_or(start);
    if end < start {
        anyhow::bail!("--end ({end}) must not precede --start ({start})");
    }
    Ok(end)
}

fn sort_tally(tally: HashMap<String, u32>) -> Vec<RegionCount> {
    let mut rows: Vec<RegionCount> = tally
        .into_iter()
        .map(|(state, events)| RegionCount { state, events })
        .collect();
    rows.sort_by(|a, b| b.events.cmp(&a.events).then_with(|| a.state.cmp(&b.state)));
    rows
}

fn render(
    command: &'static str,
    title: &str,
    start: i32,
    end: i32,
    dataset: &Dataset,
    rows: Vec<RegionCount>,
    json: bool,
) -> Result<String> {
    if json {
        let report = AdoptionReport {
            command,
            start,
            end,
            generated_at: Utc::now(),
            dataset: DatasetSummary::of(dataset),
            tally: rows,
        };
        return serde_json::to_string_pretty(&report).context("Failed to serialize report");
    }

    let mut out = String::new();
    if start == end {
        out.push_str(&format!("{title} in {start}\n"));
    } else {
        out.push_str(&format!("{title} {start}-{end}\n"));
    }
    out.push_str("======================\n");
    if rows.is_empty() {
        out.push_str("(none)\n");
    } else {
        out.push_str(&format!("{:<8}{:>8}\n", "State", "Events"));
        for row in &rows {
            out.push_str(&format!("{:<8}{:>8}\n", row.state, row.events));
        }
    }
    out.push_str(&format!("\nStates: {}\n", rows.len()));
    Ok(out)
}
