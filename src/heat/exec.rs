use super::{build_grid, fetch_commit_counts, output_heatmap, output_json, Palette};
use crate::cli::Cli;
use crate::config::{resolve_week_start, PreferenceStore};
use crate::git::GitRepo;
use crate::util::resolve_period;
use anyhow::Context;
use chrono::Local;

pub fn exec(cli: &Cli) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    let range = resolve_period(cli.year, today)?;
    tracing::debug!(start = %range.start, end = %range.end, "resolved period");

    let store = match &cli.config {
        Some(path) => Some(PreferenceStore::new(path)),
        None => PreferenceStore::default_location(),
    };
    let week_start = resolve_week_start(cli.week_start, store.as_ref());

    let repo = GitRepo::open(cli.repo.as_ref())?.include_merges(!cli.no_merges);
    let counts = fetch_commit_counts(&repo, &range).context("Failed to collect commits from repository")?;

    let grid = build_grid(range.start, range.end, &counts, week_start)
        .context("Failed to build heatmap grid")?;

    if cli.json {
        output_json(&grid, &counts, &repo.path().to_string_lossy())?;
    } else {
        let palette = if cli.no_color { Palette::plain() } else { Palette::default() };
        output_heatmap(&grid, &palette, today)?;
    }

    Ok(())
}
