use super::aggregate::total_commits;
use super::grid::HeatmapGrid;
use crate::model::{CommitCounts, DayEntry, HeatmapOutput, IntensityLevel, SCHEMA_VERSION};
use anyhow::Result;
use chrono::{Datelike, NaiveDate, Utc};
use console::Style;

/// Colours and glyph used to draw the heatmap.
#[derive(Debug, Clone)]
pub struct Palette {
    pub block: char,
    pub levels: [u8; IntensityLevel::COUNT],
    pub highlight: u8,
    pub colored: bool,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            block: '|',
            // dark grey, then darker to brighter greens
            levels: [234, 22, 28, 34, 40],
            highlight: 220,
            colored: console::colors_enabled(),
        }
    }
}

impl Palette {
    pub fn plain() -> Self {
        Self {
            colored: false,
            ..Self::default()
        }
    }

    fn style(&self, color: u8) -> Style {
        Style::new().color256(color).force_styling(self.colored)
    }

    fn cell(&self, level: IntensityLevel) -> String {
        self.style(self.levels[level.index()])
            .apply_to(self.block)
            .to_string()
    }

    fn label(&self, label: &str, is_today: bool) -> String {
        if is_today {
            self.style(self.highlight).apply_to(label).to_string()
        } else {
            label.to_string()
        }
    }
}

/// Render the grid as terminal text. The row for `today`'s weekday gets a
/// highlighted label.
pub fn render_heatmap(grid: &HeatmapGrid, palette: &Palette, today: NaiveDate) -> String {
    let mut out = format!(
        "Git commit map from {} to {}\n\n",
        grid.start_date(),
        grid.end_date()
    );

    for (row, (levels, label)) in grid.rows().zip(grid.row_labels()).enumerate() {
        let is_today = grid.weekday_of_row(row) == today.weekday();
        out.push_str(&palette.label(label, is_today));
        out.push(' ');
        for &level in levels {
            out.push_str(&palette.cell(level));
        }
        out.push('\n');
    }

    out.push('\n');
    out
}

pub fn output_heatmap(grid: &HeatmapGrid, palette: &Palette, today: NaiveDate) -> Result<()> {
    print!("{}", render_heatmap(grid, palette, today));
    Ok(())
}

pub fn heatmap_output(grid: &HeatmapGrid, counts: &CommitCounts, repository_path: &str) -> HeatmapOutput {
    let range = grid.range();
    let days = counts
        .range(range.start..=range.end)
        .filter(|(_, &count)| count > 0)
        .map(|(&date, &commit_count)| DayEntry {
            date,
            commit_count,
            level: super::choose_level(commit_count).value(),
        })
        .collect();

    HeatmapOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: repository_path.to_string(),
        start_date: grid.start_date(),
        end_date: grid.end_date(),
        week_start: grid.week_start(),
        grid_start: grid.grid_start(),
        num_weeks: grid.num_weeks(),
        row_labels: grid.row_labels().iter().map(|l| l.to_string()).collect(),
        total_commits: total_commits(counts, &range),
        rows: grid
            .rows()
            .map(|row| row.iter().map(|level| level.value()).collect())
            .collect(),
        days,
    }
}

pub fn output_json(grid: &HeatmapGrid, counts: &CommitCounts, repository_path: &str) -> Result<()> {
    let output = heatmap_output(grid, counts, repository_path);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
