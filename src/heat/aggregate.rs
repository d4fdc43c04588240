use super::grid::{HeatmapGrid, DAYS_PER_WEEK};
use crate::error::Result;
use crate::model::{CommitCounts, DateRange, IntensityLevel, WeekStart};
use crate::util::build_date_range;
use chrono::{Datelike, NaiveDate};

/// Bucket a day's commit count into an intensity level.
pub fn choose_level(count: u32) -> IntensityLevel {
    IntensityLevel::from_count(count)
}

/// Lay out `start_date..=end_date` as full weeks and fill in one level per day.
pub fn build_grid(
    start_date: NaiveDate,
    end_date: NaiveDate,
    counts: &CommitCounts,
    week_start: WeekStart,
) -> Result<HeatmapGrid> {
    let range = DateRange::new(start_date, end_date)?;
    let mut grid = HeatmapGrid::empty(range, week_start);

    // Padding days before start_date keep their zero level.
    for day in build_date_range(start_date, end_date) {
        let idx = (day - grid.grid_start).num_days() as usize;
        let week = idx / DAYS_PER_WEEK;
        let row = week_start.row_of(day.weekday());
        let count = counts.get(&day).copied().unwrap_or(0);
        grid.levels[row][week] = choose_level(count);
    }

    Ok(grid)
}

pub fn total_commits(counts: &CommitCounts, range: &DateRange) -> u64 {
    counts
        .range(range.start..=range.end)
        .map(|(_, &count)| count as u64)
        .sum()
}
