use crate::model::{DateRange, IntensityLevel, WeekStart};
use chrono::{Duration, NaiveDate, Weekday};

pub const DAYS_PER_WEEK: usize = 7;

/// Weekday-by-week matrix of intensity levels.
///
/// Every column is a full calendar week starting at `grid_start`. Cells whose
/// day lies outside the requested range are never written and read as
/// [`IntensityLevel::NONE`]; use [`HeatmapGrid::in_range`] to tell them apart
/// from real days without commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatmapGrid {
    pub(crate) range: DateRange,
    pub(crate) week_start: WeekStart,
    pub(crate) grid_start: NaiveDate,
    pub(crate) levels: [Vec<IntensityLevel>; DAYS_PER_WEEK],
}

impl HeatmapGrid {
    pub(crate) fn empty(range: DateRange, week_start: WeekStart) -> Self {
        let grid_start = range.start - Duration::days(week_start.offset(range.start) as i64);
        let total_days = (range.end - grid_start).num_days() as usize + 1;
        let num_weeks = total_days.div_ceil(DAYS_PER_WEEK);

        Self {
            range,
            week_start,
            grid_start,
            levels: std::array::from_fn(|_| vec![IntensityLevel::NONE; num_weeks]),
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.range.start
    }

    pub fn end_date(&self) -> NaiveDate {
        self.range.end
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn grid_start(&self) -> NaiveDate {
        self.grid_start
    }

    pub fn num_weeks(&self) -> usize {
        self.levels[0].len()
    }

    pub fn row_labels(&self) -> [&'static str; DAYS_PER_WEEK] {
        self.week_start.row_labels()
    }

    pub fn weekday_of_row(&self, row: usize) -> Weekday {
        self.week_start.weekday_at(row)
    }

    pub fn level(&self, row: usize, week: usize) -> Option<IntensityLevel> {
        self.levels.get(row)?.get(week).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[IntensityLevel]> {
        self.levels.iter().map(Vec::as_slice)
    }

    /// Calendar day shown at `[row][week]`.
    pub fn date_at(&self, row: usize, week: usize) -> NaiveDate {
        self.grid_start + Duration::days((week * DAYS_PER_WEEK + row) as i64)
    }

    /// Grid position of `date`, if the grid has a column for it.
    pub fn position_of(&self, date: NaiveDate) -> Option<(usize, usize)> {
        let idx = usize::try_from((date - self.grid_start).num_days()).ok()?;
        let week = idx / DAYS_PER_WEEK;
        (week < self.num_weeks()).then_some((idx % DAYS_PER_WEEK, week))
    }

    pub fn in_range(&self, row: usize, week: usize) -> bool {
        row < DAYS_PER_WEEK
            && week < self.num_weeks()
            && self
                .grid_start
                .checked_add_signed(Duration::days((week * DAYS_PER_WEEK + row) as i64))
                .is_some_and(|day| self.range.contains(day))
    }
}
