use crate::error::{GitYearError, Result};
use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub const SCHEMA_VERSION: u32 = 1;

/// Commits per calendar day. Days without commits are simply absent.
pub type CommitCounts = BTreeMap<NaiveDate, u32>;

const MONDAY_ALIASES: &[&str] = &["m", "mo", "mon", "monday"];
const SUNDAY_ALIASES: &[&str] = &["s", "su", "sun", "sunday"];

/// Which weekday opens a heatmap column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    pub fn as_str(self) -> &'static str {
        match self {
            WeekStart::Monday => "monday",
            WeekStart::Sunday => "sunday",
        }
    }

    pub fn first_weekday(self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
        }
    }

    /// Row of `weekday` in a grid laid out with this convention.
    pub fn row_of(self, weekday: Weekday) -> usize {
        match self {
            WeekStart::Monday => weekday.num_days_from_monday() as usize,
            WeekStart::Sunday => weekday.num_days_from_sunday() as usize,
        }
    }

    /// Weekday shown on `row`. Rows wrap modulo 7.
    pub fn weekday_at(self, row: usize) -> Weekday {
        (0..row % 7).fold(self.first_weekday(), |day, _| day.succ())
    }

    /// Number of days between `date` and the first day of its week.
    pub fn offset(self, date: NaiveDate) -> u32 {
        self.row_of(date.weekday()) as u32
    }

    pub fn row_labels(self) -> [&'static str; 7] {
        match self {
            WeekStart::Monday => ["M", "T", "W", "T", "F", "S", "S"],
            WeekStart::Sunday => ["S", "M", "T", "W", "T", "F", "S"],
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeekStart {
    type Err = GitYearError;

    fn from_str(value: &str) -> Result<Self> {
        let normalized = value.trim().to_lowercase();
        if MONDAY_ALIASES.contains(&normalized.as_str()) {
            Ok(WeekStart::Monday)
        } else if SUNDAY_ALIASES.contains(&normalized.as_str()) {
            Ok(WeekStart::Sunday)
        } else {
            Err(GitYearError::InvalidWeekStart(value.to_string()))
        }
    }
}

/// Lower bounds (inclusive) of levels 1 through 4.
const LEVEL_THRESHOLDS: [u32; 4] = [1, 3, 6, 10];

/// Ordinal activity bucket from 0 (no commits) to 4 (busy day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct IntensityLevel(u8);

impl IntensityLevel {
    pub const NONE: IntensityLevel = IntensityLevel(0);
    pub const MAX: IntensityLevel = IntensityLevel(4);
    pub const COUNT: usize = 5;

    pub fn from_count(count: u32) -> Self {
        let level = LEVEL_THRESHOLDS
            .iter()
            .take_while(|&&threshold| count >= threshold)
            .count();
        IntensityLevel(level as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Inclusive span of calendar days. Always non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(GitYearError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayEntry {
    pub date: NaiveDate,
    pub commit_count: u32,
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub week_start: WeekStart,
    pub grid_start: NaiveDate,
    pub num_weeks: usize,
    pub row_labels: Vec<String>,
    pub total_commits: u64,
    pub rows: Vec<Vec<u8>>,
    pub days: Vec<DayEntry>,
}
