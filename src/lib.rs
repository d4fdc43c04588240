pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod heat;
pub mod model;
pub mod util;

pub use error::{GitYearError, Result};
pub use heat::{build_grid, choose_level, CommitCountSource, HeatmapGrid};
pub use model::{CommitCounts, DateRange, IntensityLevel, WeekStart};
pub use util::build_date_range;
