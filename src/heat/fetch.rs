use crate::error::Result;
use crate::model::{CommitCounts, DateRange};

/// Anything that can report how many commits landed on each day of a range.
pub trait CommitCountSource {
    fn commit_counts(&self, range: &DateRange) -> Result<CommitCounts>;
}

/// An in-memory mapping is its own source, restricted to the requested days.
impl CommitCountSource for CommitCounts {
    fn commit_counts(&self, range: &DateRange) -> Result<CommitCounts> {
        Ok(self
            .range(range.start..=range.end)
            .filter(|(_, &count)| count > 0)
            .map(|(&day, &count)| (day, count))
            .collect())
    }
}

pub fn fetch_commit_counts<S: CommitCountSource + ?Sized>(
    source: &S,
    range: &DateRange,
) -> Result<CommitCounts> {
    let counts = source.commit_counts(range)?;
    tracing::debug!(
        start = %range.start,
        end = %range.end,
        active_days = counts.len(),
        "collected commit counts"
    );
    Ok(counts)
}
