use crate::error::{GitYearError, Result};
use crate::heat::CommitCountSource;
use crate::model::{CommitCounts, DateRange};
use chrono::{DateTime, FixedOffset, NaiveDate};
use gix::{discover, ObjectId, Repository};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
    include_merges: bool,
}

impl GitRepo {
    /// Open a repository at `path`, or current dir if `None`
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let repo_path = path
            .map(|p| p.as_ref().to_path_buf())
            .unwrap_or(std::env::current_dir()?);

        let repo = discover(&repo_path)?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();
        tracing::debug!(path = %path.display(), "opened repository");

        Ok(Self {
            repo,
            path,
            include_merges: true,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn include_merges(mut self, include: bool) -> Self {
        self.include_merges = include;
        self
    }

    /// Count commits reachable from HEAD per calendar day of `range`.
    ///
    /// A commit's day is its author date in the author's own timezone, the
    /// same day `git log --date=short --pretty=%ad` prints. An unborn HEAD
    /// has no history and yields no counts.
    pub fn daily_commit_counts(&self, range: &DateRange) -> Result<CommitCounts> {
        let mut head = self.repo.head()?;
        if head.is_unborn() {
            tracing::debug!("HEAD is unborn, no commits to count");
            return Ok(CommitCounts::new());
        }
        let head_commit = head.peel_to_commit_in_place()?;

        let mut counts = CommitCounts::new();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: VecDeque<ObjectId> = VecDeque::from([head_commit.id]);
        let mut counted = 0usize;

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Collecting commits...");

        while let Some(commit_id) = stack.pop_back() {
            if !seen.insert(commit_id) {
                continue;
            }

            let commit = self.repo.find_commit(commit_id)?;
            let authored = commit.author()?.time()?;
            let day = commit_day(authored.seconds, authored.offset)?;

            let parents: Vec<ObjectId> = commit.parent_ids().map(|id| id.into()).collect();
            let is_merge = parents.len() > 1;
            stack.extend(parents);

            if !range.contains(day) || (is_merge && !self.include_merges) {
                continue;
            }

            *counts.entry(day).or_insert(0) += 1;
            counted += 1;
            pb.inc(1);
        }

        pb.finish_and_clear();
        tracing::debug!(visited = seen.len(), counted, "walked commit history");
        Ok(counts)
    }
}

impl CommitCountSource for GitRepo {
    fn commit_counts(&self, range: &DateRange) -> Result<CommitCounts> {
        self.daily_commit_counts(range)
    }
}

/// Local calendar day of a git timestamp with its UTC offset in seconds.
fn commit_day(seconds: i64, offset: i32) -> Result<NaiveDate> {
    let tz = FixedOffset::east_opt(offset)
        .ok_or_else(|| GitYearError::InvalidDate(format!("Invalid timezone offset: {offset}")))?;
    let timestamp = DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| GitYearError::InvalidDate(format!("Invalid timestamp: {seconds}")))?;
    Ok(timestamp.with_timezone(&tz).date_naive())
}
