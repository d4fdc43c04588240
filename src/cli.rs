use crate::model::WeekStart;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

const EXAMPLES: &str = "Examples:
  git-year
  git-year --year 2022
  git-year --week-start Monday";

#[derive(Parser)]
#[command(name = "git-year")]
#[command(about = "Display a year of commits in a compact GitHub-style heatmap in your terminal")]
#[command(version)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    #[arg(long, help = "Path to git repository")]
    pub repo: Option<PathBuf>,

    #[arg(
        long,
        value_parser = clap::value_parser!(i32).range(1..),
        help = "Show activity for the specified calendar year (e.g. --year 2024)"
    )]
    pub year: Option<i32>,

    #[arg(
        long,
        value_parser = parse_week_start,
        help = "Set the first day of the week (Sunday or Monday); remembered for later runs"
    )]
    pub week_start: Option<WeekStart>,

    #[arg(long, help = "Output as JSON")]
    pub json: bool,

    #[arg(long, help = "Do not count merge commits")]
    pub no_merges: bool,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(long, env = "GIT_YEAR_CONFIG", help = "Path to the preferences file")]
    pub config: Option<PathBuf>,
}

fn parse_week_start(value: &str) -> std::result::Result<WeekStart, String> {
    value.parse::<WeekStart>().map_err(|e| e.to_string())
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::heat::exec(&self)
    }
}
