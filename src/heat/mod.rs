pub mod aggregate;
pub mod exec;
pub mod fetch;
pub mod grid;
pub mod output;

pub use aggregate::{build_grid, choose_level, total_commits};
pub use exec::exec;
pub use fetch::{fetch_commit_counts, CommitCountSource};
pub use grid::{HeatmapGrid, DAYS_PER_WEEK};
pub use output::{heatmap_output, output_heatmap, output_json, render_heatmap, Palette};
