use assert_cmd::prelude::*;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

fn git(dir: &Path, args: &[&str]) {
    assert!(Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

fn init_git_repo(dir: &Path) {
    git(dir, &["init"]);
    git(dir, &["config", "user.email", "you@example.com"]);
    git(dir, &["config", "user.name", "Your Name"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
}

fn commit_with_dates(dir: &Path, authored: &str, committed: &str, message: &str) {
    assert!(Command::new("git")
        .args(["commit", "--allow-empty", "-m", message])
        .env("GIT_AUTHOR_DATE", authored)
        .env("GIT_COMMITTER_DATE", committed)
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

fn commit_on(dir: &Path, date: &str, n: usize) {
    let stamp = format!("{date}T12:00:00+00:00");
    for i in 0..n {
        commit_with_dates(dir, &stamp, &stamp, &format!("work {date} #{i}"));
    }
}

fn git_year(repo: &Path, config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("git-year").unwrap();
    cmd.current_dir(repo)
        .env_remove("GIT_YEAR_CONFIG")
        .arg("--repo")
        .arg(repo)
        .arg("--config")
        .arg(config);
    cmd
}

fn json_of(cmd: &mut Command) -> serde_json::Value {
    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).unwrap()
}

#[test]
fn year_json_places_commits_on_their_days() {
    let dir = tempdir().unwrap();
    let cfg = tempdir().unwrap();
    if !has_git() {
        return;
    }
    init_git_repo(dir.path());
    // Wednesday and Tuesday
    commit_on(dir.path(), "2023-03-15", 3);
    commit_on(dir.path(), "2023-07-04", 10);
    commit_on(dir.path(), "2022-12-31", 1);

    let config = cfg.path().join("config.toml");
    let v = json_of(
        git_year(dir.path(), &config).args(["--year", "2023", "--week-start", "Sunday", "--json"]),
    );

    assert_eq!(v["start_date"], "2023-01-01");
    assert_eq!(v["end_date"], "2023-12-31");
    assert_eq!(v["week_start"], "sunday");
    assert_eq!(v["grid_start"], "2023-01-01");
    assert_eq!(v["num_weeks"], 53);
    assert_eq!(v["total_commits"], 13);
    assert_eq!(v["row_labels"][0], "S");
    assert_eq!(v["rows"][3][10], 2);
    assert_eq!(v["rows"][2][26], 4);

    let days = v["days"].as_array().unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0]["date"], "2023-03-15");
    assert_eq!(days[0]["commit_count"], 3);
}

#[test]
fn commits_land_on_their_author_date() {
    let dir = tempdir().unwrap();
    let cfg = tempdir().unwrap();
    if !has_git() {
        return;
    }
    init_git_repo(dir.path());
    // rebased later: authored in March, committed in June
    commit_with_dates(dir.path(), "2023-03-15T12:00:00+00:00", "2023-06-01T12:00:00+00:00", "rebased");
    // late evening in UTC-5 is already the next day in UTC
    commit_with_dates(dir.path(), "2023-08-09T23:30:00-05:00", "2023-08-09T23:30:00-05:00", "late");

    let v = json_of(
        git_year(dir.path(), &cfg.path().join("config.toml")).args(["--year", "2023", "--json"]),
    );
    let dates: Vec<&str> = v["days"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, ["2023-03-15", "2023-08-09"]);
    assert_eq!(v["total_commits"], 2);
}

#[test]
fn week_start_is_remembered() {
    let dir = tempdir().unwrap();
    let cfg = tempdir().unwrap();
    if !has_git() {
        return;
    }
    init_git_repo(dir.path());
    commit_on(dir.path(), "2022-05-02", 1);

    let config = cfg.path().join("git-year").join("config.toml");
    json_of(git_year(dir.path(), &config).args(["--year", "2022", "--week-start", "su", "--json"]));
    let saved = std::fs::read_to_string(&config).unwrap();
    assert!(saved.contains("week_start = \"sunday\""));

    let v = json_of(git_year(dir.path(), &config).args(["--year", "2022", "--json"]));
    assert_eq!(v["week_start"], "sunday");
    assert_eq!(v["grid_start"], "2021-12-26");

    let v = json_of(git_year(dir.path(), &config).args(["--year", "2022", "--week-start", "MONDAY", "--json"]));
    assert_eq!(v["week_start"], "monday");
    assert_eq!(v["grid_start"], "2021-12-27");
}

#[test]
fn text_output_draws_seven_rows() {
    let dir = tempdir().unwrap();
    let cfg = tempdir().unwrap();
    if !has_git() {
        return;
    }
    init_git_repo(dir.path());
    commit_on(dir.path(), "2021-06-01", 2);

    let out = git_year(dir.path(), &cfg.path().join("config.toml"))
        .args(["--year", "2021", "--week-start", "monday", "--no-color"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Git commit map from 2021-01-01 to 2021-12-31");
    let labels: Vec<&str> = lines[2..9].iter().map(|l| &l[..1]).collect();
    assert_eq!(labels, ["M", "T", "W", "T", "F", "S", "S"]);
    // 2021-01-01 is a Friday, so the grid opens on Monday 2020-12-28
    assert!(lines[2..9].iter().all(|l| l.len() == 2 + 53));
}

#[test]
fn empty_repository_renders_blank_map() {
    let dir = tempdir().unwrap();
    let cfg = tempdir().unwrap();
    if !has_git() {
        return;
    }
    init_git_repo(dir.path());

    let v = json_of(git_year(dir.path(), &cfg.path().join("config.toml")).args(["--year", "2020", "--json"]));
    assert_eq!(v["total_commits"], 0);
    assert!(v["rows"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|r| r.as_array().unwrap())
        .all(|c| c == 0));
}

#[test]
fn outside_a_repository_fails_with_hint() {
    let dir = tempdir().unwrap();
    let cfg = tempdir().unwrap();

    let assert = git_year(dir.path(), &cfg.path().join("config.toml")).assert().failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("not a git repository"), "{stderr}");
}

#[test]
fn invalid_arguments_are_usage_errors() {
    let dir = tempdir().unwrap();
    let cfg = tempdir().unwrap();
    let config = cfg.path().join("config.toml");

    git_year(dir.path(), &config).args(["--week-start", "friday"]).assert().code(2);
    git_year(dir.path(), &config).args(["--year", "0"]).assert().code(2);
    git_year(dir.path(), &config).args(["--year", "twenty"]).assert().code(2);
    assert!(!config.exists());
}

#[test]
fn future_year_is_rejected() {
    let dir = tempdir().unwrap();
    let cfg = tempdir().unwrap();

    let assert = git_year(dir.path(), &cfg.path().join("config.toml"))
        .args(["--year", "9999"])
        .assert()
        .failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("super productive"), "{stderr}");
}

#[test]
fn version_flag() {
    let mut cmd = Command::cargo_bin("git-year").unwrap();
    let out = cmd.arg("--version").assert().success().get_output().stdout.clone();
    assert!(String::from_utf8(out).unwrap().starts_with("git-year "));
}
