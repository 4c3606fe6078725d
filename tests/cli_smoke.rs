use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

fn contribsim() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("contribsim").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn git_lines(dir: &Path, args: &[&str]) -> Vec<String> {
    let out = Command::new("git").args(args).current_dir(dir).output().unwrap();
    assert!(out.status.success());
    String::from_utf8(out.stdout)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn preview_json(start: &str, end: &str, intensity: &str, seed: &str) -> serde_json::Value {
    let out = contribsim()
        .args(["preview", "--json", "--start", start, "--end", end, "--intensity", intensity, "--seed", seed])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).unwrap()
}

#[test]
fn preview_json_reports_stats_and_days() {
    let v = preview_json("2022-01-01", "2022-03-31", "medium", "42");
    assert_eq!(v["version"], 1);
    assert_eq!(v["seed"], 42);
    assert_eq!(v["intensity"], "medium");
    assert_eq!(v["stats"]["span_days"], 90);
    assert_eq!(v["days"].as_array().map(Vec::len), Some(90));

    let again = preview_json("2022-01-01", "2022-03-31", "medium", "42");
    assert_eq!(v["stats"], again["stats"]);
    assert_eq!(v["days"], again["days"]);
}

#[test]
fn light_previews_fewer_commits_than_heavy() {
    let light = preview_json("2020-01-01", "2024-12-31", "light", "2020");
    let heavy = preview_json("2020-01-01", "2024-12-31", "heavy", "2020");
    let total = |v: &serde_json::Value| v["stats"]["total_commits"].as_u64().unwrap();
    let active = |v: &serde_json::Value| v["stats"]["active_days"].as_u64().unwrap();
    assert!(total(&light) < total(&heavy));
    assert!(active(&light) < active(&heavy));
}

#[test]
fn stats_only_preview_touches_nothing() {
    let dir = tempdir().unwrap();
    let out = contribsim()
        .current_dir(dir.path())
        .args(["preview", "--stats-only", "--calendar", "--start", "2023-01-01", "--end", "2023-06-30", "--seed", "5"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Total commits:"));
    assert!(!text.contains("First "));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn export_writes_full_plan() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("plan.json");
    contribsim()
        .args(["preview", "--stats-only", "--start", "2023-01-01", "--end", "2023-01-31", "--seed", "3", "--export"])
        .arg(&file)
        .assert()
        .success();
    let v: serde_json::Value = serde_json::from_slice(&std::fs::read(&file).unwrap()).unwrap();
    assert_eq!(v["days"].as_array().map(Vec::len), Some(31));
}

#[test]
fn unknown_intensity_fails_before_prompt() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("target");
    let assert = contribsim()
        .args(["run", "2020", "extreme", "--repo"])
        .arg(&target)
        .write_stdin("y\n")
        .assert()
        .failure();
    let out = assert.get_output();
    assert!(!String::from_utf8_lossy(&out.stdout).contains("[y/N]"));
    assert!(String::from_utf8_lossy(&out.stderr).contains("extreme"));
    assert!(!target.exists());
}

#[test]
fn declining_the_prompt_creates_nothing() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("target");
    let out = contribsim()
        .args(["run", "2020", "light", "--seed", "1", "--repo"])
        .arg(&target)
        .write_stdin("n\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("[y/N]"));
    assert!(text.contains("Cancelled"));
    assert!(!target.exists());
}

#[test]
fn generate_matches_preview_in_order() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();
    let target = dir.path().join("history");

    let preview = preview_json("2023-03-01", "2023-03-31", "medium", "11");
    let planned_days: Vec<String> = preview["days"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|d| {
            let n = d["commits"].as_array().map(Vec::len).unwrap_or(0);
            std::iter::repeat_n(d["date"].as_str().unwrap().to_string(), n)
        })
        .collect();

    let generate = |target: &Path| {
        contribsim()
            .args([
                "generate",
                "--start",
                "2023-03-01",
                "--end",
                "2023-03-31",
                "--seed",
                "11",
                "--author-name",
                "Sim Tester",
                "--author-email",
                "sim@example.com",
                "--repo",
            ])
            .arg(target)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };

    let first = String::from_utf8(generate(&target)).unwrap();
    assert!(first.contains(&format!("Created {} commits", planned_days.len())));

    let dates = git_lines(&target, &["log", "--reverse", "--date=format:%Y-%m-%d", "--format=%ad"]);
    assert_eq!(dates, planned_days);

    let stamps: Vec<i64> = git_lines(&target, &["log", "--reverse", "--format=%ct"])
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    assert!(stamps.windows(2).all(|w| w[0] <= w[1]));

    let second = String::from_utf8(generate(&target)).unwrap();
    assert!(second.contains("Created 0 commits"));
    assert_eq!(git_lines(&target, &["rev-list", "HEAD"]).len(), planned_days.len());
}

#[test]
fn run_with_yes_uses_one_seed_for_both_phases() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();
    let target = dir.path().join("history");
    let year = chrono::Local::now().format("%Y").to_string();

    let out = contribsim()
        .args([
            "run",
            &year,
            "light",
            "--seed",
            "21",
            "--yes",
            "--author-name",
            "Sim Tester",
            "--author-email",
            "sim@example.com",
            "--repo",
        ])
        .arg(&target)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();

    let planned: u64 = text
        .lines()
        .find_map(|l| l.strip_prefix("Total commits:"))
        .map(|s| s.trim().parse().unwrap())
        .unwrap();
    assert!(text.contains(&format!("Created {planned} commits")));

    let rerun = contribsim()
        .args(["run", &year, "light", "--seed", "21", "--repo"])
        .arg(&target)
        .write_stdin("n\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let rerun = String::from_utf8(rerun).unwrap();
    assert!(rerun.contains("Create 0 commits"), "{rerun}");
    if planned > 0 {
        assert!(rerun.contains(&format!("{planned} planned commits are already covered")));
    }
    assert_eq!(git_lines(&target, &["rev-list", "HEAD"]).len() as u64, planned);
}

#[test]
fn generate_works_without_a_global_git_identity() {
    if !has_git() {
        return;
    }
    let home = tempdir().unwrap();
    let dir = tempdir().unwrap();
    let target = dir.path().join("history");

    contribsim()
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env_remove("GIT_AUTHOR_NAME")
        .env_remove("GIT_AUTHOR_EMAIL")
        .env_remove("GIT_COMMITTER_NAME")
        .env_remove("GIT_COMMITTER_EMAIL")
        .env_remove("EMAIL")
        .args(["generate", "--start", "2023-02-01", "--end", "2023-02-14", "--intensity", "heavy", "--seed", "8", "--repo"])
        .arg(&target)
        .assert()
        .success();

    let authors = git_lines(&target, &["log", "--format=%an <%ae>"]);
    assert!(!authors.is_empty());
    assert!(authors
        .iter()
        .all(|a| a == "Contribution Simulator <simulator@example.com>"));
}

#[test]
fn dry_run_generate_leaves_no_repo() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("history");
    let out = contribsim()
        .args(["generate", "--dry-run", "--start", "2023-01-01", "--end", "2023-01-10", "--seed", "4", "--repo"])
        .arg(&target)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert!(String::from_utf8(out).unwrap().contains("Would create"));
    assert!(!target.exists());
}
