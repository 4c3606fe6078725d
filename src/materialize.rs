use crate::error::Result;
use crate::git::{set_local_identity, GitRepo, HistoryIndex, Identity, StagedCommit};
use crate::model::{DailyPlan, PlannedCommit, SyntheticCommit};
use crate::util::localize;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

const README: &str = "# Contribution history\n\nGenerated with contribsim.\n";

#[derive(Debug, Clone)]
pub struct CommitOptions {
    pub repo: PathBuf,
    pub identity: Option<Identity>,
    pub dry_run: bool,
}

/// A planned commit that still has to be written.
#[derive(Debug, Clone)]
pub struct PendingCommit<'a> {
    pub date: NaiveDate,
    pub commit: &'a PlannedCommit,
    pub when: DateTime<FixedOffset>,
}

#[derive(Debug, Default)]
pub struct Schedule<'a> {
    pub pending: Vec<PendingCommit<'a>>,
    /// Slots whose day already holds enough commits.
    pub skipped_existing: usize,
    /// Slots not strictly after the newest commit in the repository.
    pub skipped_behind_tip: usize,
}

#[derive(Debug, Default)]
pub struct MaterializeReport {
    pub planned: usize,
    pub created: Vec<SyntheticCommit>,
    pub would_create: usize,
    pub skipped_existing: usize,
    pub skipped_behind_tip: usize,
    pub repo_created: bool,
}

/// Decide which planned commits still need writing given what the repository
/// already holds. A day is never filled past its planned count and history
/// only grows forward in time.
pub fn schedule<'a>(plan: &'a [DailyPlan], history: &HistoryIndex) -> Schedule<'a> {
    let mut out = Schedule::default();

    for day in plan {
        let existing = history.on_day(day.date);
        for (slot, commit) in day.commits.iter().enumerate() {
            if slot < existing {
                out.skipped_existing += 1;
                continue;
            }

            let when = localize(commit.at);
            if history.tip.is_some_and(|tip| when.timestamp() <= tip) {
                out.skipped_behind_tip += 1;
                continue;
            }

            out.pending.push(PendingCommit {
                date: day.date,
                commit,
                when,
            });
        }
    }

    out
}

/// Repository-relative file touched by commits on `date`.
pub fn content_path(date: NaiveDate) -> String {
    format!("content/{}/{}.md", date.year(), date.format("%Y-%m-%d"))
}

fn append_entry(workdir: &Path, rel: &str, pending: &PendingCommit<'_>) -> Result<()> {
    let file = workdir.join(rel);
    if let Some(parent) = file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut f = OpenOptions::new().create(true).append(true).open(&file)?;
    writeln!(
        f,
        "- {} {}",
        pending.commit.at.format("%H:%M:%S"),
        pending.commit.message
    )?;
    Ok(())
}

/// Index the history of an existing repository at `repo` without creating
/// anything. A path with no `.git` has an empty history.
pub fn existing_history(repo: &Path) -> Result<HistoryIndex> {
    if !repo.join(".git").exists() {
        return Ok(HistoryIndex::default());
    }
    let (repo, _) = GitRepo::open_or_init(repo)?;
    repo.history()
}

/// Write `plan` into the repository at `options.repo` as backdated commits.
///
/// Stops at the first failure; commits already written stay in place.
pub fn materialize(plan: &[DailyPlan], options: &CommitOptions) -> Result<MaterializeReport> {
    let planned = plan.iter().map(DailyPlan::count).sum();

    if options.dry_run {
        let history = existing_history(&options.repo)?;
        let sched = schedule(plan, &history);
        return Ok(MaterializeReport {
            planned,
            would_create: sched.pending.len(),
            skipped_existing: sched.skipped_existing,
            skipped_behind_tip: sched.skipped_behind_tip,
            ..MaterializeReport::default()
        });
    }

    let (repo, repo_created) = GitRepo::open_or_init(&options.repo)?;
    if repo_created {
        let identity = options.identity.clone().unwrap_or_default();
        set_local_identity(repo.path(), &identity)?;
    }
    let history = repo.history()?;
    let sched = schedule(plan, &history);
    if sched.skipped_existing + sched.skipped_behind_tip > 0 {
        warn!(
            existing = sched.skipped_existing,
            behind_tip = sched.skipped_behind_tip,
            "skipping commits already covered by repository history"
        );
    }

    let mut report = MaterializeReport {
        planned,
        would_create: sched.pending.len(),
        skipped_existing: sched.skipped_existing,
        skipped_behind_tip: sched.skipped_behind_tip,
        repo_created,
        ..MaterializeReport::default()
    };

    let workdir = repo.path().to_path_buf();
    let mut seed_readme = history.total == 0 && !workdir.join("README.md").exists();

    let pb = ProgressBar::new(sched.pending.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb.set_message("Creating commits...");

    for pending in &sched.pending {
        let rel = content_path(pending.date);
        let mut paths = vec![rel.clone()];
        if seed_readme {
            std::fs::write(workdir.join("README.md"), README)?;
            paths.push("README.md".to_string());
        }

        let staged = StagedCommit {
            paths: &paths,
            message: &pending.commit.message,
            when: pending.when,
        };
        let result = append_entry(&workdir, &rel, pending)
            .and_then(|()| crate::git::command::commit_at(&workdir, &staged, options.identity.as_ref()));

        let id = match result {
            Ok(id) => id,
            Err(e) => {
                error!(created = report.created.len(), error = %e, "commit failed");
                pb.abandon_with_message(format!("Stopped after {} commits", report.created.len()));
                return Err(e);
            }
        };
        seed_readme = false;

        report.created.push(SyntheticCommit {
            id,
            timestamp: pending.when,
            message: pending.commit.message.clone(),
            path: rel,
        });
        pb.inc(1);
    }

    pb.finish_with_message("Commits created");
    info!(created = report.created.len(), "materialized plan");
    Ok(report)
}
