use crate::error::{Result, SimError};
use chrono::{DateTime, FixedOffset};
use std::path::Path;
use std::process::Command;
use tracing::{debug, trace};

pub const DEFAULT_NAME: &str = "Contribution Simulator";
pub const DEFAULT_EMAIL: &str = "simulator@example.com";

/// Author and committer identity for generated commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
        }
    }
}

/// One commit to create: the files to stage, the message, and the forced date.
#[derive(Debug, Clone)]
pub struct StagedCommit<'a> {
    pub paths: &'a [String],
    pub message: &'a str,
    pub when: DateTime<FixedOffset>,
}

fn run_git(workdir: &Path, args: &[&str], envs: &[(&str, String)]) -> Result<String> {
    trace!(?args, "running git");
    let out = Command::new("git")
        .args(args)
        .current_dir(workdir)
        .envs(envs.iter().map(|(k, v)| (*k, v.as_str())))
        .output()?;

    if !out.status.success() {
        return Err(SimError::GitCommand {
            command: args.join(" "),
            stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&out.stdout).trim().to_string())
}

/// Write `identity` into the repository-local config so commits work on
/// machines without a global git identity.
pub fn set_local_identity(workdir: &Path, identity: &Identity) -> Result<()> {
    run_git(workdir, &["config", "user.name", &identity.name], &[])?;
    run_git(workdir, &["config", "user.email", &identity.email], &[])?;
    debug!(name = %identity.name, email = %identity.email, "set local identity");
    Ok(())
}

/// Stage `commit.paths` and record only those paths, with author and
/// committer dates forced to `commit.when`. Returns the new commit id.
pub fn commit_at(workdir: &Path, commit: &StagedCommit<'_>, identity: Option<&Identity>) -> Result<String> {
    let mut add_args = vec!["add", "--"];
    add_args.extend(commit.paths.iter().map(String::as_str));
    run_git(workdir, &add_args, &[])?;

    let date = commit.when.to_rfc2822();
    let mut envs = vec![
        ("GIT_AUTHOR_DATE", date.clone()),
        ("GIT_COMMITTER_DATE", date),
    ];
    if let Some(id) = identity {
        envs.push(("GIT_AUTHOR_NAME", id.name.clone()));
        envs.push(("GIT_AUTHOR_EMAIL", id.email.clone()));
        envs.push(("GIT_COMMITTER_NAME", id.name.clone()));
        envs.push(("GIT_COMMITTER_EMAIL", id.email.clone()));
    }

    // Pathspecs imply --only: anything else already in the index stays staged.
    let mut commit_args = vec![
        "-c",
        "commit.gpgsign=false",
        "commit",
        "--quiet",
        "--no-verify",
        "-m",
        commit.message,
        "--",
    ];
    commit_args.extend(commit.paths.iter().map(String::as_str));
    run_git(workdir, &commit_args, &envs)?;

    let id = run_git(workdir, &["rev-parse", "HEAD"], &[])?;
    debug!(%id, when = %commit.when, "created commit");
    Ok(id)
}
