use crate::error::{Result, SimError};
use crate::util::commit_day;
use chrono::NaiveDate;
use gix::{ObjectId, Repository};
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

/// Commits already reachable from HEAD, bucketed by their local calendar day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryIndex {
    pub per_day: HashMap<NaiveDate, usize>,
    /// Newest commit time in seconds since the epoch.
    pub tip: Option<i64>,
    pub total: usize,
}

impl HistoryIndex {
    pub fn record(&mut self, seconds: i64, offset: i32) {
        if let Some(day) = commit_day(seconds, offset) {
            *self.per_day.entry(day).or_insert(0) += 1;
        }
        self.tip = Some(self.tip.map_or(seconds, |t| t.max(seconds)));
        self.total += 1;
    }

    pub fn on_day(&self, day: NaiveDate) -> usize {
        self.per_day.get(&day).copied().unwrap_or(0)
    }
}

impl GitRepo {
    /// Open the repository at `path`, creating the directory and running
    /// `init` when needed. Never searches parent directories.
    ///
    /// Returns the repository and whether it was freshly initialised.
    pub fn open_or_init(path: &Path) -> Result<(Self, bool)> {
        if path.exists() {
            let meta = std::fs::metadata(path)?;
            if !meta.is_dir() || meta.permissions().readonly() {
                return Err(SimError::NotWritable(path.to_path_buf()));
            }
        } else {
            info!(path = %path.display(), "creating directory");
            std::fs::create_dir_all(path)?;
        }

        let (repo, created) = if path.join(".git").exists() {
            (gix::open(path)?, false)
        } else {
            info!(path = %path.display(), "initialising repository");
            (gix::init(path)?, true)
        };
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok((Self { repo, path }, created))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Index every commit reachable from HEAD. An unborn HEAD yields an
    /// empty index.
    pub fn history(&self) -> Result<HistoryIndex> {
        let mut index = HistoryIndex::default();

        let mut head = self.repo.head()?;
        if head.is_unborn() {
            return Ok(index);
        }
        let head_commit = head.peel_to_commit_in_place()?;

        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: VecDeque<ObjectId> = VecDeque::from([head_commit.id]);

        while let Some(commit_id) = stack.pop_back() {
            if !seen.insert(commit_id) {
                continue;
            }

            let commit = self.repo.find_commit(commit_id)?;
            let time = commit.time()?;
            index.record(time.seconds, time.offset);

            for pid in commit.parent_ids() {
                stack.push_back(pid.into());
            }
        }

        debug!(commits = index.total, days = index.per_day.len(), "indexed history");
        Ok(index)
    }
}
