use crate::profile::Intensity;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// Inclusive range of calendar days. Empty when `start > end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).num_days() as usize + 1
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedCommit {
    pub at: NaiveDateTime,
    pub message: String,
}

/// Scheduled commits for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPlan {
    pub date: NaiveDate,
    pub commits: Vec<PlannedCommit>,
}

impl DailyPlan {
    pub fn count(&self) -> usize {
        self.commits.len()
    }

    pub fn is_active(&self) -> bool {
        !self.commits.is_empty()
    }
}

/// A planned commit that has been written to a repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntheticCommit {
    pub id: String,
    pub timestamp: DateTime<FixedOffset>,
    pub message: String,
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanStats {
    pub total_commits: u64,
    pub active_days: u32,
    pub span_days: u32,
    pub first_day: Option<NaiveDate>,
    pub last_day: Option<NaiveDate>,
    pub avg_commits_per_active_day: f64,
    pub max_commits_in_day: u32,
    pub longest_streak: u32,
    /// Monday first.
    pub by_weekday: [u64; 7],
    pub by_hour: [u64; 24],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub intensity: Intensity,
    pub seed: u64,
    pub range: DateRange,
    pub stats: PlanStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<DailyPlan>>,
}
