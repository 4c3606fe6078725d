use crate::model::{DailyPlan, PlanStats};
use chrono::{Datelike, Timelike};

/// Aggregate a plan. Pure; never touches the filesystem.
pub fn compute(plan: &[DailyPlan]) -> PlanStats {
    let mut stats = PlanStats {
        span_days: plan.len() as u32,
        first_day: plan.first().map(|d| d.date),
        last_day: plan.last().map(|d| d.date),
        ..PlanStats::default()
    };

    let mut streak = 0u32;
    for day in plan {
        let count = day.count() as u32;
        if count == 0 {
            streak = 0;
            continue;
        }

        stats.total_commits += count as u64;
        stats.active_days += 1;
        stats.max_commits_in_day = stats.max_commits_in_day.max(count);
        stats.by_weekday[day.date.weekday().num_days_from_monday() as usize] += count as u64;
        for commit in &day.commits {
            stats.by_hour[commit.at.hour() as usize] += 1;
        }

        streak += 1;
        stats.longest_streak = stats.longest_streak.max(streak);
    }

    if stats.active_days > 0 {
        stats.avg_commits_per_active_day = stats.total_commits as f64 / stats.active_days as f64;
    }

    stats
}
