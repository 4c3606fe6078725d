use crate::model::{DailyPlan, PlanStats};
use crate::util::WEEKDAY_LABELS;
use chrono::{Datelike, Days};
use console::style;
use std::fmt::Write;

const BAR_WIDTH: usize = 30;
const LEVELS: [&str; 4] = ["░", "▒", "▓", "█"];

pub fn render_summary(stats: &PlanStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", style("Statistics").bold());
    let _ = writeln!(out, "{}", "─".repeat(50));

    match (stats.first_day, stats.last_day) {
        (Some(first), Some(last)) => {
            let _ = writeln!(
                out,
                "Date range:                 {} to {} ({} days)",
                style(first).dim(),
                style(last).dim(),
                stats.span_days
            );
        }
        _ => {
            let _ = writeln!(out, "Date range:                 {}", style("empty").dim());
        }
    }
    let _ = writeln!(out, "Total commits:              {}", style(stats.total_commits).cyan());
    let _ = writeln!(out, "Active days:                {}", style(stats.active_days).cyan());
    let _ = writeln!(
        out,
        "Avg commits per active day: {}",
        style(format!("{:.1}", stats.avg_commits_per_active_day)).cyan()
    );
    let _ = writeln!(out, "Max commits in a day:       {}", style(stats.max_commits_in_day).cyan());
    let _ = writeln!(out, "Longest streak:             {} days", style(stats.longest_streak).green());
    out
}

/// Commits per weekday as horizontal bars.
pub fn render_weekdays(stats: &PlanStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", style("Commits by weekday").bold());

    let max = stats.by_weekday.iter().copied().max().unwrap_or(0);
    for (label, &count) in WEEKDAY_LABELS.iter().zip(stats.by_weekday.iter()) {
        let width = if max > 0 {
            (count as f64 / max as f64 * BAR_WIDTH as f64) as usize
        } else {
            0
        };
        let _ = writeln!(out, "  {label}: {count:>5} {}", style("█".repeat(width)).green());
    }
    out
}

/// First `limit` scheduled commits, oldest first.
pub fn render_sample(plan: &[DailyPlan], limit: usize) -> String {
    let mut out = String::new();
    let total: usize = plan.iter().map(DailyPlan::count).sum();
    let _ = writeln!(out, "{}", style(format!("First {} commits", limit.min(total))).bold());

    for commit in plan.iter().flat_map(|d| &d.commits).take(limit) {
        let _ = writeln!(
            out,
            "  {} - {}",
            style(commit.at.format("%Y-%m-%d %H:%M")).dim(),
            commit.message
        );
    }
    if total > limit {
        let _ = writeln!(out, "  ... and {} more", total - limit);
    }
    out
}

fn level_cell(count: usize, max: usize) -> String {
    if count == 0 || max == 0 {
        return style("·").dim().to_string();
    }
    let ratio = count as f64 / max as f64;
    let idx = ((ratio * LEVELS.len() as f64).ceil() as usize).clamp(1, LEVELS.len()) - 1;
    style(LEVELS[idx]).green().to_string()
}

/// Contribution-graph style grid: one block per year, weeks as columns and
/// weekdays (Monday first) as rows.
pub fn render_calendar(plan: &[DailyPlan]) -> String {
    let mut out = String::new();
    let max = plan.iter().map(DailyPlan::count).max().unwrap_or(0);

    for year in plan.chunk_by(|a, b| a.date.year() == b.date.year()) {
        let (Some(first), Some(last)) = (year.first(), year.last()) else {
            continue;
        };
        let back = Days::new(first.date.weekday().num_days_from_monday() as u64);
        let Some(origin) = first.date.checked_sub_days(back) else {
            continue;
        };
        let weeks = ((last.date - origin).num_days() / 7 + 1) as usize;

        let mut grid = vec![vec![" ".to_string(); weeks]; 7];
        for day in year {
            let col = ((day.date - origin).num_days() / 7) as usize;
            let row = day.date.weekday().num_days_from_monday() as usize;
            grid[row][col] = level_cell(day.count(), max);
        }

        let _ = writeln!(out, "{}", style(first.date.year()).bold());
        for (label, row) in WEEKDAY_LABELS.iter().zip(grid) {
            let _ = writeln!(out, "  {label} {}", row.concat());
        }
    }

    let _ = writeln!(
        out,
        "  Less {} {} More",
        style("·").dim(),
        style(LEVELS.concat()).green()
    );
    out
}
