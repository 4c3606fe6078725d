use super::message::generate_message;
use super::rng::{day_rng, gaussian};
use crate::model::{DailyPlan, DateRange, PlannedCommit};
use crate::profile::IntensityProfile;
use crate::util::is_weekend;
use chrono::{NaiveDate, NaiveTime};
use rand::Rng;
use std::collections::BTreeSet;
use tracing::debug;

const PEAK_ACCEPT: f64 = 0.7;
const OFF_PEAK_ACCEPT: f64 = 0.4;
const HOUR_ATTEMPTS: usize = 10;

/// Build the commit plan for every day in `range`, zero-commit days included.
pub fn generate_plan(range: &DateRange, profile: &IntensityProfile, seed: u64) -> Vec<DailyPlan> {
    let mut plan = Vec::with_capacity(range.len());
    for date in range.days() {
        plan.push(generate_day(date, profile, seed));
    }
    debug!(days = plan.len(), seed, "generated plan");
    plan
}

/// Plan a single day. Depends only on `(date, profile, seed)`.
pub fn generate_day(date: NaiveDate, profile: &IntensityProfile, seed: u64) -> DailyPlan {
    let mut rng = day_rng(seed, date);

    if rng.random::<f64>() >= profile.active_probability(is_weekend(date)) {
        return DailyPlan { date, commits: Vec::new() };
    }

    let count = commit_count(&mut rng, profile);
    let commits = commit_times(&mut rng, profile, count)
        .into_iter()
        .map(|time| PlannedCommit {
            at: date.and_time(time),
            message: generate_message(&mut rng),
        })
        .collect();

    DailyPlan { date, commits }
}

fn commit_count<R: Rng>(rng: &mut R, profile: &IntensityProfile) -> usize {
    let avg = profile.avg_commits_per_day;
    let mut count = (gaussian(rng, avg, avg * 0.5) as i64).max(1) as usize;

    if rng.random::<f64>() < profile.burst_probability {
        count = (count as f64 * profile.burst_multiplier) as usize;
    }

    count.min(profile.max_commits_per_day as usize)
}

/// Distinct, ascending times of day inside the profile's working window.
fn commit_times<R: Rng>(rng: &mut R, profile: &IntensityProfile, count: usize) -> Vec<NaiveTime> {
    let mut seconds: BTreeSet<u32> = BTreeSet::new();
    while seconds.len() < count {
        let hour = biased_hour(rng, profile.first_hour, profile.last_hour);
        let minute = rng.random_range(0..60u32);
        let second = rng.random_range(0..60u32);
        seconds.insert(hour * 3600 + minute * 60 + second);
    }

    seconds
        .into_iter()
        .filter_map(|s| NaiveTime::from_num_seconds_from_midnight_opt(s, 0))
        .collect()
}

fn is_peak_hour(hour: u32) -> bool {
    (10..=12).contains(&hour) || (14..=17).contains(&hour)
}

fn biased_hour<R: Rng>(rng: &mut R, first: u32, last: u32) -> u32 {
    for _ in 0..HOUR_ATTEMPTS {
        let hour = rng.random_range(first..=last);
        let accept = if is_peak_hour(hour) { PEAK_ACCEPT } else { OFF_PEAK_ACCEPT };
        if rng.random::<f64>() < accept {
            return hour;
        }
    }
    rng.random_range(first..=last)
}
