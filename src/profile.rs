use crate::error::SimError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named density tier for synthetic activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Light,
    #[default]
    Medium,
    Heavy,
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [Intensity::Light, Intensity::Medium, Intensity::Heavy];

    pub fn name(self) -> &'static str {
        match self {
            Intensity::Light => "light",
            Intensity::Medium => "medium",
            Intensity::Heavy => "heavy",
        }
    }

    pub fn profile(self) -> &'static IntensityProfile {
        match self {
            Intensity::Light => &LIGHT,
            Intensity::Medium => &MEDIUM,
            Intensity::Heavy => &HEAVY,
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Intensity {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intensity::ALL
            .into_iter()
            .find(|i| i.name() == s)
            .ok_or_else(|| SimError::UnknownIntensity(s.to_string()))
    }
}

/// Density parameters for one intensity tier.
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityProfile {
    /// Probability that a weekday has any commits.
    pub daily_commit_prob: f64,
    /// Multiplier applied to `daily_commit_prob` on Saturday and Sunday.
    pub weekend_factor: f64,
    pub avg_commits_per_day: f64,
    pub max_commits_per_day: u32,
    pub burst_probability: f64,
    pub burst_multiplier: f64,
    /// Earliest commit hour.
    pub first_hour: u32,
    /// Latest commit hour, inclusive.
    pub last_hour: u32,
}

impl IntensityProfile {
    pub fn active_probability(&self, weekend: bool) -> f64 {
        if weekend {
            self.daily_commit_prob * self.weekend_factor
        } else {
            self.daily_commit_prob
        }
    }
}

static LIGHT: IntensityProfile = IntensityProfile {
    daily_commit_prob: 0.4,
    weekend_factor: 0.3,
    avg_commits_per_day: 1.5,
    max_commits_per_day: 4,
    burst_probability: 0.05,
    burst_multiplier: 2.5,
    first_hour: 9,
    last_hour: 18,
};

static MEDIUM: IntensityProfile = IntensityProfile {
    daily_commit_prob: 0.7,
    weekend_factor: 0.5,
    avg_commits_per_day: 3.0,
    max_commits_per_day: 8,
    burst_probability: 0.1,
    burst_multiplier: 2.0,
    first_hour: 8,
    last_hour: 22,
};

static HEAVY: IntensityProfile = IntensityProfile {
    daily_commit_prob: 0.9,
    weekend_factor: 0.7,
    avg_commits_per_day: 5.0,
    max_commits_per_day: 15,
    burst_probability: 0.15,
    burst_multiplier: 1.8,
    first_hour: 7,
    last_hour: 23,
};
