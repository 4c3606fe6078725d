use crate::error::Result;
use crate::model::DateRange;
use crate::profile::{Intensity, IntensityProfile};
use crate::util::{parse_day, today, year_start};

/// Everything the pattern generator needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub range: DateRange,
    pub intensity: Intensity,
    pub seed: u64,
}

impl SimulationConfig {
    /// Resolve `--start`/`--end` strings. `end` defaults to today; a missing
    /// seed is drawn once here so every later phase sees the same value.
    pub fn resolve(
        start: &str,
        end: Option<&str>,
        intensity: Intensity,
        seed: Option<u64>,
    ) -> Result<Self> {
        let today = today();
        let start = parse_day(start, today)?;
        let end = match end {
            Some(e) => parse_day(e, today)?,
            None => today,
        };
        Ok(Self {
            range: DateRange::new(start, end),
            intensity,
            seed: seed.unwrap_or_else(rand::random),
        })
    }

    /// Range from January 1st of `year` through today.
    pub fn from_year(year: i32, intensity: Intensity, seed: Option<u64>) -> Result<Self> {
        Ok(Self {
            range: DateRange::new(year_start(year)?, today()),
            intensity,
            seed: seed.unwrap_or_else(rand::random),
        })
    }

    pub fn profile(&self) -> &'static IntensityProfile {
        self.intensity.profile()
    }
}
