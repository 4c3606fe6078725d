use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG for a single calendar day.
///
/// Each day depends only on `(seed, date)`, so a plan for a sub-range is the
/// matching slice of the plan for any wider range.
pub fn day_rng(seed: u64, date: NaiveDate) -> StdRng {
    StdRng::seed_from_u64(mix(seed, date.num_days_from_ce() as u64))
}

// splitmix64 finaliser over the combined inputs
fn mix(seed: u64, day: u64) -> u64 {
    let mut z = seed ^ day.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Normal sample via Box-Muller.
pub fn gaussian<R: Rng>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    // 1 - u keeps the log argument in (0, 1]
    let u1: f64 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random::<f64>();
    let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
    mean + z * std_dev
}
