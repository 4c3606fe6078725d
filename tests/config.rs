use chrono::NaiveDate;
use contribsim::config::SimulationConfig;
use contribsim::error::SimError;
use contribsim::profile::Intensity;
use contribsim::prompt::{is_yes, Confirm, LinePrompt};
use contribsim::util::parse_day;
use pretty_assertions::assert_eq;
use std::io::Cursor;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn accepts_the_three_intensities() {
    for (name, expected) in [
        ("light", Intensity::Light),
        ("medium", Intensity::Medium),
        ("heavy", Intensity::Heavy),
    ] {
        assert_eq!(name.parse::<Intensity>().unwrap(), expected);
        assert_eq!(expected.to_string(), name);
    }
}

#[test]
fn rejects_unknown_intensity() {
    for bad in ["extreme", "Heavy", "", " medium"] {
        match bad.parse::<Intensity>() {
            Err(SimError::UnknownIntensity(s)) => assert_eq!(s, bad),
            other => panic!("expected UnknownIntensity for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn profiles_grow_denser() {
    let [light, medium, heavy] = Intensity::ALL.map(Intensity::profile);
    assert!(light.daily_commit_prob < medium.daily_commit_prob);
    assert!(medium.daily_commit_prob < heavy.daily_commit_prob);
    assert!(light.max_commits_per_day < heavy.max_commits_per_day);
    for p in [light, medium, heavy] {
        assert!(p.first_hour <= p.last_hour && p.last_hour < 24);
        assert!(p.active_probability(true) < p.active_probability(false));
    }
}

#[test]
fn parses_day_formats() {
    let today = day(2026, 10, 16);
    assert_eq!(parse_day("2020-03-04", today).unwrap(), day(2020, 3, 4));
    assert_eq!(parse_day("2021-06-01T12:30:00+02:00", today).unwrap(), day(2021, 6, 1));
    assert_eq!(parse_day("2019", today).unwrap(), day(2019, 1, 1));
    assert_eq!(parse_day("10d", today).unwrap(), day(2026, 10, 6));
    assert_eq!(parse_day("2weeks", today).unwrap(), day(2026, 10, 2));
}

#[test]
fn rejects_garbage_dates() {
    let today = day(2026, 10, 16);
    assert!(matches!(parse_day("yesterday-ish", today), Err(SimError::InvalidDate(_))));
    assert!(matches!(parse_day("2020-13-01", today), Err(SimError::InvalidDate(_))));
}

#[test]
fn explicit_seed_is_kept() {
    let config = SimulationConfig::resolve("2020-01-01", Some("2020-12-31"), Intensity::Light, Some(99)).unwrap();
    assert_eq!(config.seed, 99);
    assert_eq!(config.range.len(), 366);
    assert_eq!(config.intensity, Intensity::Light);
}

#[test]
fn year_config_starts_on_january_first() {
    let config = SimulationConfig::from_year(2020, Intensity::Medium, Some(1)).unwrap();
    assert_eq!(config.range.start, day(2020, 1, 1));
    assert!(!config.range.is_empty());
}

#[test]
fn future_start_gives_empty_range() {
    let config = SimulationConfig::resolve("2999-01-01", None, Intensity::Medium, Some(1)).unwrap();
    assert!(config.range.is_empty());
    assert_eq!(config.range.len(), 0);
}

#[test]
fn answers() {
    assert!(is_yes("y\n"));
    assert!(is_yes(" YES "));
    assert!(!is_yes("n"));
    assert!(!is_yes(""));
    assert!(!is_yes("yep"));
}

#[test]
fn line_prompt_reads_one_answer() {
    let mut out = Vec::new();
    let mut prompt = LinePrompt::new(Cursor::new("y\nn\n"), &mut out);
    assert!(prompt.confirm("Proceed?").unwrap());
    assert!(!prompt.confirm("Again?").unwrap());
    drop(prompt);
    assert!(String::from_utf8(out).unwrap().contains("Proceed?"));
}

#[test]
fn line_prompt_treats_eof_as_no() {
    let mut prompt = LinePrompt::new(Cursor::new(""), Vec::new());
    assert!(!prompt.confirm("Proceed?").unwrap());
}
