use rand::seq::IndexedRandom;
use rand::Rng;

const PREFIXES: &[&str] = &[
    "feat", "fix", "docs", "style", "refactor", "test", "chore", "perf", "build", "ci", "wip",
];

const ACTIONS: &[&str] = &[
    "update", "add", "remove", "fix", "implement", "refactor", "optimize", "improve", "clean up",
    "rework", "simplify", "enhance", "adjust", "tweak", "revise", "modify", "patch",
];

const OBJECTS: &[&str] = &[
    "README",
    "config",
    "tests",
    "utils",
    "helpers",
    "main module",
    "API",
    "docs",
    "dependencies",
    "deployment",
    "CI config",
    "error handling",
    "validation",
    "logging",
    "database",
    "models",
    "routes",
    "components",
    "styles",
    "assets",
];

// Empty entries leave the detail off.
const DETAILS: &[&str] = &[
    "for better performance",
    "to handle edge cases",
    "based on feedback",
    "for compatibility",
    "to fix bug",
    "as requested",
    "for clarity",
    "per review comments",
    "to improve UX",
    "to address security issue",
    "",
    "",
    "",
];

fn pick<R: Rng>(rng: &mut R, words: &'static [&'static str]) -> &'static str {
    words.choose(rng).copied().unwrap_or_default()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Produce a plausible commit subject line.
pub fn generate_message<R: Rng>(rng: &mut R) -> String {
    let style: f64 = rng.random();

    if style < 0.4 {
        let prefix = pick(rng, PREFIXES);
        let action = pick(rng, ACTIONS);
        let object = pick(rng, OBJECTS);
        match pick(rng, DETAILS) {
            "" => format!("{prefix}: {action} {object}"),
            detail => format!("{prefix}: {action} {object} {detail}"),
        }
    } else if style < 0.7 {
        let action = capitalize(pick(rng, ACTIONS));
        let object = pick(rng, OBJECTS);
        format!("{action} {object}")
    } else {
        let action = pick(rng, ACTIONS);
        let object = pick(rng, OBJECTS);
        match pick(rng, DETAILS) {
            "" => format!("{action} {object}"),
            detail => format!("{action} {object} {detail}"),
        }
    }
}
