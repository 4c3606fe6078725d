use crate::git::Identity;
use crate::profile::Intensity;
use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_START_YEAR: i32 = 2020;
pub const DEFAULT_REPO: &str = "./contribution-repo";

#[derive(Parser)]
#[command(name = "contribsim")]
#[command(about = "Preview and generate backdated synthetic git history for contribution graphs")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true, action = ArgAction::Count, help = "Increase log verbosity (-v, -vv)")]
    pub verbose: u8,

    #[arg(short, long, global = true, help = "Only log errors")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct PlanArgs {
    #[arg(long, short = 's', help = "First day to fill (YYYY-MM-DD, RFC3339, YYYY, or a duration like 90d)")]
    pub start: String,

    #[arg(long, short = 'e', help = "Last day to fill, inclusive (defaults to today)")]
    pub end: Option<String>,

    #[arg(long, short = 'i', default_value = "medium", help = "Contribution intensity: light, medium, or heavy")]
    pub intensity: Intensity,

    #[arg(long, help = "Random seed; reuse it to reproduce a plan")]
    pub seed: Option<u64>,
}

#[derive(Args, Clone)]
pub struct RepoArgs {
    #[arg(long, short = 'r', default_value = DEFAULT_REPO, help = "Target repository, created if absent")]
    pub repo: PathBuf,

    #[arg(long, requires = "author_email", help = "Author and committer name for generated commits")]
    pub author_name: Option<String>,

    #[arg(long, requires = "author_name", help = "Author and committer email for generated commits")]
    pub author_email: Option<String>,
}

impl RepoArgs {
    pub fn identity(&self) -> Option<Identity> {
        match (&self.author_name, &self.author_email) {
            (Some(name), Some(email)) => Some(Identity {
                name: name.clone(),
                email: email.clone(),
            }),
            _ => None,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Simulate a contribution pattern without touching any repository
    Preview {
        #[clap(flatten)]
        plan: PlanArgs,

        #[arg(long, help = "Only show statistics, no commit list")]
        stats_only: bool,

        #[arg(long, help = "Draw a contribution-graph style calendar")]
        calendar: bool,

        #[arg(long, default_value_t = 10, help = "Number of commits to list")]
        sample: usize,

        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, short = 'o', help = "Write the full plan as JSON to this file")]
        export: Option<PathBuf>,
    },
    /// Write the plan into a repository as backdated commits
    Generate {
        #[clap(flatten)]
        plan: PlanArgs,

        #[clap(flatten)]
        target: RepoArgs,

        #[arg(long, short = 'n', help = "Show what would be created without writing anything")]
        dry_run: bool,
    },
    /// Preview, confirm, then generate with the same seed
    Run {
        #[arg(help = "Year to start from (January 1st)", default_value_t = DEFAULT_START_YEAR)]
        start_year: i32,

        #[arg(help = "Contribution intensity: light, medium, or heavy", default_value = "medium")]
        intensity: Intensity,

        #[clap(flatten)]
        target: RepoArgs,

        #[arg(long, help = "Random seed; drawn once and shared by both phases when omitted")]
        seed: Option<u64>,

        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Preview { plan, stats_only, calendar, sample, json, export } => {
                let opts = crate::preview::PreviewOptions {
                    stats_only,
                    calendar,
                    sample,
                    json,
                    export,
                };
                crate::preview::exec(plan, opts)
            }
            Commands::Generate { plan, target, dry_run } => {
                crate::generate::exec(plan, target, dry_run)
            }
            Commands::Run { start_year, intensity, target, seed, yes } => {
                crate::run::exec(start_year, intensity, target, seed, yes)
            }
        }
    }
}
