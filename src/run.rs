use crate::cli::RepoArgs;
use crate::config::SimulationConfig;
use crate::generate::generate;
use crate::materialize::{existing_history, schedule, CommitOptions};
use crate::plan::generate_plan;
use crate::preview::{print_preview, PreviewOptions};
use crate::profile::Intensity;
use crate::prompt::{AssumeYes, Confirm, LinePrompt};
use crate::stats::compute;
use anyhow::{Context, Result};
use console::style;

pub fn exec(start_year: i32, intensity: Intensity, target: RepoArgs, seed: Option<u64>, yes: bool) -> Result<()> {
    let config = SimulationConfig::from_year(start_year, intensity, seed)
        .context("Failed to resolve simulation settings")?;
    let options = CommitOptions {
        repo: target.repo.clone(),
        identity: target.identity(),
        dry_run: false,
    };

    if yes {
        run(&config, &options, &mut AssumeYes)
    } else {
        run(&config, &options, &mut LinePrompt::stdio())
    }
}

fn banner() {
    println!("{}", style("contribsim").bold().green());
    println!("{}", "─".repeat(50));
}

/// Preview, ask, then generate. Both phases use `config.seed`, so what gets
/// committed is exactly what was previewed.
pub fn run<C: Confirm>(config: &SimulationConfig, options: &CommitOptions, confirm: &mut C) -> Result<()> {
    banner();

    let plan = generate_plan(&config.range, config.profile(), config.seed);
    let stats = compute(&plan);
    let preview = PreviewOptions {
        stats_only: true,
        ..PreviewOptions::default()
    };
    print_preview(config, &plan, &stats, &preview);
    println!();

    let history = existing_history(&options.repo)
        .with_context(|| format!("Failed to read history of {}", options.repo.display()))?;
    let sched = schedule(&plan, &history);
    let skipped = sched.skipped_existing + sched.skipped_behind_tip;
    if skipped > 0 {
        println!(
            "{} planned commits are already covered by the repository history.",
            style(skipped).yellow()
        );
    }

    let question = format!(
        "Create {} commits in {}?",
        sched.pending.len(),
        options.repo.display()
    );
    if !confirm.confirm(&question).context("Failed to read confirmation")? {
        println!("Cancelled; nothing was written.");
        return Ok(());
    }

    println!();
    generate(config, options)?;
    Ok(())
}
