use crate::cli::{PlanArgs, RepoArgs};
use crate::config::SimulationConfig;
use crate::materialize::{materialize, CommitOptions, MaterializeReport};
use crate::plan::generate_plan;
use crate::stats::compute;
use anyhow::{Context, Result};
use console::style;

pub fn exec(args: PlanArgs, target: RepoArgs, dry_run: bool) -> Result<()> {
    let config = SimulationConfig::resolve(&args.start, args.end.as_deref(), args.intensity, args.seed)
        .context("Failed to resolve simulation settings")?;
    let options = CommitOptions {
        repo: target.repo.clone(),
        identity: target.identity(),
        dry_run,
    };
    generate(&config, &options)?;
    Ok(())
}

/// Regenerate the plan for `config` and write it out.
pub fn generate(config: &SimulationConfig, options: &CommitOptions) -> Result<MaterializeReport> {
    println!("{}", style("Configuration").bold());
    println!("  Repository: {}", options.repo.display());
    println!("  Date range: {} to {}", config.range.start, config.range.end);
    println!("  Intensity:  {}", config.intensity);
    println!("  Seed:       {}", config.seed);
    println!(
        "  Mode:       {}",
        if options.dry_run {
            style("DRY RUN (no commits will be made)").yellow()
        } else {
            style("LIVE").green()
        }
    );
    println!();

    let plan = generate_plan(&config.range, config.profile(), config.seed);
    let stats = compute(&plan);
    println!(
        "Planned {} commits over {} active days",
        style(stats.total_commits).cyan(),
        style(stats.active_days).cyan()
    );

    let report = materialize(&plan, options)
        .with_context(|| format!("Failed to write commits into {}", options.repo.display()))?;

    print_report(&report, options.dry_run);
    Ok(report)
}

fn print_report(report: &MaterializeReport, dry_run: bool) {
    let skipped = report.skipped_existing + report.skipped_behind_tip;
    if skipped > 0 {
        println!(
            "Skipped {} commits already covered by history ({} on filled days, {} before the newest commit)",
            style(skipped).yellow(),
            report.skipped_existing,
            report.skipped_behind_tip
        );
    }

    if dry_run {
        println!("Would create {} commits.", style(report.would_create).cyan());
    } else {
        println!("Complete! Created {} commits.", style(report.created.len()).green());
        if report.repo_created {
            println!("Initialised a new repository; push it yourself when ready.");
        }
    }
}
