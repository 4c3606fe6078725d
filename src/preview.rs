use crate::cli::PlanArgs;
use crate::config::SimulationConfig;
use crate::model::{DailyPlan, PlanOutput, PlanStats, SCHEMA_VERSION};
use crate::plan::generate_plan;
use crate::stats::{compute, render_calendar, render_sample, render_summary, render_weekdays};
use anyhow::{Context, Result};
use chrono::Utc;
use console::style;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct PreviewOptions {
    pub stats_only: bool,
    pub calendar: bool,
    pub sample: usize,
    pub json: bool,
    pub export: Option<PathBuf>,
}

pub fn exec(args: PlanArgs, opts: PreviewOptions) -> Result<()> {
    let config = SimulationConfig::resolve(&args.start, args.end.as_deref(), args.intensity, args.seed)
        .context("Failed to resolve simulation settings")?;

    let plan = generate_plan(&config.range, config.profile(), config.seed);
    let stats = compute(&plan);

    if opts.json {
        let days = (!opts.stats_only).then(|| plan.clone());
        println!("{}", serde_json::to_string_pretty(&plan_output(&config, &stats, days))?);
    } else {
        print_preview(&config, &plan, &stats, &opts);
    }

    if let Some(path) = &opts.export {
        export_plan(path, &config, &stats, &plan)?;
        if !opts.json {
            println!("\nExported to {}", style(path.display()).cyan());
        }
    }

    Ok(())
}

pub fn plan_output(config: &SimulationConfig, stats: &PlanStats, days: Option<Vec<DailyPlan>>) -> PlanOutput {
    PlanOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        intensity: config.intensity,
        seed: config.seed,
        range: config.range,
        stats: stats.clone(),
        days,
    }
}

/// Human-readable preview on stdout.
pub fn print_preview(config: &SimulationConfig, plan: &[DailyPlan], stats: &PlanStats, opts: &PreviewOptions) {
    println!(
        "Simulating {} contributor from {} to {} (seed {})",
        style(config.intensity).bold(),
        config.range.start,
        config.range.end,
        style(config.seed).yellow()
    );
    println!();

    if config.range.is_empty() {
        println!("Start date is after the end date; nothing to schedule.");
        return;
    }

    print!("{}", render_summary(stats));
    println!();
    print!("{}", render_weekdays(stats));

    if opts.calendar {
        println!();
        print!("{}", render_calendar(plan));
    }

    if !opts.stats_only {
        println!();
        print!("{}", render_sample(plan, opts.sample));
    }
}

fn export_plan(path: &Path, config: &SimulationConfig, stats: &PlanStats, plan: &[DailyPlan]) -> Result<()> {
    let output = plan_output(config, stats, Some(plan.to_vec()));
    let json = serde_json::to_string_pretty(&output)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
