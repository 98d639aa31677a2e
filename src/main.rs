//! cabinet-calc - CLI tool to plan panel cuts for cabinet builds.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use cutplan_core::{
    generate_json, generate_summary, parse_input_file, plan_cabinets, validate_cabinets,
    CuttingPlan, PanelConfig, ValidationResult,
};

/// Plan stock panel usage and cut placement for a set of cabinets.
#[derive(Parser, Debug)]
#[command(name = "cabinet-calc")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input JSON job file
    input: PathBuf,

    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Panel width, overrides the job file
    #[arg(long)]
    panel_width: Option<f64>,

    /// Panel height, overrides the job file
    #[arg(long)]
    panel_height: Option<f64>,

    /// Blade kerf subtracted from every leftover, overrides the job file
    #[arg(long)]
    kerf: Option<f64>,

    /// Emit the plan as JSON instead of a text summary
    #[arg(long)]
    json: bool,

    /// Validate only, don't plan
    #[arg(long)]
    validate: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Layer command-line overrides on top of the job's panel section.
    fn panel_config(&self, from_file: Option<PanelConfig>) -> PanelConfig {
        let mut config = from_file.unwrap_or_default();
        if let Some(width) = self.panel_width {
            config.width = width;
        }
        if let Some(height) = self.panel_height {
            config.height = height;
        }
        if let Some(kerf) = self.kerf {
            config.kerf = kerf;
        }
        config
    }
}

fn render(args: &Args, plan: &CuttingPlan, failure: Option<&str>) -> Result<()> {
    let content = if args.json {
        generate_json(plan, failure)?
    } else {
        generate_summary(plan, failure)
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Generated: {}", path.display());
        }
        None => print!("{}", content),
    }

    Ok(())
}

/// Log validation findings, returning how many errors were logged.
///
/// When planning follows, the engine reports the first failure itself, so
/// errors are only logged in validate-only mode.
fn log_validation(validation: &ValidationResult, validate_only: bool) -> usize {
    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    if !validate_only {
        return 0;
    }

    for err in &validation.errors {
        error!("{}", err);
    }
    validation.errors.len()
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Processing: {}", args.input.display());

    let job = parse_input_file(&args.input)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;
    let config = args.panel_config(job.panel);

    info!(
        "Parsed {} cabinet(s), panel {} x {} (kerf {})",
        job.cabinets.len(),
        config.width,
        config.height,
        config.kerf
    );

    // Validate
    let validation = validate_cabinets(&job.cabinets, &config);
    log_validation(&validation, args.validate);

    if args.validate {
        if !validation.passed {
            anyhow::bail!("Validation failed");
        }
        info!("Validation passed");
        return Ok(());
    }

    match plan_cabinets(&job.cabinets, config) {
        Ok(plan) => {
            info!(
                "Planned {} cut(s) on {} panel(s)",
                plan.placements.len(),
                plan.panel_count()
            );
            render(&args, &plan, None)
        }
        Err(failure) => {
            let reason = failure.reason();
            render(&args, &failure.partial, Some(&reason))?;
            error!("Error code {}", failure.error.code_value());
            Err(anyhow::Error::new(failure).context("Planning failed"))
        }
    }
}
