use std::path::PathBuf;

use anyhow::{bail, ensure, Context, Result};
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::Verbosity;
use env_logger::Builder;
use log::info;

use rhs_lp::{PivotRuleKind, resolve_with_rhs_values, solve_with_options, SolverOptions};
use rhs_lp::io::import;

/// A linear program solver with right-hand side sensitivity analysis.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// File containing the problem description (.lp or .txt)
    problem_file: PathBuf,
    /// Change the right-hand side of a constraint and solve again, e.g. `--rhs 3=30`
    ///
    /// Constraints are numbered from 1. May be repeated to change several constraints at once.
    #[arg(long = "rhs", value_name = "INDEX=VALUE", value_parser = parse_rhs_change)]
    rhs: Vec<(usize, f64)>,
    /// Rule used to select the entering column
    #[arg(long, value_enum, default_value_t = PivotRule::Dantzig)]
    pivot_rule: PivotRule,
    /// Values closer to zero than this are treated as zero
    #[arg(long, default_value_t = 1e-9)]
    tolerance: f64,
    /// Maximum number of pivots per phase
    #[arg(long)]
    max_iterations: Option<usize>,
    #[command(flatten)]
    verbose: Verbosity,
}

#[derive(Copy, Clone, ValueEnum)]
enum PivotRule {
    Dantzig,
    Bland,
}

impl From<PivotRule> for PivotRuleKind {
    fn from(rule: PivotRule) -> Self {
        match rule {
            PivotRule::Dantzig => PivotRuleKind::Dantzig,
            PivotRule::Bland => PivotRuleKind::Bland,
        }
    }
}

fn parse_rhs_change(argument: &str) -> Result<(usize, f64)> {
    let (index, value) = argument.split_once('=')
        .context("expected INDEX=VALUE")?;
    let index = index.trim().parse::<usize>()
        .with_context(|| format!("invalid constraint index \"{}\"", index))?;
    ensure!(index > 0, "constraints are numbered from 1");
    let value = value.trim().parse::<f64>()
        .with_context(|| format!("invalid right-hand side value \"{}\"", value))?;

    Ok((index - 1, value))
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    Builder::new().filter_level(opts.verbose.log_level_filter()).init();

    ensure!(
        opts.tolerance.is_finite() && opts.tolerance > 0_f64,
        "the tolerance should be a positive number, got {}", opts.tolerance,
    );
    let options = SolverOptions {
        tolerance: opts.tolerance,
        iteration_limit: opts.max_iterations,
        pivot_rule: opts.pivot_rule.into(),
    };

    println!("Reading problem file: \"{}\"...", opts.problem_file.to_string_lossy());
    let model = import(&opts.problem_file)
        .with_context(|| format!("Couldn't read {:?}", opts.problem_file))?;
    info!("Read a model with {} variables and {} constraints", model.nr_variables(), model.nr_constraints());

    let result = solve_with_options(&model, &options).context("Solving the model")?;
    println!("{}", result);

    if opts.rhs.is_empty() {
        return Ok(());
    }

    let mut values = model.rhs();
    for &(index, value) in &opts.rhs {
        if index >= values.len() {
            bail!("constraint {} does not exist, there are {} constraints", index + 1, values.len());
        }
        println!("Changing the right-hand side of {} to {}", model.constraint_name(index), value);
        values[index] = value;
    }

    let change = resolve_with_rhs_values(&model, &result, &values, &options)
        .context("Solving the changed model")?;
    println!("{}", change);

    Ok(())
}
