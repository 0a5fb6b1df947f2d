use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use ci_app::{
    AppError, AppResult, growth_schedule, list_calculations, load_scenario, run_scenario,
    schedule_csv, validate_scenario, write_report,
};
use ci_core::{Field, parse_frequency};
use ci_form::{DisplayOptions, FormState};

#[derive(Parser)]
#[command(name = "ci-cli")]
#[command(about = "Compound interest solver - compute A, P, R, T or n from the other four", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve for one field given the other four
    Solve(SolveArgs),
    /// Validate scenario file syntax and structure
    Validate {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
    },
    /// List calculations in a scenario
    List {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
    },
    /// Run the calculations in a scenario
    Run {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
        /// Only run the calculation with this ID
        #[arg(long)]
        id: Option<String>,
        /// Write a JSON report to this path
        #[arg(long)]
        report: Option<PathBuf>,
        /// Decimal places for displayed values
        #[arg(long, default_value_t = 2)]
        decimals: usize,
    },
    /// Export the period-by-period balance as CSV
    Schedule {
        /// Initial amount invested
        #[arg(long)]
        principal: f64,
        /// Annual rate in percent
        #[arg(long)]
        rate: f64,
        /// Duration in years
        #[arg(long)]
        time: f64,
        /// Periods per year or a preset (monthly, quarterly, ...)
        #[arg(long)]
        frequency: String,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct SolveArgs {
    /// Field to solve for (principal, rate, time, frequency, amount)
    #[arg(short, long, default_value = "amount")]
    target: Field,
    /// Initial amount invested
    #[arg(long)]
    principal: Option<String>,
    /// Annual rate in percent
    #[arg(long)]
    rate: Option<String>,
    /// Duration in years
    #[arg(long)]
    time: Option<String>,
    /// Periods per year or a preset (monthly, quarterly, ...)
    #[arg(long)]
    frequency: Option<String>,
    /// Final amount
    #[arg(long)]
    amount: Option<String>,
    /// Decimal places for displayed values
    #[arg(long, default_value_t = 2)]
    decimals: usize,
}

impl SolveArgs {
    fn raw(&self, field: Field) -> Option<&str> {
        match field {
            Field::Principal => self.principal.as_deref(),
            Field::Rate => self.rate.as_deref(),
            Field::Time => self.time.as_deref(),
            Field::Frequency => self.frequency.as_deref(),
            Field::Amount => self.amount.as_deref(),
        }
    }
}

fn display_options(decimals: usize) -> DisplayOptions {
    DisplayOptions {
        currency_decimals: decimals,
        rate_decimals: decimals,
        time_decimals: decimals,
    }
}

fn main() -> AppResult<()> {
    // Logs go to stderr so CSV and result lines stay clean on stdout
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => cmd_solve(&args),
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::List { scenario_path } => cmd_list(&scenario_path),
        Commands::Run {
            scenario_path,
            id,
            report,
            decimals,
        } => cmd_run(&scenario_path, id.as_deref(), report.as_deref(), decimals),
        Commands::Schedule {
            principal,
            rate,
            time,
            frequency,
            output,
        } => cmd_schedule(principal, rate, time, &frequency, output.as_deref()),
    }
}

/// Build the form for `solve`, resolving frequency presets to a count.
fn solve_form(args: &SolveArgs) -> FormState {
    let mut form = FormState::new()
        .with_target(args.target)
        .with_display(display_options(args.decimals));

    for field in args.target.knowns() {
        let Some(text) = args.raw(field) else {
            continue;
        };
        if field == Field::Frequency
            && let Ok(n) = parse_frequency(text)
        {
            form.set_value(field, Some(f64::from(n)));
        } else {
            form.set_raw(field, text);
        }
    }

    if args.raw(args.target).is_some() {
        tracing::warn!(
            field = args.target.key(),
            "ignoring value supplied for the field being solved for"
        );
    }
    form
}

fn cmd_solve(args: &SolveArgs) -> AppResult<()> {
    println!("{}", solve_form(args).calculate());
    Ok(())
}

fn cmd_validate(scenario_path: &Path) -> AppResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = load_scenario(scenario_path)?;
    validate_scenario(&scenario)?;
    println!("✓ Scenario is valid");
    Ok(())
}

fn cmd_list(scenario_path: &Path) -> AppResult<()> {
    let scenario = load_scenario(scenario_path)?;
    let calculations = list_calculations(&scenario);

    if calculations.is_empty() {
        println!("No calculations found in scenario");
    } else {
        println!("Calculations in '{}':", scenario.name);
        for calc in calculations {
            let supplied: Vec<&str> = calc.supplied.iter().map(|f| f.key()).collect();
            println!(
                "  {} - {} (solve for {}; given {})",
                calc.id,
                calc.name,
                calc.solve_for.key(),
                supplied.join(", ")
            );
        }
    }
    Ok(())
}

fn cmd_run(
    scenario_path: &Path,
    id: Option<&str>,
    report_path: Option<&Path>,
    decimals: usize,
) -> AppResult<()> {
    let mut scenario = load_scenario(scenario_path)?;
    if let Some(id) = id {
        let calc = ci_app::get_calculation(&scenario, id)?.clone();
        scenario.calculations = vec![calc];
    }
    validate_scenario(&scenario)?;

    let report = run_scenario(&scenario, display_options(decimals))?;
    println!("Scenario: {}", report.scenario);
    for result in &report.results {
        println!("  {}: {}", result.id, result.line);
    }

    let failures = report.results.iter().filter(|r| r.is_error()).count();
    if failures > 0 {
        println!("\n{} of {} calculations failed", failures, report.results.len());
    }

    if let Some(path) = report_path {
        write_report(path, &report)?;
        println!("✓ Report written to {}", path.display());
    }
    Ok(())
}

fn cmd_schedule(
    principal: f64,
    rate: f64,
    time: f64,
    frequency: &str,
    output: Option<&Path>,
) -> AppResult<()> {
    let n = parse_frequency(frequency)?;
    let rows = growth_schedule(principal, rate, time, f64::from(n))?;
    let csv = schedule_csv(&rows);

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, csv).map_err(|e| AppError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
        println!("✓ Exported {} periods to {}", rows.len(), path.display());
    } else {
        print!("{}", csv);
    }

    Ok(())
}
