use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use ep_dynamics::{ReverseShootingSolver, ShootingOptions, Trajectory};

mod scenario;

use scenario::{CliError, CliResult, build_dynamics, load_scenario};

#[derive(Parser)]
#[command(name = "enpath")]
#[command(about = "Energy transition paths - two-sector market model solver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a scenario file without solving anything
    Validate {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
    },
    /// Clear the market at a given non-renewable capital stock
    Price {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// Non-renewable capital stock
        #[arg(long)]
        capital: f64,
    },
    /// Locate the saddle-point equilibrium
    Equilibrium {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
    },
    /// Solve the transition path by reverse shooting
    Solve {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// Initial capital stock (overrides the scenario's solve section)
        #[arg(long)]
        capital: Option<f64>,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Price {
            scenario_path,
            capital,
        } => cmd_price(&scenario_path, capital),
        Commands::Equilibrium { scenario_path } => cmd_equilibrium(&scenario_path),
        Commands::Solve {
            scenario_path,
            capital,
            output,
        } => cmd_solve(&scenario_path, capital, output.as_deref()),
    }
}

fn cmd_validate(scenario_path: &Path) -> CliResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = load_scenario(scenario_path)?;
    build_dynamics(&scenario)?;
    println!("✓ Scenario is valid");
    if let Some(solve) = &scenario.solve {
        println!(
            "  Solve: initial capital {} from t = {}, dt = {}",
            solve.initial_capital, solve.start_time, solve.dt
        );
    } else {
        println!("  No solve section (pass --capital to `solve`)");
    }
    Ok(())
}

fn cmd_price(scenario_path: &Path, capital: f64) -> CliResult<()> {
    let scenario = load_scenario(scenario_path)?;
    let dynamics = build_dynamics(&scenario)?;
    let price = dynamics.market_price(capital)?;
    let non_renewable = dynamics.non_renewable_output(capital, price)?;
    let renewable = dynamics.renewable_output(price)?;

    println!("Market clearing at capital = {}", capital);
    println!("  Price: {:.6}", price);
    println!("  Non-renewable supply: {:.6}", non_renewable);
    println!("  Renewable supply:     {:.6}", renewable);
    println!("  Demand:               {:.6}", scenario.demand);
    Ok(())
}

fn cmd_equilibrium(scenario_path: &Path) -> CliResult<()> {
    let scenario = load_scenario(scenario_path)?;
    let dynamics = build_dynamics(&scenario)?;
    let eq = dynamics.equilibrium()?;
    let price = dynamics.market_price(eq.capital)?;

    println!("Saddle-point equilibrium:");
    println!("  q*:       {:.9}", eq.q);
    println!("  Capital:  {:.9}", eq.capital);
    println!("  Price:    {:.9}", price);
    Ok(())
}

fn cmd_solve(
    scenario_path: &Path,
    capital_override: Option<f64>,
    output: Option<&Path>,
) -> CliResult<()> {
    let scenario = load_scenario(scenario_path)?;
    let dynamics = build_dynamics(&scenario)?;

    let (initial_capital, start_time, options) = match (&scenario.solve, capital_override) {
        (Some(solve), override_capital) => (
            override_capital.unwrap_or(solve.initial_capital),
            solve.start_time,
            solve.shooting_options(),
        ),
        (None, Some(capital)) => (capital, 0.0, ShootingOptions::default()),
        (None, None) => return Err(CliError::MissingInitialCapital),
    };

    eprintln!(
        "Solving transition path from capital = {} at t = {}",
        initial_capital, start_time
    );
    let trajectory =
        ReverseShootingSolver::new(options).solve(&dynamics, start_time, initial_capital)?;

    if let (Some(first), Some(last)) = (trajectory.first(), trajectory.last()) {
        eprintln!(
            "✓ Solved: {} samples, t = {:.3} .. {:.3}, capital {:.6} -> {:.6}",
            trajectory.len(),
            first.t,
            last.t,
            first.capital,
            last.capital
        );
    }

    // Build CSV
    let csv = render_csv(&trajectory);

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        eprintln!(
            "✓ Exported {} samples to {}",
            trajectory.len(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }

    Ok(())
}

fn render_csv(trajectory: &Trajectory) -> String {
    let mut csv = String::from(
        "t,q,capital,price,output_non_renewable,output_renewable,\
         cost_non_renewable,cost_renewable,profit_non_renewable,profit_renewable\n",
    );
    for p in trajectory.points() {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{}\n",
            p.t,
            p.q,
            p.capital,
            p.price,
            p.output_non_renewable,
            p.output_renewable,
            p.cost_non_renewable,
            p.cost_renewable,
            p.profit_non_renewable,
            p.profit_renewable
        ));
    }
    csv
}
