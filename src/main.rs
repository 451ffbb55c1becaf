use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use fcfs_sim::config::SimConfig;
use fcfs_sim::generator::{parse_processes, ProcessGenerator, Scenario};
use fcfs_sim::logging::init_tracing;
use fcfs_sim::menu::{run_menu, MenuState};
use fcfs_sim::models::Process;
use fcfs_sim::report::{render_batch_summary, render_report};
use fcfs_sim::scheduler::schedule;
use fcfs_sim::sim::run_batch;

#[derive(Parser, Debug)]
#[command(name = "fcfs-sim", version, about = "FCFS CPU scheduling simulator")]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// RNG seed for random process sets
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Chart width in columns
    #[arg(long, global = true)]
    width: Option<usize>,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Schedule one process set and print the report
    Run(RunArgs),
    /// Average metrics over many random process sets
    Batch {
        /// Number of runs
        #[arg(long)]
        runs: Option<usize>,
        /// Processes per run
        #[arg(long)]
        count: Option<usize>,
    },
    /// Interactive menu (default)
    Menu,
    /// List predefined scenarios
    Scenarios,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct RunArgs {
    /// Predefined scenario name
    #[arg(long)]
    scenario: Option<Scenario>,

    /// Process file with `pid arrival burst` lines
    #[arg(long)]
    file: Option<PathBuf>,

    /// Random process set
    #[arg(long)]
    random: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;

    match cli.command.unwrap_or(Command::Menu) {
        Command::Run(args) => {
            let processes = load_processes(&args, &config)?;
            let scheduled = schedule(processes).context("scheduling failed")?;
            print!("{}", render_report(&scheduled, &config.render));
        }
        Command::Batch { runs, count } => {
            let mut batch = config.batch_config();
            if let Some(runs) = runs {
                if runs == 0 {
                    bail!("--runs must be at least 1");
                }
                batch.runs = runs;
            }
            if let Some(count) = count {
                batch.generator.process_count = count;
            }
            let summary = run_batch(&batch)?;
            print!("{}", render_batch_summary(&summary));
        }
        Command::Menu => {
            let mut state = MenuState::new(config);
            let stdin = io::stdin();
            run_menu(&mut state, stdin.lock(), io::stdout().lock())?;
        }
        Command::Scenarios => {
            for sc in Scenario::ALL {
                println!("{:<14} {}", sc.name(), sc.description());
            }
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<SimConfig> {
    let mut config = match &cli.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if let Some(width) = cli.width {
        config.render.chart_width = width;
    }
    config.validate().context("invalid configuration")?;
    info!(?config, "configuration ready");
    Ok(config)
}

fn load_processes(args: &RunArgs, config: &SimConfig) -> Result<Vec<Process>> {
    if let Some(scenario) = args.scenario {
        return Ok(scenario.processes());
    }
    if let Some(path) = &args.file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        return parse_processes(&text)
            .with_context(|| format!("invalid process file {}", path.display()));
    }

    let mut generator = match config.seed {
        Some(seed) => ProcessGenerator::seeded(config.generator.clone(), seed)?,
        None => ProcessGenerator::from_entropy(config.generator.clone())?,
    };
    Ok(generator.generate())
}
