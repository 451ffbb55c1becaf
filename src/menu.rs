//! Interactive menu driver.
//!
//! Owns the current process set and the last scheduled result in an
//! explicit [`MenuState`]; the scheduler is called with borrowed data and
//! never sees the menu. Generic over reader and writer so sessions can be
//! scripted.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use tracing::{debug, warn};

use crate::config::SimConfig;
use crate::error::{ConfigError, ScheduleError};
use crate::generator::{ProcessGenerator, Scenario};
use crate::models::{Process, Tick};
use crate::report::{
    render_batch_summary, render_gantt, render_report, turnaround_histogram, waiting_histogram,
};
use crate::scheduler::FcfsScheduler;
use crate::sim::run_batch;
use crate::validation::validate_processes;

const MENU: &str = "\
FCFS Scheduler
  1) Enter processes manually
  2) Generate random processes
  3) Load a predefined scenario
  4) Run FCFS and show results
  5) Show Gantt chart and histograms
  6) Run batch simulation
  0) Exit";

/// Menu session state.
#[derive(Debug, Clone)]
pub struct MenuState {
    /// Process set awaiting scheduling.
    pub processes: Vec<Process>,
    /// Last scheduled set in execution order.
    pub results: Option<Vec<Process>>,
    /// Active configuration.
    pub config: SimConfig,
    next_seed: Option<u64>,
}

impl MenuState {
    /// Creates an empty session.
    pub fn new(config: SimConfig) -> Self {
        Self {
            processes: Vec::new(),
            results: None,
            next_seed: config.seed,
            config,
        }
    }

    /// Replaces the pending process set and clears stale results.
    pub fn set_processes(&mut self, processes: Vec<Process>) {
        self.processes = processes;
        self.results = None;
    }

    /// Schedules a copy of the pending set and stores the result.
    pub fn run_fcfs(&mut self) -> Result<&[Process], ScheduleError> {
        let scheduled = FcfsScheduler::new().schedule(self.processes.clone())?;
        let stored = self.results.insert(scheduled);
        Ok(stored.as_slice())
    }

    fn random_generator(&mut self) -> Result<ProcessGenerator, ConfigError> {
        match self.next_seed {
            Some(seed) => {
                // Successive generations differ but stay reproducible
                self.next_seed = Some(seed.wrapping_add(1));
                ProcessGenerator::seeded(self.config.generator.clone(), seed)
            }
            None => ProcessGenerator::from_entropy(self.config.generator.clone()),
        }
    }
}

/// Line-oriented prompt helper.
struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Reads one trimmed line. `None` on end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Re-prompts until the answer parses and passes `check`.
    fn ask_parsed<T: FromStr>(
        &mut self,
        prompt: &str,
        check: impl Fn(&T) -> Result<(), String>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match answer.parse::<T>() {
                Ok(value) => match check(&value) {
                    Ok(()) => return Ok(Some(value)),
                    Err(msg) => writeln!(self.output, "Invalid input: {msg}")?,
                },
                Err(_) => writeln!(self.output, "Invalid input: `{answer}` is not a number")?,
            }
        }
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }
}

/// Runs the interactive menu until the user exits or input ends.
pub fn run_menu<R: BufRead, W: Write>(
    state: &mut MenuState,
    input: R,
    output: W,
) -> io::Result<()> {
    let mut io = Prompter { input, output };

    loop {
        io.say(MENU)?;
        let Some(choice) = io.ask("Select an option: ")? else {
            return Ok(());
        };
        debug!(choice = %choice, "menu selection");

        let keep_going = match choice.as_str() {
            "1" => enter_manually(state, &mut io)?,
            "2" => generate_random(state, &mut io)?,
            "3" => load_scenario(state, &mut io)?,
            "4" => show_results(state, &mut io)?,
            "5" => show_charts(state, &mut io)?,
            "6" => batch(state, &mut io)?,
            "0" | "q" | "quit" | "exit" => {
                io.say("Goodbye.")?;
                return Ok(());
            }
            other => {
                io.say(&format!("Unknown option `{other}`."))?;
                true
            }
        };
        if !keep_going {
            return Ok(());
        }
        io.say("")?;
    }
}

fn non_negative(v: &Tick) -> Result<(), String> {
    if *v < 0 {
        Err("must not be negative".into())
    } else {
        Ok(())
    }
}

fn positive(v: &Tick) -> Result<(), String> {
    if *v <= 0 {
        Err("must be greater than zero".into())
    } else {
        Ok(())
    }
}

fn enter_manually<R: BufRead, W: Write>(
    state: &mut MenuState,
    io: &mut Prompter<R, W>,
) -> io::Result<bool> {
    let Some(count) = io.ask_parsed::<usize>("Enter the number of processes: ", |_| Ok(()))?
    else {
        return Ok(false);
    };

    let mut processes: Vec<Process> = Vec::new();
    for i in 1..=count {
        let prompt = format!("\nEnter Process ID for process {i}: ");
        let Some(pid) = io.ask_parsed::<u32>(&prompt, |pid| {
            if processes.iter().any(|p| p.pid == *pid) {
                Err(format!("process ID {pid} is already used"))
            } else {
                Ok(())
            }
        })?
        else {
            return Ok(false);
        };
        let Some(arrival) =
            io.ask_parsed::<Tick>(&format!("Enter Arrival Time for process {pid}: "), non_negative)?
        else {
            return Ok(false);
        };
        let Some(burst) =
            io.ask_parsed::<Tick>(&format!("Enter Burst Time for process {pid}: "), positive)?
        else {
            return Ok(false);
        };
        processes.push(Process::new(pid, arrival, burst));
    }

    store_validated(state, io, processes)?;
    Ok(true)
}

fn generate_random<R: BufRead, W: Write>(
    state: &mut MenuState,
    io: &mut Prompter<R, W>,
) -> io::Result<bool> {
    match state.random_generator() {
        Ok(mut generator) => {
            let processes = generator.generate();
            io.say(&format!("Generated {} random processes.", processes.len()))?;
            store_validated(state, io, processes)?;
        }
        Err(e) => io.say(&format!("Error: {e}"))?,
    }
    Ok(true)
}

fn load_scenario<R: BufRead, W: Write>(
    state: &mut MenuState,
    io: &mut Prompter<R, W>,
) -> io::Result<bool> {
    for (i, sc) in Scenario::ALL.iter().enumerate() {
        io.say(&format!("  {}) {:<14} {}", i + 1, sc.name(), sc.description()))?;
    }
    let count = Scenario::ALL.len();
    let Some(idx) = io.ask_parsed::<usize>("Select a scenario: ", |n| {
        if (1..=count).contains(n) {
            Ok(())
        } else {
            Err(format!("choose 1-{count}"))
        }
    })?
    else {
        return Ok(false);
    };

    let scenario = Scenario::ALL[idx - 1];
    state.set_processes(scenario.processes());
    io.say(&format!("Loaded scenario `{scenario}`."))?;
    Ok(true)
}

fn show_results<R: BufRead, W: Write>(
    state: &mut MenuState,
    io: &mut Prompter<R, W>,
) -> io::Result<bool> {
    if state.processes.is_empty() {
        io.say("No processes loaded.")?;
        return Ok(true);
    }
    let render = state.config.render.clone();
    match state.run_fcfs() {
        Ok(scheduled) => {
            let report = render_report(scheduled, &render);
            io.say(&report)?;
        }
        Err(e) => {
            warn!(error = %e, "scheduling failed");
            io.say(&format!("Error: {e}"))?;
        }
    }
    Ok(true)
}

fn show_charts<R: BufRead, W: Write>(
    state: &mut MenuState,
    io: &mut Prompter<R, W>,
) -> io::Result<bool> {
    let Some(results) = state.results.as_deref() else {
        io.say("Run FCFS first (option 4).")?;
        return Ok(true);
    };
    let render = &state.config.render;
    io.say("Gantt Chart")?;
    io.say(&render_gantt(results, render))?;
    io.say(&waiting_histogram(results, render))?;
    io.say(&turnaround_histogram(results, render))?;
    Ok(true)
}

fn batch<R: BufRead, W: Write>(
    state: &mut MenuState,
    io: &mut Prompter<R, W>,
) -> io::Result<bool> {
    let Some(runs) = io.ask_parsed::<usize>("Number of runs: ", |n| {
        if *n == 0 {
            Err("must be at least 1".into())
        } else {
            Ok(())
        }
    })?
    else {
        return Ok(false);
    };

    let config = state.config.batch_config().with_runs(runs);
    match run_batch(&config) {
        Ok(summary) => io.say(&render_batch_summary(&summary))?,
        Err(e) => io.say(&format!("Error: {e}"))?,
    }
    Ok(true)
}

fn store_validated<R: BufRead, W: Write>(
    state: &mut MenuState,
    io: &mut Prompter<R, W>,
    processes: Vec<Process>,
) -> io::Result<()> {
    match validate_processes(&processes) {
        Ok(()) => {
            state.set_processes(processes);
            io.say(&format!("{} processes ready.", state.processes.len()))
        }
        Err(errors) => {
            for e in &errors {
                io.say(&format!("Invalid input: {e}"))?;
            }
            Ok(())
        }
    }
}
