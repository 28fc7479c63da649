//! Box-leveling claw controller.
//!
//! Computes the next claw action for a stack layout, replays decisions in a
//! simulated rig, and checks bracket balance.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use leveler::core::brackets::brackets_balanced;
use leveler::core::error::DecisionError;
use leveler::core::rig::Rig;
use leveler::core::types::Action;
use leveler::exit_codes;
use leveler::io::config::{DEFAULT_CONFIG_PATH, LevelerConfig, load_config, write_config};
use leveler::io::trace::write_trace;
use leveler::logging;
use leveler::request::{DecideRequest, parse_arg};
use leveler::simulate::{SimulationStop, StepRecord, run_simulation};
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "leveler",
    version,
    about = "Deterministic controller for a box-leveling claw"
)]
struct Cli {
    /// Path to the TOML config (defaults are used when the file is missing).
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default config file if missing.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the next action for a claw position, stack layout and holding flag.
    ///
    /// Arguments are parsed as JSON; anything that is not valid JSON is taken
    /// as a string.
    Decide {
        #[arg(required_unless_present = "request", allow_negative_numbers = true)]
        claw: Option<String>,
        #[arg(required_unless_present = "request")]
        stacks: Option<String>,
        #[arg(required_unless_present = "request", allow_negative_numbers = true)]
        holding: Option<String>,
        /// Read a JSON request object from a file (`-` for stdin).
        #[arg(long, conflicts_with_all = ["claw", "stacks", "holding"])]
        request: Option<PathBuf>,
    },
    /// Replay decisions on a simulated rig until FINISHED or WARNING.
    Simulate {
        #[arg(allow_negative_numbers = true)]
        claw: String,
        stacks: String,
        #[arg(allow_negative_numbers = true)]
        holding: String,
        /// Override `simulation.max_steps` from the config.
        #[arg(long)]
        max_steps: Option<u32>,
        /// Write the full run as JSON.
        #[arg(long)]
        trace: Option<PathBuf>,
    },
    /// Check that `()`, `[]` and `{}` are balanced.
    Brackets { input: String },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { force } => cmd_init(&cli.config, force),
        Command::Decide {
            claw,
            stacks,
            holding,
            request,
        } => {
            let cfg = load_config(&cli.config)?;
            let request = match request {
                Some(path) => read_request(&path)?,
                None => DecideRequest {
                    claw_position: claw.as_deref().map(parse_arg).unwrap_or_default(),
                    stacks: stacks.as_deref().map(parse_arg).unwrap_or_default(),
                    holding: holding.as_deref().map(parse_arg).unwrap_or_default(),
                },
            };
            cmd_decide(&cfg, &request)
        }
        Command::Simulate {
            claw,
            stacks,
            holding,
            max_steps,
            trace,
        } => {
            let cfg = load_config(&cli.config)?;
            let request = DecideRequest {
                claw_position: parse_arg(&claw),
                stacks: parse_arg(&stacks),
                holding: parse_arg(&holding),
            };
            let max_steps = max_steps.unwrap_or(cfg.simulation.max_steps);
            cmd_simulate(&cfg, &request, max_steps, trace.as_deref())
        }
        Command::Brackets { input } => cmd_brackets(&input),
    }
}

fn cmd_init(path: &Path, force: bool) -> Result<i32> {
    if !force && path.exists() {
        println!("init: {} exists (use --force to overwrite)", path.display());
        return Ok(exit_codes::OK);
    }
    write_config(path, &LevelerConfig::default())
        .with_context(|| format!("write {}", path.display()))?;
    println!("init: wrote {}", path.display());
    Ok(exit_codes::OK)
}

fn cmd_decide(cfg: &LevelerConfig, request: &DecideRequest) -> Result<i32> {
    debug!(?request, "decide request");
    let action = request.decide(&cfg.limits).map_err(with_kind)?;
    println!("{}", action);
    if action == Action::Warning {
        return Ok(exit_codes::WARNING);
    }
    Ok(exit_codes::OK)
}

fn cmd_simulate(
    cfg: &LevelerConfig,
    request: &DecideRequest,
    max_steps: u32,
    trace: Option<&Path>,
) -> Result<i32> {
    let snapshot = request.validate(&cfg.limits).map_err(with_kind)?;
    let mut rig = Rig::new(
        snapshot.claw_position,
        snapshot.stacks.iter().map(|&amount| i64::from(amount)).collect(),
        snapshot.holding,
    );
    info!(
        max_steps,
        total_boxes = snapshot.total_boxes(),
        "simulation starting"
    );

    let outcome = run_simulation(&mut rig, &cfg.limits, max_steps, print_step)?;

    if let Some(path) = trace {
        write_trace(path, &outcome)?;
    }
    let (label, code) = match outcome.stop {
        SimulationStop::Finished => ("finished", exit_codes::OK),
        SimulationStop::Warning => ("warning", exit_codes::WARNING),
        SimulationStop::StepLimit { .. } => ("step_limit", exit_codes::STEP_LIMIT),
    };
    println!("stop={} applied={}", label, outcome.applied);
    Ok(code)
}

fn cmd_brackets(input: &str) -> Result<i32> {
    if brackets_balanced(input)? {
        println!("balanced");
        Ok(exit_codes::OK)
    } else {
        println!("unbalanced");
        Ok(exit_codes::UNBALANCED)
    }
}

fn print_step(record: &StepRecord) {
    println!(
        "step={} claw={} stacks={} holding={} action={}",
        record.step,
        record.claw_position,
        format_stacks(&record.stacks),
        u8::from(record.holding),
        record.action
    );
}

fn format_stacks(stacks: &[i64]) -> String {
    let items: Vec<String> = stacks.iter().map(|amount| amount.to_string()).collect();
    format!("[{}]", items.join(","))
}

fn read_request(path: &Path) -> Result<DecideRequest> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read request from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?
    };
    serde_json::from_str(&raw).context("parse decide request json")
}

/// Prefix the stable error kind so scripts can match on it.
fn with_kind(err: DecisionError) -> anyhow::Error {
    anyhow!("{}: {}", err.kind(), err)
}
