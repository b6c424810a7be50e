// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `piet` - run a Piet program image.
//!
//! Program output goes to stdout; progress and diagnostics go to stderr
//! through `tracing`. Exit status is 0 on normal termination (and when run
//! without a program), 2 when the step ceiling stops the program, and 1 for
//! any other failure.

use anyhow::Context;
use clap::{CommandFactory, Parser};
use piet_interp::engine::{EngineConfig, Interpreter, DEFAULT_MAX_STEPS};
use piet_interp::io::{StdinInput, StdoutOutput};
use piet_interp::{loader, ExecutionError, ProgramMemo};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "piet")]
#[command(about = "Run a Piet program image")]
struct Cli {
    /// Path to the program image (PNG, GIF, BMP, ...)
    program: Option<PathBuf>,

    /// Stop a program that has not terminated after this many steps
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: u64,

    /// Log more detail (-v: every instruction, -vv: every step)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "piet=info,piet_interp=info",
        1 => "piet=debug,piet_interp=debug",
        _ => "piet=trace,piet_interp=trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

enum Finish {
    Terminated,
    CeilingReached,
}

fn run(path: PathBuf, config: EngineConfig) -> anyhow::Result<Finish> {
    info!("Loading image {}", path.display());
    let grid = loader::load_grid(&path)?;

    info!("Scanning color blocks");
    let memo = ProgramMemo::new(grid);

    info!("Starting execution");
    let mut interpreter = Interpreter::with_config(&memo, config, StdinInput::new(), StdoutOutput);
    match interpreter.run() {
        Ok(summary) => {
            println!();
            info!(steps = summary.steps, "Execution finished");
            Ok(Finish::Terminated)
        }
        Err(ExecutionError::StepCeilingExceeded { steps }) => {
            println!();
            warn!("Execution stopped after {} steps without terminating", steps);
            Ok(Finish::CeilingReached)
        }
        Err(e) => {
            let state = interpreter.state();
            Err(e).with_context(|| {
                format!(
                    "execution failed at codel {} after {} steps (stack {})",
                    state.position,
                    interpreter.steps(),
                    state.stack
                )
            })
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(path) = cli.program else {
        println!("{}", Cli::command().render_usage());
        return ExitCode::SUCCESS;
    };

    let config = EngineConfig::new().with_max_steps(cli.max_steps);
    match run(path, config) {
        Ok(Finish::Terminated) => ExitCode::SUCCESS,
        Ok(Finish::CeilingReached) => ExitCode::from(2),
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
