//! CLI entry point for the puzzle solver.
//!
//! Usage:
//!   puzzle-solver clock <hours> <start> <end>
//!   puzzle-solver strings <start> <finish>
//!   puzzle-solver chess <file>
//!   puzzle-solver hoppers <file>
//!   puzzle-solver play <chess|hoppers> <file>
//!
//! Options:
//!   --json        Print the solver report as JSON
//!   -v            Verbose logging (RUST_LOG overrides)

use std::fmt::Display;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info};
use serde::Serialize;

use puzzle_solver::{
    solve, BoardPuzzle, ChessConfig, ClockConfig, Configuration, HoppersConfig, Model, Ptui,
    PuzzleError, SolverResult, StringsConfig,
};

const EXIT_UNSOLVED: i32 = 1;
const EXIT_ERROR: i32 = 2;

#[derive(Parser)]
#[command(name = "puzzle-solver")]
#[command(about = "Breadth-first shortest-path solver for clock, strings, chess and hoppers puzzles")]
#[command(version)]
struct Cli {
    /// Print the solver report as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log solver progress (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Turn a clock hand one hour at a time to the target hour
    Clock {
        /// Number of hours on the clock face
        hours: u32,
        /// Starting hour
        start: u32,
        /// Target hour
        end: u32,
    },

    /// Rotate letters one at a time until the start word becomes the finish word
    Strings {
        /// Starting word (A-Z)
        start: String,
        /// Target word (A-Z)
        finish: String,
    },

    /// Capture pieces until one remains
    Chess {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Jump frogs over green frogs until none remain
    Hoppers {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Play a board puzzle interactively
    Play {
        #[arg(value_enum)]
        puzzle: BoardKind,
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BoardKind {
    Chess,
    Hoppers,
}

/// Output format for a solver run
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    puzzle: String,
    total_configs: usize,
    unique_configs: usize,
    solved: bool,
    steps: Vec<String>,
    time_elapsed_ms: u64,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_ERROR);
        }
    }
}

fn run(cli: Cli) -> Result<i32, PuzzleError> {
    let json = cli.json;
    match cli.command {
        Commands::Clock { hours, start, end } => {
            let config = ClockConfig::new(hours, start, end)?;
            report(&config, None, json, |c| c.current().to_string())
        }
        Commands::Strings { start, finish } => {
            let config = StringsConfig::new(&start, &finish)?;
            report(&config, None, json, |c| c.current().to_string())
        }
        Commands::Chess { file } => {
            let config = ChessConfig::from_file(&file)?;
            report(&config, Some(&file), json, |c| c.to_string())
        }
        Commands::Hoppers { file } => {
            let config = HoppersConfig::from_file(&file)?;
            report(&config, Some(&file), json, |c| c.to_string())
        }
        Commands::Play { puzzle, file } => match puzzle {
            BoardKind::Chess => play::<ChessConfig>(file),
            BoardKind::Hoppers => play::<HoppersConfig>(file),
        },
    }
}

/// Solve from `start`, print the report and return the exit code.
fn report<C>(
    start: &C,
    file: Option<&Path>,
    json: bool,
    step: impl Fn(&C) -> String,
) -> Result<i32, PuzzleError>
where
    C: Configuration + Display,
{
    info!("solving from {}", start);
    let result = solve(start);
    let rendered = if json {
        let output = format_result(start, &result, &step);
        format!("{}\n", serde_json::to_string_pretty(&output)?)
    } else {
        format_text(start, file, &result, &step)
    };
    print!("{}", rendered);
    Ok(exit_code(&result))
}

fn exit_code<C>(result: &SolverResult<C>) -> i32 {
    if result.is_solved() {
        0
    } else {
        EXIT_UNSOLVED
    }
}

fn format_text<C: Display>(
    start: &C,
    file: Option<&Path>,
    result: &SolverResult<C>,
    step: &impl Fn(&C) -> String,
) -> String {
    let mut text = String::new();
    if let Some(file) = file {
        text.push_str(&format!("File: {}\n", file.display()));
    }
    text.push_str(&format!("{}\n", start));
    text.push_str(&format!("Total configs: {}\n", result.total_configs));
    text.push_str(&format!("Unique configs: {}\n", result.unique_configs));
    if !result.is_solved() {
        text.push_str("No Solution\n");
        return text;
    }
    for (i, config) in result.path.iter().enumerate() {
        let rendered = step(config);
        // board steps already end in a newline
        if rendered.contains('\n') {
            text.push_str(&format!("Step {}:\n{}", i, rendered));
        } else {
            text.push_str(&format!("Step {}: {}\n", i, rendered));
        }
    }
    text
}

fn format_result<C: Display>(
    start: &C,
    result: &SolverResult<C>,
    step: &impl Fn(&C) -> String,
) -> SolveOutput {
    SolveOutput {
        puzzle: start.to_string(),
        total_configs: result.total_configs,
        unique_configs: result.unique_configs,
        solved: result.is_solved(),
        steps: result.path.iter().map(step).collect(),
        time_elapsed_ms: result.time_elapsed_ms,
    }
}

fn play<P: BoardPuzzle>(file: PathBuf) -> Result<i32, PuzzleError> {
    let model: Model<P> = Model::new(file)?;
    let mut ptui = Ptui::new(model);
    let stdin = io::stdin();
    ptui.run(stdin.lock(), io::stdout())
        .map_err(|source| PuzzleError::Io {
            path: PathBuf::from("<stdin>"),
            source,
        })?;
    Ok(0)
}
