use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use recalc::command::{Command, MANUAL, Outcome};
use recalc::config::RecalcConfig;
use recalc::engine::Calculator;
use recalc::format::OutputFormat;
use recalc::session::Session;
use recalc::telemetry;

/// Running-value calculator with a replayable history
///
/// Every command updates a single value, starting at 0, and is recorded.
/// `repeat <n>` replays the last n recorded steps; a replayed `repeat`
/// replays the steps it covered when it first ran.
///
/// QUICK START:
///
///   recalc                       # interactive session
///   recalc eval "add 5" "multiply 2" "repeat 2"
///   recalc manual                # list every command
#[derive(Parser)]
#[command(name = "recalc")]
#[command(version, about)]
#[command(propagate_version = true)]
#[command(after_help = "See 'recalc <command> --help' for more information on a specific command.")]
struct Cli {
    /// Configuration file (missing file means defaults)
    #[arg(long, global = true, env = "RECALC_CONFIG", default_value = "recalc.toml")]
    config: PathBuf,

    /// Output format: text or json (overrides the config file)
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (the default)
    Repl,

    /// Run each argument as one command line against a fresh calculator
    ///
    /// Results are printed one per line. The first failing line stops the
    /// run with a non-zero exit status.
    Eval {
        /// Command lines, e.g. "add 5"
        #[arg(required = true)]
        lines: Vec<String>,
    },

    /// Print the list of commands
    Manual,
}

fn main() -> Result<()> {
    let _sink = telemetry::init();
    let cli = Cli::parse();

    let mut config = RecalcConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(format) = cli.format {
        config.display.format = format;
    }

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => repl(config),
        Commands::Eval { lines } => eval(&config, &lines),
        Commands::Manual => {
            println!("{MANUAL}");
            Ok(())
        }
    }
}

fn repl(config: RecalcConfig) -> Result<()> {
    let calc = Calculator::with_options(config.engine);
    let mut session = Session::new(calc, config.display);
    let stdin = io::stdin();
    session
        .run(stdin.lock(), io::stdout().lock())
        .context("session I/O failed")?;
    Ok(())
}

fn eval(config: &RecalcConfig, lines: &[String]) -> Result<()> {
    let mut calc = Calculator::with_options(config.engine);
    let display = &config.display;
    for line in lines {
        let outcome = Command::parse(line)
            .and_then(|cmd| cmd.run(&mut calc))
            .with_context(|| format!("`{line}` failed"))?;
        if outcome == Outcome::Exit {
            break;
        }
        if let Some(text) = display.format.render(&outcome, display.precision)? {
            println!("{text}");
        }
    }
    Ok(())
}
