use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use zcalc::config::Config;
use zcalc::items::CalculatorItem;
use zcalc::logging::{init_logging, log_directive};
use zcalc::ui::{Repl, evaluate_input, render_calculator};

#[derive(Parser)]
#[command(name = "zcalc")]
#[command(about = "A keypad-style terminal calculator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to the config file (default: ~/.config/zcalc/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive calculator (default)
    Repl,
    /// Evaluate keypad input, e.g. `zcalc eval 2 + 3 x 4`
    Eval {
        /// Keys to press; `=` is added when missing
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        input: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    init_logging(log_directive(cli.verbose, config.log_level.as_deref()));

    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            info!("Starting interactive calculator");
            let stdin = io::stdin();
            Repl::new(&config)
                .run(stdin.lock(), io::stdout())
                .context("Calculator session failed")?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Eval { input, json } => {
            let input = input.join(" ");
            let engine = evaluate_input(&input)
                .with_context(|| format!("Invalid input '{}'", input))?;
            let item = CalculatorItem::from_engine(&engine);

            if json {
                println!("{}", serde_json::to_string(&item)?);
            } else {
                println!("{}", render_calculator(&item));
            }

            Ok(if item.is_error {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
    }
}
