//! # l4tr-chat — terminal front-end for Left For The Reader
//!
//! A chat UI for the L4TR retrieval-augmented math question-answering
//! backend. The backend is reached over two HTTP endpoints (status and
//! query); everything visible here is transcript state, math-notation
//! normalization, and rendering.
//!
//! ## Modes
//! - Interactive TUI (default)
//! - Single prompt with `-p` / `--prompt`
//! - `config` and `completions` subcommands

mod cli;
mod core;
mod run;
mod tui;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = cli::Args::parse();
    run::init_logger(&args);

    // Subcommands that don't need a loaded config
    if let Some(command) = &args.command {
        match command {
            cli::Commands::Config => {
                run::show_config();
                return Ok(());
            }
            cli::Commands::Completions { shell } => {
                let mut cmd = cli::Args::command();
                let name = cmd.get_name().to_string();
                cli::generate(*shell, &mut cmd, name, &mut std::io::stdout());
                return Ok(());
            }
        }
    }

    // Load configuration (print user-friendly message; exit uses Display not Debug)
    let config = core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if args.prompt.is_some() {
        return run::run_single_prompt(&args, &config).await;
    }

    run::launch_tui(config).await
}
