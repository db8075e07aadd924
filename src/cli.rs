//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  l4tr-chat                          Launch the interactive chat TUI
  l4tr-chat -p \"what is a group?\"    Single prompt, print the answer
  l4tr-chat -p -                     Read prompt from stdin
  l4tr-chat config                   Show backend URL and API key status
  l4tr-chat completions bash         Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    version,
    about = "Terminal chat for the Left For The Reader math question-answering backend",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Send a single prompt then exit (without opening the TUI)
    #[arg(
        short = 'p',
        long,
        help = "Provide a prompt to get an immediate answer (use '-' to read from stdin)"
    )]
    pub prompt: Option<String>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show backend URL and API key status
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn log_level_defaults_to_warn() {
        let args = Args::parse_from(["l4tr-chat"]);
        assert_eq!(args.log_level(), "warn");
    }

    #[test]
    fn log_level_quiet_wins() {
        let args = Args::parse_from(["l4tr-chat", "-q"]);
        assert_eq!(args.log_level(), "error");
    }

    #[test]
    fn log_level_scales_with_verbose() {
        assert_eq!(Args::parse_from(["l4tr-chat", "-v"]).log_level(), "info");
        assert_eq!(Args::parse_from(["l4tr-chat", "-vv"]).log_level(), "debug");
    }

    #[test]
    fn prompt_flag_parses() {
        let args = Args::parse_from(["l4tr-chat", "-p", "what is a ring?"]);
        assert_eq!(args.prompt.as_deref(), Some("what is a ring?"));
    }
}
