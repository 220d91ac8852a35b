//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the chat relay.
#[derive(Parser)]
#[command(name = "relay")]
#[command(about = "Broadcast chat messages to every connected browser")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_verbose_after_subcommand() {
        let cli = Cli::parse_from(["relay", "echo", "hi", "--verbose"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Echo { ref input }) if input == "hi"));
    }

    #[test]
    fn test_no_command() {
        let cli = Cli::parse_from(["relay"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }
}
