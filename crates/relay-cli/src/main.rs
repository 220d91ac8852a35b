//! CLI entry point - the composition root.

use clap::{CommandFactory, Parser};

use relay_cli::{Cli, Commands, handlers, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before parsing so `PORT` etc. apply
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve(args) => handlers::serve::execute(args).await?,
        Commands::Echo { input } => handlers::echo::execute(&input)?,
    }

    Ok(())
}
