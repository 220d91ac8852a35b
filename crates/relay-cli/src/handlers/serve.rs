//! `relay serve` - run the web server until Ctrl+C.

use anyhow::Result;
use relay_axum::start_server;

use crate::commands::ServeArgs;

/// Start the relay with the given arguments.
pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = args.into_config();
    tracing::debug!(?config, "Resolved server config");

    println!();
    println!("  chat relay starting...");
    println!();
    println!("  Local:   http://localhost:{}", config.port);
    println!("  Bind:    http://{}", config.bind_address());
    if let Some(ref dir) = config.static_dir {
        println!("  Assets:  {}", dir.display());
    }
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    start_server(config).await
}
