mod boot;
mod session;

use anyhow::{Context, Result};
use tracing::info;

fn main() -> Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();
    boot::init_logging();

    info!("Starting tasklog v{}", env!("CARGO_PKG_VERSION"));

    let config = boot::load_config(std::env::args().nth(1))?;
    let query = boot::boot(&config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let executed = session::run(stdin.lock(), stdout.lock(), &query, &config.console)
        .context("Failed to run query session")?;

    info!(queries = executed, "Session finished");
    Ok(())
}
