//! # Pokédex Main Entry Point
//!
//! Runs a single catalog command and prints the result.

use anyhow::Result;
use pokedex::{App, CommandLineArgs};
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing_subscriber();

    let cmd_args = CommandLineArgs::parse();
    let mut app = App::from_args(&cmd_args)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = app.run(cmd_args.command(), &mut out).await {
        tracing::error!("Command failed: {e:#}");
        eprintln!("{}: {e:#}", app.translations().error);
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing_subscriber() {
    let mut filter = EnvFilter::from_env(format!(
        "{}_LOG_LEVEL",
        env!("CARGO_PKG_NAME").to_uppercase()
    ));
    for directive in [
        "reqwest=warn",
        "hyper=warn",
        "hyper_util=warn",
        "tokio=warn",
        "rustls=warn",
        "h2=warn",
    ] {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .init();
}
