use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use adguid_core::{CoreConfig, GuidFilterEncoder};

mod cli;

use cli::Cli;

/// Main entry point for the adguid command-line tool
///
/// Resolves configuration once, builds the filter encoder and runs the
/// requested subcommand. Results go to stdout; logs go to stderr.
///
/// # Environment Variables
/// - `ADGUID_FILTER_ATTRIBUTE`: attribute name used in filters (default: "objectGUID").
///   The `--attribute` flag takes precedence.
/// - `RUST_LOG`: log filter (default directive: "adguid=info")
///
/// # Returns
/// * `Ok(())` - If the subcommand succeeds
/// * `Err(anyhow::Error)` - On invalid input or configuration
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("adguid=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let attribute = cli::resolve_attribute(
        cli.attribute.clone(),
        std::env::var("ADGUID_FILTER_ATTRIBUTE").ok(),
    );
    let config = CoreConfig::new(attribute)?;
    tracing::debug!("++ Using filter attribute {}", config.filter_attribute());

    let encoder = GuidFilterEncoder::new(&config);

    let stdout = std::io::stdout();
    cli::run(cli, &encoder, &mut stdout.lock())
}
