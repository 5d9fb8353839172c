use anyhow::{Context, Result};
use clap::Parser;
use hubsweep::api::UemClient;
use hubsweep::api::devices::DevicesApi;
use hubsweep::args::Args;
use hubsweep::config::UemConfig;
use hubsweep::keychain::SecurityCli;
use hubsweep::sweep::{self, RunTally};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Each -v lowers the log threshold one step from the ERROR default.
fn verbosity_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    }
}

fn print_summary(tally: &RunTally) {
    println!("Devices scanned: [{}]", tally.scanned);
    println!("hub_version not found on: [{}] Macs", tally.version_not_found);
    println!("hub install requests sent: [{}]", tally.install_requests);
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(verbosity_directive(args.verbose))),
        )
        .init();

    debug!("Hub versions specified as accepted versions: {:?}", args.versions);
    println!("hubsweep starting.");

    let store = SecurityCli::new(&args.keychain);
    let config =
        UemConfig::from_store(&store).context("Failed to resolve UEM credentials from keychain")?;
    println!(
        "The UEM API URL found in the keychain [{}] is [{}]",
        args.keychain, config.api_url
    );

    let client = UemClient::new(&config)?;

    let devices = client.search_macos_devices().await?;
    info!("Fetched {} macOS devices", devices.len());

    let tally = sweep::sweep_devices(&client, &devices, &args.versions, args.dry_run).await?;
    print_summary(&tally);

    Ok(())
}
