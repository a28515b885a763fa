//! # UserHub Main Entry Point
//!
//! Terminal control hub for the users and logs API.

use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};
use userhub::cmd_args::CommandLineArgs;
use userhub::{config, AppController, HttpUsersApi, TerminalEventStream, TerminalRenderStream};

#[tokio::main]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();
    init_tracing_subscriber(cmd_args.verbose())?;

    // Load the profile named by --profile (default "default"); an unknown
    // profile falls back to the built-in base URL
    let profile_path = config::get_profile_path();
    let profile = config::load_profile(cmd_args.profile(), &profile_path)?;
    let base_url = cmd_args.base_url().unwrap_or(profile.base_url());
    tracing::info!("Using base URL {base_url} (profile '{}')", profile.name());

    let api = Arc::new(HttpUsersApi::new(base_url)?);
    let mut app = AppController::with_io_streams(
        api,
        TerminalEventStream::new(),
        TerminalRenderStream::new(),
    );

    app.run().await
}

fn init_tracing_subscriber(verbose: bool) -> Result<()> {
    let env_var = format!("{}_LOG_LEVEL", env!("CARGO_PKG_NAME").to_uppercase());
    let default_level = if verbose { "info" } else { "error" };
    let filter = EnvFilter::try_from_env(&env_var)
        .unwrap_or_else(|_| EnvFilter::new(default_level))
        .add_directive("reqwest=warn".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("hyper_util=warn".parse()?)
        .add_directive("rustls=warn".parse()?)
        .add_directive("tokio=warn".parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .init();

    Ok(())
}
