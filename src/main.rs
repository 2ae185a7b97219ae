//! # cineterm Main Entry Point
//!
//! Runs the interactive terminal by default, or the TMDB proxy with
//! `--serve`.

use anyhow::{Context, Result};
use cineterm::cmd_args::CommandLineArgs;
use cineterm::config;
use cineterm::logging::{self, LogTarget};
use cineterm::metadata::{MetadataSource, ProxyClient, TmdbClient};
use cineterm::proxy;
use cineterm::repl::{BootTiming, TerminalApp, TerminalEventStream, TerminalRenderStream};
use cineterm::session::{SessionController, SettingsStore};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CommandLineArgs::parse();
    logging::init(
        &LogTarget::for_mode(args.serve(), args.log_file()),
        args.verbose(),
    )?;
    tracing::debug!("Arguments: {:?}", args);

    if args.serve() {
        let client = tmdb_client(&args)?;
        return proxy::serve(args.listen(), client).await;
    }

    if args.direct() {
        let client = tmdb_client(&args)?.with_language(args.language());
        run_terminal(client, &args).await
    } else {
        let client = ProxyClient::new(args.proxy_url(), args.language(), args.timeout())?;
        run_terminal(client, &args).await
    }
}

fn tmdb_client(args: &CommandLineArgs) -> Result<TmdbClient> {
    let api_key = config::get_api_key()
        .with_context(|| format!("{} is not set", config::API_KEY_ENV_VAR))?;
    TmdbClient::new(&config::get_tmdb_base_url(), api_key, args.timeout())
}

async fn run_terminal<M: MetadataSource>(source: M, args: &CommandLineArgs) -> Result<()> {
    let store = SettingsStore::from_config();
    tracing::info!("Using settings file {}", store.path().display());

    let session = SessionController::with_store(source, store);
    let boot = args.boot().then(BootTiming::default);

    let mut app = TerminalApp::new(
        session,
        TerminalEventStream::new(),
        TerminalRenderStream::new(),
    )
    .with_boot(boot);
    app.run().await
}
