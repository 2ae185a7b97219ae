use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

pub use clap::Parser;

use crate::config;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Serve mode
    /// Run the TMDB proxy server instead of the terminal.
    #[clap(long, help = "Run the TMDB proxy server", default_value = "false")]
    serve: bool,

    /// Proxy bind address, only used with --serve
    #[clap(long, default_value = config::DEFAULT_LISTEN_ADDR, help = "Address the proxy listens on")]
    listen: String,

    /// Proxy URL
    /// Base URL of the proxy the terminal fetches metadata through.
    #[clap(long, default_value = config::DEFAULT_PROXY_URL, help = "Base URL of the metadata proxy")]
    proxy_url: String,

    /// Direct mode
    /// Skip the proxy and call TMDB with the key from TMDB_API_KEY.
    #[clap(long, help = "Call TMDB directly using TMDB_API_KEY", default_value = "false")]
    direct: bool,

    #[clap(long, default_value = config::DEFAULT_LANGUAGE, help = "Metadata language")]
    language: String,

    #[clap(
        long,
        default_value_t = config::DEFAULT_TIMEOUT_SECS,
        help = "Per-request timeout in seconds"
    )]
    timeout: u64,

    #[clap(long, help = "Skip the boot sequence", default_value = "false")]
    no_boot: bool,

    #[clap(long, help = "Write logs to this file (terminal mode)")]
    log_file: Option<PathBuf>,

    /// Verbose mode
    /// Optional. Log at debug level.
    #[clap(
        short = 'v',
        long,
        help = "Print verbose message",
        default_value = "false"
    )]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    serve: bool,
    listen: String,
    proxy_url: String,
    direct: bool,
    language: String,
    timeout: u64,
    no_boot: bool,
    log_file: Option<PathBuf>,
    verbose: bool,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            serve: args.serve,
            listen: args.listen,
            proxy_url: args.proxy_url,
            direct: args.direct,
            language: args.language,
            timeout: args.timeout,
            no_boot: args.no_boot,
            log_file: args.log_file,
            verbose: args.verbose,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn serve(&self) -> bool {
        self.serve
    }

    pub fn listen(&self) -> &str {
        &self.listen
    }

    pub fn proxy_url(&self) -> &str {
        &self.proxy_url
    }

    pub fn direct(&self) -> bool {
        self.direct
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout.max(1))
    }

    pub fn boot(&self) -> bool {
        !self.no_boot
    }

    pub fn log_file(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
