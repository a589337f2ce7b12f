//! siege-stats server — entry point.

use std::sync::Arc;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use siege_stats::{PageFetcher, StatsPipeline};
use siege_stats_server::config::LogFormat;
use siege_stats_server::{HttpTransport, ServerConfig, StatsHandler};

#[derive(Parser)]
#[command(
    name = "siege-stats-server",
    about = "Serves Rainbow Six Siege stats reshaped from the public stats portal",
    version
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Log output format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Default)]
struct UpstreamArgs {
    /// Stats page URL. Also reads SIEGE_STATS_UPSTREAM.
    #[arg(long)]
    upstream: Option<String>,

    /// User-Agent sent to upstream.
    #[arg(long)]
    user_agent: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default).
    Serve {
        /// Listen host.
        #[arg(long)]
        host: Option<String>,

        /// Listen port. Also reads SIEGE_STATS_PORT.
        #[arg(short, long)]
        port: Option<u16>,

        #[command(flatten)]
        upstream: UpstreamArgs,
    },

    /// Fetch and reshape once, print the JSON to stdout.
    Fetch {
        #[command(flatten)]
        upstream: UpstreamArgs,

        /// Pretty-print the output.
        #[arg(long)]
        pretty: bool,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.log_format);

    match cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
        upstream: UpstreamArgs::default(),
    }) {
        Commands::Serve {
            host,
            port,
            upstream,
        } => {
            let config = ServerConfig::resolve(
                host.as_deref(),
                port,
                upstream.upstream.as_deref(),
                upstream.user_agent.as_deref(),
            )?;
            tracing::info!("siege-stats server v{}", env!("CARGO_PKG_VERSION"));
            tracing::info!("Upstream: {}", config.upstream_url);

            let transport = HttpTransport::new(build_handler(&config)?);
            transport.run(&config.listen_addr()).await?;
        }

        Commands::Fetch { upstream, pretty } => {
            let config = ServerConfig::resolve(
                None,
                None,
                upstream.upstream.as_deref(),
                upstream.user_agent.as_deref(),
            )?;
            let response = build_handler(&config)?.try_stats().await?;
            let out = if pretty {
                serde_json::to_string_pretty(&response)?
            } else {
                serde_json::to_string(&response)?
            };
            println!("{out}");
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(
                shell,
                &mut cmd,
                "siege-stats-server",
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}

fn build_handler(config: &ServerConfig) -> anyhow::Result<StatsHandler> {
    let pipeline = StatsPipeline::new()?;
    let fetcher = PageFetcher::with_user_agent(config.upstream_url.clone(), &config.user_agent);
    Ok(StatsHandler::new(pipeline, Arc::new(fetcher)))
}

fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
