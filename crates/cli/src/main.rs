mod catalog_commands;

use std::path::PathBuf;

use {
    bacbot_config::BacbotConfig,
    clap::{Parser, Subcommand},
    tracing::info,
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

#[derive(Parser)]
#[command(name = "bacbot", about = "Bac Bot: Messenger study materials for baccalaureate students")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,

    /// Address to bind to (overrides config and BIND).
    #[arg(long, global = true)]
    bind: Option<String>,
    /// Port to listen on (overrides config and PORT).
    #[arg(long, global = true)]
    port: Option<u16>,
    /// Config file to load instead of discovering one.
    #[arg(long, global = true, env = "BACBOT_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the webhook server (default when no subcommand is provided).
    Serve,
    /// Fetch the catalog and list the subjects of a filiere.
    Subjects {
        /// Filiere number, as in the bot menu (1-4).
        filiere: usize,
    },
}

fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(fmt::layer().json().with_target(true).with_thread_ids(false))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_ansi(true),
            )
            .init();
    }
}

/// File (explicit or discovered), then environment, then command-line flags.
fn resolve_config(cli: &Cli) -> anyhow::Result<BacbotConfig> {
    let config = match cli.config {
        Some(ref path) => bacbot_config::load_config(path)?,
        None => bacbot_config::discover_and_load(),
    };
    let mut config = bacbot_config::apply_env_overrides(config);

    if let Some(ref bind) = cli.bind {
        config.server.bind = bind.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_telemetry(&cli);

    let config = resolve_config(&cli)?;

    match cli.command {
        None | Some(Commands::Serve) => {
            info!(version = env!("CARGO_PKG_VERSION"), "bacbot starting");
            bacbot_gateway::server::start_server(config).await
        },
        Some(Commands::Subjects { filiere }) => {
            catalog_commands::list_subjects(&config, filiere).await
        },
    }
}
