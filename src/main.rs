//! MindBridge Server
//!
//! Run with: cargo run --bin mindbridge -- serve
//!
//! # Configuration
//!
//! Read from `--config <path>` or the default locations (see
//! `mindbridge config`), then overridden by `MINDBRIDGE_*` environment
//! variables. `RUST_LOG` takes precedence over `logging.level`.

use anyhow::Context;
use clap::{Parser, Subcommand};
use mindbridge::api::{serve, AppState};
use mindbridge::chat::ChatService;
use mindbridge::config::{generate_default_config, Config, LogFormat, LoggingConfig};
use mindbridge::screens::routes;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "mindbridge")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Campus mental health support service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default)
    Serve {
        /// Override the configured host
        #[arg(long)]
        host: Option<String>,
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print a default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the screen route table
    Routes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    }) {
        Commands::Serve { host, port } => {
            let mut config = match &cli.config {
                Some(path) => Config::load_with_env(path)
                    .with_context(|| format!("loading config from {:?}", path))?,
                None => Config::load_default(),
            };
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            init_logging(&config.logging);
            run_server(config).await?;
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }

        Commands::Routes => {
            println!("{:<16} {:<15} {}", "Path", "Screen", "Title");
            println!("{}", "-".repeat(50));
            for route in routes() {
                let screen = serde_json::to_value(route.screen)?;
                println!(
                    "{:<16} {:<15} {}",
                    route.path,
                    screen.as_str().unwrap_or_default(),
                    route.title
                );
            }
        }
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "mindbridge={level},tower_http={level}",
            level = logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);
    match logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    tracing::info!("Starting MindBridge v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        reply_delay_ms = config.chat.reply_delay_ms,
        max_sessions = config.chat.max_sessions,
        "Chat simulator configured"
    );

    let api_config = config.server.to_api_config();
    let chat = ChatService::new(config.chat.to_service_config());
    let state = AppState::new(chat, api_config.clone());

    serve(state, &api_config).await?;
    Ok(())
}
