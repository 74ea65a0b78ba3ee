//! MindBridge CLI
//!
//! Command-line client for a running MindBridge server:
//! - Check status and list screens
//! - Search resources and the forum
//! - Show the counseling calendar
//! - Chat with the support assistant

use clap::{Parser, Subcommand};
use serde_json::Value;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "mindbridge-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Client for the MindBridge campus mental health service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL
    #[arg(long, default_value = "http://localhost:8080", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show server status
    Status,

    /// List screen routes
    Routes,

    /// Fetch the view document for a path
    Screen {
        /// Path, e.g. /wellness or /resources?q=sleep
        path: String,
    },

    /// Search the resource hub
    Resources {
        /// Search text
        #[arg(short, long)]
        query: Option<String>,
        /// Type tab (all, articles, videos, audio, guides)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },

    /// Search forum posts
    Forum {
        /// Search text
        #[arg(short, long)]
        query: Option<String>,
        /// Category slug
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show bookable counseling dates
    Calendar {
        /// Number of days
        #[arg(short, long, default_value = "14")]
        days: u32,
    },

    /// Send one message and wait for the reply
    Chat {
        /// Message text
        text: String,
        /// Give up waiting after this many seconds
        #[arg(long, default_value = "10")]
        timeout: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let json = cli.format == "json";

    match &cli.command {
        Commands::Status => {
            let response = client.get(format!("{}/health", cli.api_url)).send().await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: Value = resp.json().await?;
                    if json {
                        println!("{}", serde_json::to_string_pretty(&health)?);
                        return Ok(());
                    }

                    println!(
                        "MindBridge v{}",
                        health["version"].as_str().unwrap_or("unknown")
                    );
                    println!();
                    println!("Status: {}", health["status"].as_str().unwrap_or("unknown"));
                    if let Some(sessions) = health["chat_sessions"].as_u64() {
                        println!("Chat sessions: {}", sessions);
                    }
                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    eprintln!("Server returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to MindBridge at {}", cli.api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the server is running:");
                    eprintln!("  cargo run --bin mindbridge -- serve");
                    std::process::exit(1);
                }
            }
        }

        Commands::Routes => {
            let data = get_json(&client, &format!("{}/api/v1/routes", cli.api_url)).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                println!("{:<16} {:<15} {}", "Path", "Screen", "Title");
                println!("{}", "-".repeat(50));
                for route in data["routes"].as_array().into_iter().flatten() {
                    println!(
                        "{:<16} {:<15} {}",
                        route["path"].as_str().unwrap_or_default(),
                        route["screen"].as_str().unwrap_or_default(),
                        route["title"].as_str().unwrap_or_default()
                    );
                }
            }
        }

        Commands::Screen { path } => {
            let path = if path.starts_with('/') {
                path.clone()
            } else {
                format!("/{}", path)
            };
            let response = client.get(format!("{}{}", cli.api_url, path)).send().await?;
            let status = response.status();
            let data: Value = response.json().await?;

            // always JSON: a view document has no fixed table shape
            println!("{}", serde_json::to_string_pretty(&data)?);
            if !status.is_success() {
                std::process::exit(1);
            }
        }

        Commands::Resources { query, kind } => {
            let mut params = Vec::new();
            if let Some(q) = query {
                params.push(("q", q.as_str()));
            }
            if let Some(kind) = kind {
                params.push(("type", kind.as_str()));
            }

            let response = client
                .get(format!("{}/api/v1/resources", cli.api_url))
                .query(&params)
                .send()
                .await?;
            let data = read_json(response).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                print_resources(&data);
            }
        }

        Commands::Forum { query, category } => {
            let mut params = Vec::new();
            if let Some(q) = query {
                params.push(("q", q.as_str()));
            }
            if let Some(category) = category {
                params.push(("category", category.as_str()));
            }

            let response = client
                .get(format!("{}/api/v1/forum/posts", cli.api_url))
                .query(&params)
                .send()
                .await?;
            let data = read_json(response).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                print_posts(&data);
            }
        }

        Commands::Calendar { days } => {
            let data = get_json(
                &client,
                &format!("{}/api/v1/counseling/calendar?days={}", cli.api_url, days),
            )
            .await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                println!("{:<12} {:<5} {}", "Date", "Day", "Bookable");
                println!("{}", "-".repeat(32));
                for day in data["days"].as_array().into_iter().flatten() {
                    let bookable = if day["selectable"].as_bool().unwrap_or(false) {
                        "yes".to_string()
                    } else {
                        format!("no ({})", day["reason"].as_str().unwrap_or("-"))
                    };
                    println!(
                        "{:<12} {:<5} {}",
                        day["date"].as_str().unwrap_or_default(),
                        day["weekday"].as_str().unwrap_or_default(),
                        bookable
                    );
                }
            }
        }

        Commands::Chat { text, timeout } => {
            let transcript =
                chat_once(&client, &cli.api_url, text, Duration::from_secs(*timeout)).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&transcript)?);
            } else {
                for message in transcript["messages"].as_array().into_iter().flatten() {
                    let who = match message["sender"].as_str() {
                        Some("user") => "you",
                        _ => "mindbridge",
                    };
                    println!("{:>10}: {}", who, message["text"].as_str().unwrap_or_default());
                }
            }
        }
    }

    Ok(())
}

/// Open a session, send `text` and wait for the reply.
///
/// The session is ended afterwards whether or not the reply arrived.
async fn chat_once(
    client: &reqwest::Client,
    api_url: &str,
    text: &str,
    timeout: Duration,
) -> anyhow::Result<Value> {
    let session = read_json(
        client
            .post(format!("{}/api/v1/chat/sessions", api_url))
            .send()
            .await?,
    )
    .await?;
    let id = session["session_id"]
        .as_str()
        .ok_or_else(|| anyhow::anyhow!("server did not return a session id"))?;
    let session_url = format!("{}/api/v1/chat/sessions/{}", api_url, id);

    let result = send_and_wait(client, &session_url, text, timeout).await;

    if let Err(e) = client.delete(&session_url).send().await {
        eprintln!("Warning: could not end chat session: {}", e);
    }

    result
}

async fn send_and_wait(
    client: &reqwest::Client,
    session_url: &str,
    text: &str,
    timeout: Duration,
) -> anyhow::Result<Value> {
    let sent = read_json(
        client
            .post(format!("{}/messages", session_url))
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await?,
    )
    .await?;
    let poll_every =
        Duration::from_millis(sent["reply_in_ms"].as_u64().unwrap_or(500).clamp(100, 1000));

    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        tokio::time::sleep(poll_every).await;
        let snapshot = get_json(client, session_url).await?;
        if !snapshot["typing"].as_bool().unwrap_or(false) {
            return Ok(snapshot);
        }
        if tokio::time::Instant::now() >= deadline {
            anyhow::bail!("no reply within {}s", timeout.as_secs());
        }
    }
}

async fn get_json(client: &reqwest::Client, url: &str) -> anyhow::Result<Value> {
    read_json(client.get(url).send().await?).await
}

/// Decode a response body, turning API errors into a readable message
async fn read_json(response: reqwest::Response) -> anyhow::Result<Value> {
    let status = response.status();
    let data: Value = response.json().await?;
    if !status.is_success() {
        let message = data["error"]["message"]
            .as_str()
            .unwrap_or("unknown error")
            .to_string();
        anyhow::bail!("request failed ({}): {}", status, message);
    }
    Ok(data)
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}

fn print_resources(data: &Value) {
    let resources = match data["resources"].as_array() {
        Some(r) if !r.is_empty() => r,
        _ => {
            println!("No resources match");
            return;
        }
    };

    println!("{:<4} {:<42} {:<9} {:<8} {}", "ID", "Title", "Type", "Length", "Rating");
    println!("{}", "-".repeat(72));
    for r in resources {
        println!(
            "{:<4} {:<42} {:<9} {:<8} {:.1}",
            r["id"].as_u64().unwrap_or_default(),
            truncate(r["title"].as_str().unwrap_or_default(), 40),
            r["type"].as_str().unwrap_or_default(),
            r["duration"].as_str().unwrap_or_default(),
            r["rating"].as_f64().unwrap_or_default()
        );
    }
}

fn print_posts(data: &Value) {
    let posts = match data["posts"].as_array() {
        Some(p) if !p.is_empty() => p,
        _ => {
            println!("No posts match");
            return;
        }
    };

    for post in posts {
        println!(
            "[{}] {}",
            post["category"].as_str().unwrap_or_default(),
            post["title"].as_str().unwrap_or_default()
        );
        println!(
            "    by {} · {} · {} replies · {} likes",
            post["author"].as_str().unwrap_or_default(),
            post["timestamp"].as_str().unwrap_or_default(),
            post["replies"].as_u64().unwrap_or_default(),
            post["likes"].as_u64().unwrap_or_default()
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindbridge::api::{build_router, ApiConfig, AppState};
    use mindbridge::chat::ChatServiceConfig;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(42), "42s");
        assert_eq!(format_duration(125), "2m 5s");
        assert_eq!(format_duration(7260), "2h 1m");
        assert_eq!(format_duration(90000), "1d 1h");
    }

    async fn spawn_server(reply_delay: Duration) -> (String, AppState) {
        let state = AppState::with_chat_config(
            ChatServiceConfig {
                reply_delay,
                ..ChatServiceConfig::default()
            },
            ApiConfig::default(),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let router = build_router(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        (url, state)
    }

    #[tokio::test]
    async fn test_chat_once_returns_reply_and_ends_session() {
        let (url, state) = spawn_server(Duration::from_millis(50)).await;
        let client = reqwest::Client::new();

        let transcript = chat_once(&client, &url, "Hello", Duration::from_secs(5))
            .await
            .unwrap();
        let messages = transcript["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1]["text"], "Hello");
        assert_eq!(messages[2]["sender"], "bot");

        assert_eq!(state.chat_session_count().await, 0);
    }

    #[tokio::test]
    async fn test_chat_once_ends_session_on_timeout() {
        let (url, state) = spawn_server(Duration::from_secs(60)).await;
        let client = reqwest::Client::new();

        let result = chat_once(&client, &url, "Hello", Duration::from_millis(200)).await;
        assert!(result.is_err());

        assert_eq!(state.chat_session_count().await, 0);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a much longer title", 8), "a much …");
    }
}
