use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jellyfin_config::{ConfigLoader, telemetry::init_tracing};
use jellyfin_contracts::codec::JsonCodec;
use jellyfin_model::websocket::{
    InboundKeepAliveMessage, OutboundKeepAliveMessage,
};
use tracing::debug;
use uuid::Uuid;

mod schema;

use schema::SchemaArg;

#[derive(Parser)]
#[command(
    name = "jellyfinctl",
    version,
    about = "Inspect and validate Jellyfin API payloads"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a JSON payload and print it as a URL query string
    Query {
        #[arg(long, value_enum)]
        schema: SchemaArg,
        /// Nest every member under this name (deep-object style)
        #[arg(long)]
        prefix: Option<String>,
        /// JSON file to read, or `-` for stdin
        file: PathBuf,
    },
    /// Decode a JSON payload, encode it again and report what survived
    Check {
        #[arg(long, value_enum)]
        schema: SchemaArg,
        /// JSON file to read, or `-` for stdin
        file: PathBuf,
    },
    /// Print a websocket keep-alive message
    KeepAlive {
        /// Id for the server-side message; a random one is used otherwise
        #[arg(long)]
        message_id: Option<Uuid>,
        /// Print the client-side message instead
        #[arg(long, conflicts_with = "message_id")]
        inbound: bool,
    },
    /// Resolve client configuration and print the derived endpoints
    Config {
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        env_file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_tracing("warn")?;

    let cli = Cli::parse();

    match cli.command {
        Command::Query {
            schema,
            prefix,
            file,
        } => {
            let text = read_input(&file)?;
            println!("{}", schema.query(&text, prefix.as_deref())?);
        }
        Command::Check { schema, file } => {
            let text = read_input(&file)?;
            let report = schema.check(&text)?;
            let name = schema_name(schema);
            println!(
                "{name}: ok, {} members, {} dropped",
                report.members,
                report.dropped.len()
            );
            for key in &report.dropped {
                println!("  dropped: {key}");
            }
            if let Some(kind) = report.message_type {
                println!("  message type: {kind}");
            }
        }
        Command::KeepAlive {
            message_id,
            inbound,
        } => {
            let json = if inbound {
                InboundKeepAliveMessage::new().to_json()?
            } else {
                let id = message_id.unwrap_or_else(Uuid::new_v4);
                OutboundKeepAliveMessage::new().with_message_id(id).to_json()?
            };
            println!("{json}");
        }
        Command::Config { config, env_file } => {
            let mut loader = ConfigLoader::new();
            if let Some(path) = config {
                loader = loader.with_config_path(path);
            }
            if let Some(path) = env_file {
                loader = loader.with_env_file(path);
            }
            let load = loader.load().context("failed to load configuration")?;

            let mut redacted = load.config.clone();
            if redacted.auth.token.is_some() {
                redacted.auth.token = Some("***".to_string());
            }
            println!("base_url: {}", load.config.base_url()?);
            println!("websocket_url: {}", redacted.websocket_url()?);
            println!(
                "authorization: {}",
                load.config.redacted_authorization_header()
            );
            println!(
                "refresh: {}s, client active within: {}s",
                load.config.session.refresh_seconds,
                load.config.session.client_active_within_seconds
            );
            for warning in &load.warnings.items {
                match &warning.hint {
                    Some(hint) => {
                        println!("warning: {} ({hint})", warning.message)
                    }
                    None => println!("warning: {}", warning.message),
                }
            }
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }
    debug!(path = %path.display(), "reading payload");
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))
}

fn schema_name(schema: SchemaArg) -> String {
    use clap::ValueEnum;
    schema
        .to_possible_value()
        .map(|value| value.get_name().to_string())
        .unwrap_or_else(|| format!("{schema:?}"))
}
