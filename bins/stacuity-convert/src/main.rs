use std::io::Read;

use clap::{Parser, Subcommand, ValueEnum};
use stacuity_resources::{Entity, ResourceError, ToolConfig};

/// Config file read when neither `--config` nor `STACUITY_CONFIG` is given.
const DEFAULT_CONFIG: &str = "stacuity.toml";

#[derive(Parser)]
#[command(
    name = "stacuity-convert",
    about = "Convert Stacuity API payloads to and from provider state"
)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(long, env = "STACUITY_CONFIG")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert an API payload (item, list or response envelope) into state.
    FromWire {
        /// Entity name, e.g. vslice, routing_policy, operator_policy or paging.
        #[arg(long)]
        entity: Entity,

        /// Which state model to produce.
        #[arg(long, value_enum, default_value_t = Target::Read)]
        target: Target,

        /// JSON input file; stdin when omitted.
        #[arg(long)]
        input: Option<String>,
    },

    /// Convert a resource state model into a create / update body.
    ToWire {
        #[arg(long)]
        entity: Entity,

        /// JSON input file; stdin when omitted.
        #[arg(long)]
        input: Option<String>,
    },

    /// Resolve every registered conversion plan and exit.
    Validate,
}

#[derive(Clone, Copy, ValueEnum)]
enum Target {
    /// Data-source read model.
    Read,
    /// Resource model, as refreshed after a create or update.
    Resource,
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            init_tracing("info");
            tracing::error!(error = %e, "failed to load config");
            std::process::exit(1);
        }
    };
    init_tracing(&config.log_filter);

    if config.validate_on_startup || matches!(cli.command, Command::Validate) {
        if let Err(e) = stacuity_resources::validate_all() {
            tracing::error!(error = %e, "conversion plans failed validation");
            std::process::exit(1);
        }
        tracing::info!(entities = Entity::ALL.len(), "conversion plans validated");
    }

    if let Err(e) = run(cli.command, config.pretty) {
        tracing::error!(error = %e, "conversion failed");
        std::process::exit(1);
    }
}

fn run(command: Command, pretty: bool) -> Result<(), ResourceError> {
    let output = match command {
        Command::FromWire {
            entity,
            target,
            input,
        } => {
            let payload = read_input(input.as_deref())?;
            tracing::debug!(%entity, "converting from wire");
            match target {
                Target::Read => entity.read_state(payload)?,
                Target::Resource => entity.resource_state(payload)?,
            }
        }
        Command::ToWire { entity, input } => {
            let payload = read_input(input.as_deref())?;
            tracing::debug!(%entity, "converting to wire");
            entity.modify_request(payload)?
        }
        Command::Validate => return Ok(()),
    };

    let rendered = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");
    Ok(())
}

fn load_config(path: Option<&str>) -> Result<ToolConfig, ResourceError> {
    match path {
        Some(path) => ToolConfig::load(path),
        None => ToolConfig::load_or_default(DEFAULT_CONFIG),
    }
}

fn read_input(path: Option<&str>) -> Result<serde_json::Value, ResourceError> {
    let content = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&content)?)
}

// Logs go to stderr so stdout carries only the converted JSON.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();
}
