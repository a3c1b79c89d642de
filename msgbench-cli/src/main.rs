//! MsgBench command-line surface
//!
//! Drives the embedded message store through one of its two fetch paths:
//!
//!   msgbench new         # per-call ("new") backend
//!   msgbench reference   # shared ("reference") backend
//!
//! Each run initializes the store once, then fires the matching trigger,
//! which fans out five labeled retrieval tasks of 51 rounds each and joins
//! on all of them. Any store failure surfaces as a nonzero exit with the
//! error chain printed.

use clap::{Parser, Subcommand};
use message_dispatch::{Dispatcher, TRIGGER_GET_MSG_NEW, TRIGGER_GET_MSG_REF, TriggerRegistry};
use message_store::{DEFAULT_POOL_SIZE, MessageSource, MessageStore};
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "msgbench")]
#[command(about = "Concurrent retrieval harness for the embedded message store")]
struct Args {
    /// Engine pool size for the per-call backend
    #[arg(long, env = "MSGBENCH_POOL_SIZE", default_value_t = DEFAULT_POOL_SIZE)]
    pool_size: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Retrieve against the per-call ("new") backend
    New,
    /// Retrieve against the shared ("reference") backend
    Reference,
}

fn trigger_for(command: &Command) -> &'static str {
    match command {
        Command::New => TRIGGER_GET_MSG_NEW,
        Command::Reference => TRIGGER_GET_MSG_REF,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    info!("🚀 Starting MsgBench Engine");
    info!("Pool size: {}", args.pool_size);

    let store: Arc<dyn MessageSource> =
        Arc::new(MessageStore::new().with_pool_size(args.pool_size));
    let registry = TriggerRegistry::new(Dispatcher::new(store));

    let trigger = trigger_for(&args.command);
    registry.fire(trigger).await?;

    info!("✅ Dispatch complete");
    Ok(())
}
