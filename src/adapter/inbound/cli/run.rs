//! Command dispatch.

use serde_json::{json, Value};
use tokio::signal;
use tokio::sync::watch;
use tracing::info;

use super::command::{Cli, Commands};
use super::output;
use crate::adapter::capitoltrades::DisclosureClient;
use crate::domain::{CommitteeId, PoliticianId};
use crate::error::{Error, Result};
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Load config, connect, run the command and print its JSON result.
pub async fn execute(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(&cli.config)?;
    config.init_logging();

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received (Ctrl+C)");
            let _ = shutdown_tx.send(true);
        }
    });

    let pool = bootstrap::build_proxy_pool(&config);
    let client = bootstrap::connect(&config, pool.as_ref(), shutdown_rx).await?;

    let value = dispatch(&client, cli.command).await?;
    output::print(&value, cli.compact)
}

async fn dispatch(client: &DisclosureClient, command: Commands) -> Result<Value> {
    match command {
        Commands::Politicians => Ok(client
            .politicians()
            .iter()
            .map(|(id, name)| json!({ "politician_id": id, "name": name }))
            .collect()),
        Commands::Lookup { name } => {
            let id = client
                .lookup_politician_id(&name)
                .ok_or_else(|| Error::UnknownPolitician(name.clone()))?;
            Ok(json!({ "name": name, "politician_id": id }))
        }
        Commands::Trades { politician_id } => {
            let batch = client
                .all_trades_for(&PoliticianId::new(politician_id))
                .await?;
            output::batch(&batch)
        }
        Commands::History { politician_id } => {
            let records = client
                .trades_for_politician(&PoliticianId::new(politician_id))
                .await?;
            Ok(Value::Array(records))
        }
        Commands::Latest { pages } => {
            let pages = pages.unwrap_or_else(|| client.latest_max_pages());
            let batch = client.latest_trades(pages).await?;
            output::batch(&batch)
        }
        Commands::Committees { ids } => {
            let batch = client
                .get_committees(ids.into_iter().map(CommitteeId::from))
                .await?;
            output::batch(&batch)
        }
    }
}
