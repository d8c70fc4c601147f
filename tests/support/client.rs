//! Scripted-transport client setup shared by integration tests.

use std::sync::Arc;

use capitoltrades::adapter::capitoltrades::client::{POLITICIANS_PATH, TRADES_PATH};
use capitoltrades::adapter::capitoltrades::{DisclosureClient, DisclosureClientBuilder};
use capitoltrades::infrastructure::config::ApiConfig;
use capitoltrades::port::HttpTransport;
use capitoltrades::testkit::fixtures::{page_json, politician_json};
use capitoltrades::testkit::transport::ScriptedTransport;

pub const BASE_URL: &str = "https://bff.capitoltrades.com";

/// Directory served by [`script_startup`].
pub fn directory() -> Vec<serde_json::Value> {
    vec![
        politician_json("P000197", "Pelosi, Nancy"),
        politician_json("T000278", "Tuberville, Tommy"),
        politician_json("G000583", "Gottheimer, Josh"),
    ]
}

/// Queue a successful warm-up and serve the default directory.
pub fn script_startup(transport: &ScriptedTransport) {
    transport.push_json(TRADES_PATH, page_json(&[], 0));
    transport.serve_pages(POLITICIANS_PATH, directory(), None);
}

pub fn builder(transport: &Arc<ScriptedTransport>) -> DisclosureClientBuilder {
    let transport: Arc<dyn HttpTransport> = transport.clone();
    DisclosureClient::builder(ApiConfig::with_base_url(BASE_URL)).transport(transport)
}

/// A client seeded with [`directory`], and the transport behind it.
pub async fn seeded_client() -> (DisclosureClient, Arc<ScriptedTransport>) {
    let transport = Arc::new(ScriptedTransport::new());
    script_startup(&transport);
    let client = builder(&transport)
        .initialize_direct()
        .await
        .expect("scripted client should initialize");
    (client, transport)
}
