use eventfacets_api::{AppState, ConfigFeatureGate, ConfigProjectStore, HttpFacetQueryClient, Server};
use eventfacets_core::Settings;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eventfacets_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::load()?;
    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;

    let query_client = Arc::new(HttpFacetQueryClient::new(settings.engine.clone())?);
    let projects = Arc::new(ConfigProjectStore::from_tenancy(&settings.tenancy));
    let features = Arc::new(ConfigFeatureGate::from_tenancy(&settings.tenancy));

    let state = AppState::new(query_client, projects, features, settings);
    Server::new(addr, state).run().await?;
    Ok(())
}
