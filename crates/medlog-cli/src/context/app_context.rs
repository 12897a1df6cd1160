use std::sync::Arc;

use anyhow::Context;
use medlog_api::MedlogClient;
use medlog_auth::{AppState, StateStore, TracingNavigator};
use medlog_config::MedlogConfig;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: MedlogConfig,
    pub store: StateStore,
    pub state: AppState,
    pub client: MedlogClient,
}

impl AppContext {
    /// Restore persisted state and build the API client on top of it.
    pub fn init(config: MedlogConfig) -> anyhow::Result<Self> {
        let store = StateStore::new(config.storage.state_dir.clone());
        let state = AppState::load_from(&store);
        tracing::debug!(dir = %store.dir().display(), "state restored");

        let client = MedlogClient::new(&config, state.clone(), Arc::new(TracingNavigator))
            .context("failed to initialize MedLog client")?;

        Ok(Self {
            config,
            store,
            state,
            client,
        })
    }

    /// Write every store back to the state directory.
    pub async fn persist(&self) -> anyhow::Result<()> {
        self.state.persist_to(&self.store).await.with_context(|| {
            format!(
                "failed to persist state to {}",
                self.store.dir().display()
            )
        })
    }
}
