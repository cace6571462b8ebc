//! HTTP server command

use super::load_words;
use crate::server::{self, AppState};
use crate::service::GameService;
use crate::store::{FileStore, GameStore, MemoryStore};
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub addr: SocketAddr,
    /// JSON snapshot file; games are kept in memory only when `None`
    pub data: Option<PathBuf>,
    /// Word list file; the embedded dictionary when `None`
    pub words: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 4567)),
            data: None,
            words: None,
            seed: None,
        }
    }
}

impl ServeConfig {
    /// Build the service this configuration describes
    ///
    /// # Errors
    ///
    /// Fails if the word list or the snapshot file cannot be loaded.
    pub fn build_service(&self) -> Result<GameService> {
        let words = load_words(self.words.as_deref())?;

        let store: Arc<dyn GameStore> = match &self.data {
            Some(path) => Arc::new(
                FileStore::open(path)
                    .with_context(|| format!("failed to open game store {}", path.display()))?,
            ),
            None => Arc::new(MemoryStore::new()),
        };

        info!(
            words = words.len(),
            persistent = self.data.is_some(),
            "Game service configured"
        );
        Ok(GameService::new(store, words, self.seed))
    }
}

/// Start the HTTP server and block until shutdown.
///
/// # Errors
///
/// Fails if the service cannot be built or the address cannot be bound.
pub async fn run_serve(config: ServeConfig) -> Result<()> {
    let service = config.build_service()?;

    info!("Starting hangman on http://{}", config.addr);
    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    server::serve(listener, AppState::new(service)).await?;
    Ok(())
}
