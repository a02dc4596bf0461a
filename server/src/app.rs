use std::sync::Arc;

use achievement_stats::StatisticsEngine;
use achievements_db::Database;
use tokio_util::sync::CancellationToken;

use crate::config::AppConfig;

/// Application state shared by every axum handler.
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<SharedStateInner>,
}

struct SharedStateInner {
    config: AppConfig,
    db: Database,
    stats: StatisticsEngine<Database>,
    /// Cancelled once to stop the HTTP server.
    shutdown: CancellationToken,
}

impl SharedState {
    /// Create shared state from an already-opened database and loaded config.
    pub fn new(db: Database, config: AppConfig) -> Self {
        let stats = StatisticsEngine::new(db.clone());
        Self {
            inner: Arc::new(SharedStateInner {
                config,
                db,
                stats,
                shutdown: CancellationToken::new(),
            }),
        }
    }

    pub fn db(&self) -> &Database {
        &self.inner.db
    }

    pub fn stats(&self) -> &StatisticsEngine<Database> {
        &self.inner.stats
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn server_port(&self) -> u16 {
        self.inner.config.server_port
    }

    pub fn shutdown_token(&self) -> &CancellationToken {
        &self.inner.shutdown
    }
}
