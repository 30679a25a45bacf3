use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;

use vocards_lib::auth::{AuthSession, FileStore};
use vocards_lib::config::AppConfig;
use vocards_lib::flashcards::{GenerationForm, LanguagePair, ManualDraft, Workspace};
use vocards_lib::gateway::{AnthropicGateway, CardGateway};

/// Shared application state for CLI commands and the TUI
pub struct App {
    pub config: AppConfig,
    pub runtime: Runtime,
    gateway: Arc<dyn CardGateway>,
}

impl App {
    /// Load config and build the gateway
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = AppConfig::load(config_path).context("Failed to load config")?;

        let gateway = AnthropicGateway::new(config.gateway.clone())
            .context("Failed to build HTTP client")?;

        Self::with_gateway(config, Arc::new(gateway))
    }

    pub fn with_gateway(config: AppConfig, gateway: Arc<dyn CardGateway>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .context("Failed to start async runtime")?;

        Ok(Self {
            config,
            runtime,
            gateway,
        })
    }

    pub fn gateway(&self) -> Arc<dyn CardGateway> {
        Arc::clone(&self.gateway)
    }

    /// A fresh, empty workspace backed by the configured gateway
    pub fn new_workspace(&self) -> Workspace {
        Workspace::new(self.gateway())
    }

    /// Direction from the command line, falling back to config
    pub fn language_pair(&self, direction: Option<LanguagePair>) -> LanguagePair {
        direction.unwrap_or(self.config.defaults.language_pair)
    }

    pub fn generation_form(&self) -> GenerationForm {
        GenerationForm {
            count: self.config.defaults.card_count,
            language_pair: self.config.defaults.language_pair,
            ..GenerationForm::default()
        }
    }

    pub fn manual_draft(&self) -> ManualDraft {
        ManualDraft {
            language_pair: self.config.defaults.language_pair,
            ..ManualDraft::default()
        }
    }
}

/// Session stored at the default location
pub fn auth_session() -> Result<AuthSession<FileStore>> {
    let path = FileStore::default_path().context("Failed to get data directory")?;
    Ok(AuthSession::new(FileStore::new(path)))
}
