use std::path::PathBuf;

use thiserror::Error;
use tokio::sync::RwLock;
use tracing::warn;

use crate::server::models::AppSettings;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to write settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode settings: {0}")]
    Encode(#[from] serde_json::Error),
}

/// App settings persisted as a JSON document on disk. A missing or unreadable
/// file falls back to [`AppSettings::default`], mirroring how the client
/// treated its local storage. The in-memory copy is the source of truth once
/// loaded; `save` rewrites the whole document.
pub struct SettingsStore {
    path: PathBuf,
    cached: RwLock<Option<AppSettings>>,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: RwLock::new(None),
        }
    }

    pub async fn load(&self) -> AppSettings {
        if let Some(settings) = self.cached.read().await.clone() {
            return settings;
        }

        let settings = match tokio::fs::read(&self.path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("Ignoring malformed settings file {:?}: {}", self.path, e);
                    AppSettings::default()
                }
            },
            Err(_) => AppSettings::default(),
        };

        *self.cached.write().await = Some(settings.clone());
        settings
    }

    pub async fn save(&self, settings: AppSettings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let encoded = serde_json::to_vec_pretty(&settings)?;
        tokio::fs::write(&self.path, encoded).await?;
        *self.cached.write().await = Some(settings);
        Ok(())
    }

    /// Drop the stored document and return to defaults.
    pub async fn reset(&self) -> Result<AppSettings, SettingsError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        let settings = AppSettings::default();
        *self.cached.write().await = Some(settings.clone());
        Ok(settings)
    }
}
