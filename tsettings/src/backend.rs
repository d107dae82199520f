//! Settings backend trait and in-memory backend implementation.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tcommon::BoxFuture;

use crate::error::SettingsError;
use crate::types::Settings;

pub use crate::backends::filesystem::FilesystemSettingsBackend;

pub trait SettingsBackend: Send + Sync {
    fn load<'a>(&'a self) -> BoxFuture<'a, Result<Settings, SettingsError>>;

    fn save<'a>(&'a self, settings: Settings) -> BoxFuture<'a, Result<(), SettingsError>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsBackendConfig {
    Filesystem { root: PathBuf },
    InMemory,
}

impl Default for SettingsBackendConfig {
    fn default() -> Self {
        Self::Filesystem {
            root: default_settings_root(),
        }
    }
}

pub fn default_settings_root() -> PathBuf {
    PathBuf::from(".twinkit")
}

pub fn create_settings_backend(
    config: SettingsBackendConfig,
) -> Result<Arc<dyn SettingsBackend>, SettingsError> {
    match config {
        SettingsBackendConfig::Filesystem { root } => {
            Ok(Arc::new(FilesystemSettingsBackend::new(root)?))
        }
        SettingsBackendConfig::InMemory => Ok(Arc::new(InMemorySettingsBackend::new())),
    }
}

pub fn create_default_settings_backend() -> Result<Arc<dyn SettingsBackend>, SettingsError> {
    create_settings_backend(SettingsBackendConfig::default())
}

#[derive(Debug, Default)]
pub struct InMemorySettingsBackend {
    state: Mutex<Option<Settings>>,
}

impl InMemorySettingsBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsBackend for InMemorySettingsBackend {
    fn load<'a>(&'a self) -> BoxFuture<'a, Result<Settings, SettingsError>> {
        Box::pin(async move {
            let state = self
                .state
                .lock()
                .map_err(|_| SettingsError::storage("settings backend lock poisoned"))?;

            Ok(state.clone().unwrap_or_default())
        })
    }

    fn save<'a>(&'a self, settings: Settings) -> BoxFuture<'a, Result<(), SettingsError>> {
        Box::pin(async move {
            let mut state = self
                .state
                .lock()
                .map_err(|_| SettingsError::storage("settings backend lock poisoned"))?;

            *state = Some(settings);
            Ok(())
        })
    }
}
