//! Theme switch adapter over a settings backend.

use std::sync::Arc;

use crate::backend::SettingsBackend;
use crate::error::SettingsError;
use crate::types::ThemeMode;

/// Reads and writes the persisted theme through whichever backend the
/// host wired in.
#[derive(Clone)]
pub struct ThemeSwitch {
    backend: Arc<dyn SettingsBackend>,
}

impl ThemeSwitch {
    pub fn new(backend: Arc<dyn SettingsBackend>) -> Self {
        Self { backend }
    }

    pub async fn current(&self) -> Result<ThemeMode, SettingsError> {
        Ok(self.backend.load().await?.theme)
    }

    pub async fn set(&self, theme: ThemeMode) -> Result<(), SettingsError> {
        let settings = self.backend.load().await?.with_theme(theme);
        self.backend.save(settings).await
    }

    /// Flips the persisted theme and returns the new mode.
    pub async fn toggle(&self) -> Result<ThemeMode, SettingsError> {
        let settings = self.backend.load().await?;
        let next = settings.theme.toggled();
        self.backend.save(settings.with_theme(next)).await?;
        Ok(next)
    }
}
