use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tcommon::BoxFuture;

use crate::backend::SettingsBackend;
use crate::error::SettingsError;
use crate::types::{Settings, ThemeMode};

#[derive(Debug)]
pub struct FilesystemSettingsBackend {
    root: PathBuf,
    lock: Mutex<()>,
}

impl FilesystemSettingsBackend {
    pub fn new(root: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|error| {
            SettingsError::storage(format!("failed to create settings backend root: {error}"))
        })?;
        Ok(Self {
            root,
            lock: Mutex::new(()),
        })
    }

    fn settings_path(&self) -> PathBuf {
        self.root.join("settings.json")
    }

    fn load_state(&self) -> Result<Option<PersistedSettings>, SettingsError> {
        let path = self.settings_path();
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&path)
            .map_err(|error| SettingsError::storage(format!("failed to read settings file: {error}")))?;
        let state = serde_json::from_slice::<PersistedSettings>(&bytes).map_err(|error| {
            SettingsError::serialization(format!("failed to deserialize settings: {error}"))
        })?;
        Ok(Some(state))
    }

    fn save_state(&self, state: &PersistedSettings) -> Result<(), SettingsError> {
        let bytes = serde_json::to_vec_pretty(state).map_err(|error| {
            SettingsError::serialization(format!("failed to serialize settings: {error}"))
        })?;

        write_atomic(&self.settings_path(), &bytes)
    }
}

impl SettingsBackend for FilesystemSettingsBackend {
    fn load<'a>(&'a self) -> BoxFuture<'a, Result<Settings, SettingsError>> {
        Box::pin(async move {
            let _guard = self
                .lock
                .lock()
                .map_err(|_| SettingsError::storage("filesystem backend lock poisoned"))?;

            match self.load_state()? {
                Some(state) => state.into_settings(),
                None => Ok(Settings::default()),
            }
        })
    }

    fn save<'a>(&'a self, settings: Settings) -> BoxFuture<'a, Result<(), SettingsError>> {
        Box::pin(async move {
            let _guard = self
                .lock
                .lock()
                .map_err(|_| SettingsError::storage("filesystem backend lock poisoned"))?;

            self.save_state(&PersistedSettings::from_settings(settings))
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedSettings {
    theme: String,
}

impl PersistedSettings {
    fn from_settings(settings: Settings) -> Self {
        Self {
            theme: theme_to_string(settings.theme),
        }
    }

    fn into_settings(self) -> Result<Settings, SettingsError> {
        Ok(Settings {
            theme: theme_from_str(&self.theme)?,
        })
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), SettingsError> {
    let Some(parent) = path.parent() else {
        return Err(SettingsError::storage(
            "settings file missing parent directory",
        ));
    };
    fs::create_dir_all(parent).map_err(|error| {
        SettingsError::storage(format!("failed to create parent directory: {error}"))
    })?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, bytes).map_err(|error| {
        SettingsError::storage(format!("failed to write temporary settings file: {error}"))
    })?;

    if path.exists() {
        fs::remove_file(path).map_err(|error| {
            SettingsError::storage(format!("failed to replace existing settings file: {error}"))
        })?;
    }
    fs::rename(&tmp, path).map_err(|error| {
        SettingsError::storage(format!("failed to finalize settings file: {error}"))
    })
}

fn theme_to_string(theme: ThemeMode) -> String {
    match theme {
        ThemeMode::Light => "light".to_string(),
        ThemeMode::Dark => "dark".to_string(),
    }
}

fn theme_from_str(value: &str) -> Result<ThemeMode, SettingsError> {
    match value {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        _ => Err(SettingsError::serialization(format!(
            "unknown theme value '{value}'"
        ))),
    }
}
