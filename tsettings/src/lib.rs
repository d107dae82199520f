//! Viewer settings persistence layer with theme switch adapter support.

mod adapter;
mod backend;
mod backends;
mod error;
mod types;

pub mod prelude {
    pub use crate::{
        FilesystemSettingsBackend, InMemorySettingsBackend, Settings, SettingsBackend,
        SettingsBackendConfig, SettingsError, SettingsErrorKind, ThemeMode, ThemeSwitch,
        create_default_settings_backend, create_settings_backend,
    };
}

pub use adapter::ThemeSwitch;
pub use backend::{
    FilesystemSettingsBackend, InMemorySettingsBackend, SettingsBackend, SettingsBackendConfig,
    create_default_settings_backend, create_settings_backend, default_settings_root,
};
pub use error::{SettingsError, SettingsErrorKind};
pub use types::{Settings, ThemeMode};

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{
        FilesystemSettingsBackend, InMemorySettingsBackend, Settings, SettingsBackend, ThemeMode,
        ThemeSwitch,
    };

    fn temp_dir(prefix: &str) -> std::path::PathBuf {
        let unique = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!("tsettings-{prefix}-{unique}"))
    }

    #[tokio::test]
    async fn in_memory_backend_defaults_to_dark_theme() {
        let backend = InMemorySettingsBackend::new();
        let settings = backend.load().await.expect("settings should load");
        assert_eq!(settings.theme, ThemeMode::Dark);
    }

    #[tokio::test]
    async fn in_memory_backend_round_trips_settings() {
        let backend = InMemorySettingsBackend::new();
        backend
            .save(Settings::default().with_theme(ThemeMode::Light))
            .await
            .expect("settings should save");

        let settings = backend.load().await.expect("settings should load");
        assert_eq!(settings.theme, ThemeMode::Light);
    }

    #[tokio::test]
    async fn filesystem_backend_persists_across_instances() {
        let root = temp_dir("filesystem");

        {
            let backend =
                FilesystemSettingsBackend::new(&root).expect("fs backend should initialize");
            backend
                .save(Settings::default().with_theme(ThemeMode::Light))
                .await
                .expect("settings should save");
        }

        let backend = FilesystemSettingsBackend::new(&root).expect("fs backend should initialize");
        let settings = backend.load().await.expect("settings should load");
        assert_eq!(settings.theme, ThemeMode::Light);

        std::fs::remove_dir_all(&root).expect("temporary directory should be removable");
    }

    #[tokio::test]
    async fn filesystem_backend_loads_defaults_when_file_is_missing() {
        let root = temp_dir("missing");
        let backend = FilesystemSettingsBackend::new(&root).expect("fs backend should initialize");

        let settings = backend.load().await.expect("settings should load");
        assert_eq!(settings.theme, ThemeMode::Dark);

        std::fs::remove_dir_all(&root).expect("temporary directory should be removable");
    }

    #[tokio::test]
    async fn theme_switch_toggles_and_persists() {
        let backend: Arc<dyn SettingsBackend> = Arc::new(InMemorySettingsBackend::new());
        let switch = ThemeSwitch::new(backend.clone());

        assert_eq!(switch.current().await.expect("current theme"), ThemeMode::Dark);
        assert_eq!(switch.toggle().await.expect("toggle theme"), ThemeMode::Light);
        assert_eq!(switch.current().await.expect("current theme"), ThemeMode::Light);

        switch.set(ThemeMode::Dark).await.expect("set theme");
        let settings = backend.load().await.expect("settings should load");
        assert_eq!(settings.theme, ThemeMode::Dark);
    }
}
