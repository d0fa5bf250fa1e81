//! Theme settings persisted to a local JSON file.
//!
//! The file holds at least `{"theme": "light" | "dark"}`. A missing or
//! unreadable file means the default light theme. Keys this app does not
//! know about are carried through a save untouched.

use crate::error::SettingsError;
use crate::types::Theme;
use parley_core::Result;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Contents of the settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// An unrecognized value reads as the default theme.
    #[serde(default, deserialize_with = "lenient_theme")]
    pub theme: Theme,
    /// Keys owned by something else.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn lenient_theme<'de, D>(deserializer: D) -> std::result::Result<Theme, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(raw.clone()).unwrap_or_else(|_| {
        tracing::warn!(value = %raw, "Unrecognized theme, using default");
        Theme::default()
    }))
}

/// Reads and writes [`AppSettings`] at a fixed path.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl SettingsStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the settings, falling back to defaults when the file is
    /// missing or malformed.
    pub async fn load(&self) -> AppSettings {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No settings file, using defaults");
                return AppSettings::default();
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "Failed to read settings, using defaults");
                return AppSettings::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "Failed to parse settings, using defaults");
                AppSettings::default()
            }
        }
    }

    /// Updates the theme, keeping every other key in the file.
    pub async fn set_theme(&self, theme: Theme) -> Result<AppSettings, SettingsError> {
        let _lock = self.write_lock.lock().await;
        let mut settings = self.load().await;
        settings.theme = theme;
        self.write(&settings).await?;
        tracing::info!(path = %self.path.display(), theme = ?theme, "Saved theme");
        Ok(settings)
    }

    async fn write(&self, settings: &AppSettings) -> Result<(), SettingsError> {
        let bytes = encode(settings).map_err(|e| SettingsError::Serialize {
            details: e.to_string(),
        })?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| SettingsError::Io {
                path: self.path.display().to_string(),
                details: e.to_string(),
            })?;
        Ok(())
    }
}

/// Pretty-prints with four-space indentation.
fn encode(settings: &AppSettings) -> std::result::Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    settings.serialize(&mut serializer)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SettingsStore {
        SettingsStore::new(dir.path().join("config.json"))
    }

    #[tokio::test]
    async fn missing_file_loads_light_theme() {
        let tmp = TempDir::new().unwrap();
        let settings = store_in(&tmp).load().await;
        assert_eq!(settings.theme, Theme::Light);
        assert!(settings.extra.is_empty());
    }

    #[tokio::test]
    async fn malformed_file_loads_light_theme() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);
        tokio::fs::write(store.path(), "{ theme: dark").await.unwrap();

        assert_eq!(store.load().await.theme, Theme::Light);
    }

    #[tokio::test]
    async fn saved_theme_loads_back() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);

        let saved = store.set_theme(Theme::Dark).await.unwrap();
        assert_eq!(saved.theme, Theme::Dark);
        assert_eq!(store.load().await.theme, Theme::Dark);

        store.set_theme(Theme::Light).await.unwrap();
        assert_eq!(store.load().await.theme, Theme::Light);
    }

    #[tokio::test]
    async fn file_uses_four_space_indent() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);

        store.set_theme(Theme::Dark).await.unwrap();

        let content = tokio::fs::read_to_string(store.path()).await.unwrap();
        assert_eq!(content, "{\n    \"theme\": \"dark\"\n}");
    }

    #[tokio::test]
    async fn unknown_keys_survive_theme_change() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);
        tokio::fs::write(store.path(), r#"{"theme": "light", "font_size": 14}"#)
            .await
            .unwrap();

        store.set_theme(Theme::Dark).await.unwrap();

        let raw: Value =
            serde_json::from_str(&tokio::fs::read_to_string(store.path()).await.unwrap()).unwrap();
        assert_eq!(raw["theme"], "dark");
        assert_eq!(raw["font_size"], 14);
    }

    #[tokio::test]
    async fn unrecognized_theme_keeps_other_keys() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);

        for theme in [r#""Dark""#, "null", r#""blue""#, "3"] {
            let content = format!(r#"{{"theme": {theme}, "font_size": 14}}"#);
            tokio::fs::write(store.path(), content).await.unwrap();

            let loaded = store.load().await;
            assert_eq!(loaded.theme, Theme::Light);
            assert_eq!(loaded.extra["font_size"], 14);

            store.set_theme(Theme::Dark).await.unwrap();

            let raw: Value =
                serde_json::from_str(&tokio::fs::read_to_string(store.path()).await.unwrap())
                    .unwrap();
            assert_eq!(raw["theme"], "dark");
            assert_eq!(raw["font_size"], 14);
        }
    }

    #[tokio::test]
    async fn save_into_missing_directory_fails() {
        let tmp = TempDir::new().unwrap();
        let store = SettingsStore::new(tmp.path().join("absent").join("config.json"));

        let err = store.set_theme(Theme::Dark).await.unwrap_err();
        assert!(err.to_string().contains("I/O error"));
    }
}
