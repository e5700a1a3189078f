use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::clipboard::WL_COPY_COMMAND;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigPathError {
    #[error("missing HOME environment variable")]
    MissingHomeDirectory,
}

const APP_DIR: &str = "layerglow";
const APP_CONFIG_FILE: &str = "config.json";

/// Application-level settings from `config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Try the clipboard on export; when off, exports always print.
    pub clipboard: bool,
    pub clipboard_command: String,
    /// Mirror export acknowledgements as desktop notifications.
    pub notifications: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            clipboard: true,
            clipboard_command: WL_COPY_COMMAND.to_string(),
            notifications: true,
        }
    }
}

pub fn load_app_config() -> AppConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_app_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_app_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> AppConfig {
    let path = match app_config_path(xdg_config_home, home) {
        Ok(path) => path,
        Err(err) => {
            tracing::warn!(%err, "cannot locate config.json; using defaults");
            return AppConfig::default();
        }
    };
    if !path.exists() {
        return AppConfig::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(?err, ?path, "failed to parse config.json; using defaults");
            AppConfig::default()
        }),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read config.json; using defaults");
            AppConfig::default()
        }
    }
}

fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    let dir = |key: &str| std::env::var_os(key).map(PathBuf::from);
    (dir("XDG_CONFIG_HOME"), dir("HOME"))
}

/// `<config root>/layerglow/config.json`, where the root is a non-empty
/// `$XDG_CONFIG_HOME` or else `$HOME/.config`.
fn app_config_path(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let root = match xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        Some(xdg) => xdg.to_path_buf(),
        None => home
            .ok_or(ConfigPathError::MissingHomeDirectory)?
            .join(".config"),
    };
    Ok(root.join(APP_DIR).join(APP_CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixture_root() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let pid = std::process::id();
        path.push(format!("layerglow-config-{pid}-{nanos}"));
        path
    }

    fn with_config_file<F: FnOnce(&Path)>(contents: &str, f: F) {
        let root = fixture_root();
        let dir = root.join(APP_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(APP_CONFIG_FILE), contents).unwrap();
        f(&root);
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn app_config_path_prefers_xdg_config_home() {
        let path = app_config_path(
            Some(Path::new("/tmp/config-root")),
            Some(Path::new("/tmp/home")),
        )
        .expect("path should resolve");

        assert_eq!(path, PathBuf::from("/tmp/config-root/layerglow/config.json"));
    }

    #[test]
    fn app_config_path_falls_back_to_home_dot_config() {
        let path = app_config_path(
            Some(Path::new("")),
            Some(Path::new("/tmp/home")),
        )
        .expect("path should resolve");

        assert_eq!(path, PathBuf::from("/tmp/home/.config/layerglow/config.json"));
    }

    #[test]
    fn app_config_path_errors_when_home_missing_and_xdg_unset() {
        let error = app_config_path(None, None).unwrap_err();
        assert_eq!(error, ConfigPathError::MissingHomeDirectory);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = load_app_config_with(Some(&fixture_root()), None);
        assert_eq!(config, AppConfig::default());
        assert!(config.clipboard);
        assert_eq!(config.clipboard_command, "wl-copy");
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let contents = r#"{ "notifications": false, "clipboard_command": "xclip" }"#;
        with_config_file(contents, |root| {
            let config = load_app_config_with(Some(root), None);
            assert!(config.clipboard);
            assert!(!config.notifications);
            assert_eq!(config.clipboard_command, "xclip");
        });
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        with_config_file("{ not json", |root| {
            assert_eq!(load_app_config_with(Some(root), None), AppConfig::default());
        });
    }
}
