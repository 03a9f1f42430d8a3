use crate::accounts::types::AccountsConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config directory not found")]
    ConfigDirNotFound,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .or_else(dirs::data_local_dir)
        .ok_or(ConfigError::ConfigDirNotFound)?;

    Ok(config_dir.join("useradmin").join("config.jsonc"))
}

pub fn load_config() -> Result<AccountsConfig> {
    load_config_from(&get_config_path()?)
}

pub fn save_config(config: &AccountsConfig) -> Result<()> {
    save_config_to(&get_config_path()?, config)
}

/// Missing files yield the seeded roster so a first launch has something to show.
pub fn load_config_from(path: &Path) -> Result<AccountsConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using seeded roster");
        return Ok(AccountsConfig::seeded());
    }

    let content = fs::read_to_string(path)?;
    let stripped = json_comments::StripComments::new(content.as_bytes());
    let config: AccountsConfig = serde_json::from_reader(stripped)?;

    tracing::debug!(path = %path.display(), users = config.users.len(), "loaded config");
    Ok(config)
}

/// Comments in an existing file are not preserved.
pub fn save_config_to(path: &Path, config: &AccountsConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::types::User;

    #[test]
    fn test_config_path() {
        let path = get_config_path().unwrap();
        assert!(path.to_string_lossy().contains("useradmin"));
        assert!(path.to_string_lossy().ends_with("config.jsonc"));
    }

    #[test]
    fn test_load_missing_file_seeds_roster() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.jsonc")).unwrap();
        assert_eq!(config.users.len(), 3);
        assert!(!dir.path().join("config.jsonc").exists());
    }

    #[test]
    fn test_save_creates_parent_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.jsonc");
        let config = AccountsConfig {
            users: vec![User::new("Ahmed", "ahmed@example.com")],
        };

        save_config_to(&path, &config).unwrap();
        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_strips_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.jsonc");
        fs::write(
            &path,
            r#"{
                // accounts managed locally
                "users": [
                    { "id": "67e55044-10b1-426f-9247-bb680e5fe0c8", "name": "Jonas" /* admin */ }
                ]
            }"#,
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.users.len(), 1);
        assert_eq!(config.users[0].name, "Jonas");
    }

    #[test]
    fn test_load_invalid_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.jsonc");
        fs::write(&path, "{ users: ").unwrap();

        assert!(matches!(load_config_from(&path), Err(ConfigError::Json(_))));
    }
}
