// src/config.rs

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "futbol_quiz.yaml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no se pudo leer la configuración: {0}")]
    Io(#[from] std::io::Error),
    #[error("configuración YAML inválida: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub catalog_path: PathBuf,
    pub sounds_dir: PathBuf,
    pub wiki_api_url: String,
    pub search_suffix: String,
    pub http_timeout_secs: u64,
    pub cache_ttl_secs: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("players.json"),
            sounds_dir: PathBuf::from("sounds"),
            wiki_api_url: "https://en.wikipedia.org/w/api.php".to_string(),
            search_suffix: "(footballer)".to_string(),
            http_timeout_secs: 12,
            cache_ttl_secs: 86_400,
        }
    }
}

impl GameConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Fichero `futbol_quiz.yaml` (si existe) + variables de entorno.
    /// Un fichero roto no impide jugar: se avisa y se usan los valores por defecto.
    pub fn load() -> Self {
        let path = Path::new(CONFIG_FILE);
        let mut config = if path.exists() {
            Self::from_file(path).unwrap_or_else(|e| {
                log::warn!("{e}; usando configuración por defecto");
                Self::default()
            })
        } else {
            Self::default()
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(v) = var("FUTBOL_QUIZ_CATALOG") {
            self.catalog_path = PathBuf::from(v);
        }
        if let Some(v) = var("FUTBOL_QUIZ_SOUNDS") {
            self.sounds_dir = PathBuf::from(v);
        }
        if let Some(v) = var("FUTBOL_QUIZ_WIKI_API") {
            self.wiki_api_url = v;
        }
        if let Some(v) = var("FUTBOL_QUIZ_TIMEOUT_SECS") {
            match v.parse() {
                Ok(secs) => self.http_timeout_secs = secs,
                Err(_) => log::warn!("FUTBOL_QUIZ_TIMEOUT_SECS inválido: {v}"),
            }
        }
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let c = GameConfig::from_yaml_str("http_timeout_secs: 5\n").unwrap();
        assert_eq!(c.http_timeout(), Duration::from_secs(5));
        assert_eq!(c.catalog_path, PathBuf::from("players.json"));
        assert_eq!(c.search_suffix, "(footballer)");
    }

    #[test]
    fn env_overrides_win() {
        let mut c = GameConfig::default();
        c.apply_overrides(|k| match k {
            "FUTBOL_QUIZ_CATALOG" => Some("datos/jugadores.yaml".into()),
            "FUTBOL_QUIZ_TIMEOUT_SECS" => Some("no-numero".into()),
            _ => None,
        });
        assert_eq!(c.catalog_path, PathBuf::from("datos/jugadores.yaml"));
        assert_eq!(c.http_timeout_secs, 12);
    }

    #[test]
    fn broken_yaml_is_an_error() {
        assert!(GameConfig::from_yaml_str("http_timeout_secs: [").is_err());
    }
}
