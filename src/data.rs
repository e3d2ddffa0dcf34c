// src/data.rs

use crate::model::{Difficulty, PlayerRecord};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("no se pudo leer {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON inválido: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML inválido: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("formato de catálogo no soportado: {0}")]
    UnsupportedFormat(String),
    #[error("el catálogo no tiene jugadores")]
    Empty,
}

/// Jugadores por dificultad. Sólo lectura tras la carga.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pools: HashMap<Difficulty, Vec<PlayerRecord>>,
}

impl Catalog {
    pub fn from_pools(pools: HashMap<Difficulty, Vec<PlayerRecord>>) -> Result<Self, CatalogError> {
        if pools.values().all(|p| p.is_empty()) {
            return Err(CatalogError::Empty);
        }
        Ok(Self { pools })
    }

    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        Self::from_pools(serde_json::from_str(content)?)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, CatalogError> {
        Self::from_pools(serde_yaml::from_str(content)?)
    }

    /// Carga el catálogo; el formato se decide por la extensión.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        let catalog = match ext.as_str() {
            "json" => Self::from_json_str(&content)?,
            "yaml" | "yml" => Self::from_yaml_str(&content)?,
            other => return Err(CatalogError::UnsupportedFormat(other.to_string())),
        };
        log::info!(
            "catálogo cargado desde {}: {} jugadores",
            path.display(),
            catalog.pools.values().map(Vec::len).sum::<usize>()
        );
        Ok(catalog)
    }

    /// Pool de una dificultad; vacío si no existe.
    pub fn pool(&self, difficulty: Difficulty) -> &[PlayerRecord] {
        self.pools.get(&difficulty).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_playable(&self, difficulty: Difficulty) -> bool {
        !self.pool(difficulty).is_empty()
    }
}
