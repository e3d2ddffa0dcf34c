use crate::config::GameConfig;
use crate::data::Catalog;
use crate::model::{AppState, Difficulty, PlayerRecord};
use crate::resolver::{CachedResolver, ImageResolver, WikipediaResolver};
use crate::session::GameSession;
use crate::sound::SoundPlayer;
use eframe::egui;
use image::RgbImage;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;

// Submódulos
pub mod actions;
pub mod images;
pub mod navigation;
pub mod resets;
pub mod view_models;

/// Identifica la textura ya subida a egui (jugador + desenfoque).
#[derive(Clone, Debug, PartialEq)]
pub struct TextureKey {
    pub name: String,
    pub blur_bits: u32,
}

pub struct QuizApp {
    pub config: GameConfig,
    pub catalog: Option<Catalog>,
    pub resolver: Box<dyn ImageResolver>,
    pub sounds: SoundPlayer,
    pub session: Option<GameSession>,
    pub selected_difficulty: Difficulty,
    pub state: AppState,
    pub message: String,
    pub input: String,
    pub confirm_abandon: bool,
    pub target_image: Option<RgbImage>,
    pub reveal_started: Option<Instant>,
    pub texture: Option<(TextureKey, egui::TextureHandle)>,
    rng: StdRng,
}

impl QuizApp {
    /// Arranque real: catálogo desde disco y Wikipedia con caché.
    pub fn from_config(config: GameConfig) -> Self {
        let resolver = CachedResolver::new(WikipediaResolver::from_config(&config), config.cache_ttl());
        let sounds = SoundPlayer::new(config.sounds_dir.clone());
        let catalog = match Catalog::load(&config.catalog_path) {
            Ok(c) => Ok(c),
            Err(e) => {
                log::warn!("catálogo no disponible: {e}");
                Err(e.to_string())
            }
        };
        Self::new(config, catalog, Box::new(resolver), sounds, StdRng::from_entropy())
    }

    pub fn new(
        config: GameConfig,
        catalog: Result<Catalog, String>,
        resolver: Box<dyn ImageResolver>,
        sounds: SoundPlayer,
        rng: StdRng,
    ) -> Self {
        let (catalog, message) = match catalog {
            Ok(c) => (Some(c), String::new()),
            Err(e) => (
                None,
                format!("⚠ No hay jugadores disponibles ({e}). No se puede empezar."),
            ),
        };
        Self {
            config,
            catalog,
            resolver,
            sounds,
            session: None,
            selected_difficulty: Difficulty::Easy,
            state: AppState::DifficultySelect,
            message,
            input: String::new(),
            confirm_abandon: false,
            target_image: None,
            reveal_started: None,
            texture: None,
            rng,
        }
    }

    pub fn is_playable(&self, difficulty: Difficulty) -> bool {
        self.catalog
            .as_ref()
            .map(|c| c.is_playable(difficulty))
            .unwrap_or(false)
    }

    /// Ejecuta una transición de la sesión con su pool y el rng.
    fn with_session<T>(
        &mut self,
        f: impl FnOnce(&mut GameSession, &[PlayerRecord], &mut StdRng) -> T,
    ) -> Option<T> {
        let session = self.session.as_mut()?;
        let pool = self
            .catalog
            .as_ref()
            .map(|c| c.pool(session.profile.difficulty))
            .unwrap_or(&[]);
        Some(f(session, pool, &mut self.rng))
    }

    fn sync_state(&mut self) {
        self.state = match &self.session {
            None => AppState::DifficultySelect,
            Some(s) if s.finished => AppState::Finished,
            Some(_) => AppState::Quiz,
        };
    }

    pub fn target_name(&self) -> Option<&str> {
        self.session
            .as_ref()?
            .current_target
            .as_ref()
            .map(|t| t.name.as_str())
    }
}
