// src/sound.rs

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEvent {
    Goal,    // acierto
    Whistle, // intentos agotados
}

impl SoundEvent {
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundEvent::Goal => "goal.mp3",
            SoundEvent::Whistle => "whistle.mp3",
        }
    }
}

/// Efectos de sonido. Si falta el fichero no suena nada.
#[derive(Debug, Clone)]
pub struct SoundPlayer {
    dir: PathBuf,
}

impl SoundPlayer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, event: SoundEvent) -> PathBuf {
        self.dir.join(event.file_name())
    }

    /// Lanza el sonido en un hilo aparte y vuelve enseguida.
    /// Devuelve `false` si no había fichero que reproducir.
    pub fn play(&self, event: SoundEvent) -> bool {
        let path = self.path_for(event);
        if !path.exists() {
            log::debug!("sin sonido para {event:?}: {} no existe", path.display());
            return false;
        }
        std::thread::spawn(move || {
            if let Err(e) = play_file(&path) {
                log::warn!("no se pudo reproducir {}: {e}", path.display());
            }
        });
        true
    }
}

#[cfg(feature = "audio")]
fn play_file(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    use std::fs::File;
    use std::io::BufReader;

    let (_stream, handle) = rodio::OutputStream::try_default()?;
    let sink = rodio::Sink::try_new(&handle)?;
    let file = BufReader::new(File::open(path)?);
    sink.append(rodio::Decoder::new(file)?);
    sink.sleep_until_end();
    Ok(())
}

#[cfg(not(feature = "audio"))]
fn play_file(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("♪ {} (compilado sin la feature `audio`)", path.display());
    Ok(())
}
