//! Obtención de la foto del jugador.
//!
//! `ImageResolver` es la frontera con el exterior: la implementación real
//! consulta la API de Wikipedia y `CachedResolver` la memoiza. Los resultados
//! distinguen "no hay foto" (`Ok(None)`) de un fallo de red o de decodificación
//! (`Err`), aunque el juego trate ambos igual: saltar al siguiente jugador.

pub mod cache;
pub mod wikipedia;

pub use cache::CachedResolver;
pub use wikipedia::WikipediaResolver;

use image::RgbImage;

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("error HTTP: {0}")]
    Http(#[from] reqwest::Error),
    #[error("respuesta inesperada: HTTP {0}")]
    Status(u16),
    #[error("imagen no decodificable: {0}")]
    Decode(#[from] image::ImageError),
    #[error("imagen vacía")]
    EmptyImage,
}

pub trait ImageResolver {
    /// URL de una foto del jugador, `None` si no se encontró ninguna.
    fn resolve_photo_url(&mut self, player_name: &str) -> Result<Option<String>, ResolveError>;

    /// Descarga y decodifica la foto en RGB8.
    fn fetch_image(&mut self, url: &str) -> Result<RgbImage, ResolveError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoPhoto,
    LookupFailed,
    DownloadFailed,
}

#[derive(Debug)]
pub enum ImageOutcome {
    Ready(RgbImage),
    Skip(SkipReason),
}

/// URL → imagen para un jugador. Cualquier fallo acaba en `Skip`.
pub fn acquire_image(resolver: &mut dyn ImageResolver, player_name: &str) -> ImageOutcome {
    let url = match resolver.resolve_photo_url(player_name) {
        Ok(Some(url)) => url,
        Ok(None) => {
            log::warn!("sin foto para {player_name}");
            return ImageOutcome::Skip(SkipReason::NoPhoto);
        }
        Err(e) => {
            log::warn!("búsqueda fallida para {player_name}: {e}");
            return ImageOutcome::Skip(SkipReason::LookupFailed);
        }
    };

    match resolver.fetch_image(&url) {
        Ok(img) => ImageOutcome::Ready(img),
        Err(e) => {
            log::warn!("no se pudo cargar {url}: {e}");
            ImageOutcome::Skip(SkipReason::DownloadFailed)
        }
    }
}

/// Filtro de nombres de fichero: sólo fotos raster, sin logos, iconos ni banderas.
pub fn is_photo_url(url: &str) -> bool {
    let lower = url.to_lowercase();
    let file = lower.rsplit('/').next().unwrap_or(&lower);
    let raster = [".jpg", ".jpeg", ".png"].iter().any(|ext| file.ends_with(ext));
    raster && !["logo", "icon", "flag"].iter().any(|bad| file.contains(bad))
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use image::Rgb;
    use std::collections::HashMap;

    /// Resolver en memoria: nombre → URL y URL → imagen. Cuenta las llamadas.
    #[derive(Default)]
    pub struct FakeResolver {
        pub urls: HashMap<String, Result<Option<String>, u16>>,
        pub images: HashMap<String, Result<(), u16>>,
        pub url_calls: usize,
        pub image_calls: usize,
    }

    impl FakeResolver {
        pub fn with_photo(mut self, name: &str) -> Self {
            let url = format!("https://upload.example/{}.jpg", name.replace(' ', "_"));
            self.urls.insert(name.to_string(), Ok(Some(url.clone())));
            self.images.insert(url, Ok(()));
            self
        }

        pub fn without_photo(mut self, name: &str) -> Self {
            self.urls.insert(name.to_string(), Ok(None));
            self
        }

        pub fn lookup_error(mut self, name: &str) -> Self {
            self.urls.insert(name.to_string(), Err(503));
            self
        }

        pub fn broken_download(mut self, name: &str) -> Self {
            let url = format!("https://upload.example/{}.png", name.replace(' ', "_"));
            self.urls.insert(name.to_string(), Ok(Some(url.clone())));
            self.images.insert(url, Err(404));
            self
        }
    }

    impl ImageResolver for FakeResolver {
        fn resolve_photo_url(&mut self, player_name: &str) -> Result<Option<String>, ResolveError> {
            self.url_calls += 1;
            match self.urls.get(player_name) {
                Some(Ok(url)) => Ok(url.clone()),
                Some(Err(code)) => Err(ResolveError::Status(*code)),
                None => Ok(None),
            }
        }

        fn fetch_image(&mut self, url: &str) -> Result<RgbImage, ResolveError> {
            self.image_calls += 1;
            match self.images.get(url) {
                Some(Ok(())) => Ok(RgbImage::from_pixel(4, 4, Rgb([200, 10, 10]))),
                Some(Err(code)) => Err(ResolveError::Status(*code)),
                None => Err(ResolveError::EmptyImage),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeResolver;
    use super::*;

    #[test]
    fn photo_filter_keeps_only_real_photos() {
        assert!(is_photo_url("https://upload.wikimedia.org/a/ab/Messi_2022.jpg"));
        assert!(is_photo_url("https://upload.wikimedia.org/a/ab/Pirlo.JPEG"));
        assert!(!is_photo_url("https://upload.wikimedia.org/a/ab/FC_Barcelona_logo.png"));
        assert!(!is_photo_url("https://upload.wikimedia.org/a/ab/Football_icon.png"));
        assert!(!is_photo_url("https://upload.wikimedia.org/a/ab/Flag_of_Argentina.svg"));
        assert!(!is_photo_url("https://upload.wikimedia.org/a/ab/Flag_of_Italy.png"));
        assert!(!is_photo_url("https://upload.wikimedia.org/a/ab/Map.svg"));
    }

    #[test]
    fn acquire_distinguishes_outcomes() {
        let mut r = FakeResolver::default()
            .with_photo("Lionel Messi")
            .without_photo("Nadie")
            .lookup_error("Caido")
            .broken_download("Roto");

        assert!(matches!(acquire_image(&mut r, "Lionel Messi"), ImageOutcome::Ready(_)));
        assert!(matches!(
            acquire_image(&mut r, "Nadie"),
            ImageOutcome::Skip(SkipReason::NoPhoto)
        ));
        assert!(matches!(
            acquire_image(&mut r, "Caido"),
            ImageOutcome::Skip(SkipReason::LookupFailed)
        ));
        assert!(matches!(
            acquire_image(&mut r, "Roto"),
            ImageOutcome::Skip(SkipReason::DownloadFailed)
        ));
    }
}
