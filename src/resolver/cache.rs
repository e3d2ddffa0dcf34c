use super::{ImageResolver, ResolveError};
use image::RgbImage;
use std::collections::HashMap;
use std::time::{Duration, Instant};

struct Entry<T> {
    stored_at: Instant,
    value: T,
}

/// Memoiza URL por jugador e imagen por URL durante `ttl`.
/// Los errores de red no se guardan, así un intento posterior puede funcionar.
pub struct CachedResolver<R> {
    inner: R,
    ttl: Duration,
    urls: HashMap<String, Entry<Option<String>>>,
    images: HashMap<String, Entry<RgbImage>>,
}

impl<R: ImageResolver> CachedResolver<R> {
    pub fn new(inner: R, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            urls: HashMap::new(),
            images: HashMap::new(),
        }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    fn fresh<T>(&self, entry: &Entry<T>) -> bool {
        entry.stored_at.elapsed() < self.ttl
    }
}

impl<R: ImageResolver> ImageResolver for CachedResolver<R> {
    fn resolve_photo_url(&mut self, player_name: &str) -> Result<Option<String>, ResolveError> {
        if let Some(entry) = self.urls.get(player_name) {
            if self.fresh(entry) {
                log::debug!("caché URL: {player_name}");
                return Ok(entry.value.clone());
            }
        }
        let value = self.inner.resolve_photo_url(player_name)?;
        self.urls.insert(
            player_name.to_string(),
            Entry {
                stored_at: Instant::now(),
                value: value.clone(),
            },
        );
        Ok(value)
    }

    fn fetch_image(&mut self, url: &str) -> Result<RgbImage, ResolveError> {
        if let Some(entry) = self.images.get(url) {
            if self.fresh(entry) {
                log::debug!("caché imagen: {url}");
                return Ok(entry.value.clone());
            }
        }
        let img = self.inner.fetch_image(url)?;
        self.images.insert(
            url.to_string(),
            Entry {
                stored_at: Instant::now(),
                value: img.clone(),
            },
        );
        Ok(img)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::testing::FakeResolver;
    use crate::resolver::{ImageOutcome, acquire_image};

    #[test]
    fn repeated_lookups_hit_the_cache() {
        let fake = FakeResolver::default().with_photo("Lionel Messi").without_photo("Nadie");
        let mut r = CachedResolver::new(fake, Duration::from_secs(60));

        for _ in 0..3 {
            assert!(matches!(acquire_image(&mut r, "Lionel Messi"), ImageOutcome::Ready(_)));
            assert!(matches!(acquire_image(&mut r, "Nadie"), ImageOutcome::Skip(_)));
        }
        assert_eq!(r.inner().url_calls, 2);
        assert_eq!(r.inner().image_calls, 1);
    }

    #[test]
    fn errors_are_not_cached() {
        let fake = FakeResolver::default().lookup_error("Caido");
        let mut r = CachedResolver::new(fake, Duration::from_secs(60));
        assert!(r.resolve_photo_url("Caido").is_err());
        assert!(r.resolve_photo_url("Caido").is_err());
        assert_eq!(r.inner().url_calls, 2);
    }

    #[test]
    fn expired_entries_are_refetched() {
        let fake = FakeResolver::default().with_photo("Lionel Messi");
        let mut r = CachedResolver::new(fake, Duration::ZERO);
        r.resolve_photo_url("Lionel Messi").unwrap();
        r.resolve_photo_url("Lionel Messi").unwrap();
        assert_eq!(r.inner().url_calls, 2);
    }
}
