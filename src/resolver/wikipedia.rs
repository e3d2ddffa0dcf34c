use super::{ImageResolver, ResolveError, is_photo_url};
use crate::config::GameConfig;
use crate::imaging::decode_photo;
use image::RgbImage;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

const USER_AGENT: &str = concat!("futbol_quiz/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct SearchResponse {
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ImagesResponse {
    query: Option<ImagesQuery>,
}

#[derive(Debug, Deserialize)]
struct ImagesQuery {
    #[serde(default)]
    pages: Vec<ImagePage>,
}

#[derive(Debug, Deserialize)]
struct ImagePage {
    title: String,
    #[serde(default)]
    imageinfo: Vec<ImageInfo>,
}

#[derive(Debug, Deserialize)]
struct ImageInfo {
    url: String,
}

/// Cliente de la API de MediaWiki (llamadas bloqueantes con timeout).
pub struct WikipediaResolver {
    client: Client,
    api_url: String,
    search_suffix: String,
}

impl WikipediaResolver {
    pub fn new(api_url: &str, search_suffix: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            search_suffix: search_suffix.to_string(),
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(&config.wiki_api_url, &config.search_suffix, config.http_timeout())
    }

    fn top_search_title(&self, player_name: &str) -> Result<Option<String>, ResolveError> {
        let term = format!("{player_name} {}", self.search_suffix);
        let resp = self
            .client
            .get(&self.api_url)
            .query(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", term.trim()),
                ("srlimit", "1"),
                ("format", "json"),
                ("formatversion", "2"),
            ])
            .send()?;
        if !resp.status().is_success() {
            return Err(ResolveError::Status(resp.status().as_u16()));
        }
        let body: SearchResponse = resp.json()?;
        Ok(body
            .query
            .and_then(|q| q.search.into_iter().next())
            .map(|hit| hit.title))
    }

    fn page_image_urls(&self, title: &str) -> Result<Vec<String>, ResolveError> {
        let resp = self
            .client
            .get(&self.api_url)
            .query(&[
                ("action", "query"),
                ("titles", title),
                ("generator", "images"),
                ("gimlimit", "50"),
                ("prop", "imageinfo"),
                ("iiprop", "url"),
                ("format", "json"),
                ("formatversion", "2"),
            ])
            .send()?;
        if !resp.status().is_success() {
            return Err(ResolveError::Status(resp.status().as_u16()));
        }
        let body: ImagesResponse = resp.json()?;
        Ok(image_urls(body))
    }
}

/// URLs de las imágenes de la página, en orden de título.
fn image_urls(body: ImagesResponse) -> Vec<String> {
    let mut pages = body.query.map(|q| q.pages).unwrap_or_default();
    pages.sort_by(|a, b| a.title.cmp(&b.title));
    pages
        .into_iter()
        .filter_map(|p| p.imageinfo.into_iter().next())
        .map(|info| info.url)
        .collect()
}

impl ImageResolver for WikipediaResolver {
    fn resolve_photo_url(&mut self, player_name: &str) -> Result<Option<String>, ResolveError> {
        let Some(title) = self.top_search_title(player_name)? else {
            return Ok(None);
        };
        log::debug!("{player_name} → página '{title}'");
        let url = self
            .page_image_urls(&title)?
            .into_iter()
            .find(|u| is_photo_url(u));
        Ok(url)
    }

    fn fetch_image(&mut self, url: &str) -> Result<RgbImage, ResolveError> {
        let resp = self.client.get(url).send()?;
        if !resp.status().is_success() {
            return Err(ResolveError::Status(resp.status().as_u16()));
        }
        let bytes = resp.bytes()?;
        decode_photo(&bytes)?.ok_or(ResolveError::EmptyImage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_response_takes_top_hit() {
        let body: SearchResponse = serde_json::from_str(
            r#"{"batchcomplete":true,"query":{"searchinfo":{"totalhits":2},
                "search":[{"ns":0,"title":"Lionel Messi","pageid":2150841},
                          {"ns":0,"title":"Messi (film)","pageid":1}]}}"#,
        )
        .unwrap();
        let top = body.query.and_then(|q| q.search.into_iter().next()).map(|h| h.title);
        assert_eq!(top.as_deref(), Some("Lionel Messi"));
    }

    #[test]
    fn image_urls_are_sorted_and_filterable() {
        let body: ImagesResponse = serde_json::from_str(
            r#"{"query":{"pages":[
                {"ns":6,"title":"File:Messi 2023.jpg","missing":true,"imageinfo":[{"url":"https://upload.wikimedia.org/m/Messi_2023.jpg"}]},
                {"ns":6,"title":"File:Flag of Argentina.svg","imageinfo":[{"url":"https://upload.wikimedia.org/f/Flag_of_Argentina.svg"}]},
                {"ns":6,"title":"File:Barcelona logo.png","imageinfo":[{"url":"https://upload.wikimedia.org/b/Barcelona_logo.png"}]},
                {"ns":6,"title":"File:Sin info.jpg"}
            ]}}"#,
        )
        .unwrap();
        let urls = image_urls(body);
        assert_eq!(urls.len(), 3);
        let first = urls.into_iter().find(|u| is_photo_url(u));
        assert_eq!(first.as_deref(), Some("https://upload.wikimedia.org/m/Messi_2023.jpg"));
    }

    #[test]
    fn missing_query_means_no_images() {
        let body: ImagesResponse = serde_json::from_str(r#"{"batchcomplete":true}"#).unwrap();
        assert!(image_urls(body).is_empty());
    }

    #[test]
    fn unreachable_api_is_a_lookup_error() {
        // Puerto cerrado en localhost: falla rápido sin tocar la red.
        let mut r = WikipediaResolver::new(
            "http://127.0.0.1:9/w/api.php",
            "(footballer)",
            Duration::from_millis(500),
        );
        assert!(matches!(
            r.resolve_photo_url("Lionel Messi"),
            Err(ResolveError::Http(_))
        ));
    }
}
