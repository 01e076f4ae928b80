//! Film-data API endpoint modeling.
//!
//! Validates the API base URL once, then builds per-film resource URLs by
//! path-segment manipulation so odd bases (missing trailing slash, extra
//! path prefix) still produce well-formed `films/<id>/` URLs.

use anyhow::{Context, Result};
use url::Url;

/// Public film-data API base used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "https://swapi.dev/api/";

/// Validated API base URL; builds per-film resource URLs.
#[derive(Debug, Clone)]
pub struct Endpoint {
    base: Url,
}

impl Endpoint {
    /// Parses and validates `base`. The base must be an absolute URL that can
    /// carry path segments (e.g. `https://swapi.dev/api/`).
    pub fn new(base: &str) -> Result<Self> {
        let base = Url::parse(base).with_context(|| format!("invalid API base URL: {base}"))?;
        if base.cannot_be_a_base() {
            anyhow::bail!("API base URL cannot carry a path: {base}");
        }
        Ok(Self { base })
    }

    /// Returns the film resource URL `<base>/films/<id>/`.
    pub fn film_url(&self, film_id: u32) -> Url {
        let mut url = self.base.clone();
        // new() rejects cannot-be-a-base URLs, so path_segments_mut always succeeds.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push("films")
                .push(&film_id.to_string())
                .push("");
        }
        url
    }
}
