//! Decoded film-data API record shapes.
//!
//! Only the fields this tool consumes are modeled; everything else in the
//! API responses is ignored by serde.

use serde::Deserialize;

/// Film resource: carries the ordered list of character reference URLs.
#[derive(Debug, Deserialize)]
pub struct FilmRecord {
    /// Character detail URLs, in the API's credits order.
    pub characters: Vec<String>,
}

/// Character resource: only the display name is consumed.
#[derive(Debug, Deserialize)]
pub struct CharacterRecord {
    pub name: String,
}
