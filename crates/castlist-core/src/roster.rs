//! Sequential cast listing: one GET for the film record, then one GET per
//! character reference, strictly in list order, writing each name to the
//! output sink as it resolves.

use crate::endpoint::Endpoint;
use crate::fetch::{self, FetchError};
use crate::film::{CharacterRecord, FilmRecord};
use std::fmt;
use std::io::Write;

/// Error from a cast listing run. Every variant is terminal: the first
/// failure stops all remaining fetches.
#[derive(Debug)]
pub enum CastError {
    /// The film record fetch failed; no character fetch was attempted.
    Film(FetchError),
    /// A character fetch failed. `index` is the 1-based position in the
    /// film's reference list; later references were not fetched.
    Character { index: usize, source: FetchError },
    /// Writing a name to the output sink failed.
    Output(std::io::Error),
}

impl fmt::Display for CastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastError::Film(e) => write!(f, "error fetching film: {}", e),
            CastError::Character { index, source } => {
                write!(f, "error fetching character {}: {}", index, source)
            }
            CastError::Output(e) => write!(f, "error writing output: {}", e),
        }
    }
}

impl std::error::Error for CastError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CastError::Film(e) => Some(e),
            CastError::Character { source, .. } => Some(source),
            CastError::Output(e) => Some(e),
        }
    }
}

/// Fetches film `film_id` and writes each character's name to `out`, one per
/// line, in the order the film's reference list returned them.
///
/// Each fetch fully resolves before the next one starts; there is never more
/// than one request in flight. An empty reference list is a successful run
/// that prints nothing.
pub fn print_film_cast<W: Write>(
    endpoint: &Endpoint,
    film_id: u32,
    out: &mut W,
) -> Result<(), CastError> {
    let film_url = endpoint.film_url(film_id);
    tracing::info!("fetching film {} from {}", film_id, film_url);
    let film: FilmRecord = fetch::get_json(film_url.as_str()).map_err(CastError::Film)?;

    tracing::debug!(
        "film {} lists {} character reference(s)",
        film_id,
        film.characters.len()
    );
    for (position, reference) in film.characters.iter().enumerate() {
        let index = position + 1;
        let character: CharacterRecord = fetch::get_json(reference)
            .map_err(|source| CastError::Character { index, source })?;
        writeln!(out, "{}", character.name).map_err(CastError::Output)?;
    }
    Ok(())
}
