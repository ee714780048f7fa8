//! Parsing of request lists and track numbers from text.

use thiserror::Error;

use crate::models::Track;

/// Errors raised while reading user-supplied input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid track number: {token:?}")]
    InvalidTrack { token: String },
    #[error("unknown scheduling policy: {0}")]
    UnknownPolicy(String),
}

/// Parse a single non-negative track number.
pub fn parse_track(token: &str) -> Result<Track, InputError> {
    token
        .trim()
        .parse::<Track>()
        .map_err(|_| InputError::InvalidTrack {
            token: token.to_string(),
        })
}

/// Parse a whitespace-separated list of requested tracks.
///
/// Blank input yields an empty request list.
pub fn parse_requests(requests: &str) -> Result<Vec<Track>, InputError> {
    requests.split_whitespace().map(parse_track).collect()
}

/// Render requests the way they are accepted on the command line.
pub fn format_requests(requests: &[Track]) -> String {
    requests
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
