// src/search/error.rs

use std::error::Error;
use std::fmt;

/// User-facing failure categories. Every failure during a search collapses
/// to exactly one of these; nothing propagates past the controller and none
/// is fatal — the user can always retry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    EmptyInput,
    /// Carries the validator's message.
    MalformedAddress(String),
    NetworkFailure,
    NotFound,
    ServerError,
    Unrecognized,
    Generic,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            SearchError::EmptyInput => "Please enter an address first",
            SearchError::MalformedAddress(m) => m.as_str(),
            SearchError::NetworkFailure => {
                "Couldn't reach the property service — check your connection and try again"
            }
            SearchError::NotFound => "No property found for that address",
            SearchError::ServerError => {
                "The property service hit an internal error — try again in a moment"
            }
            SearchError::Unrecognized => {
                "The property service didn't recognize that address format"
            }
            SearchError::Generic => "Error fetching property data. Please try again.",
        };
        f.write_str(msg)
    }
}

impl Error for SearchError {}

/// Map a non-2xx response to a category. The status code is authoritative
/// for the codes the API is known to use; anything else falls back to
/// sniffing the error body, since the API's error contract is free text.
pub fn classify_response(status: u16, body: &str) -> SearchError {
    match status {
        404 => SearchError::NotFound,
        400 | 422 => SearchError::Unrecognized,
        500..=599 => SearchError::ServerError,
        _ => classify_body(body),
    }
}

fn classify_body(body: &str) -> SearchError {
    let text = body.to_ascii_lowercase();
    if text.contains("not found") || text.contains("404") {
        SearchError::NotFound
    } else if text.contains("internal") || text.contains("500") {
        SearchError::ServerError
    } else if text.contains("invalid") || text.contains("unrecognized") || text.contains("malformed") {
        SearchError::Unrecognized
    } else {
        SearchError::Generic
    }
}
