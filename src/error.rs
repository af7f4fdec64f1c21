// src/error.rs
use thiserror::Error;

/// Fatal errors from the fetch/parse pipeline. The catalog is all-or-nothing:
/// any of these aborts startup. Menu-level input mistakes are handled in place
/// and never reach this type.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("network error: {0}")]
    Http(#[from] std::io::Error),

    #[error("http error: {status} for {url}")]
    HttpStatus { status: String, url: String },

    #[error("malformed http response (no header/body split)")]
    MalformedResponse,

    #[error("page yielded no room headings")]
    NoRooms,

    #[error("page yielded no bundle tables")]
    NoBundleTables,

    #[error("no heading precedes the bundle table at byte {offset}")]
    OrphanTable { offset: usize },

    #[error("bundle table at byte {offset} has no header cell")]
    MissingBundleName { offset: usize },

    #[error("bundle {name:?} has {found} cells, expected at least 2")]
    TooFewCells { name: String, found: usize },
}
