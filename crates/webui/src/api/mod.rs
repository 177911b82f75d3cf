//! REST transport between the UI and the backend.

use crate::BASE_URL;
use crate::schema::RecordId;

pub mod client;

/// Everything that can go wrong talking to the backend. Kept `Clone` +
/// `PartialEq` so it can live in component state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("server responded with {code} {text}")]
    Status { code: u16, text: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("request timed out")]
    Timeout,
}

pub fn collection_url(path: &str) -> String {
    join(BASE_URL, path)
}

pub fn record_url(path: &str, id: RecordId) -> String {
    format!("{}/{id}", join(BASE_URL, path))
}

fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_never_doubles_slashes() {
        assert_eq!(
            join("http://localhost:5092/api", "rooms"),
            "http://localhost:5092/api/rooms"
        );
        assert_eq!(
            join("http://localhost:5092/api/", "/rooms/"),
            "http://localhost:5092/api/rooms"
        );
    }

    #[test]
    fn record_url_appends_the_id() {
        let url = record_url("payments", RecordId::new(7));
        assert!(url.ends_with("/payments/7"), "unexpected url: {url}");
    }
}
