pub mod api;
pub mod app;
pub mod components;
pub mod features;
pub mod hooks;
pub mod schema;
pub mod util;

/// Base URL of the backend REST API. Overridable at build time, since a WASM
/// bundle has no runtime environment to read from.
pub const BASE_URL: &str = match option_env!("LOTUS_API_URL") {
    Some(url) => url,
    None => "http://localhost:5092/api",
};

/// Client-side deadline applied to every request.
pub const REQUEST_TIMEOUT_MS: u32 = 30_000;
