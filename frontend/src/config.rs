//! Build-time configuration.

/// Backend base URL, baked in at compile time via `CAMWATCH_API_URL`.
/// Defaults to a same-origin `/api` prefix, which is what the deployed
/// reverse proxy serves.
pub fn api_base_url() -> String {
    option_env!("CAMWATCH_API_URL")
        .unwrap_or("/api")
        .trim_end_matches('/')
        .to_string()
}
