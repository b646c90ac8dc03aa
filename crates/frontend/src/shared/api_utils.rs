//! API utilities for talking to the front-desk server
//!
//! The UI is served by the same server that answers `/api/*`, so paths are
//! relative unless `AppConfig::api_base` says otherwise.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Build a full API URL from a base and a path
///
/// # Example
/// ```ignore
/// let url = api_url("", "/api/room_status"); // "/api/room_status"
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// GET a JSON document
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        assert_eq!(api_url("", "/api/room_status"), "/api/room_status");
        assert_eq!(
            api_url("http://desk:5000/", "/api/available_rooms"),
            "http://desk:5000/api/available_rooms"
        );
    }
}
