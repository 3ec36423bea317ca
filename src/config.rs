//! Deployment Configuration
//!
//! The API base URL ships with a default and can be overridden per
//! deployment through a `window.GEOPIN_API_URL` global, set by the host
//! page before the app loads.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use wasm_bindgen::JsValue;

use crate::models::FeatureId;

/// Fallback base URL of the location collection resource.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/locations";

/// Window global consulted before falling back to the default.
pub const API_URL_GLOBAL: &str = "GEOPIN_API_URL";

/// Characters escaped when an id becomes a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Resolve the collection base URL for this deployment.
pub fn api_url() -> String {
    window_override().unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

fn window_override() -> Option<String> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(API_URL_GLOBAL)).ok()?;
    let url = value.as_string()?;
    let url = url.trim();
    if url.is_empty() {
        None
    } else {
        Some(url.to_string())
    }
}

/// URL of a single record under the collection.
pub fn record_url(base: &str, id: &FeatureId) -> String {
    let id_string = id.to_string();
    let encoded = utf8_percent_encode(&id_string, PATH_SEGMENT);
    format!("{}/{}", base.trim_end_matches('/'), encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_url_joins_id() {
        let id = FeatureId::Number(7);
        assert_eq!(
            record_url("http://localhost:8080/locations", &id),
            "http://localhost:8080/locations/7"
        );
    }

    #[test]
    fn test_record_url_trims_trailing_slash() {
        let id = FeatureId::Text("42".to_string());
        assert_eq!(
            record_url("http://localhost:8080/locations/", &id),
            "http://localhost:8080/locations/42"
        );
    }

    #[test]
    fn test_record_url_escapes_reserved_characters() {
        let id = FeatureId::Text("a/b c".to_string());
        assert_eq!(
            record_url("http://example.test/locations", &id),
            "http://example.test/locations/a%2Fb%20c"
        );
    }
}
