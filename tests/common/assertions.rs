//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert response is a JSON error with the given status and message prefix
pub fn assert_api_error(response: &TestResponse, expected: StatusCode, prefix: &str) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(json["status"].as_u64(), Some(expected.as_u16() as u64));

    let error = json["error"].as_str().unwrap_or_default();
    assert!(
        error.starts_with(prefix),
        "Expected error starting with {prefix:?}, got {error:?}"
    );
}

/// Assert a string is an uppercase `#RRGGBB` color
pub fn assert_hex_color(color: &str) {
    assert_eq!(color.len(), 7, "Expected #RRGGBB, got {color:?}");
    assert!(color.starts_with('#'), "Expected leading '#', got {color:?}");
    assert!(
        color[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)),
        "Expected uppercase hex digits, got {color:?}"
    );
}

/// Assert palette response is well formed and return it
pub fn assert_valid_palette_response(response: &TestResponse) -> serde_json::Value {
    assert_ok(response);
    let json: serde_json::Value = response.json();

    let colors = json["colors"].as_array().expect("Expected colors array");
    assert_eq!(colors.len(), 5, "Expected 5 colors");
    for color in colors {
        assert_hex_color(color.as_str().expect("Expected color string"));
    }

    assert!(json["rule"].is_string(), "Expected rule");
    assert!(json["position"].is_u64(), "Expected position");
    assert!(json["length"].is_u64(), "Expected length");
    assert!(json["can_undo"].is_boolean(), "Expected can_undo");
    assert!(json["can_redo"].is_boolean(), "Expected can_redo");

    json
}
