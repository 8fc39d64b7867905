//! Test fixtures and constants.

/// Palettes as JSON request bodies
pub mod palettes {
    pub const GRAYS: &str =
        r##"{"colors": ["#000000", "#333333", "#666666", "#999999", "#CCCCCC"]}"##;

    pub const WARM: &str =
        r##"{"colors": ["#FF0000", "#FF6600", "#FFCC00", "#CC3300", "#990000"]}"##;

    pub const COOL: &str =
        r##"{"colors": ["#0000FF", "#0066FF", "#00CCFF", "#3300CC", "#000099"]}"##;
}

/// Initial palette from the embedded config.yaml
pub const DEFAULT_COLORS: [&str; 5] = ["#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEEAD"];

/// Colors of a palette response as strings
pub fn colors(json: &serde_json::Value) -> Vec<String> {
    json["colors"]
        .as_array()
        .expect("Expected colors array")
        .iter()
        .map(|c| c.as_str().expect("Expected color string").to_string())
        .collect()
}
