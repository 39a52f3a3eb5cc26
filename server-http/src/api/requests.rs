use serde::Deserialize;

// === Cache Operation Models ===

/// Query string of GET /cache
#[derive(Debug, Default, Deserialize)]
pub struct GetQuery {
    #[serde(default)]
    pub key: String,
}

impl GetQuery {
    /// Build from raw query pairs; a repeated `key` keeps its first value
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let key = pairs
            .into_iter()
            .find_map(|(name, value)| (name == "key").then_some(value))
            .unwrap_or_default();
        Self { key }
    }
}

/// Body of POST /cache
#[derive(Debug, Default, Deserialize)]
pub struct SetRequest {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
}

/// Body of DELETE /cache
#[derive(Debug, Default, Deserialize)]
pub struct DeleteRequest {
    #[serde(default)]
    pub key: String,
}
