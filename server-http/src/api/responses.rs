use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: String,
}

/// Body shared by every cache route; absent fields are omitted
#[derive(Debug, Default, Serialize)]
pub struct CacheResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl CacheResponse {
    pub fn ok() -> Self {
        Self {
            result: Some("OK".to_string()),
            ..Default::default()
        }
    }

    pub fn value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Default::default()
        }
    }
}
