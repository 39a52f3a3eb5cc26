use crate::api::SetRequest;
use serde::de::DeserializeOwned;

#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    MissingKey,
    MissingValue,
    MalformedBody(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingKey => write!(f, "The 'key' is required."),
            ValidationError::MissingValue => write!(f, "The 'value' is required."),
            ValidationError::MalformedBody(reason) => write!(f, "{}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A set request whose key and value are both present
#[derive(Debug, PartialEq, Eq)]
pub struct ValidSet {
    pub key: String,
    pub value: String,
}

/// Decode a JSON request body. The `Content-Type` header is not consulted.
pub fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ValidationError> {
    serde_json::from_slice(body).map_err(|e| ValidationError::MalformedBody(e.to_string()))
}

pub fn validate_key(key: String) -> Result<String, ValidationError> {
    if key.is_empty() {
        return Err(ValidationError::MissingKey);
    }
    Ok(key)
}

/// Key is checked before value
pub fn validate_set(req: SetRequest) -> Result<ValidSet, ValidationError> {
    let key = validate_key(req.key)?;
    if req.value.is_empty() {
        return Err(ValidationError::MissingValue);
    }
    Ok(ValidSet {
        key,
        value: req.value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_request(key: &str, value: &str) -> SetRequest {
        SetRequest {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_validate_set() {
        assert_eq!(
            validate_set(set_request("k", "v")),
            Ok(ValidSet {
                key: "k".to_string(),
                value: "v".to_string(),
            })
        );
        assert_eq!(
            validate_set(set_request("", "")),
            Err(ValidationError::MissingKey)
        );
        assert_eq!(
            validate_set(set_request("k", "")),
            Err(ValidationError::MissingValue)
        );
    }

    #[test]
    fn test_parse_body() {
        let req: SetRequest = parse_body(br#"{"key":"k","value":"v"}"#).unwrap();
        assert_eq!(req.key, "k");
        assert_eq!(req.value, "v");

        let req: SetRequest = parse_body(b"{}").unwrap();
        assert_eq!(validate_set(req), Err(ValidationError::MissingKey));

        for body in [&b""[..], b"{not json", b"key=k&value=v"] {
            assert!(matches!(
                parse_body::<SetRequest>(body),
                Err(ValidationError::MalformedBody(_))
            ));
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::MissingKey.to_string(), "The 'key' is required.");
        assert_eq!(
            ValidationError::MissingValue.to_string(),
            "The 'value' is required."
        );
    }
}
