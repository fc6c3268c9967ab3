use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Business failure reported by the gateway. Codes are passed through
    /// verbatim and must not be reinterpreted.
    #[error("{code}: {description}")]
    Gateway { code: String, description: String },

    /// Gateway failure without a machine-readable error code.
    #[error(
        "unknown gateway error{}{}",
        .detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default(),
        .status.map(|s| format!(" (http status {s})")).unwrap_or_default()
    )]
    UnknownGateway {
        status: Option<u16>,
        detail: Option<String>,
    },

    #[error("merchant certificate required but not configured")]
    MissingCredential,

    #[error("malformed gateway timestamp: {0:?}")]
    MalformedTimestamp(String),

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("certificate error: {0}")]
    Certificate(String),

    #[error("signature generation failed: {0}")]
    Sign(String),

    #[error("XML envelope error: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_error_text_is_code_colon_description() {
        let err = PayError::Gateway {
            code: "NOTENOUGH".into(),
            description: "balance insufficient".into(),
        };
        assert_eq!(err.to_string(), "NOTENOUGH: balance insufficient");
    }

    #[test]
    fn test_unknown_gateway_error_with_status() {
        let err = PayError::UnknownGateway {
            status: Some(502),
            detail: None,
        };
        assert_eq!(err.to_string(), "unknown gateway error (http status 502)");
    }

    #[test]
    fn test_unknown_gateway_error_with_detail() {
        let err = PayError::UnknownGateway {
            status: None,
            detail: Some("FAIL (system busy)".into()),
        };
        assert_eq!(err.to_string(), "unknown gateway error: FAIL (system busy)");
    }

    #[test]
    fn test_unknown_gateway_error_bare() {
        let err = PayError::UnknownGateway {
            status: None,
            detail: None,
        };
        assert_eq!(err.to_string(), "unknown gateway error");
    }
}
