use serde::Deserialize;

use crate::error::PayError;

/// Protocol-level status fields of a legacy XML response envelope.
///
/// `return_code` reports transport-level acceptance, `result_code` the
/// business outcome; both must be `SUCCESS` for the exchange to count as
/// successful.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegacyStatus {
    #[serde(default)]
    pub return_code: String,
    #[serde(default)]
    pub return_msg: String,
    #[serde(default)]
    pub result_code: String,
    #[serde(default)]
    pub err_code: String,
    #[serde(default)]
    pub err_code_des: String,
}

impl LegacyStatus {
    pub fn is_success(&self) -> bool {
        self.return_code == "SUCCESS" && self.result_code == "SUCCESS"
    }

    /// Map the envelope to a verdict. `http_status` is the out-of-band HTTP
    /// status, passed only when non-200, and annotates failures that carry
    /// no machine-readable code.
    pub fn classify(&self, http_status: Option<u16>) -> Result<(), PayError> {
        if self.is_success() {
            return Ok(());
        }
        if self.err_code.is_empty() {
            let detail = if !self.return_code.is_empty() && !self.return_msg.is_empty() {
                Some(format!("{} ({})", self.return_code, self.return_msg))
            } else {
                None
            };
            return Err(PayError::UnknownGateway {
                status: http_status,
                detail,
            });
        }
        Err(PayError::Gateway {
            code: self.err_code.clone(),
            description: self.err_code_des.clone(),
        })
    }
}

/// Protocol-level status fields of a modern JSON response.
///
/// A `code` field is only present on failure; its absence signals success.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModernStatus {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ModernStatus {
    pub fn is_success(&self) -> bool {
        self.code.as_deref().map_or(true, str::is_empty)
    }

    pub fn classify(&self, http_status: Option<u16>) -> Result<(), PayError> {
        if !self.is_success() {
            return Err(PayError::Gateway {
                code: self.code.clone().unwrap_or_default(),
                description: self.message.clone().unwrap_or_default(),
            });
        }
        if let Some(status) = http_status {
            return Err(PayError::UnknownGateway {
                status: Some(status),
                detail: None,
            });
        }
        Ok(())
    }
}
