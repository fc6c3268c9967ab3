use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::credential::Credential;
use crate::error::PayError;

type HmacSha256 = Hmac<Sha256>;

/// Signature scheme of a signed request.
///
/// The two symmetric schemes sign the sorted `name=value&key=` canonical
/// string; the asymmetric scheme signs the newline-delimited header block
/// and never mixes with the field-sorting path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureScheme {
    Md5,
    HmacSha256,
    RsaSha256,
}

impl SignatureScheme {
    /// Scheme selected by a legacy request's `sign_type` field. Absent or
    /// unrecognized values fall back to MD5 silently, matching the gateway's
    /// default.
    pub fn from_sign_type(value: Option<&str>) -> Self {
        match value {
            Some("HMAC-SHA256") => Self::HmacSha256,
            _ => Self::Md5,
        }
    }

    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::HmacSha256 => "HMAC-SHA256",
            Self::RsaSha256 => "RSA",
        }
    }
}

/// Compute the signature for `message` under `scheme`.
///
/// MD5 and HMAC-SHA256 produce uppercase hex (32 and 64 chars); RSA-SHA256
/// produces base64 and requires a loaded merchant certificate, failing with
/// `MissingCredential` before any cryptographic call otherwise.
pub fn compute_signature(
    scheme: SignatureScheme,
    message: &str,
    credential: &Credential,
) -> Result<String, PayError> {
    match scheme {
        SignatureScheme::Md5 => Ok(hex::encode_upper(md5::compute(message.as_bytes()).0)),
        SignatureScheme::HmacSha256 => {
            let mut mac = HmacSha256::new_from_slice(credential.secret.as_bytes())
                .expect("HMAC accepts keys of any size");
            mac.update(message.as_bytes());
            Ok(hex::encode_upper(mac.finalize().into_bytes()))
        }
        SignatureScheme::RsaSha256 => {
            let certificate = credential
                .certificate
                .as_deref()
                .ok_or(PayError::MissingCredential)?;
            Ok(certificate.sign(message))
        }
    }
}

/// Build the signing message for the asymmetric scheme.
///
/// Format: `"{method}\n{url_path}\n{timestamp}\n{nonce}\n{body}\n"`, every
/// line newline-terminated, including the body.
pub fn build_sign_message(
    method: &str,
    url_path: &str,
    timestamp: i64,
    nonce: &str,
    body: &str,
) -> String {
    format!("{method}\n{url_path}\n{timestamp}\n{nonce}\n{body}\n")
}

/// Build the complete Authorization header value.
///
/// Format: `WECHATPAY2-SHA256-RSA2048 mchid="...",nonce_str="...",signature="...",timestamp="...",serial_no="..."`
pub fn build_authorization_header(
    mch_id: &str,
    nonce: &str,
    signature: &str,
    timestamp: i64,
    serial_no: &str,
) -> String {
    format!(
        r#"WECHATPAY2-SHA256-RSA2048 mchid="{mch_id}",nonce_str="{nonce}",signature="{signature}",timestamp="{timestamp}",serial_no="{serial_no}""#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symmetric_credential(secret: &str) -> Credential {
        Credential {
            merchant_id: "1900000001".into(),
            secret: secret.into(),
            certificate: None,
        }
    }

    #[test]
    fn test_md5_pinned_vector() {
        let sig = compute_signature(
            SignatureScheme::Md5,
            "amount=100&appid=A&desc=test&key=K",
            &symmetric_credential("K"),
        )
        .unwrap();
        assert_eq!(sig, "5289DBDEC4A5C48A008D6265AA30509E");
    }

    #[test]
    fn test_hmac_sha256_pinned_vector() {
        let sig = compute_signature(
            SignatureScheme::HmacSha256,
            "amount=100&appid=A&desc=test&key=K",
            &symmetric_credential("K"),
        )
        .unwrap();
        assert_eq!(
            sig,
            "C786D1AE738D44F7BE7C403CF8A2B9E67A3F0E0CB1A1FFFC7A01068E3093CD1B"
        );
    }

    #[test]
    fn test_symmetric_signatures_are_uppercase_hex() {
        let cred = symmetric_credential("secret");
        let md5 = compute_signature(SignatureScheme::Md5, "a=1&key=secret", &cred).unwrap();
        let hmac = compute_signature(SignatureScheme::HmacSha256, "a=1&key=secret", &cred).unwrap();
        assert_eq!(md5.len(), 32);
        assert_eq!(hmac.len(), 64);
        let upper_hex = |s: &str| s.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase());
        assert!(upper_hex(&md5));
        assert!(upper_hex(&hmac));
    }

    #[test]
    fn test_rsa_without_certificate_fails_fast() {
        let err = compute_signature(
            SignatureScheme::RsaSha256,
            "POST\n/v3/transfer/batches\n1\nnonce\n{}\n",
            &symmetric_credential("K"),
        )
        .unwrap_err();
        assert!(matches!(err, PayError::MissingCredential));
    }

    #[test]
    fn test_from_sign_type() {
        assert_eq!(
            SignatureScheme::from_sign_type(Some("HMAC-SHA256")),
            SignatureScheme::HmacSha256
        );
        assert_eq!(SignatureScheme::from_sign_type(None), SignatureScheme::Md5);
        assert_eq!(
            SignatureScheme::from_sign_type(Some("MD5")),
            SignatureScheme::Md5
        );
        // unrecognized values fall back silently
        assert_eq!(
            SignatureScheme::from_sign_type(Some("SHA3-512")),
            SignatureScheme::Md5
        );
    }

    #[test]
    fn test_build_sign_message() {
        let msg = build_sign_message(
            "POST",
            "/v3/transfer/batches",
            1554208460,
            "593BEC0C930BF1AFEB40B4A08C8FB242",
            "{\"appid\":\"wx1234\"}",
        );
        let expected =
            "POST\n/v3/transfer/batches\n1554208460\n593BEC0C930BF1AFEB40B4A08C8FB242\n{\"appid\":\"wx1234\"}\n";
        assert_eq!(msg, expected);
    }

    #[test]
    fn test_build_sign_message_empty_body() {
        let msg = build_sign_message("GET", "/v3/transfer/batches/out-batch-no/B1", 1554208460, "nonce123", "");
        assert_eq!(
            msg,
            "GET\n/v3/transfer/batches/out-batch-no/B1\n1554208460\nnonce123\n\n"
        );
    }

    #[test]
    fn test_authorization_header_exact_template() {
        let header = build_authorization_header("1900000001", "nonce123", "sig==", 1554208460, "SERIAL123");
        assert_eq!(
            header,
            r#"WECHATPAY2-SHA256-RSA2048 mchid="1900000001",nonce_str="nonce123",signature="sig==",timestamp="1554208460",serial_no="SERIAL123""#
        );
    }
}
