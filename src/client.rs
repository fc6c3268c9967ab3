use std::sync::Arc;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::credential::{Credential, MerchantCertificate};
use crate::crypto::canonical::string_to_sign;
use crate::crypto::fields::{Field, FieldSet};
use crate::crypto::nonce::random_nonce;
use crate::crypto::sign::{
    build_authorization_header, build_sign_message, compute_signature, SignatureScheme,
};
use crate::error::PayError;
use crate::model::envelope::{LegacyStatus, ModernStatus};
use crate::model::LegacyRequest;
use crate::wire;

const USER_AGENT: &str = "mchpay-sdk/0.1.0";

pub struct PayClient {
    pub(crate) config: ClientConfig,
    pub(crate) http: reqwest::Client,
    pub(crate) credential: Credential,
}

impl PayClient {
    /// Returns the merchant ID.
    pub fn mch_id(&self) -> &str {
        &self.config.mch_id
    }

    /// Create a new gateway client.
    ///
    /// Parses the merchant certificate (when configured) and attaches it as
    /// the TLS client identity, so that per-request signing can never fail
    /// for configuration reasons.
    pub fn new(config: ClientConfig) -> Result<Self, PayError> {
        let certificate = match &config.certificate_pem {
            Some(pem) => Some(Arc::new(MerchantCertificate::from_pem(
                &pem.cert_pem,
                &pem.key_pem,
            )?)),
            None => None,
        };

        let http = match config.http_client.clone() {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(cert) = &certificate {
                    builder = builder.identity(reqwest::Identity::from_pem(cert.identity_pem())?);
                }
                builder.build()?
            }
        };

        let credential = Credential {
            merchant_id: config.mch_id.clone(),
            secret: config.api_key.clone(),
            certificate,
        };

        Ok(Self {
            config,
            http,
            credential,
        })
    }

    /// Send a signed legacy XML request and return the typed response.
    ///
    /// The status envelope is classified before the payload is decoded, so
    /// a typed response only ever exists for a successful exchange.
    pub(crate) async fn post_xml<R, T>(&self, path: &str, req: &R) -> Result<T, PayError>
    where
        R: LegacyRequest,
        T: DeserializeOwned,
    {
        let fields = req.wire_fields(&self.config.mch_id);
        let nonce = random_nonce(&mut rand::thread_rng());
        let body = self.signed_xml_body(fields, nonce)?;

        debug!(path, "sending signed legacy request");
        let resp = self
            .http
            .post(format!("{}{path}", self.config.base_url))
            .header("Content-Type", "text/xml; charset=utf-8")
            .header("User-Agent", USER_AGENT)
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        let envelope: LegacyStatus = wire::from_xml(&text)?;
        envelope.classify(non_200(status))?;

        wire::from_xml(&text)
    }

    /// Append the per-request nonce, sign, and emit the XML body.
    fn signed_xml_body(&self, mut fields: FieldSet, nonce: String) -> Result<String, PayError> {
        fields.push(Field {
            name: "nonce_str",
            value: nonce,
            omit_if_empty: false,
            skip_signing: false,
        });
        let (canonical, scheme) = string_to_sign(&fields, &self.credential.secret);
        debug!(scheme = scheme.wire_name(), "signing legacy request body");
        let signature = compute_signature(scheme, &canonical, &self.credential)?;
        Ok(wire::xml_body(&fields, &signature))
    }

    /// Send a signed modern POST request and return the typed response.
    pub(crate) async fn post_json<Req, Resp>(&self, path: &str, req: &Req) -> Result<Resp, PayError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let body = serde_json::to_string(req)?;
        let auth = self.authorization("POST", path, body.clone()).await?;

        debug!(path, "sending signed modern request");
        let resp = self
            .http
            .post(format!("{}{path}", self.config.base_url))
            .header("Authorization", &auth)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .header("User-Agent", USER_AGENT)
            .body(body)
            .send()
            .await?;

        self.read_json(resp).await
    }

    /// Send a signed modern GET request and return the typed response.
    pub(crate) async fn get_json<Resp>(&self, path: &str) -> Result<Resp, PayError>
    where
        Resp: DeserializeOwned,
    {
        let auth = self.authorization("GET", path, String::new()).await?;

        debug!(path, "sending signed modern request");
        let resp = self
            .http
            .get(format!("{}{path}", self.config.base_url))
            .header("Authorization", &auth)
            .header("Accept", "application/json")
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        self.read_json(resp).await
    }

    async fn read_json<Resp: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<Resp, PayError> {
        let status = resp.status();
        let text = resp.text().await?;

        let envelope: ModernStatus = match serde_json::from_str(&text) {
            Ok(envelope) => envelope,
            Err(_) if status.as_u16() != 200 => {
                return Err(PayError::UnknownGateway {
                    status: Some(status.as_u16()),
                    detail: None,
                })
            }
            Err(e) => return Err(e.into()),
        };
        envelope.classify(non_200(status))?;

        serde_json::from_str(&text).map_err(PayError::from)
    }

    /// Build the Authorization header for a modern request. Fails with
    /// `MissingCredential` before any signing when no certificate is
    /// configured.
    async fn authorization(
        &self,
        method: &'static str,
        path: &str,
        body: String,
    ) -> Result<String, PayError> {
        let certificate = self
            .credential
            .certificate
            .as_ref()
            .ok_or(PayError::MissingCredential)?;
        let serial_no = certificate.serial_no().to_string();

        let timestamp = current_timestamp();
        let nonce = random_nonce(&mut rand::thread_rng());
        let message = build_sign_message(method, path, timestamp, &nonce, &body);

        // RSA signing goes to the blocking pool; ~1-3ms for RSA-2048
        // PKCS1v15 would otherwise stall the async runtime.
        let credential = self.credential.clone();
        let signature = tokio::task::spawn_blocking(move || {
            compute_signature(SignatureScheme::RsaSha256, &message, &credential)
        })
        .await
        .map_err(|e| PayError::Sign(format!("task join: {e}")))??;

        Ok(build_authorization_header(
            &self.credential.merchant_id,
            &nonce,
            &signature,
            timestamp,
            &serial_no,
        ))
    }
}

/// Percent-encode a string so it is safe to use in a URL path segment or query value.
pub(crate) fn encode_path_segment(s: &str) -> String {
    utf8_percent_encode(s, NON_ALPHANUMERIC).to_string()
}

pub(crate) fn current_timestamp() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system clock is before UNIX epoch")
        .as_secs() as i64
}

fn non_200(status: reqwest::StatusCode) -> Option<u16> {
    if status.as_u16() == 200 {
        None
    } else {
        Some(status.as_u16())
    }
}
