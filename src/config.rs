use crate::error::PayError;

const DEFAULT_BASE_URL: &str = "https://api.mch.weixin.qq.com";

#[derive(Debug)]
pub struct ClientConfig {
    pub mch_id: String,
    pub api_key: String,
    pub certificate_pem: Option<CertificatePem>,
    pub http_client: Option<reqwest::Client>,
    pub base_url: String,
}

/// Raw merchant certificate material; parsed once at client construction.
#[derive(Clone, Debug)]
pub struct CertificatePem {
    pub cert_pem: String,
    pub key_pem: String,
}

pub struct ClientConfigBuilder {
    mch_id: Option<String>,
    api_key: Option<String>,
    certificate_pem: Option<CertificatePem>,
    http_client: Option<reqwest::Client>,
    base_url: Option<String>,
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder {
            mch_id: None,
            api_key: None,
            certificate_pem: None,
            http_client: None,
            base_url: None,
        }
    }
}

impl ClientConfigBuilder {
    pub fn mch_id(mut self, mch_id: impl Into<String>) -> Self {
        self.mch_id = Some(mch_id.into());
        self
    }

    /// The merchant's shared secret for the symmetric signing schemes.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Merchant certificate (`apiclient_cert.pem`) and private key
    /// (`apiclient_key.pem`). Required for the asymmetric scheme and for
    /// the legacy endpoints that demand mutual TLS.
    ///
    /// From a p12 bundle: `openssl pkcs12 -in apiclient_cert.p12 -nodes`
    pub fn certificate(mut self, cert_pem: impl Into<String>, key_pem: impl Into<String>) -> Self {
        self.certificate_pem = Some(CertificatePem {
            cert_pem: cert_pem.into(),
            key_pem: key_pem.into(),
        });
        self
    }

    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn build(self) -> Result<ClientConfig, PayError> {
        let mch_id = self
            .mch_id
            .ok_or_else(|| PayError::Config("mch_id is required".into()))?;
        let api_key = self
            .api_key
            .ok_or_else(|| PayError::Config("api_key is required".into()))?;

        Ok(ClientConfig {
            mch_id,
            api_key,
            certificate_pem: self.certificate_pem,
            http_client: self.http_client,
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }
}
