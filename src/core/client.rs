//! Async DeepL client: translate, list glossaries, create glossaries

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncRead;
use tracing::{debug, info, warn};

use crate::core::config::ClientConfig;
use crate::core::entries::read_entries;
use crate::core::errors::{DeeplError, Result};
use crate::core::models::{
    Glossary, GlossaryCreateRequest, GlossaryList, Translation, TranslationRequest,
    TranslationResponse,
};

/// Client bound to one API root and key.
///
/// Cloning is cheap; clones share the configuration and the connection pool.
#[derive(Debug, Clone)]
pub struct DeeplClient {
    client: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl DeeplClient {
    /// Create a client for `base_url` authenticated with `api_key`
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(base_url, api_key))
    }

    /// Create a client from a full configuration
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder
            .build()
            .map_err(|e| DeeplError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Create a client that sends through an existing HTTP client
    pub fn with_http_client(config: ClientConfig, client: reqwest::Client) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Translate a batch of texts.
    ///
    /// Results come back one per input text, in input order.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<Vec<Translation>> {
        debug!(
            texts = request.texts.len(),
            target_lang = %request.target_lang,
            source_lang = %request.source_lang,
            glossary_id = %request.glossary_id,
            "Sending translate request"
        );

        let response: TranslationResponse = self.post_json("translate", request).await?;

        if response.translations.len() != request.texts.len() {
            warn!(
                expected = request.texts.len(),
                got = response.translations.len(),
                "Translation count differs from input count"
            );
        }

        Ok(response.translations)
    }

    /// Fetch the raw body of `GET /glossaries`
    pub async fn list_glossaries(&self) -> Result<String> {
        let response = self
            .client
            .get(self.endpoint("glossaries"))
            .header("Authorization", self.auth_header())
            .send()
            .await?;

        read_success_body(response).await
    }

    /// Fetch and decode all glossaries
    pub async fn glossaries(&self) -> Result<Vec<Glossary>> {
        let body = self.list_glossaries().await?;
        let list: GlossaryList = serde_json::from_str(&body).map_err(DeeplError::DecodingError)?;
        debug!(count = list.glossaries.len(), "Listed glossaries");
        Ok(list.glossaries)
    }

    /// Create a glossary from TSV entries read from `entries`.
    ///
    /// CRLF line endings are normalized to LF before upload.
    pub async fn create_glossary<R>(
        &self,
        name: &str,
        source_lang: &str,
        target_lang: &str,
        entries: R,
    ) -> Result<Glossary>
    where
        R: AsyncRead + Unpin,
    {
        let entries = read_entries(entries, self.config.max_entries_bytes).await?;
        let payload = GlossaryCreateRequest::tsv(name, source_lang, target_lang, entries);

        let glossary: Glossary = self.post_json("glossaries", &payload).await?;

        info!(
            glossary_id = %glossary.id,
            entry_count = glossary.entry_count,
            ready = glossary.ready,
            "Created glossary {}",
            glossary.name
        );

        Ok(glossary)
    }

    /// POST a JSON body and decode a JSON response
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body).map_err(DeeplError::EncodingError)?;

        let response = self
            .client
            .post(self.endpoint(path))
            .header("Authorization", self.auth_header())
            .header("Content-Type", "application/json")
            .body(payload)
            .send()
            .await?;

        let text = read_success_body(response).await?;
        serde_json::from_str(&text).map_err(DeeplError::DecodingError)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path)
    }

    fn auth_header(&self) -> String {
        format!("DeepL-Auth-Key {}", self.config.api_key)
    }
}

/// Consume the response, returning its body or an API error for non-2xx.
async fn read_success_body(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    debug!("Response status: {}", status);

    let body = response.text().await?;

    if !status.is_success() {
        warn!("Request failed with status {}", status);
        return Err(DeeplError::ApiError {
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}
