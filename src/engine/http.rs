use crate::engine::{
    EngineError, LanguageHandle, LanguagePair, PackageDescriptor, TranslationEngine,
};
use crate::retry::{with_retry_if, RetryConfig};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

/// Client for a local translation engine daemon speaking JSON over HTTP.
///
/// Endpoints:
/// - `POST /packages/refresh`: pull the upstream package index
/// - `GET  /packages/available`: installable packages
/// - `GET  /packages/installed`: installed pairs
/// - `POST /packages/install`: download and install one package by id
/// - `GET  /languages`: live language endpoints
/// - `POST /translate`: one translation; 404 means the engine has no
///   capability between the two languages
pub struct HttpEngine {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct EngineTranslation {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl HttpEngine {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Check the response status, turning non-success into an engine error
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, EngineError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(EngineError::UnexpectedStatus {
        status: status.as_u16(),
        body,
    })
}

/// Determine if an engine error is transient (network errors, 429, 5xx).
/// 4xx responses mean the engine rejected the request and retrying won't help.
fn is_transient(error: &EngineError) -> bool {
    match error {
        EngineError::Request(_) => true,
        EngineError::UnexpectedStatus { status, .. } => *status == 429 || *status >= 500,
        _ => false,
    }
}

#[async_trait]
impl TranslationEngine for HttpEngine {
    async fn refresh_package_index(&self) -> Result<(), EngineError> {
        with_retry_if(
            &RetryConfig::engine_call(),
            "Refresh package index",
            || async {
                let response = self
                    .client
                    .post(self.url("/packages/refresh"))
                    .send()
                    .await?;
                check_status(response).await?;
                Ok(())
            },
            is_transient,
        )
        .await
        .map_err(|e: EngineError| EngineError::IndexUnavailable(e.to_string()))
    }

    async fn available_packages(&self) -> Result<Vec<PackageDescriptor>, EngineError> {
        with_retry_if(
            &RetryConfig::engine_call(),
            "List available packages",
            || async {
                let response = self
                    .client
                    .get(self.url("/packages/available"))
                    .send()
                    .await?;
                let response = check_status(response).await?;
                let packages = response.json::<Vec<PackageDescriptor>>().await?;
                Ok(packages)
            },
            is_transient,
        )
        .await
    }

    async fn installed_packages(&self) -> Result<Vec<LanguagePair>, EngineError> {
        with_retry_if(
            &RetryConfig::engine_call(),
            "List installed packages",
            || async {
                let response = self
                    .client
                    .get(self.url("/packages/installed"))
                    .send()
                    .await?;
                let response = check_status(response).await?;
                let pairs = response.json::<Vec<LanguagePair>>().await?;
                Ok(pairs)
            },
            is_transient,
        )
        .await
    }

    async fn install(&self, package: &PackageDescriptor) -> Result<(), EngineError> {
        // Installs are never retried at this layer; a failed attempt is
        // reported to the resolver, which downgrades it.
        info!("Downloading and installing package {}", package.id);
        let response = self
            .client
            .post(self.url("/packages/install"))
            .json(&serde_json::json!({ "id": package.id }))
            .send()
            .await
            .map_err(|e| EngineError::InstallFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EngineError::InstallFailed(format!(
                "engine returned {}: {}",
                status, body
            )));
        }
        Ok(())
    }

    async fn installed_languages(&self) -> Result<Vec<LanguageHandle>, EngineError> {
        with_retry_if(
            &RetryConfig::engine_call(),
            "List installed languages",
            || async {
                let response = self.client.get(self.url("/languages")).send().await?;
                let response = check_status(response).await?;
                let languages = response.json::<Vec<LanguageHandle>>().await?;
                Ok(languages)
            },
            is_transient,
        )
        .await
    }

    async fn translate_between(
        &self,
        from: &LanguageHandle,
        to: &LanguageHandle,
        text: &str,
    ) -> Result<Option<String>, EngineError> {
        let request = serde_json::json!({
            "from": from.code,
            "to": to.code,
            "q": text,
        });

        with_retry_if(
            &RetryConfig::translation(),
            "Translate",
            || async {
                let response = self
                    .client
                    .post(self.url("/translate"))
                    .json(&request)
                    .send()
                    .await?;

                // The engine answers 404 when it exposes both languages but
                // has no translation capability between them.
                if response.status() == reqwest::StatusCode::NOT_FOUND {
                    return Ok(None);
                }

                let response = check_status(response).await?;
                let translation = response.json::<EngineTranslation>().await?;
                Ok(Some(translation.translated_text))
            },
            is_transient,
        )
        .await
    }
}
