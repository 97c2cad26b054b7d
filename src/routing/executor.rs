//! Translation executor: one hop between two language endpoints.

use crate::engine::{LanguagePair, TranslationEngine};
use crate::error::TranslateError;
use crate::routing::resolver::PackageResolver;
use std::sync::Arc;

pub struct HopExecutor {
    engine: Arc<dyn TranslationEngine>,
    resolver: Arc<PackageResolver>,
}

impl HopExecutor {
    pub fn new(engine: Arc<dyn TranslationEngine>, resolver: Arc<PackageResolver>) -> Self {
        Self { engine, resolver }
    }

    /// Perform exactly one hop of translation.
    ///
    /// The pair's package is (re-)verified via the cache-backed resolver
    /// immediately before the hop, then the live language list is fetched
    /// fresh; handles are never cached here. Output is returned verbatim.
    pub async fn translate_one_hop(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<String, TranslateError> {
        let pair = LanguagePair::new(from, to);
        if !self.resolver.ensure_installed(&pair).await {
            return Err(TranslateError::PairUnavailable {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        let languages = self.engine.installed_languages().await?;

        let from_lang = languages
            .iter()
            .find(|lang| lang.code == from)
            .ok_or_else(|| TranslateError::LanguageNotFound {
                code: from.to_string(),
            })?;
        let to_lang = languages
            .iter()
            .find(|lang| lang.code == to)
            .ok_or_else(|| TranslateError::LanguageNotFound {
                code: to.to_string(),
            })?;

        match self.engine.translate_between(from_lang, to_lang, text).await? {
            Some(output) => Ok(output),
            None => Err(TranslateError::TranslationUnavailable {
                from: from.to_string(),
                to: to.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::testing::MockEngine;

    fn executor_with(engine: MockEngine) -> (HopExecutor, Arc<MockEngine>) {
        let engine = Arc::new(engine);
        let resolver = Arc::new(PackageResolver::new(engine.clone()));
        (HopExecutor::new(engine.clone(), resolver), engine)
    }

    #[tokio::test]
    async fn test_one_hop_success() {
        let (executor, _engine) = executor_with(MockEngine::new().with_installed("es", "en"));

        let result = executor
            .translate_one_hop("hola", "es", "en")
            .await
            .expect("Should succeed");

        assert_eq!(result, "hola |es->en");
    }

    #[tokio::test]
    async fn test_unavailable_pair_fails_with_pair_unavailable() {
        let (executor, engine) = executor_with(MockEngine::new());

        let result = executor.translate_one_hop("hola", "xx", "yy").await;

        assert!(matches!(
            result,
            Err(TranslateError::PairUnavailable { .. })
        ));
        // Never asked for languages or a translation
        assert_eq!(engine.languages_calls(), 0);
        assert_eq!(engine.translate_calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_from_language_fails_with_language_not_found() {
        // Package installed, but the live language list lacks the source code
        let (executor, _engine) = executor_with(
            MockEngine::new()
                .with_installed_package("es", "en")
                .with_language("en"),
        );

        let result = executor.translate_one_hop("hola", "es", "en").await;

        match result {
            Err(TranslateError::LanguageNotFound { code }) => assert_eq!(code, "es"),
            other => panic!("Expected LanguageNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_to_language_fails_with_language_not_found() {
        let (executor, _engine) = executor_with(
            MockEngine::new()
                .with_installed_package("es", "en")
                .with_language("es"),
        );

        let result = executor.translate_one_hop("hola", "es", "en").await;

        match result {
            Err(TranslateError::LanguageNotFound { code }) => assert_eq!(code, "en"),
            other => panic!("Expected LanguageNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_no_capability_fails_with_translation_unavailable() {
        // Both languages live, package nominally installed, but no capability
        let (executor, _engine) = executor_with(
            MockEngine::new()
                .with_installed_package("es", "en")
                .with_language("es")
                .with_language("en"),
        );

        let result = executor.translate_one_hop("hola", "es", "en").await;

        assert!(matches!(
            result,
            Err(TranslateError::TranslationUnavailable { .. })
        ));
    }

    #[tokio::test]
    async fn test_output_is_returned_verbatim() {
        let (executor, _engine) = executor_with(MockEngine::new().with_installed("es", "en"));

        // Whitespace and formatting pass through untouched
        let result = executor
            .translate_one_hop("  hola \n", "es", "en")
            .await
            .expect("Should succeed");

        assert_eq!(result, "  hola \n |es->en");
    }
}
