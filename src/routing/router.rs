//! Translation router: the single public entry point of the routing core.
//!
//! Decides between the direct path and the two-hop pivot path, and
//! orchestrates the executor accordingly. No retries happen at this layer.

use crate::engine::{EngineError, LanguagePair, TranslationEngine};
use crate::error::TranslateError;
use crate::metrics::{MetricsReport, RouteMetrics};
use crate::routing::executor::HopExecutor;
use crate::routing::resolver::PackageResolver;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// One installable pair, as exposed to discovery UIs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutablePair {
    pub from: String,
    pub to: String,
    pub name: String,
}

pub struct TranslationRouter {
    resolver: Arc<PackageResolver>,
    executor: HopExecutor,
    engine: Arc<dyn TranslationEngine>,
    pivot: String,
    metrics: RouteMetrics,
}

impl TranslationRouter {
    /// Build a router over an engine, pivoting through `pivot` when no direct
    /// package exists.
    pub fn new(engine: Arc<dyn TranslationEngine>, pivot: impl Into<String>) -> Self {
        let resolver = Arc::new(PackageResolver::new(engine.clone()));
        let executor = HopExecutor::new(engine.clone(), resolver.clone());
        Self {
            resolver,
            executor,
            engine,
            pivot: pivot.into(),
            metrics: RouteMetrics::new(),
        }
    }

    /// Snapshot of routing statistics.
    pub fn report(&self) -> MetricsReport {
        self.metrics.report(self.resolver.cached_pairs())
    }

    /// Translate `text` from `from` to `to`.
    ///
    /// The direct path is always preferred when a package for the exact pair
    /// exists; otherwise the router falls back to two hops through the pivot
    /// language. Hops execute strictly in sequence since the second hop's
    /// input is the first hop's output.
    pub async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<String, TranslateError> {
        // Identity short-circuit: no engine call at all
        if from == to {
            self.metrics.record_identity();
            return Ok(text.to_string());
        }

        let direct = LanguagePair::new(from, to);
        if self.resolver.is_available(&direct).await {
            info!("Direct translation: {} -> {}", from, to);
            return match self.executor.translate_one_hop(text, from, to).await {
                Ok(output) => {
                    self.metrics.record_direct();
                    Ok(output)
                }
                Err(e) => {
                    self.metrics.record_failure();
                    Err(e)
                }
            };
        }

        // A pair touching the pivot that lacks a direct package has no
        // fallback: pivoting through itself is meaningless.
        if from == self.pivot || to == self.pivot {
            self.metrics.record_failure();
            return Err(TranslateError::NoRoute {
                from: from.to_string(),
                to: to.to_string(),
                detail: format!(
                    "no package for {} -> {} and {} is the pivot language",
                    from, to, self.pivot
                ),
            });
        }

        let first_leg = LanguagePair::new(from, self.pivot.clone());
        if !self.resolver.is_available(&first_leg).await {
            self.metrics.record_failure();
            return Err(TranslateError::NoRoute {
                from: from.to_string(),
                to: to.to_string(),
                detail: format!(
                    "cannot translate {} -> {} (needed for pivot)",
                    from, self.pivot
                ),
            });
        }

        let second_leg = LanguagePair::new(self.pivot.clone(), to);
        if !self.resolver.is_available(&second_leg).await {
            self.metrics.record_failure();
            return Err(TranslateError::NoRoute {
                from: from.to_string(),
                to: to.to_string(),
                detail: format!(
                    "cannot translate {} -> {} (needed for pivot)",
                    self.pivot, to
                ),
            });
        }

        info!("Pivot translation: {} -> {} -> {}", from, self.pivot, to);

        let intermediate = match self.executor.translate_one_hop(text, from, &self.pivot).await {
            Ok(output) => output,
            Err(e) => {
                self.metrics.record_failure();
                return Err(e);
            }
        };

        match self
            .executor
            .translate_one_hop(&intermediate, &self.pivot, to)
            .await
        {
            Ok(output) => {
                self.metrics.record_pivot();
                Ok(output)
            }
            Err(e) => {
                self.metrics.record_failure();
                Err(e)
            }
        }
    }

    /// Enumerate installable pairs for discovery UIs.
    ///
    /// A pass-through of the engine's index; failures degrade to an empty
    /// list rather than an error.
    pub async fn routable_pairs(&self) -> Vec<RoutablePair> {
        match self.list_packages().await {
            Ok(pairs) => pairs,
            Err(e) => {
                warn!("Failed to list routable pairs: {}", e);
                Vec::new()
            }
        }
    }

    async fn list_packages(&self) -> Result<Vec<RoutablePair>, EngineError> {
        self.engine.refresh_package_index().await?;
        let packages = self.engine.available_packages().await?;
        Ok(packages
            .iter()
            .map(|package| RoutablePair {
                from: package.from.clone(),
                to: package.to.clone(),
                name: package.display_name(),
            })
            .collect())
    }
}
