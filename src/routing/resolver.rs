//! Package resolver: answers "is this pair usable?" and "make this pair
//! usable", short-circuiting through the availability cache.
//!
//! Every engine failure in this module is caught at the resolver boundary,
//! logged, and downgraded to "not available". Callers above only ever see a
//! boolean.

use crate::engine::{EngineError, LanguagePair, TranslationEngine};
use crate::routing::cache::AvailabilityCache;
use std::sync::Arc;
use tracing::{info, warn};

pub struct PackageResolver {
    engine: Arc<dyn TranslationEngine>,
    cache: AvailabilityCache,
}

impl PackageResolver {
    pub fn new(engine: Arc<dyn TranslationEngine>) -> Self {
        Self {
            engine,
            cache: AvailabilityCache::new(),
        }
    }

    /// Number of pairs currently confirmed usable, for observability.
    pub fn cached_pairs(&self) -> usize {
        self.cache.len()
    }

    /// Is this pair usable, either installed or installable?
    ///
    /// Only a confirmed-installed pair is remembered; a pair that merely has
    /// an installable package is reported usable but re-verified on the next
    /// call, since nothing was actually installed.
    pub async fn is_available(&self, pair: &LanguagePair) -> bool {
        if self.cache.has(pair) {
            return true;
        }

        match self.check_availability(pair).await {
            Ok(available) => available,
            Err(e) => {
                warn!("Availability check failed for {}: {}", pair, e);
                false
            }
        }
    }

    async fn check_availability(&self, pair: &LanguagePair) -> Result<bool, EngineError> {
        // Installed packages first: no index refresh needed for an exact match
        let installed = self.engine.installed_packages().await?;
        if installed.iter().any(|p| p == pair) {
            self.cache.remember(pair);
            return Ok(true);
        }

        self.engine.refresh_package_index().await?;
        let available = self.engine.available_packages().await?;
        Ok(available.iter().any(|p| p.pair() == *pair))
    }

    /// Make this pair usable, installing its package if necessary.
    pub async fn ensure_installed(&self, pair: &LanguagePair) -> bool {
        if self.cache.has(pair) {
            return true;
        }

        match self.install_if_needed(pair).await {
            Ok(true) => {
                self.cache.remember(pair);
                true
            }
            Ok(false) => false,
            Err(e) => {
                warn!("Install failed for {}: {}", pair, e);
                false
            }
        }
    }

    async fn install_if_needed(&self, pair: &LanguagePair) -> Result<bool, EngineError> {
        self.engine.refresh_package_index().await?;
        let available = self.engine.available_packages().await?;

        let package = match available.iter().find(|p| p.pair() == *pair) {
            Some(package) => package,
            None => {
                warn!("No package found for {}", pair);
                return Ok(false);
            }
        };

        // Another caller may have installed the pair since the last check
        let installed = self.engine.installed_packages().await?;
        if !installed.iter().any(|p| p == pair) {
            info!("Installing language package: {}", pair);
            self.engine.install(package).await?;
            info!("Installed: {}", pair);
        }

        Ok(true)
    }
}
