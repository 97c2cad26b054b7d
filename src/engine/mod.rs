//! Translation engine boundary.
//!
//! The gateway never links the translation engine directly; it talks to it
//! through the [`TranslationEngine`] trait. The engine owns packages (units of
//! installable language-pair support) and languages (live, ready-to-use
//! endpoints). The routing core depends only on the fields and operations
//! declared here, not on any concrete engine type.
//!
//! - `http`: reqwest-backed client for a local engine daemon

mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub use http::HttpEngine;

/// An ordered (source, target) language-pair identifier.
///
/// Codes are opaque short identifiers (ISO-like, e.g. "es", "en"). Matching is
/// exact equality on both fields; there is no fuzzy or locale-variant
/// matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguagePair {
    pub from: String,
    pub to: String,
}

impl LanguagePair {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// An installable package in the engine's index.
///
/// Owned by the engine; the core only references descriptors transiently
/// while resolving a pair.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PackageDescriptor {
    pub from: String,
    pub to: String,
    pub from_name: String,
    pub to_name: String,
    /// Opaque install handle understood by the engine.
    pub id: String,
}

impl PackageDescriptor {
    pub fn pair(&self) -> LanguagePair {
        LanguagePair::new(self.from.clone(), self.to.clone())
    }

    /// Human-readable name for discovery UIs, e.g. "Spanish -> English".
    pub fn display_name(&self) -> String {
        format!("{} -> {}", self.from_name, self.to_name)
    }
}

/// A ready-to-use language endpoint exposed by the engine.
///
/// Handles are fetched fresh on every translation call; the core never caches
/// them (the engine owns their lifecycle).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LanguageHandle {
    pub code: String,
    pub name: String,
}

/// Failures at the engine boundary.
///
/// None of these cross the resolver: availability checks and installs catch
/// every variant and downgrade it to "not available". Only the executor can
/// surface one, wrapped in `TranslateError::Engine`.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("package index unavailable: {0}")]
    IndexUnavailable(String),

    #[error("package install failed: {0}")]
    InstallFailed(String),

    #[error("engine request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected engine response ({status}): {body}")]
    UnexpectedStatus { status: u16, body: String },
}

/// Interface consumed from the external translation engine.
#[async_trait]
pub trait TranslationEngine: Send + Sync {
    /// Refresh the engine's package index from its upstream source.
    async fn refresh_package_index(&self) -> Result<(), EngineError>;

    /// List packages that exist in the index and can be installed.
    async fn available_packages(&self) -> Result<Vec<PackageDescriptor>, EngineError>;

    /// List pairs whose packages are currently installed.
    async fn installed_packages(&self) -> Result<Vec<LanguagePair>, EngineError>;

    /// Download and install one package.
    async fn install(&self, package: &PackageDescriptor) -> Result<(), EngineError>;

    /// List the live language endpoints the engine currently exposes.
    async fn installed_languages(&self) -> Result<Vec<LanguageHandle>, EngineError>;

    /// Translate `text` between two live language endpoints.
    ///
    /// Returns `Ok(None)` when the engine exposes both languages but has no
    /// translation capability between them.
    async fn translate_between(
        &self,
        from: &LanguageHandle,
        to: &LanguageHandle,
        text: &str,
    ) -> Result<Option<String>, EngineError>;
}
