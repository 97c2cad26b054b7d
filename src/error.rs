use crate::engine::EngineError;
use thiserror::Error;

/// Failures surfaced by the translation router to the transport adapter.
///
/// Availability and install failures never reach this level; the resolver
/// downgrades them to "not available", which surfaces here as
/// `PairUnavailable` or `NoRoute`.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// No installable package exists for the requested pair.
    #[error("language pair not available: {from} -> {to}")]
    PairUnavailable { from: String, to: String },

    /// The package layer reports the pair installed, but the engine's live
    /// language list does not expose the code. Signals an engine-state
    /// inconsistency rather than user error.
    #[error("language not found: {code}")]
    LanguageNotFound { code: String },

    /// Both languages are live but the engine has no capability between them.
    #[error("no translation available: {from} -> {to}")]
    TranslationUnavailable { from: String, to: String },

    /// Neither a direct nor a pivot path exists; `detail` names the missing
    /// leg.
    #[error("no translation route from {from} to {to}: {detail}")]
    NoRoute {
        from: String,
        to: String,
        detail: String,
    },

    /// Engine transport failure past the availability boundary, e.g. while
    /// listing live languages mid-hop.
    #[error("translation engine failure: {0}")]
    Engine(#[from] EngineError),
}
