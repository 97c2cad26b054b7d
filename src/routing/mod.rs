//! Translation routing core.
//!
//! This module holds the decision logic and state of the gateway: given an
//! arbitrary (source, target) pair, is there a direct translation path, and
//! if not, does a two-hop path through the pivot language exist?
//!
//! # Architecture
//!
//! - `cache`: monotone memo of pairs confirmed usable
//! - `resolver`: availability queries and installs, cache-backed
//! - `executor`: one hop of translation between live language endpoints
//! - `router`: direct-vs-pivot policy, the single public entry point
//!
//! Everything here is engine-agnostic: the concrete engine arrives as an
//! `Arc<dyn TranslationEngine>` and tests substitute a scriptable mock.

mod cache;
mod executor;
mod resolver;
mod router;

pub use cache::AvailabilityCache;
pub use executor::HopExecutor;
pub use resolver::PackageResolver;
pub use router::{RoutablePair, TranslationRouter};

#[cfg(test)]
pub(crate) mod testing;
