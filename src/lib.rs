//! Local translation gateway.
//!
//! Exposes a small HTTP API that translates text between language pairs via
//! an external translation engine. The engine only supports a subset of
//! direct pair combinations; when no direct package exists, the gateway
//! routes through a pivot language in two hops. Confirmed-usable pairs are
//! memoized so repeated requests skip the engine's package index.

pub mod config;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod retry;
pub mod routing;
pub mod security;
pub mod server;
