//! medley-core
//!
//! Core contracts shared across the medley workspace.
//!
//! - `provider`: the `ProviderStrategy` capability, the `FetchAdapter`
//!   upstream contract, and the `FeatureRegistry` dispatch core.
//! - `feature`: the pure `FeatureStrategy` post-processing contract.
//! - `middleware`: the wrapper trait implemented by provider decorators.
//!
//! Async runtime (Tokio)
//! ---------------------
//! Provider and adapter contracts are async trait objects; callers are
//! expected to drive them from a Tokio 1.x runtime and to bound individual
//! calls with `tokio::time::timeout` at the call site.
#![warn(missing_docs)]

/// Pure feature post-processing contract.
pub mod feature;
/// Middleware trait implemented by provider wrappers.
pub mod middleware;
/// Provider capability, fetch adapter contract, and feature dispatch.
pub mod provider;

pub use feature::FeatureStrategy;
pub use middleware::Middleware;
pub use provider::{FeatureRegistry, FetchAdapter, ProviderStrategy};

// Re-export the DTO layer for downstream convenience.
pub use medley_types::{
    AggregateRequest, AggregateResponse, AppError, ContentItem, ContentType, ProviderRequest,
    ProviderResponse,
};
