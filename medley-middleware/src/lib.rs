//! medley-middleware
//!
//! Middleware wrappers for medley provider strategies.
//!
//! The cache decorator wraps any [`medley_core::ProviderStrategy`] behind
//! the identical contract, short-circuiting upstream calls on a TTL-bound
//! hit. Layers compose through [`ProviderBuilder`].
#![warn(missing_docs)]

mod builder;
mod cache;

pub use crate::builder::ProviderBuilder;
pub use crate::cache::{CacheMiddleware, CachingProvider};
