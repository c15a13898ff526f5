//! API module providing high-level interfaces for external services.
//!
//! This module contains actors that intermediate calls to the networking actor,
//! providing domain-specific APIs. Each submodule represents a different
//! service.

pub mod pixiv;

pub use pixiv::IllustApi;
