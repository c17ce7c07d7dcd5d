//! # API Client
//!
//! HTTP client for the dianovi patient API.
//!
//! Handles:
//! - JSON requests/responses for the patient and recommendation endpoints
//! - Status checking (any non-2xx becomes a typed error)
//! - A readiness probe used by the bulk import flow
//!
//! No retries and no timeouts beyond the platform default: callers convert
//! every failure into a user-visible message at the point of the triggering
//! action.

#![warn(rust_2018_idioms)]

pub mod client;
pub mod error;

pub use client::{ApiClient, DEFAULT_API_URL};
pub use error::{ApiError, ApiResult};
