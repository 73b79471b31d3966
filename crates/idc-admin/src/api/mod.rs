//! API client module for the server-management REST endpoints.
//!
//! All calls are HTTP GETs with basic authentication against a collection URL
//! (`/v1/server`) and its per-server sub-resources.

mod client;
mod types;

pub use client::{ApiClient, ApiError, ServerApi, DEFAULT_ENDPOINT};
pub use types::{RebootResponse, RestartOutcome};
