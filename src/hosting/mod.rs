//! GitHub REST API access
//!
//! This module is responsible for fetching per-user data from the GitHub REST
//! API: the account profile and the public repository listing. Responses are
//! deserialized into explicit records that tolerate absent or null fields, and
//! non-success statuses are normalized into a typed [`FetchError`] so callers
//! can distinguish an unknown user from an upstream or network failure.
//!
//! Each fetch performs exactly one outbound request. There is no retry,
//! backoff, or rate-limit handling at this layer.

mod client;
mod models;

pub use client::{Client, FetchError};
pub use models::{License, Profile, Repository};
