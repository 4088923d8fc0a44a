//! Wire records for the GitHub REST API
//!
//! Minimal serde models with only the fields we need. Every field defaults
//! when missing so a sparse API response never fails deserialization.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A user account from the `/users/{username}` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// One entry from the `/users/{username}/repos` listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Repository {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub license: Option<License>,
    #[serde(default)]
    pub archived: bool,
    /// Repository size in kilobytes as reported by the API.
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub watchers_count: u64,
    #[serde(default)]
    pub language: Option<String>,
}

/// License metadata attached to a repository. All fields are optional;
/// the aggregation only cares whether the object is present at all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct License {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub spdx_id: Option<String>,
}
