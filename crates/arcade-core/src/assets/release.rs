//! Latest library release lookup
//!
//! The lookup never fails the scaffold: any problem resolves to the product's
//! fallback tag and is reported back as a warning reason.

use super::fetcher::{AssetFetcher, AssetSource};
use crate::product::ProductConfig;
use serde::Deserialize;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use url::Url;

/// File inside a local mirror standing in for the release endpoint
pub const MIRROR_RELEASE_FILE: &str = "release.json";

/// Release identifier of the ARCADE library, e.g. `v2.3.0`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReleaseTag(String);

impl ReleaseTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why the latest release could not be determined
#[derive(Debug, Error)]
pub enum ReleaseError {
    #[error("invalid release endpoint '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("release endpoint answered HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed release payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("release payload has an empty tag_name")]
    EmptyTag,
}

/// Outcome of a release lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseResolution {
    pub tag: ReleaseTag,
    /// Set when `tag` is the fallback; explains what went wrong
    pub fallback_reason: Option<String>,
}

impl ReleaseResolution {
    pub fn is_fallback(&self) -> bool {
        self.fallback_reason.is_some()
    }
}

#[derive(Debug, Deserialize)]
struct LatestRelease {
    tag_name: String,
}

/// Endpoint to query, honoring the product's environment override
pub fn release_endpoint<C: ProductConfig>(config: &C) -> String {
    std::env::var(config.release_url_env()).unwrap_or_else(|_| config.release_url().to_string())
}

/// Resolve the latest release tag, falling back to the product default on any failure
pub async fn resolve_release_tag<C: ProductConfig>(
    config: &C,
    fetcher: &AssetFetcher,
) -> ReleaseResolution {
    match lookup(config, fetcher).await {
        Ok(tag) => {
            tracing::debug!(%tag, "resolved latest release");
            ReleaseResolution {
                tag,
                fallback_reason: None,
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, fallback = config.fallback_release(), "release lookup failed");
            ReleaseResolution {
                tag: ReleaseTag::new(config.fallback_release()),
                fallback_reason: Some(e.to_string()),
            }
        }
    }
}

async fn lookup<C: ProductConfig>(
    config: &C,
    fetcher: &AssetFetcher,
) -> Result<ReleaseTag, ReleaseError> {
    let content = match fetcher.source() {
        AssetSource::Remote => {
            let endpoint = release_endpoint(config);
            let url = Url::parse(&endpoint).map_err(|source| ReleaseError::InvalidUrl {
                url: endpoint.clone(),
                source,
            })?;

            let response = fetcher.client().get(url).send().await?;
            if !response.status().is_success() {
                return Err(ReleaseError::Status(response.status()));
            }
            response.text().await?
        }
        AssetSource::Local(dir) => {
            let path = dir.join(MIRROR_RELEASE_FILE);
            tokio::fs::read_to_string(&path)
                .await
                .map_err(|source| ReleaseError::Read { path, source })?
        }
    };

    parse_release(&content)
}

fn parse_release(content: &str) -> Result<ReleaseTag, ReleaseError> {
    let release: LatestRelease = serde_json::from_str(content)?;
    let tag = release.tag_name.trim();
    if tag.is_empty() {
        return Err(ReleaseError::EmptyTag);
    }
    Ok(ReleaseTag::new(tag))
}
