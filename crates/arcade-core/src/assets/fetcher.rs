//! Asset fetching from remote (GitHub) or a local mirror
//!
//! A local mirror is a directory laid out like a generated project
//! (`arcade/arcade.h`, `assets/background_music.wav`, ...) plus an optional
//! `release.json`. Remote and local sources go through the same download path
//! so development runs behave like production ones.

use super::catalog::{AssetDescriptor, Transfer};
use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tokio::task::JoinSet;

/// Upper bound for a single request, body included
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Upper bound for establishing a connection
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Asset source - either the URLs in the catalog or a local mirror
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    Remote,
    Local(PathBuf),
}

impl AssetSource {
    /// Use the mirror named by the product's environment variable, if set
    pub fn from_config<C: ProductConfig>(config: &C) -> Self {
        match std::env::var_os(config.asset_dir_env()) {
            Some(dir) if !dir.is_empty() => Self::Local(PathBuf::from(dir)),
            _ => Self::Remote,
        }
    }

    /// Create a local asset source from a path
    pub fn local(path: PathBuf) -> Self {
        Self::Local(path)
    }
}

/// Asset fetcher - retrieves catalog entries and writes them into a project
#[derive(Debug, Clone)]
pub struct AssetFetcher {
    source: AssetSource,
    client: reqwest::Client,
}

impl AssetFetcher {
    /// Create a new fetcher with a custom user agent
    pub fn new(source: AssetSource, user_agent: &str) -> Self {
        Self {
            source,
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .timeout(REQUEST_TIMEOUT)
                .connect_timeout(CONNECT_TIMEOUT)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Create a fetcher from a product config
    pub fn from_config<C: ProductConfig>(config: &C) -> Self {
        Self::new(AssetSource::from_config(config), config.user_agent())
    }

    /// Create a fetcher for a local mirror
    pub fn from_local(path: PathBuf, user_agent: &str) -> Self {
        Self::new(AssetSource::local(path), user_agent)
    }

    /// Get the asset source
    pub fn source(&self) -> &AssetSource {
        &self.source
    }

    pub(crate) fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Fetch an asset body
    pub async fn fetch(&self, asset: &AssetDescriptor) -> Result<Vec<u8>> {
        match &self.source {
            AssetSource::Remote => {
                let response = self
                    .client
                    .get(&asset.url)
                    .send()
                    .await
                    .with_context(|| format!("Request to {} failed", asset.url))?;

                if !response.status().is_success() {
                    anyhow::bail!("HTTP {} from {}", response.status(), asset.url);
                }

                let body = response
                    .bytes()
                    .await
                    .with_context(|| format!("Failed to read body from {}", asset.url))?
                    .to_vec();
                match asset.transfer {
                    Transfer::Text => String::from_utf8(body)
                        .map(String::into_bytes)
                        .with_context(|| format!("{} is not valid UTF-8", asset.url)),
                    Transfer::Binary => Ok(body),
                }
            }
            AssetSource::Local(dir) => {
                let path = dir.join(&asset.path);
                match asset.transfer {
                    Transfer::Text => Ok(fs::read_to_string(&path)
                        .await
                        .with_context(|| format!("Failed to read {}", path.display()))?
                        .into_bytes()),
                    Transfer::Binary => fs::read(&path)
                        .await
                        .with_context(|| format!("Failed to read {}", path.display())),
                }
            }
        }
    }

    /// Fetch an asset and write it below `root`, returning the written path
    pub async fn download(
        &self,
        asset: &AssetDescriptor,
        root: &Path,
    ) -> Result<PathBuf, ScaffoldError> {
        let body = self
            .fetch(asset)
            .await
            .map_err(|source| ScaffoldError::AssetFetch {
                path: asset.path.clone(),
                source,
            })?;

        let target = root.join(&asset.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ScaffoldError::filesystem("create directory", parent, e))?;
        }
        fs::write(&target, &body)
            .await
            .map_err(|e| ScaffoldError::AssetFetch {
                path: asset.path.clone(),
                source: anyhow::Error::new(e)
                    .context(format!("Failed to write {}", target.display())),
            })?;

        tracing::debug!(asset = %asset.path, bytes = body.len(), "asset written");
        Ok(target)
    }

    /// Download every asset concurrently and wait for all of them to settle
    ///
    /// `on_complete(completed, total)` runs once per settled download. The first
    /// failure is returned after the remaining downloads finish; files already
    /// written by other downloads stay on disk.
    pub async fn download_all<F>(
        &self,
        assets: Vec<AssetDescriptor>,
        root: &Path,
        mut on_complete: F,
    ) -> Result<Vec<PathBuf>, ScaffoldError>
    where
        F: FnMut(usize, usize),
    {
        let mut tasks = JoinSet::new();
        let mut names = HashMap::new();

        for asset in assets {
            let fetcher = self.clone();
            let root = root.to_path_buf();
            let name = asset.path.clone();
            let handle = tasks.spawn(async move { fetcher.download(&asset, &root).await });
            names.insert(handle.id(), name);
        }

        let total = tasks.len();
        let mut completed = 0;
        let mut written = Vec::with_capacity(total);
        let mut first_error = None;

        while let Some(joined) = tasks.join_next_with_id().await {
            let result = match joined {
                Ok((_, result)) => result,
                Err(e) => Err(ScaffoldError::AssetFetch {
                    path: names.get(&e.id()).cloned().unwrap_or_default(),
                    source: anyhow::Error::new(e).context("Download task failed"),
                }),
            };

            completed += 1;
            on_complete(completed, total);

            match result {
                Ok(path) => written.push(path),
                Err(e) => {
                    tracing::debug!(error = %e, "asset download failed");
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(written),
        }
    }
}
