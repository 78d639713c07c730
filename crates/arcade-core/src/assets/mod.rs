//! Remote assets: what to download, where from, and which release
//!
//! This module provides:
//! - The static asset catalog (library headers and audio)
//! - Asset fetching from GitHub or a local mirror, fanned out concurrently
//! - Latest release lookup with a fixed fallback tag

pub mod catalog;
pub mod fetcher;
pub mod release;

pub use catalog::{audio_assets, header_assets, AssetDescriptor, Transfer};
pub use fetcher::{AssetFetcher, AssetSource};
pub use release::{ReleaseResolution, ReleaseTag};
