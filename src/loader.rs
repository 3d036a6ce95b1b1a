// SPDX-License-Identifier: MPL-2.0
//! Panorama byte acquisition and load sequencing.
//!
//! A panorama arrives either over HTTP or from a local file, and is always
//! buffered whole before tag extraction runs — there is no streaming variant.
//! Loads are user-paced and infrequent, but a newer load must still win over
//! a slower older one, so every load carries a token from a [`LoadSequence`]
//! and the apply step drops results whose token has been superseded.

use crate::error::{Error, Result};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

const USER_AGENT: &str = concat!("PanoLens/", env!("CARGO_PKG_VERSION"));

/// Where a panorama's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanoSource {
    Url(String),
    File(PathBuf),
}

impl PanoSource {
    /// Classifies a locator: an http(s) scheme means a network fetch,
    /// anything else is treated as a filesystem path.
    pub fn parse(locator: &str) -> Self {
        let scheme = locator.get(..8).unwrap_or(locator).to_ascii_lowercase();
        if scheme.starts_with("http://") || scheme.starts_with("https://") {
            PanoSource::Url(locator.to_string())
        } else {
            PanoSource::File(PathBuf::from(locator))
        }
    }
}

/// Loads the full panorama byte stream from `source`.
///
/// # Errors
///
/// Returns an error if the fetch fails, the server answers with a non-success
/// status, or the file cannot be read. The caller surfaces the failure and
/// leaves the current panorama untouched.
pub async fn load(source: &PanoSource) -> Result<Vec<u8>> {
    match source {
        PanoSource::Url(url) => fetch_url(url).await,
        PanoSource::File(path) => Ok(std::fs::read(path)?),
    }
}

async fn fetch_url(url: &str) -> Result<Vec<u8>> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()?;

    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(Error::Fetch(format!("HTTP status: {}", response.status())));
    }

    Ok(response.bytes().await?.to_vec())
}

/// Issues monotonically increasing tokens, one per panorama load.
///
/// Beginning a new load invalidates every earlier token, so metadata from a
/// slow first load can never be applied after a faster second load finished.
#[derive(Debug, Clone, Default)]
pub struct LoadSequence {
    current: Arc<AtomicU64>,
}

/// Token identifying one panorama load. Valid until the next [`LoadSequence::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

impl LoadSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new load, superseding all tokens issued before it.
    pub fn begin(&self) -> LoadToken {
        LoadToken(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Returns true if `token` belongs to the most recently begun load.
    pub fn is_current(&self, token: LoadToken) -> bool {
        self.current.load(Ordering::SeqCst) == token.0
    }
}
