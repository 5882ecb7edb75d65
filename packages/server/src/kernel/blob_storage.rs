//! Local-filesystem blob storage with signed URLs.
//!
//! Objects live under a configured files directory and are served back by
//! the `/files` route, which verifies a sha256 signature over
//! (secret, path, expiry). This keeps generated contract PDFs reachable
//! only through URLs this service minted, without a cloud bucket in the
//! loop.

use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use sha2::{Digest, Sha256};

use super::BaseBlobStorage;

/// Filesystem-backed blob storage.
pub struct LocalBlobStorage {
    root: PathBuf,
    public_base_url: String,
    signing_secret: String,
}

impl LocalBlobStorage {
    pub fn new(
        root: impl Into<PathBuf>,
        public_base_url: impl Into<String>,
        signing_secret: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into(),
            signing_secret: signing_secret.into(),
        }
    }

    /// Hex sha256 over secret, path and expiry.
    pub fn signature(secret: &str, path: &str, expires_at: i64) -> String {
        let mut hasher = Sha256::new();
        hasher.update(secret.as_bytes());
        hasher.update(b":");
        hasher.update(path.as_bytes());
        hasher.update(b":");
        hasher.update(expires_at.to_string().as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Verify a presented signature and its expiry against the clock.
    pub fn verify(&self, path: &str, expires_at: i64, signature: &str) -> bool {
        if expires_at < Utc::now().timestamp() {
            return false;
        }
        Self::signature(&self.signing_secret, path, expires_at) == signature
    }

    /// Absolute filesystem path for an object key. Rejects traversal.
    pub fn object_path(&self, path: &str) -> Result<PathBuf> {
        let relative = Path::new(path);
        for component in relative.components() {
            match component {
                Component::Normal(_) => {}
                _ => bail!("invalid object path: {}", path),
            }
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl BaseBlobStorage for LocalBlobStorage {
    async fn put(&self, path: &str, bytes: Vec<u8>, _content_type: &str) -> Result<()> {
        let target = self.object_path(path)?;
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .context("Failed to create blob directory")?;
        }
        tokio::fs::write(&target, bytes)
            .await
            .with_context(|| format!("Failed to write blob {}", path))?;
        Ok(())
    }

    async fn signed_url(&self, path: &str, ttl: Duration) -> Result<String> {
        let expires_at = Utc::now().timestamp() + ttl.as_secs() as i64;
        let signature = Self::signature(&self.signing_secret, path, expires_at);
        Ok(format!(
            "{}/files/{}?exp={}&sig={}",
            self.public_base_url, path, expires_at, signature
        ))
    }
}
