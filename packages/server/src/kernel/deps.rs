//! Server dependencies for effects (using traits for testability)
//!
//! This module provides the central dependency container used by domain
//! effects and routes. All external services use trait abstractions to
//! enable testing against in-memory implementations.

use std::sync::Arc;
use std::time::Duration;

use crate::kernel::{BaseBlobStorage, BaseStaffingStore};

/// Server dependencies accessible to effects (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    /// Document-store access for the staffing collections.
    pub store: Arc<dyn BaseStaffingStore>,
    /// Blob storage for generated contract PDFs.
    pub blob_storage: Arc<dyn BaseBlobStorage>,
    /// Lifetime of signed contract-PDF URLs.
    pub pdf_url_ttl: Duration,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        store: Arc<dyn BaseStaffingStore>,
        blob_storage: Arc<dyn BaseBlobStorage>,
        pdf_url_ttl: Duration,
    ) -> Self {
        Self {
            store,
            blob_storage,
            pdf_url_ttl,
        }
    }
}
