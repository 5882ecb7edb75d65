//! Test harness wiring the matching engine against in-memory dependencies.
//!
//! Each test gets a fresh store, blob storage and trigger router; there is
//! no shared state between tests.

use std::sync::Arc;
use std::time::Duration;

use test_context::AsyncTestContext;

use server_core::kernel::test_dependencies::{MemoryBlobStorage, MemoryStaffingStore};
use server_core::kernel::{ServerDeps, TriggerRouter};

/// Test harness with an in-memory store behind the real trigger router.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     ctx.store.insert_slot(...);
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    pub store: Arc<MemoryStaffingStore>,
    pub blob: Arc<MemoryBlobStorage>,
    pub deps: Arc<ServerDeps>,
    pub router: TriggerRouter,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        // Respect RUST_LOG when running tests with --nocapture.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let store = Arc::new(MemoryStaffingStore::new());
        let blob = Arc::new(MemoryBlobStorage::new());
        let deps = ServerDeps::new(store.clone(), blob.clone(), Duration::from_secs(3600));
        let router = TriggerRouter::new(deps.clone());

        Self {
            store,
            blob,
            deps: Arc::new(deps),
            router,
        }
    }

    async fn teardown(self) {}
}
