pub mod batch_delete;
pub mod blob_storage;
pub mod deps;
pub mod nats;
pub mod pg_store;
pub mod test_dependencies;
pub mod traits;
pub mod triggers;

pub use blob_storage::LocalBlobStorage;
pub use deps::ServerDeps;
pub use nats::ChangeFeedConsumer;
pub use pg_store::PgStaffingStore;
pub use traits::{BaseBlobStorage, BaseStaffingStore};
pub use triggers::TriggerRouter;
