pub mod api_client;
pub mod lookup_loader;
pub mod sync_executor;

pub use api_client::{ApiClient, FacadeTransport};
pub use lookup_loader::ReferenceDataLoader;
pub use sync_executor::SyncExecutor;
