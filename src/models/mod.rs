pub mod facade;
pub mod lookup;
pub mod record;
pub mod session;

pub use facade::{Action, FacadeRequest, FacadeResponse};
pub use lookup::{LookupItem, LookupList, LookupSpec};
pub use record::{Record, RecordKey};
pub use session::{EditSession, Operation};
