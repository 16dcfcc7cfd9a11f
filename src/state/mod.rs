// ============================================================================
// STATE MODULE - Estado compartido con Rc<RefCell>
// ============================================================================

pub mod row_tracker;
pub mod session_state;

pub use row_tracker::RowTracker;
pub use session_state::{Generation, SessionState};
