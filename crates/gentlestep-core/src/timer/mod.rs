mod clock;
mod session;
mod ticker;

pub use clock::{Clock, ManualClock, SystemClock};
pub use session::{SessionPhase, SessionState, SessionTimer};
pub(crate) use session::remaining_secs as session_remaining_secs;
pub use ticker::{ActiveSession, DEFAULT_TICK_INTERVAL};
