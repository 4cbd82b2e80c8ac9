pub mod record_manager;
pub mod services;
pub mod time;

pub use record_manager::RecordManager;
pub use time::{days_until, Clock, FixedClock, SystemClock};
