//! Type definition module

mod indicator;
mod load;
mod record;

pub use indicator::{LoadingIndicator, SPINNER_FRAMES};
pub use load::{LoadPhase, LoadTicket};
pub use record::{StateRecord, ROW_SEPARATOR};
