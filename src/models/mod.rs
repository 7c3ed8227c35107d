pub mod direction;
pub mod record;

pub use direction::{Direction, ParsedDirection};
pub use record::{CallRecord, DurationField, Seconds};
