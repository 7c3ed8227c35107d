//! Dataset loading: typed call records from CSV exports.

mod csv_source;
pub mod inventory;
pub mod queue;
pub mod timestamp;

pub use csv_source::{CsvLoader, parse_records};
pub use inventory::ColumnInventory;
pub use queue::{QueueMap, load_queue_file, merge_queue_maps, parse_queue_export};

use crate::errors::LoadError;
use crate::models::CallRecord;

/// Anything that can produce the ordered record sequence for one analysis run.
/// Failures are returned as-is; callers decide whether to retry.
pub trait RecordLoader {
    fn load(&self) -> Result<Vec<CallRecord>, LoadError>;
}
