pub mod aggregate;
pub mod preview;

pub use aggregate::{AmountOp, Schedule, ScheduleAmount, ScheduleId};
pub use preview::{is_preview_id, preview_id, schedule_id_from_preview, PREVIEW_PREFIX};
