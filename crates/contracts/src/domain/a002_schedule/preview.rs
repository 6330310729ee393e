//! Preview ids: synthetic row ids of schedule occurrences that have not been
//! posted yet.

use super::aggregate::ScheduleId;
use crate::domain::common::AggregateId;

pub const PREVIEW_PREFIX: &str = "preview/";

pub fn is_preview_id(id: &str) -> bool {
    id.starts_with(PREVIEW_PREFIX)
}

pub fn preview_id(schedule_id: &ScheduleId) -> String {
    format!("{}{}", PREVIEW_PREFIX, schedule_id.as_string())
}

/// Schedule behind a preview row id.
///
/// `None` for ordinary row ids and for previews whose tail is not a schedule
/// id at all; neither can match a schedule.
pub fn schedule_id_from_preview(id: &str) -> Option<ScheduleId> {
    let tail = id.strip_prefix(PREVIEW_PREFIX)?;
    ScheduleId::from_string(tail).ok()
}
