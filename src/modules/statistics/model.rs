use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// One planned or taught hour in the near future, drawn from either the
/// lesson list or the workplan grid.
#[derive(Debug, Serialize, ToSchema)]
pub struct UpcomingEntry {
    pub date: NaiveDate,
    pub period: Option<i32>,
    pub topic: String,
    /// "lesson" or "workplan"
    pub source: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WeekdayHours {
    pub weekday: String,
    pub hours: i64,
}

/// Progress report for one class over its school year.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatisticsResponse {
    pub class_subject_id: Uuid,
    pub semester_name: String,
    pub hours_per_week: i64,
    pub school_weeks: i64,
    pub holiday_weeks: i64,
    pub total_available_hours: i64,
    pub used_hours: i64,
    pub cancelled_hours: i64,
    pub remaining_hours: i64,
    pub completion_percentage: f64,
    pub topics_covered: i64,
    pub workplan_entries_count: i64,
    /// Montag through Sonntag, in week order.
    pub hours_by_weekday: Vec<WeekdayHours>,
    /// The next five planned hours from today on.
    pub upcoming: Vec<UpcomingEntry>,
}
