use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDate, Utc, Weekday};
use sqlx::PgPool;
use sqlx::prelude::FromRow;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::classes::service::ClassService;
use crate::utils::errors::AppError;

use super::model::{StatisticsResponse, UpcomingEntry, WeekdayHours};

const WEEKDAYS: &[&str] = &[
    "Montag",
    "Dienstag",
    "Mittwoch",
    "Donnerstag",
    "Freitag",
    "Samstag",
    "Sonntag",
];

fn german_weekday(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Montag",
        Weekday::Tue => "Dienstag",
        Weekday::Wed => "Mittwoch",
        Weekday::Thu => "Donnerstag",
        Weekday::Fri => "Freitag",
        Weekday::Sat => "Samstag",
        Weekday::Sun => "Sonntag",
    }
}

#[derive(FromRow)]
struct YearRow {
    semester: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

#[derive(FromRow)]
struct LessonRow {
    date: NaiveDate,
    period: Option<i32>,
    topic: String,
    is_cancelled: bool,
}

#[derive(FromRow)]
struct WorkplanRow {
    date: NaiveDate,
    period: i32,
    unterrichtseinheit: String,
    lehrplan: String,
    stundenthema: String,
}

impl WorkplanRow {
    /// Empty grid slots exist after bulk saves; only filled ones count
    /// as held hours.
    fn has_content(&self) -> bool {
        !self.unterrichtseinheit.trim().is_empty()
            || !self.lehrplan.trim().is_empty()
            || !self.stundenthema.trim().is_empty()
    }

    fn topic(&self) -> &str {
        if !self.stundenthema.trim().is_empty() {
            &self.stundenthema
        } else {
            &self.unterrichtseinheit
        }
    }
}

#[derive(FromRow)]
struct HolidayRow {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

pub struct StatisticsService;

impl StatisticsService {
    #[instrument]
    pub async fn class_statistics(
        db: &PgPool,
        user_id: Uuid,
        class_subject_id: Uuid,
    ) -> Result<StatisticsResponse, AppError> {
        let class = ClassService::get_owned(db, user_id, class_subject_id).await?;

        let year = sqlx::query_as::<_, YearRow>(
            "SELECT semester, start_date, end_date FROM school_years WHERE id = $1",
        )
        .bind(class.school_year_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("School year not found")))?;

        // Weekly hours come from the timetable when one is maintained,
        // otherwise from the class setting.
        let scheduled_hours: i64 = class
            .schedule
            .as_object()
            .map(|days| {
                days.values()
                    .filter_map(|periods| periods.as_array())
                    .map(|periods| periods.len() as i64)
                    .sum()
            })
            .unwrap_or(0);
        let hours_per_week = if scheduled_hours > 0 {
            scheduled_hours
        } else if class.hours_per_week > 0 {
            class.hours_per_week as i64
        } else {
            3
        };

        let holidays = sqlx::query_as::<_, HolidayRow>(
            "SELECT start_date, end_date FROM holidays
             WHERE user_id = $1 AND school_year_id = $2",
        )
        .bind(user_id)
        .bind(class.school_year_id)
        .fetch_all(db)
        .await?;

        let total_weeks = (year.end_date - year.start_date).num_days() / 7;
        let holiday_days: i64 = holidays
            .iter()
            .map(|h| (h.end_date - h.start_date).num_days() + 1)
            .sum();
        let holiday_weeks = holiday_days / 7;
        let school_weeks = total_weeks - holiday_weeks;
        let total_available_hours = school_weeks * hours_per_week;

        let lessons = sqlx::query_as::<_, LessonRow>(
            "SELECT date, period, topic, is_cancelled FROM lessons
             WHERE class_subject_id = $1
             ORDER BY date",
        )
        .bind(class_subject_id)
        .fetch_all(db)
        .await?;

        let workplan = sqlx::query_as::<_, WorkplanRow>(
            "SELECT date, period, unterrichtseinheit, lehrplan, stundenthema
             FROM workplan_entries
             WHERE class_subject_id = $1
             ORDER BY date, period",
        )
        .bind(class_subject_id)
        .fetch_all(db)
        .await?;

        // Lessons and workplan entries can describe the same hour; count
        // each (date, period) slot once. Lessons without a period fall
        // into slot 0.
        let mut used_slots: HashSet<(NaiveDate, i32)> = HashSet::new();
        let mut topics: HashSet<String> = HashSet::new();
        let mut weekday_hours: HashMap<&str, i64> = HashMap::new();
        let mut cancelled_hours: i64 = 0;

        for lesson in &lessons {
            if lesson.is_cancelled {
                cancelled_hours += 1;
                continue;
            }
            used_slots.insert((lesson.date, lesson.period.unwrap_or(0)));
            *weekday_hours.entry(german_weekday(lesson.date)).or_default() += 1;
            let topic = lesson.topic.trim().to_lowercase();
            if !topic.is_empty() {
                topics.insert(topic);
            }
        }

        let mut workplan_entries_count: i64 = 0;
        for entry in &workplan {
            if !entry.has_content() {
                continue;
            }
            workplan_entries_count += 1;
            used_slots.insert((entry.date, entry.period));
            *weekday_hours.entry(german_weekday(entry.date)).or_default() += 1;
            let topic = entry.unterrichtseinheit.trim().to_lowercase();
            if !topic.is_empty() {
                topics.insert(topic);
            }
        }

        let used_hours = used_slots.len() as i64;
        let remaining_hours = (total_available_hours - used_hours - cancelled_hours).max(0);
        let completion_percentage = if total_available_hours > 0 {
            let pct = (used_hours as f64 / total_available_hours as f64 * 100.0).min(100.0);
            (pct * 10.0).round() / 10.0
        } else {
            0.0
        };

        let today = Utc::now().date_naive();
        let mut upcoming: Vec<UpcomingEntry> = lessons
            .iter()
            .filter(|l| !l.is_cancelled && l.date >= today)
            .map(|l| UpcomingEntry {
                date: l.date,
                period: l.period,
                topic: l.topic.clone(),
                source: "lesson".to_string(),
            })
            .chain(
                workplan
                    .iter()
                    .filter(|e| e.has_content() && e.date >= today)
                    .map(|e| UpcomingEntry {
                        date: e.date,
                        period: Some(e.period),
                        topic: e.topic().to_string(),
                        source: "workplan".to_string(),
                    }),
            )
            .collect();
        upcoming.sort_by_key(|e| (e.date, e.period.unwrap_or(99)));
        upcoming.truncate(5);

        let hours_by_weekday = WEEKDAYS
            .iter()
            .map(|&weekday| WeekdayHours {
                weekday: weekday.to_string(),
                hours: weekday_hours.get(weekday).copied().unwrap_or(0),
            })
            .collect();

        Ok(StatisticsResponse {
            class_subject_id,
            semester_name: year.semester,
            hours_per_week,
            school_weeks,
            holiday_weeks,
            total_available_hours,
            used_hours,
            cancelled_hours,
            remaining_hours,
            completion_percentage,
            topics_covered: topics.len() as i64,
            workplan_entries_count,
            hours_by_weekday,
            upcoming,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    async fn create_user(pool: &PgPool, email: &str) -> Uuid {
        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO users (email, password, name) VALUES ($1, 'hash', 'Maria Muster')
             RETURNING id",
        )
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    async fn create_year(pool: &PgPool, user_id: Uuid) -> Uuid {
        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO school_years (user_id, name, semester, start_date, end_date)
             VALUES ($1, '2025/2026', '1. Halbjahr', '2025-08-18', '2026-01-30')
             RETURNING id",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    async fn create_class(pool: &PgPool, user_id: Uuid, year: Uuid, schedule: &str) -> Uuid {
        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO class_subjects
                 (user_id, school_year_id, name, subject, color, hours_per_week, schedule)
             VALUES ($1, $2, '7a', 'Mathematik', '#3b82f6', 4, $3::JSONB)
             RETURNING id",
        )
        .bind(user_id)
        .bind(year)
        .bind(schedule)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_hours_per_week_prefers_timetable(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;
        let year = create_year(&pool, user).await;
        let class =
            create_class(&pool, user, year, r#"{"monday": [1, 2], "thursday": [5]}"#).await;

        let stats = StatisticsService::class_statistics(&pool, user, class)
            .await
            .unwrap();

        assert_eq!(stats.hours_per_week, 3);
        assert_eq!(stats.semester_name, "1. Halbjahr");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_hours_per_week_falls_back_to_class_setting(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;
        let year = create_year(&pool, user).await;
        let class = create_class(&pool, user, year, "{}").await;

        let stats = StatisticsService::class_statistics(&pool, user, class)
            .await
            .unwrap();

        assert_eq!(stats.hours_per_week, 4);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_shared_slots_are_counted_once(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;
        let year = create_year(&pool, user).await;
        let class = create_class(&pool, user, year, "{}").await;
        let date = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();

        // Lesson and workplan entry in the same slot.
        sqlx::query(
            "INSERT INTO lessons (user_id, class_subject_id, date, period, topic)
             VALUES ($1, $2, $3, 2, 'Brüche kürzen')",
        )
        .bind(user)
        .bind(class)
        .bind(date)
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO workplan_entries (class_subject_id, date, period, unterrichtseinheit)
             VALUES ($1, $2, 2, 'Bruchrechnung')",
        )
        .bind(class)
        .bind(date)
        .execute(&pool)
        .await
        .unwrap();
        // A cancelled lesson and an empty workplan slot.
        sqlx::query(
            "INSERT INTO lessons (user_id, class_subject_id, date, period, is_cancelled)
             VALUES ($1, $2, $3, 3, TRUE)",
        )
        .bind(user)
        .bind(class)
        .bind(date)
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO workplan_entries (class_subject_id, date, period)
             VALUES ($1, $2, 4)",
        )
        .bind(class)
        .bind(date)
        .execute(&pool)
        .await
        .unwrap();

        let stats = StatisticsService::class_statistics(&pool, user, class)
            .await
            .unwrap();

        assert_eq!(stats.used_hours, 1);
        assert_eq!(stats.cancelled_hours, 1);
        assert_eq!(stats.workplan_entries_count, 1);
        assert_eq!(stats.topics_covered, 2);

        // 2025-09-01 is a Monday; both counted rows land there.
        assert_eq!(stats.hours_by_weekday[0].weekday, "Montag");
        assert_eq!(stats.hours_by_weekday[0].hours, 2);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_holiday_weeks_shrink_available_hours(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;
        let year = create_year(&pool, user).await;
        let class = create_class(&pool, user, year, "{}").await;

        // Two weeks of autumn break.
        sqlx::query(
            "INSERT INTO holidays (user_id, school_year_id, name, start_date, end_date)
             VALUES ($1, $2, 'Herbstferien', '2025-10-13', '2025-10-26')",
        )
        .bind(user)
        .bind(year)
        .execute(&pool)
        .await
        .unwrap();

        let stats = StatisticsService::class_statistics(&pool, user, class)
            .await
            .unwrap();

        // 2025-08-18 to 2026-01-30 spans 23 full weeks.
        assert_eq!(stats.holiday_weeks, 2);
        assert_eq!(stats.school_weeks, 21);
        assert_eq!(stats.total_available_hours, 21 * 4);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_foreign_class_is_not_found(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;
        let other = create_user(&pool, "tom@schule.de").await;
        let year = create_year(&pool, other).await;
        let class = create_class(&pool, other, year, "{}").await;

        let err = StatisticsService::class_statistics(&pool, user, class)
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}
