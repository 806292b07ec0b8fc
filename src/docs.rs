use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::data::holidays::{Bundesland, HolidayPeriod, PublicHoliday};
use crate::modules::ai::model::{MaterialDto, SuggestionsDto, SuggestionsResponse};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginDto, RegisterDto, TokenResponse, User, UserSettingsDto};
use crate::modules::classes::model::{ClassSubject, CreateClassDto};
use crate::modules::comments::model::{Comment, CreateCommentDto};
use crate::modules::documents::model::DocumentInfo;
use crate::modules::export::model::MaterialExportDto;
use crate::modules::history::model::HistoryEntry;
use crate::modules::holidays::model::{CreateHolidayDto, Holiday};
use crate::modules::lessons::model::{
    BatchCreateLessonDto, CreateLessonDto, Lesson, UpdateLessonDto,
};
use crate::modules::notifications::model::{Notification, UnreadCountResponse};
use crate::modules::research::model::TranslateDto;
use crate::modules::school_years::model::{CreateSchoolYearDto, SchoolYear};
use crate::modules::search::model::SearchResponse;
use crate::modules::shares::model::{CreateShareDto, Share, SharedClassResponse};
use crate::modules::statistics::model::{StatisticsResponse, UpcomingEntry, WeekdayHours};
use crate::modules::templates::model::{CreateTemplateDto, Template};
use crate::modules::todos::model::{CreateTodoDto, Todo, UpdateTodoDto};
use crate::modules::workplan::model::{
    WorkplanBulkSaveDto, WorkplanEntry, WorkplanEntryDto, WorkplanSaveResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::get_me,
        crate::modules::auth::controller::update_settings,
        crate::modules::school_years::controller::create_school_year,
        crate::modules::school_years::controller::get_school_years,
        crate::modules::school_years::controller::delete_school_year,
        crate::modules::classes::controller::create_class,
        crate::modules::classes::controller::get_classes,
        crate::modules::classes::controller::update_class,
        crate::modules::classes::controller::delete_class,
        crate::modules::lessons::controller::create_lesson,
        crate::modules::lessons::controller::create_batch_lessons,
        crate::modules::lessons::controller::get_lessons,
        crate::modules::lessons::controller::copy_lesson,
        crate::modules::lessons::controller::update_lesson,
        crate::modules::lessons::controller::delete_lesson,
        crate::modules::workplan::controller::get_workplan,
        crate::modules::workplan::controller::save_workplan_entry,
        crate::modules::workplan::controller::save_workplan_bulk,
        crate::modules::holidays::controller::get_bundeslaender,
        crate::modules::holidays::controller::get_school_holidays,
        crate::modules::holidays::controller::get_public_holidays,
        crate::modules::holidays::controller::create_holiday,
        crate::modules::holidays::controller::get_holidays,
        crate::modules::holidays::controller::delete_holiday,
        crate::modules::todos::controller::create_todo,
        crate::modules::todos::controller::get_todos,
        crate::modules::todos::controller::update_todo,
        crate::modules::todos::controller::delete_todo,
        crate::modules::templates::controller::create_template,
        crate::modules::templates::controller::get_templates,
        crate::modules::templates::controller::use_template,
        crate::modules::templates::controller::delete_template,
        crate::modules::comments::controller::create_comment,
        crate::modules::comments::controller::get_comments,
        crate::modules::comments::controller::delete_comment,
        crate::modules::shares::controller::create_share,
        crate::modules::shares::controller::get_my_shares,
        crate::modules::shares::controller::get_shared_with_me,
        crate::modules::shares::controller::get_class_shares,
        crate::modules::shares::controller::get_share_qrcode,
        crate::modules::shares::controller::delete_share,
        crate::modules::notifications::controller::get_notifications,
        crate::modules::notifications::controller::get_unread_count,
        crate::modules::notifications::controller::mark_as_read,
        crate::modules::notifications::controller::mark_all_as_read,
        crate::modules::notifications::controller::delete_notification,
        crate::modules::history::controller::get_history,
        crate::modules::history::controller::get_class_history,
        crate::modules::documents::controller::upload_document,
        crate::modules::documents::controller::get_documents,
        crate::modules::documents::controller::download_document,
        crate::modules::documents::controller::delete_document,
        crate::modules::search::controller::search,
        crate::modules::statistics::controller::get_class_statistics,
        crate::modules::export::controller::export_excel,
        crate::modules::export::controller::export_word,
        crate::modules::export::controller::export_pdf,
        crate::modules::export::controller::export_material,
        crate::modules::curriculum::controller::mathe_struktur,
        crate::modules::curriculum::controller::mathe_thema,
        crate::modules::curriculum::controller::mathe_schulbuecher,
        crate::modules::curriculum::controller::mathe_schulbuch,
        crate::modules::curriculum::controller::deutsch_struktur,
        crate::modules::curriculum::controller::deutsch_thema,
        crate::modules::curriculum::controller::deutsch_schulbuecher,
        crate::modules::curriculum::controller::deutsch_schulbuch,
        crate::modules::curriculum::controller::deutsch_hinweise,
        crate::modules::research::controller::search_images,
        crate::modules::research::controller::search_videos,
        crate::modules::research::controller::search_papers,
        crate::modules::research::controller::translate,
        crate::modules::ai::controller::get_suggestions,
        crate::modules::ai::controller::generate_material,
    ),
    components(
        schemas(
            ErrorResponse,
            User,
            RegisterDto,
            LoginDto,
            UserSettingsDto,
            TokenResponse,
            SchoolYear,
            CreateSchoolYearDto,
            ClassSubject,
            CreateClassDto,
            Lesson,
            CreateLessonDto,
            UpdateLessonDto,
            BatchCreateLessonDto,
            WorkplanEntry,
            WorkplanEntryDto,
            WorkplanBulkSaveDto,
            WorkplanSaveResponse,
            Holiday,
            CreateHolidayDto,
            Bundesland,
            HolidayPeriod,
            PublicHoliday,
            Todo,
            CreateTodoDto,
            UpdateTodoDto,
            Template,
            CreateTemplateDto,
            Comment,
            CreateCommentDto,
            Share,
            CreateShareDto,
            SharedClassResponse,
            Notification,
            UnreadCountResponse,
            HistoryEntry,
            DocumentInfo,
            SearchResponse,
            StatisticsResponse,
            UpcomingEntry,
            WeekdayHours,
            MaterialExportDto,
            SuggestionsDto,
            SuggestionsResponse,
            MaterialDto,
            TranslateDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registration, login and user settings"),
        (name = "School Years", description = "School year management"),
        (name = "Classes", description = "Classes and their timetables"),
        (name = "Lessons", description = "Lesson planning"),
        (name = "Workplan", description = "Arbeitsplan grid entries"),
        (name = "Holidays", description = "Personal and public holidays"),
        (name = "Todos", description = "Task management"),
        (name = "Templates", description = "Reusable lesson templates"),
        (name = "Comments", description = "Lesson discussion"),
        (name = "Shares", description = "Plan sharing between teachers"),
        (name = "Notifications", description = "In-app notifications"),
        (name = "History", description = "Audit log"),
        (name = "Documents", description = "File uploads"),
        (name = "Search", description = "Cross-entity search"),
        (name = "Statistics", description = "Class progress statistics"),
        (name = "Export", description = "Spreadsheet, document and material exports"),
        (name = "Lehrplan Mathematik", description = "Mathematik curriculum reference"),
        (name = "Lehrplan Deutsch", description = "Deutsch curriculum reference"),
        (name = "Research", description = "Image, video and paper search proxies"),
        (name = "AI", description = "AI-assisted planning and material generation")
    ),
    info(
        title = "PlanEd API",
        version = "2.0.0",
        description = "Unterrichtsplanung für Lehrkräfte an der Realschule plus: Arbeitspläne, Lehrplan-Referenz, Statistiken, Exporte und Freigaben.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
