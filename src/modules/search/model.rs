use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::modules::classes::model::ClassSubject;
use crate::modules::lessons::model::Lesson;
use crate::modules::templates::model::Template;
use crate::modules::todos::model::Todo;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchQueryParams {
    /// Search term, at least 2 characters.
    pub q: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    pub query: String,
    pub lessons: Vec<Lesson>,
    pub classes: Vec<ClassSubject>,
    pub templates: Vec<Template>,
    pub todos: Vec<Todo>,
}
