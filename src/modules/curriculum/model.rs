use serde::Deserialize;
use utoipa::IntoParams;

/// Which Lehrplan a request addresses. Both subjects share the same
/// endpoint shapes, only the underlying static tables differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fach {
    Mathe,
    Deutsch,
}

impl Fach {
    pub fn name(self) -> &'static str {
        match self {
            Fach::Mathe => "Mathematik",
            Fach::Deutsch => "Deutsch",
        }
    }

    pub fn lehrplan(self) -> &'static serde_json::Value {
        match self {
            Fach::Mathe => &crate::data::lehrplan_mathe::LEHRPLAN_MATHE,
            Fach::Deutsch => &crate::data::lehrplan_deutsch::LEHRPLAN_DEUTSCH,
        }
    }

    pub fn schulbuecher(self) -> &'static serde_json::Value {
        match self {
            Fach::Mathe => &crate::data::schulbuecher_mathe::SCHULBUECHER_MATHE,
            Fach::Deutsch => &crate::data::schulbuecher_deutsch::SCHULBUECHER_DEUTSCH,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ThemaQueryParams {
    /// Grade band, e.g. "5/6".
    pub klassenstufe: Option<String>,
    /// Competency area key, e.g. "zahlen_operationen".
    pub kompetenzbereich: Option<String>,
    pub thema_id: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SchulbuchQueryParams {
    pub klassenstufe: Option<String>,
}
