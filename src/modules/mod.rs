//! Feature modules, one per domain entity or endpoint group. Each module
//! follows the same structure: `model.rs` (entities and DTOs), `service.rs`
//! (business logic), `controller.rs` (HTTP handlers), `router.rs`.

pub mod ai;
pub mod auth;
pub mod classes;
pub mod comments;
pub mod curriculum;
pub mod documents;
pub mod export;
pub mod history;
pub mod holidays;
pub mod lessons;
pub mod notifications;
pub mod research;
pub mod school_years;
pub mod search;
pub mod shares;
pub mod statistics;
pub mod templates;
pub mod todos;
pub mod workplan;
