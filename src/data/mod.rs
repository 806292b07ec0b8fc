//! Static curriculum and calendar data served by the read-only endpoints.

pub mod holidays;
pub mod lehrplan_deutsch;
pub mod lehrplan_mathe;
pub mod schulbuecher_deutsch;
pub mod schulbuecher_mathe;
