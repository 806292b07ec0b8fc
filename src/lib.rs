// The static curriculum tables are single large `json!` literals.
#![recursion_limit = "256"]

//! # PlanEd API
//!
//! A REST backend for lesson planning at the Realschule plus
//! (Rheinland-Pfalz), built with Axum and PostgreSQL.
//!
//! ## Overview
//!
//! PlanEd helps teachers plan their school year:
//!
//! - **Arbeitspläne**: lessons and workplan grids per class and subject
//! - **Lehrplan reference**: Mathematik and Deutsch curricula with G/M/E
//!   proficiency levels and textbook catalogs
//! - **Statistics**: hour budgets, completion and upcoming entries
//! - **Sharing**: plans shared between teachers, with notifications
//! - **Exports**: xlsx, docx, pdf and AI-material bundles
//! - **Research and AI**: image/video/paper proxies and AI-generated
//!   suggestions and materials, all degrading gracefully
//!
//! ## Architecture
//!
//! The codebase follows a modular structure:
//!
//! ```text
//! src/
//! ├── config/           # Environment configuration (JWT, DB, CORS, keys)
//! ├── data/             # Static curriculum, textbook and holiday tables
//! ├── middleware/       # Bearer-token extractor
//! ├── modules/          # Feature modules (auth, lessons, shares, ...)
//! └── utils/            # Shared utilities (errors, JWT, password hashing)
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers (routes)
//! - `service.rs`: Business logic
//! - `model.rs`: Data models, DTOs, database structs
//! - `router.rs`: Axum router configuration
//!
//! ## Authentication
//!
//! All `/api` routes except registration, login and the static reference
//! lookups require a bearer token (HS256, 24 h expiry). Registration is
//! gated by a shared invitation code.
//!
//! ## API Documentation
//!
//! When the server is running, Swagger UI is available at
//! `http://localhost:8000/swagger-ui`.

pub mod config;
pub mod data;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
