//! Configuration modules for the PlanEd API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables at startup:
//!
//! - [`cors`]: allowed cross-origin request origins
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`external`]: third-party API keys (LLM provider, video search)
//! - [`invitation`]: the shared registration invitation code
//! - [`jwt`]: token signing secret and lifetime

pub mod cors;
pub mod database;
pub mod external;
pub mod invitation;
pub mod jwt;
