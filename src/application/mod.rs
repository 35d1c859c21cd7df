//! Application layer services implementing business logic.
//!
//! Services orchestrate validation and repository calls and provide a clean
//! API for HTTP handlers, the web dashboard and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link creation, lookup, deletion and click recording

pub mod services;
