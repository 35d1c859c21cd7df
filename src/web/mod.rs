//! Web dashboard layer for browser-based UI.
//!
//! Server-side rendered pages built with Askama templates from `templates/`.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Dashboard route configuration

pub mod handlers;
pub mod routes;
