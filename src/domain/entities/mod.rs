//! Core domain entities.
//!
//! Entities are plain data structures without business logic. Creation input
//! lives in a separate struct ([`NewLink`]) so the store can assign
//! `created_at` and the click counters.

pub mod link;

pub use link::{Link, NewLink};
