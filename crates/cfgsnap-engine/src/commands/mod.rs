//! Command orchestration layer.
//!
//! `engine_command` holds the single write path (taking a snapshot);
//! `engine_query` holds the read-only listing, diff and export queries.

pub mod engine_command;
pub mod engine_query;
pub mod snapshot;
