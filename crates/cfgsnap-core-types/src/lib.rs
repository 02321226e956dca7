//! Core types shared across cfgsnap facilities
//!
//! This crate provides the canonical field keys and event names used by the
//! structured logging macros and by log-capture assertions in tests.

pub mod schema;
