//! Structured logging facility for cfgsnap
//!
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! Engine entry points own the start/end boundary of an operation. Core and
//! store code only emit `tracing::debug!`/`tracing::warn!` detail events.
//!
//! # Usage
//!
//! ```rust
//! use cfgsnap_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
