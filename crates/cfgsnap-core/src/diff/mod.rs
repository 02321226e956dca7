//! Snapshot diff engine.
//!
//! Compares the key/value mappings of two snapshots and classifies every key
//! as added, changed or removed (unchanged keys produce no line).
//!
//! ## Entry point
//!
//! ```
//! use cfgsnap_core::diff::compute_diff;
//! use cfgsnap_core::keys::KeyDecomposer;
//! use cfgsnap_core::model::ConfigVars;
//!
//! let old: ConfigVars = [("a-default-0".to_string(), "1".to_string())].into();
//! let new: ConfigVars = [("a-default-0".to_string(), "2".to_string())].into();
//! let diff = compute_diff(&old, &new, 0, 1, &KeyDecomposer::new()).unwrap();
//! assert_eq!(diff.count.changed, 1);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: changed/added lines come first in ascending key order,
//!   followed by removed lines in ascending key order.
//! - **No silent skips**: a key that cannot be decomposed aborts the diff.
//! - **Purity**: no I/O; the inputs are only borrowed.

pub mod engine;
pub mod export;
pub mod human_summary;
pub mod model;

pub use engine::{compute_diff, compute_snapshot_diff};
pub use export::{export_lines, write_export};
pub use human_summary::render_human_summary;
pub use model::{ChangeKind, DiffLine, DiffResult, DiffResultCount};
