//! cfgsnap engine - orchestration layer
//!
//! Coordinates the pure core (catalog, diff, export) with a snapshot store
//! and a configuration source, and owns the start/end logging boundary of
//! every operator-facing operation.

pub mod commands;
