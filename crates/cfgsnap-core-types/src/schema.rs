//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names consistent between the emitting macros
//! and anything that parses or asserts on the log stream.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_SNAPSHOT_ID: &str = "snapshot_id";
pub const FIELD_FROM: &str = "from";
pub const FIELD_TO: &str = "to";

// Collection sizes
pub const FIELD_LINE_COUNT: &str = "line_count";
pub const FIELD_SNAPSHOT_COUNT: &str = "snapshot_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_are_distinct() {
        let keys = [
            FIELD_COMPONENT,
            FIELD_OP,
            FIELD_EVENT,
            FIELD_DURATION_MS,
            FIELD_SNAPSHOT_ID,
            FIELD_FROM,
            FIELD_TO,
            FIELD_LINE_COUNT,
            FIELD_SNAPSHOT_COUNT,
            FIELD_ERR_KIND,
            FIELD_ERR_CODE,
        ];
        let unique: std::collections::BTreeSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len());
        assert!(keys.iter().all(|k| !k.is_empty()));
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }
}
