//! Operation boundary macros
//!
//! Every engine entry point emits exactly one `start` event and then either
//! one `end` or one `end_error` event, all at the operation's `op` name.
//! Extra `key = value` tracing fields may follow the required arguments.

/// Emit the `start` boundary of operation `$op`.
///
/// ```
/// # use cfgsnap_core::log_op_start;
/// log_op_start!("snapshot_list");
/// log_op_start!("snapshot_diff", from = "1", to = "2");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)+)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::cfgsnap_core_types::schema::EVENT_START
            $(, $($field)+)?
        )
    };
}

/// Emit the successful `end` boundary of operation `$op`.
///
/// ```
/// # use cfgsnap_core::log_op_end;
/// log_op_end!("snapshot_list", duration_ms = 3u64, snapshot_count = 12usize);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::cfgsnap_core_types::schema::EVENT_END,
            duration_ms = $duration
            $(, $($field)+)?
        )
    };
}

/// Emit the `end_error` boundary of operation `$op`.
///
/// `$err` is anything convertible into `ExError`; its kind and stable code
/// are attached as `err_kind` / `err_code`.
///
/// ```
/// # use cfgsnap_core::log_op_error;
/// # use cfgsnap_core::errors::{ExError, ExErrorKind};
/// let err = ExError::new(ExErrorKind::StoreUnavailable);
/// log_op_error!("snapshot_list", err, duration_ms = 10u64);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::cfgsnap_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code()
            $(, $($field)+)?
        )
    }};
}
