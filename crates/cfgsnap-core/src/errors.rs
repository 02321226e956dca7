use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and machine-readable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    InvalidInput,
    /// A composite key does not have the `<path>-<scope>-<scopeId>` shape
    MalformedKey,
    /// A 1-based snapshot index does not name an existing catalog entry
    SnapshotNotFound,
    /// A snapshot with the same identifier is already persisted
    AlreadyExists,

    // Collaborators
    /// The snapshot store cannot be read or written
    StoreUnavailable,
    /// The configuration source cannot be queried
    SourceUnavailable,

    // Integration/IO
    Io,
    Serialization,
    Persistence,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::MalformedKey => "ERR_MALFORMED_KEY",
            ExErrorKind::SnapshotNotFound => "ERR_SNAPSHOT_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::StoreUnavailable => "ERR_STORE_UNAVAILABLE",
            ExErrorKind::SourceUnavailable => "ERR_SOURCE_UNAVAILABLE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus optional context
/// (operation name, offending entity) for the operator.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Set the operation name
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Set the entity (snapshot id, composite key, ...) the error concerns
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Set the error message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach an underlying error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain failures raised by the pure snapshot/diff code
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// Composite key does not end in `-<scope>-<digits>`, or the scope id overflows
    #[error("Malformed configuration key: {key}")]
    MalformedKey { key: String },

    /// A 1-based index outside the catalog
    #[error("Snapshot {index} not found; valid range is {}", range_label(.available))]
    SnapshotNotFound { index: i64, available: usize },

    /// An index argument that is not a number
    #[error("Invalid snapshot index: {input:?}")]
    InvalidIndex { input: String },
}

fn range_label(available: &usize) -> String {
    if *available == 0 {
        "empty (no snapshots taken yet)".to_string()
    } else {
        format!("1..={}", available)
    }
}

impl From<SnapshotError> for ExError {
    fn from(err: SnapshotError) -> Self {
        match &err {
            SnapshotError::MalformedKey { key } => ExError::new(ExErrorKind::MalformedKey)
                .with_entity_id(key.clone())
                .with_message(err.to_string()),
            SnapshotError::SnapshotNotFound { index, .. } => {
                ExError::new(ExErrorKind::SnapshotNotFound)
                    .with_entity_id(index.to_string())
                    .with_message(err.to_string())
            }
            SnapshotError::InvalidIndex { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(err.to_string())
            }
        }
    }
}

/// Conversion from serde_json::Error to ExError
impl From<serde_json::Error> for ExError {
    fn from(err: serde_json::Error) -> Self {
        ExError::new(ExErrorKind::Serialization).with_message(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::MalformedKey, "ERR_MALFORMED_KEY"),
            (ExErrorKind::SnapshotNotFound, "ERR_SNAPSHOT_NOT_FOUND"),
            (ExErrorKind::StoreUnavailable, "ERR_STORE_UNAVAILABLE"),
            (ExErrorKind::SourceUnavailable, "ERR_SOURCE_UNAVAILABLE"),
            (ExErrorKind::AlreadyExists, "ERR_ALREADY_EXISTS"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_display_includes_op_and_entity() {
        let err = ExError::new(ExErrorKind::StoreUnavailable)
            .with_op("list_snapshot_ids")
            .with_entity_id(".snapshots")
            .with_message("gone");
        assert_eq!(
            err.to_string(),
            "[ERR_STORE_UNAVAILABLE] in operation 'list_snapshot_ids': gone (entity_id: .snapshots)"
        );
    }

    #[test]
    fn test_snapshot_not_found_states_valid_range() {
        let err = SnapshotError::SnapshotNotFound {
            index: 9,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "Snapshot 9 not found; valid range is 1..=3"
        );

        let ex: ExError = err.into();
        assert_eq!(ex.kind(), ExErrorKind::SnapshotNotFound);
        assert!(ex.message().contains("1..=3"));
    }

    #[test]
    fn test_snapshot_not_found_on_empty_catalog() {
        let err = SnapshotError::SnapshotNotFound {
            index: 1,
            available: 0,
        };
        assert!(err.to_string().contains("no snapshots taken yet"));
    }

    #[test]
    fn test_malformed_key_maps_to_kind() {
        let ex: ExError = SnapshotError::MalformedKey {
            key: "web/url".to_string(),
        }
        .into();
        assert_eq!(ex.kind(), ExErrorKind::MalformedKey);
        assert_eq!(ex.entity_id(), Some("web/url"));
    }

    #[test]
    fn test_source_chain_is_exposed() {
        let inner = ExError::new(ExErrorKind::Io).with_message("disk gone");
        let outer = ExError::new(ExErrorKind::StoreUnavailable).with_source(inner);
        assert_eq!(
            outer.source_error().map(|e| e.kind()),
            Some(ExErrorKind::Io)
        );
        assert!(std::error::Error::source(&outer).is_some());
    }
}
