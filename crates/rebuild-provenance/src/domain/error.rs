//! Error taxonomy for loading host build snapshots and stored records.
//!
//! Provenance resolution itself is infallible: every unresolvable field
//! degrades to `None`. Errors only arise at the boundary where a host export
//! or a previously stored record is read and decoded.

/// Errors produced while reading build snapshots or stored records.
#[derive(Debug, thiserror::Error)]
pub enum ProvenanceError {
    #[error("invalid build snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("invalid provenance record: {0}")]
    InvalidRecord(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for provenance operations.
pub type Result<T> = std::result::Result<T, ProvenanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_snapshot_display() {
        let err = ProvenanceError::InvalidSnapshot("upstream project is empty".to_string());
        assert!(err.to_string().contains("invalid build snapshot"));
        assert!(err.to_string().contains("upstream project is empty"));
    }

    #[test]
    fn test_invalid_record_display() {
        let err =
            ProvenanceError::InvalidRecord("buildHash present without buildRemote".to_string());
        assert!(err.to_string().starts_with("invalid provenance record"));
    }

    #[test]
    fn test_serialization_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ProvenanceError = serde_err.into();
        assert!(err.to_string().starts_with("serialization error"));
    }

    #[test]
    fn test_io_error_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let err: ProvenanceError = io_err.into();
        assert!(err.to_string().contains("missing.json"));
    }
}
