use netgauge_core::errors::*;

#[test]
fn config_validation_error_carries_field() {
    let err = ConfigError::ValidationFailed {
        field: "engine.max_history".into(),
        message: "must be greater than 0".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("engine.max_history"));
    assert!(msg.contains("greater than 0"));
}

#[test]
fn collection_timeout_has_dedicated_code() {
    let err = CollectionError::Timeout {
        source_name: "routing_table".into(),
        timeout_secs: 60,
    };
    assert_eq!(err.error_code(), "COLLECTION_TIMEOUT");
    assert!(err.to_string().contains("60s"));
}

#[test]
fn network_error_uses_generic_collection_code() {
    let err = CollectionError::Network {
        url: "https://example.net".into(),
        reason: "connection refused".into(),
    };
    assert_eq!(err.error_code(), "COLLECTION_ERROR");
}

// --- From impls ---

#[test]
fn storage_error_converts_to_gauge_error() {
    let storage_err = StorageError::SqliteError {
        message: "disk I/O error".into(),
    };
    let err: GaugeError = storage_err.into();
    assert!(matches!(err, GaugeError::Storage(_)));
    assert_eq!(err.error_code(), "STORAGE_ERROR");
    assert!(err.to_string().contains("disk I/O error"));
}

#[test]
fn migration_failure_keeps_its_code_through_conversion() {
    let err: GaugeError = StorageError::MigrationFailed {
        version: 1,
        message: "syntax error".into(),
    }
    .into();
    assert_eq!(err.error_code(), "STORAGE_MIGRATION");
}

#[test]
fn detection_error_converts_to_gauge_error() {
    let err: GaugeError = DetectionError::MissingThreshold { kind: "ntp".into() }.into();
    assert!(matches!(err, GaugeError::Detection(_)));
    assert!(err.to_string().contains("ntp"));
}

#[test]
fn question_mark_propagates_config_error() {
    fn load() -> Result<(), ConfigError> {
        Err(ConfigError::FileNotFound {
            path: "/etc/netgauge.toml".into(),
        })
    }
    fn inner() -> GaugeResult<()> {
        load()?;
        Ok(())
    }
    let err = inner().unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}
