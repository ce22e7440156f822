// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use gold_rupee_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn data_file_not_found() {
        assert_eq!(CoreError::DataFileNotFound.to_string(), "Data file not found");
    }

    #[test]
    fn malformed_json_carries_message() {
        let err = CoreError::MalformedJson("expected value at line 1 column 1".into());
        assert_eq!(
            err.to_string(),
            "Malformed JSON in data file: expected value at line 1 column 1"
        );
    }

    #[test]
    fn unrecognized_shape_lists_accepted_layouts() {
        let msg = CoreError::UnrecognizedShape.to_string();
        assert!(msg.starts_with("Unrecognized data file shape"));
        assert!(msg.contains("{\"data\": [...]}"));
        assert!(msg.contains("goldData"));
    }

    #[test]
    fn api() {
        let err = CoreError::Api {
            status: 404,
            message: "Data file not found".into(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 404): Data file not found");
    }

    #[test]
    fn render_and_config() {
        assert_eq!(
            CoreError::Render("bad range".into()).to_string(),
            "Chart rendering failed: bad range"
        );
        assert_eq!(
            CoreError::InvalidConfig("PORT".into()).to_string(),
            "Invalid configuration: PORT"
        );
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::FileIO(ref m) if m.contains("denied")));
    }

    #[test]
    fn from_serde_json_error_is_malformed_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let expected = json_err.to_string();
        let err: CoreError = json_err.into();
        match err {
            CoreError::MalformedJson(msg) => assert_eq!(msg, expected),
            other => panic!("expected MalformedJson, got {other:?}"),
        }
    }

    #[test]
    fn errors_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CoreError>();
    }
}
