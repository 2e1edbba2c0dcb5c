#[cfg(test)]
mod tests {
    use crate::error::{
        BuildDocumentError, BuildStage, DeckError, ErrorCode, ParseError, PluginError,
        ValidationError,
    };
    use serde_json::json;

    // ========================================================================
    // ParseError Tests
    // ========================================================================

    #[test]
    fn test_parse_error_display_with_position() {
        let err = ParseError::new("expected value")
            .with_code(ErrorCode::InvalidJson)
            .with_position(3, 14);
        assert_eq!(err.to_string(), "[PARSE_ERROR] expected value at line 3 column 14");
    }

    #[test]
    fn test_empty_message_falls_back_to_code_default() {
        let err = ParseError::new("");
        assert_eq!(err.message, "parse error");

        let err = ParseError::new("").with_code(ErrorCode::InvalidJson);
        assert_eq!(err.message, "invalid JSON");
        assert_eq!(err.to_string(), "[PARSE_ERROR] invalid JSON");

        let err = ParseError::new("bad token").with_code(ErrorCode::InvalidJson);
        assert_eq!(err.message, "bad token");

        assert_eq!(ValidationError::new("  ").message, "data validation error");
        let err = BuildDocumentError::new("").with_code(ErrorCode::InvalidElement);
        assert_eq!(err.message, "invalid element");
    }

    #[test]
    fn test_parse_error_input_too_large_details() {
        let err = ParseError::input_too_large(20, 10);
        assert_eq!(err.code, ErrorCode::InputTooLarge);
        assert_eq!(err.details["size"], json!(20));
        assert_eq!(err.details["max"], json!(10));
    }

    #[test]
    fn test_parse_error_unsupported_format_names_format() {
        let err = ParseError::unsupported_format("yaml");
        assert_eq!(err.format.as_deref(), Some("yaml"));
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn test_parse_error_unexpected_keeps_cause() {
        let err = ParseError::unexpected("validation", "index out of bounds");
        assert_eq!(err.code, ErrorCode::ParseError);
        assert_eq!(err.details["cause"], json!("index out of bounds"));
        assert!(err.message.contains("validation"));
    }

    // ========================================================================
    // ValidationError Tests
    // ========================================================================

    #[test]
    fn test_validation_missing_field() {
        let err = ValidationError::missing_field("slides");
        assert_eq!(err.code, ErrorCode::MissingField);
        assert_eq!(err.field.as_deref(), Some("slides"));
        assert_eq!(err.violations.len(), 1);
        assert!(err.to_string().contains("slides"));
    }

    #[test]
    fn test_validation_violations_accumulate() {
        let mut err = ValidationError::invalid_field("slides[0]", "an object");
        err.add_violation("slides[1]", "expected an object", Some(json!(3)));

        assert_eq!(err.violations.len(), 2);
        let recorded = err.details["validation_errors"].as_array().unwrap();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[1]["value"], json!(3));
        assert!(recorded[0].get("value").is_none());
    }

    // ========================================================================
    // BuildDocumentError Tests
    // ========================================================================

    #[test]
    fn test_build_error_stage_and_ref() {
        let err = BuildDocumentError::new("x out of range")
            .at_stage(BuildStage::Element)
            .with_element_ref("slides[0].elements[2]");

        assert_eq!(err.stage, Some(BuildStage::Element));
        assert_eq!(err.details["stage"], json!("element"));
        assert_eq!(err.details["element_id"], json!("slides[0].elements[2]"));
        assert_eq!(
            err.to_string(),
            "[BUILD_ERROR] x out of range (stage: element, at: slides[0].elements[2])"
        );
    }

    #[test]
    fn test_build_error_missing_field() {
        let err = BuildDocumentError::missing_field(BuildStage::Document, "title");
        assert_eq!(err.code, ErrorCode::MissingField);
        assert!(err.message.contains("title"));
    }

    // ========================================================================
    // DeckError Tests
    // ========================================================================

    #[test]
    fn test_deck_error_categories() {
        let cases: Vec<(DeckError, &str)> = vec![
            (ParseError::new("p").into(), "PARSE_ERROR"),
            (ValidationError::new("v").into(), "VALIDATION_ERROR"),
            (BuildDocumentError::new("b").into(), "BUILD_ERROR"),
        ];

        for (err, category) in cases {
            assert_eq!(err.category(), category);
            assert!(err.to_string().starts_with(&format!("[{category}]")));
        }
    }

    #[test]
    fn test_deck_error_code_passthrough() {
        let err: DeckError = ParseError::depth_exceeded(10).into();
        assert_eq!(err.code(), ErrorCode::DepthExceeded);
        assert_eq!(err.details()["max_depth"], json!(10));
    }

    #[test]
    fn test_plugin_error_name() {
        let err = PluginError::new("empty format identifier").with_plugin_name("BadHandler");
        assert_eq!(err.code(), ErrorCode::PluginError);
        assert_eq!(err.details["plugin_name"], json!("BadHandler"));
        assert_eq!(err.to_string(), "[PLUGIN_ERROR] empty format identifier");
    }

    #[test]
    fn test_code_strings_are_stable() {
        assert_eq!(ErrorCode::InvalidJson.as_str(), "INVALID_JSON");
        assert_eq!(ErrorCode::DepthExceeded.to_string(), "DEPTH_EXCEEDED");
        assert_eq!(ErrorCode::MissingField.default_message(), "missing required field");
    }
}
