#[cfg(test)]
mod tests {
    use crate::error::{ErrorCode, ParseError};
    use crate::handler::{
        decode_json, FormatHandler, FormatRegistry, JsonHandler, MAX_SUPPORTED_DEPTH,
    };
    use serde_json::{json, Value};

    fn nested_arrays(levels: usize) -> String {
        format!("{}1{}", "[".repeat(levels), "]".repeat(levels))
    }

    /// Handler that accepts anything and reports a fixed tag
    struct StubHandler {
        id: &'static str,
        tag: &'static str,
    }

    impl FormatHandler for StubHandler {
        fn format_id(&self) -> &str {
            self.id
        }

        fn parse(&self, _raw: &str) -> Result<Value, ParseError> {
            Ok(json!({ "title": self.tag, "slides": [] }))
        }

        fn validate_format(&self, _raw: &str) -> bool {
            true
        }
    }

    // ========================================================================
    // Depth-limited Decoder Tests
    // ========================================================================

    #[test]
    fn test_decode_simple_object() {
        let value = decode_json(r#"{"a": [1, 2.5, "x", null, true]}"#, 10).unwrap();
        assert_eq!(value, json!({"a": [1, 2.5, "x", null, true]}));
    }

    #[test]
    fn test_decode_at_depth_limit() {
        // Scalar sits at depth 10
        let value = decode_json(&nested_arrays(10), 10);
        assert!(value.is_ok());
    }

    #[test]
    fn test_decode_past_depth_limit() {
        // Scalar sits at depth 11
        let err = decode_json(&nested_arrays(11), 10).unwrap_err();
        assert_eq!(err.code, ErrorCode::DepthExceeded);
        assert!(err.message.contains("depth"));
    }

    #[test]
    fn test_decode_pathological_nesting_is_depth_error() {
        // Far beyond the decoder's own recursion limit
        let err = decode_json(&nested_arrays(10_000), 10).unwrap_err();
        assert_eq!(err.code, ErrorCode::DepthExceeded);
    }

    #[test]
    fn test_decode_large_bound_is_clamped() {
        // serde_json gives up on its 128th nested container; the clamped bound trips first
        let err = decode_json(&nested_arrays(150), 200).unwrap_err();
        assert_eq!(err.code, ErrorCode::DepthExceeded);
        assert_eq!(err.details["max_depth"], json!(MAX_SUPPORTED_DEPTH));

        let err = decode_json(&nested_arrays(127), usize::MAX).unwrap_err();
        assert_eq!(err.code, ErrorCode::DepthExceeded);

        assert!(decode_json(&nested_arrays(MAX_SUPPORTED_DEPTH), usize::MAX).is_ok());
    }

    #[test]
    fn test_decode_nested_objects_count_depth() {
        let mut raw = String::from("1");
        for _ in 0..11 {
            raw = format!("{{\"k\": {raw}}}");
        }
        let err = decode_json(&raw, 10).unwrap_err();
        assert_eq!(err.code, ErrorCode::DepthExceeded);
    }

    #[test]
    fn test_decode_syntax_error_has_position() {
        let err = decode_json("{\n  \"title\": }", 10).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidJson);
        assert_eq!(err.line, Some(2));
        assert!(err.column.is_some());
        assert!(!err.message.contains(" at line "));
    }

    #[test]
    fn test_decode_rejects_trailing_characters() {
        let err = decode_json(r#"{"a": 1} extra"#, 10).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidJson);
    }

    #[test]
    fn test_decode_empty_input() {
        let err = decode_json("", 10).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidJson);
    }

    // ========================================================================
    // JsonHandler Tests
    // ========================================================================

    #[test]
    fn test_json_handler_parses_deck() {
        let handler = JsonHandler::new();
        let data = handler.parse(r#"{"title": "T", "slides": []}"#).unwrap();
        assert_eq!(data["title"], json!("T"));
    }

    #[test]
    fn test_json_handler_requires_object_root() {
        let err = JsonHandler::new().parse("[1, 2]").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert_eq!(err.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_json_handler_leaves_required_fields_to_validator() {
        let handler = JsonHandler::new();

        let data = handler.parse(r#"{"title": "T"}"#).unwrap();
        assert!(data.get("slides").is_none());

        let data = handler.parse(r#"{"title": "T", "slides": {}}"#).unwrap();
        assert!(data["slides"].is_object());
    }

    #[test]
    fn test_json_handler_custom_depth() {
        assert_eq!(
            JsonHandler::new().with_max_depth(500).max_depth(),
            MAX_SUPPORTED_DEPTH
        );

        let handler = JsonHandler::new().with_max_depth(2);
        assert_eq!(handler.max_depth(), 2);
        let err = handler
            .parse(r#"{"title": "T", "slides": [{"elements": []}]}"#)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DepthExceeded);
    }

    #[test]
    fn test_json_handler_validate_format() {
        let handler = JsonHandler::new();
        assert!(handler.validate_format(r#"{"anything": 1}"#));
        assert!(handler.validate_format("[]"));
        assert!(!handler.validate_format("{invalid json"));
        assert!(!handler.validate_format(&nested_arrays(11)));
    }

    #[test]
    fn test_json_handler_info() {
        let info = JsonHandler::new().info();
        assert_eq!(info.format, "json");
        assert_eq!(info.name, "JsonHandler");
        assert_eq!(info.version, "1.0.0");
    }

    // ========================================================================
    // FormatRegistry Tests
    // ========================================================================

    #[test]
    fn test_register_overwrites_same_format() {
        let mut registry = FormatRegistry::new();
        registry
            .register(StubHandler { id: "deck", tag: "first" })
            .unwrap();
        registry
            .register(StubHandler { id: "deck", tag: "second" })
            .unwrap();

        assert_eq!(registry.len(), 1);
        let data = registry.lookup("deck").unwrap().parse("").unwrap();
        assert_eq!(data["title"], json!("second"));
    }

    #[test]
    fn test_register_rejects_empty_identifier() {
        let mut registry = FormatRegistry::new();
        let err = registry
            .register(StubHandler { id: "  ", tag: "x" })
            .unwrap_err();
        assert_eq!(err.plugin_name.as_deref(), Some("StubHandler"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unregister_is_noop_when_absent() {
        let mut registry = FormatRegistry::new();
        assert!(registry.unregister("json").is_none());

        registry.register(JsonHandler::new()).unwrap();
        assert!(registry.unregister("json").is_some());
        assert!(!registry.contains("json"));
    }

    #[test]
    fn test_list_formats_sorted() {
        let mut registry = FormatRegistry::new();
        registry.register(StubHandler { id: "yaml", tag: "y" }).unwrap();
        registry.register(JsonHandler::new()).unwrap();
        registry.register(StubHandler { id: "toml", tag: "t" }).unwrap();

        assert_eq!(registry.list_formats(), vec!["json", "toml", "yaml"]);
        let infos = registry.handler_infos();
        assert_eq!(infos[0].name, "JsonHandler");
        assert_eq!(infos[2].format, "yaml");
    }
}
