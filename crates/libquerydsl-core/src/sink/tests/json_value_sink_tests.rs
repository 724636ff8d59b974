use crate::sink::JsonValueSink;
use crate::sink::ScalarValue;
use crate::sink::ScopeKind;
use crate::sink::SinkError;
use serde_json::json;

type Result<T> = std::result::Result<T, SinkError>;

mod well_formed {
    use super::*;

    #[test]
    fn nested_objects_and_arrays() -> Result<()> {
        let mut sink = JsonValueSink::new();
        sink.start_object(None)?;
        sink.start_object(Some("bool"))?;
        sink.start_array(Some("must"))?;
        sink.start_object(None)?;
        sink.field("field", "age".into())?;
        sink.end_object()?;
        sink.end_array()?;
        sink.field("boost", ScalarValue::Float(1.5))?;
        sink.end_object()?;
        sink.end_object()?;

        assert_eq!(sink.into_value()?, json!({
            "bool": {
                "must": [{"field": "age"}],
                "boost": 1.5,
            },
        }));
        Ok(())
    }

    #[test]
    fn keys_keep_insertion_order() -> Result<()> {
        let mut sink = JsonValueSink::new();
        sink.start_object(None)?;
        sink.field("zeta", true.into())?;
        sink.field("alpha", 1i64.into())?;
        sink.field("mid", "x".into())?;
        sink.end_object()?;

        let value = sink.into_value()?;
        let keys = value.as_object().unwrap().keys().collect::<Vec<_>>();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        Ok(())
    }

    #[test]
    fn non_finite_float_becomes_null() -> Result<()> {
        let mut sink = JsonValueSink::new();
        sink.start_object(None)?;
        sink.field("boost", f64::NAN.into())?;
        sink.end_object()?;

        assert_eq!(sink.into_value()?, json!({"boost": null}));
        Ok(())
    }

    #[test]
    fn root_array() -> Result<()> {
        let mut sink = JsonValueSink::new();
        sink.start_array(None)?;
        sink.start_object(None)?;
        sink.end_object()?;
        sink.start_array(None)?;
        sink.end_array()?;
        sink.end_array()?;

        assert_eq!(sink.into_value()?, json!([{}, []]));
        Ok(())
    }
}

mod malformed {
    use super::*;

    #[test]
    fn empty_document() {
        assert!(matches!(
            JsonValueSink::new().into_value(),
            Err(SinkError::EmptyDocument),
        ));
    }

    #[test]
    fn unclosed_scopes() -> Result<()> {
        let mut sink = JsonValueSink::new();
        sink.start_object(None)?;
        sink.start_object(Some("missing"))?;
        sink.end_object()?;

        assert!(matches!(
            sink.into_value(),
            Err(SinkError::UnclosedScopes { depth: 1 }),
        ));
        Ok(())
    }

    #[test]
    fn field_at_root() {
        let mut sink = JsonValueSink::new();
        let result = sink.field("field", "age".into());
        assert!(matches!(
            result,
            Err(SinkError::FieldOutsideObject { key }) if key == "field",
        ));
    }

    #[test]
    fn field_inside_array() -> Result<()> {
        let mut sink = JsonValueSink::new();
        sink.start_array(None)?;
        assert!(matches!(
            sink.field("field", "age".into()),
            Err(SinkError::FieldOutsideObject { .. }),
        ));
        Ok(())
    }

    #[test]
    fn unkeyed_object_inside_object() -> Result<()> {
        let mut sink = JsonValueSink::new();
        sink.start_object(None)?;
        assert!(matches!(
            sink.start_object(None),
            Err(SinkError::KeyRequired),
        ));
        Ok(())
    }

    #[test]
    fn keyed_root() {
        let mut sink = JsonValueSink::new();
        assert!(matches!(
            sink.start_object(Some("missing")),
            Err(SinkError::KeyNotAllowed { key }) if key == "missing",
        ));
    }

    #[test]
    fn keyed_value_inside_array() -> Result<()> {
        let mut sink = JsonValueSink::new();
        sink.start_array(None)?;
        assert!(matches!(
            sink.start_array(Some("must")),
            Err(SinkError::KeyNotAllowed { .. }),
        ));
        Ok(())
    }

    #[test]
    fn close_without_open() {
        let mut sink = JsonValueSink::new();
        assert!(matches!(
            sink.end_object(),
            Err(SinkError::NoOpenScope { operation: "end_object" }),
        ));
        assert!(matches!(
            sink.end_array(),
            Err(SinkError::NoOpenScope { operation: "end_array" }),
        ));
    }

    #[test]
    fn mismatched_close() -> Result<()> {
        let mut sink = JsonValueSink::new();
        sink.start_object(None)?;
        assert!(matches!(
            sink.end_array(),
            Err(SinkError::MismatchedClose {
                expected: ScopeKind::Array,
                found: ScopeKind::Object,
            }),
        ));

        // The object is still open and can be closed normally.
        sink.end_object()?;
        assert_eq!(sink.into_value()?, json!({}));
        Ok(())
    }

    #[test]
    fn duplicate_keys_are_rejected() -> Result<()> {
        let mut sink = JsonValueSink::new();
        sink.start_object(None)?;
        sink.start_object(Some("missing"))?;
        sink.field("field", "a".into())?;
        sink.end_object()?;
        assert!(matches!(
            sink.start_object(Some("missing")),
            Err(SinkError::DuplicateKey { key }) if key == "missing",
        ));
        assert!(matches!(
            sink.field("missing", true.into()),
            Err(SinkError::DuplicateKey { .. }),
        ));
        sink.end_object()?;

        // The first value is kept, not overwritten.
        assert_eq!(sink.into_value()?, json!({"missing": {"field": "a"}}));
        Ok(())
    }

    #[test]
    fn second_root_value() -> Result<()> {
        let mut sink = JsonValueSink::new();
        sink.start_object(None)?;
        sink.end_object()?;
        assert!(matches!(
            sink.start_object(None),
            Err(SinkError::DocumentAlreadyComplete),
        ));
        Ok(())
    }
}
