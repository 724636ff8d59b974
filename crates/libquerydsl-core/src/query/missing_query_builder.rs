use crate::query::QueryBuildError;
use crate::query::QueryBuilder;
use crate::sink::DocumentSink;
use crate::sink::SinkError;
use inherent::inherent;

type Result<T> = std::result::Result<T, QueryBuildError>;

/// Matches documents that have no value for a field.
///
/// Optional settings that were never set are left out of the serialized
/// fragment entirely, which is not the same as writing them as `false`:
///
/// ```json
/// {"missing": {"field": "age", "null_value": true, "existence": false, "_name": "q1"}}
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingQueryBuilder {
    existence: Option<bool>,
    field: String,
    null_value: Option<bool>,
    result_label: Option<String>,
}

impl MissingQueryBuilder {
    pub const NAME: &'static str = "missing";

    pub fn new(field: impl Into<String>) -> Result<Self> {
        let field = field.into();
        if field.is_empty() {
            return Err(QueryBuildError::EmptyFieldName {
                query_name: Self::NAME,
            });
        }

        Ok(Self {
            existence: None,
            field,
            null_value: None,
            result_label: None,
        })
    }

    pub fn existence(&self) -> Option<bool> {
        self.existence
    }

    pub fn field(&self) -> &str {
        self.field.as_str()
    }

    pub fn null_value(&self) -> Option<bool> {
        self.null_value
    }

    pub fn result_label(&self) -> Option<&str> {
        self.result_label.as_deref()
    }

    /// Whether documents where the field is absent altogether should match.
    /// The server treats an unset value as `true`.
    pub fn set_existence(&mut self, existence: bool) -> &mut Self {
        self.existence = Some(existence);
        self
    }

    /// Whether documents holding the mapping's configured `null_value` for
    /// the field should match. The server treats an unset value as `false`.
    pub fn set_null_value(&mut self, null_value: bool) -> &mut Self {
        self.null_value = Some(null_value);
        self
    }

    /// Tag this query so a search response can report which hits it matched.
    pub fn set_result_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.result_label = Some(label.into());
        self
    }
}

impl std::fmt::Display for MissingQueryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self as &dyn QueryBuilder, f)
    }
}

#[inherent]
impl QueryBuilder for MissingQueryBuilder {
    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    pub fn serialize_into(
        &self,
        sink: &mut dyn DocumentSink,
    ) -> std::result::Result<(), SinkError> {
        sink.write_object(Some(Self::NAME), |sink| {
            sink.field("field", self.field.as_str().into())?;
            if let Some(null_value) = self.null_value {
                sink.field("null_value", null_value.into())?;
            }
            if let Some(existence) = self.existence {
                sink.field("existence", existence.into())?;
            }
            if let Some(label) = &self.result_label {
                sink.field("_name", label.as_str().into())?;
            }
            Ok(())
        })
    }

    pub fn to_json_value(&self) -> std::result::Result<serde_json::Value, SinkError>;

    pub fn to_json_string(&self) -> std::result::Result<String, SinkError>;
}
