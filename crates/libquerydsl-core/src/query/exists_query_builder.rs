use crate::query::QueryBuildError;
use crate::query::QueryBuilder;
use crate::sink::DocumentSink;
use crate::sink::SinkError;
use inherent::inherent;

type Result<T> = std::result::Result<T, QueryBuildError>;

/// Matches documents that have at least one non-null value for a field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExistsQueryBuilder {
    field: String,
    result_label: Option<String>,
}

impl ExistsQueryBuilder {
    pub const NAME: &'static str = "exists";

    pub fn new(field: impl Into<String>) -> Result<Self> {
        let field = field.into();
        if field.is_empty() {
            return Err(QueryBuildError::EmptyFieldName {
                query_name: Self::NAME,
            });
        }

        Ok(Self {
            field,
            result_label: None,
        })
    }

    pub fn field(&self) -> &str {
        self.field.as_str()
    }

    pub fn result_label(&self) -> Option<&str> {
        self.result_label.as_deref()
    }

    pub fn set_result_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.result_label = Some(label.into());
        self
    }
}

impl std::fmt::Display for ExistsQueryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self as &dyn QueryBuilder, f)
    }
}

#[inherent]
impl QueryBuilder for ExistsQueryBuilder {
    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    pub fn serialize_into(
        &self,
        sink: &mut dyn DocumentSink,
    ) -> std::result::Result<(), SinkError> {
        sink.write_object(Some(Self::NAME), |sink| {
            sink.field("field", self.field.as_str().into())?;
            if let Some(label) = &self.result_label {
                sink.field("_name", label.as_str().into())?;
            }
            Ok(())
        })
    }

    pub fn to_json_value(&self) -> std::result::Result<serde_json::Value, SinkError>;

    pub fn to_json_string(&self) -> std::result::Result<String, SinkError>;
}
