use crate::query::QueryBuilder;
use crate::sink::DocumentSink;
use crate::sink::SinkError;
use inherent::inherent;

type Result<T> = std::result::Result<T, SinkError>;

/// Combines other queries of any type into `must`, `filter`, `should` and
/// `must_not` clauses.
///
/// Each clause list is written as an array of single-fragment objects, and
/// empty lists are left out:
///
/// ```json
/// {"bool": {"filter": [{"exists": {"field": "name"}}], "must_not": [{"missing": {"field": "age"}}]}}
/// ```
#[derive(Debug, Default)]
pub struct BoolQueryBuilder {
    boost: Option<f64>,
    filter: Vec<Box<dyn QueryBuilder>>,
    minimum_should_match: Option<i64>,
    must: Vec<Box<dyn QueryBuilder>>,
    must_not: Vec<Box<dyn QueryBuilder>>,
    result_label: Option<String>,
    should: Vec<Box<dyn QueryBuilder>>,
}

impl BoolQueryBuilder {
    pub const NAME: &'static str = "bool";

    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clause that matching documents must satisfy and that
    /// contributes to their score.
    pub fn add_must(&mut self, query: impl QueryBuilder + 'static) -> &mut Self {
        self.must.push(Box::new(query));
        self
    }

    /// Add a clause that matching documents must satisfy without
    /// affecting their score.
    pub fn add_filter(&mut self, query: impl QueryBuilder + 'static) -> &mut Self {
        self.filter.push(Box::new(query));
        self
    }

    pub fn add_should(&mut self, query: impl QueryBuilder + 'static) -> &mut Self {
        self.should.push(Box::new(query));
        self
    }

    pub fn add_must_not(&mut self, query: impl QueryBuilder + 'static) -> &mut Self {
        self.must_not.push(Box::new(query));
        self
    }

    pub fn has_clauses(&self) -> bool {
        !(self.must.is_empty()
            && self.filter.is_empty()
            && self.should.is_empty()
            && self.must_not.is_empty())
    }

    pub fn set_boost(&mut self, boost: f64) -> &mut Self {
        self.boost = Some(boost);
        self
    }

    /// How many `should` clauses a document has to match.
    pub fn set_minimum_should_match(&mut self, minimum: i64) -> &mut Self {
        self.minimum_should_match = Some(minimum);
        self
    }

    pub fn set_result_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.result_label = Some(label.into());
        self
    }

    fn serialize_clauses(
        sink: &mut dyn DocumentSink,
        key: &str,
        clauses: &[Box<dyn QueryBuilder>],
    ) -> Result<()> {
        if clauses.is_empty() {
            return Ok(());
        }
        sink.write_array(Some(key), |sink| {
            for clause in clauses {
                sink.write_object(None, |sink| clause.serialize_into(sink))?;
            }
            Ok(())
        })
    }
}

impl std::fmt::Display for BoolQueryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self as &dyn QueryBuilder, f)
    }
}

#[inherent]
impl QueryBuilder for BoolQueryBuilder {
    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    pub fn serialize_into(&self, sink: &mut dyn DocumentSink) -> Result<()> {
        sink.write_object(Some(Self::NAME), |sink| {
            Self::serialize_clauses(sink, "must", &self.must)?;
            Self::serialize_clauses(sink, "filter", &self.filter)?;
            Self::serialize_clauses(sink, "should", &self.should)?;
            Self::serialize_clauses(sink, "must_not", &self.must_not)?;
            if let Some(minimum) = self.minimum_should_match {
                sink.field("minimum_should_match", minimum.into())?;
            }
            if let Some(boost) = self.boost {
                sink.field("boost", boost.into())?;
            }
            if let Some(label) = &self.result_label {
                sink.field("_name", label.as_str().into())?;
            }
            Ok(())
        })
    }

    pub fn to_json_value(&self) -> Result<serde_json::Value>;

    pub fn to_json_string(&self) -> Result<String>;
}
