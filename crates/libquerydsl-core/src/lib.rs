//! Builders for the leaf and compound nodes of a search engine's JSON query
//! DSL.
//!
//! Every node type implements [`QueryBuilder`](query::QueryBuilder) and
//! writes itself into a [`DocumentSink`](sink::DocumentSink) as a single
//! keyed fragment, so nodes of any type can be nested inside one another
//! without the enclosing node knowing what it contains:
//!
//! ```
//! use libquerydsl_core::query::MissingQueryBuilder;
//!
//! let mut query = MissingQueryBuilder::new("age").unwrap();
//! query.set_null_value(true);
//!
//! assert_eq!(
//!     query.to_json_string().unwrap(),
//!     r#"{"missing":{"field":"age","null_value":true}}"#,
//! );
//! ```

pub mod query;
pub mod sink;

#[cfg(test)]
mod test_utils;
