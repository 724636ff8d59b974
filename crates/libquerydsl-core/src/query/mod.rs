mod bool_query_builder;
mod exists_query_builder;
mod missing_query_builder;
mod query_build_error;
mod query_builder;

pub use bool_query_builder::BoolQueryBuilder;
pub use exists_query_builder::ExistsQueryBuilder;
pub use missing_query_builder::MissingQueryBuilder;
pub use query_build_error::QueryBuildError;
pub use query_builder::QueryBuilder;

#[cfg(test)]
mod tests;
