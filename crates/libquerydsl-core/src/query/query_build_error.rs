use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum QueryBuildError {
    #[error(
        "A `{query_name}` query must target a field, but an empty field name \
        was given."
    )]
    EmptyFieldName {
        query_name: &'static str,
    },
}
