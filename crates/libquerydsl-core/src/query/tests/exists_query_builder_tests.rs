use crate::query::ExistsQueryBuilder;
use crate::query::QueryBuildError;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[test]
fn empty_field_name_is_rejected() {
    assert_eq!(
        ExistsQueryBuilder::new(""),
        Err(QueryBuildError::EmptyFieldName { query_name: "exists" }),
    );
}

#[test]
fn field_only() -> Result<()> {
    let query = ExistsQueryBuilder::new("title")?;
    assert_eq!(query.name(), "exists");
    assert_eq!(query.to_json_string()?, r#"{"exists":{"field":"title"}}"#);
    Ok(())
}

#[test]
fn displays_as_json() -> Result<()> {
    let query = ExistsQueryBuilder::new("title")?;
    assert_eq!(format!("{query}"), r#"{"exists":{"field":"title"}}"#);
    Ok(())
}

#[test]
fn with_result_label() -> Result<()> {
    let mut query = ExistsQueryBuilder::new("title")?;
    query.set_result_label("has-title");
    assert_eq!(query.result_label(), Some("has-title"));
    assert_eq!(
        query.to_json_string()?,
        r#"{"exists":{"field":"title","_name":"has-title"}}"#,
    );
    Ok(())
}
