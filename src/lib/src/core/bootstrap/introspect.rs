use futures::prelude::*;

use crate::api;
use crate::constants;
use crate::error::MigrateError;
use crate::model::{ContentTypeSchema, EditorInterfaceEntry, IntrospectedContentType, Space};
use crate::view::ContentTypeResponse;

/// Current content types of the space with their editor interfaces.
///
/// An empty `content_type_ids` selects every content type. The ledger's own
/// content type is never returned. Requested ids missing from the space are
/// an error.
pub async fn introspect(
    space: &Space,
    content_type_ids: &[String],
) -> Result<Vec<IntrospectedContentType>, MigrateError> {
    let content_types = api::client::content_types::list(space)
        .await
        .map_err(MigrateError::schema_fetch)?;
    let selected = select(content_types, content_type_ids)?;
    log::debug!("introspecting {} content types", selected.len());

    stream::iter(selected)
        .map(|content_type| async move { with_editor_interface(space, content_type).await })
        .buffered(constants::DEFAULT_NUM_WORKERS)
        .try_collect()
        .await
}

/// Drops the ledger content type and keeps the requested ids, in request order.
pub fn select(
    content_types: Vec<ContentTypeResponse>,
    content_type_ids: &[String],
) -> Result<Vec<ContentTypeResponse>, MigrateError> {
    let available: Vec<ContentTypeResponse> = content_types
        .into_iter()
        .filter(|content_type| content_type.sys.id != constants::LEDGER_CONTENT_TYPE_ID)
        .collect();

    if content_type_ids.is_empty() {
        return Ok(available);
    }

    let mut selected = Vec::with_capacity(content_type_ids.len());
    let mut missing: Vec<&str> = vec![];
    for id in content_type_ids {
        match available.iter().find(|content_type| &content_type.sys.id == id) {
            Some(content_type) => selected.push(content_type.clone()),
            None => missing.push(id),
        }
    }

    if !missing.is_empty() {
        return Err(MigrateError::schema_fetch(format!(
            "content type(s) not found: {}",
            missing.join(", ")
        )));
    }
    Ok(selected)
}

async fn with_editor_interface(
    space: &Space,
    content_type: ContentTypeResponse,
) -> Result<IntrospectedContentType, MigrateError> {
    let controls = match api::client::editor_interfaces::get(space, &content_type.sys.id).await {
        Ok(editor_interface) => editor_interface.controls,
        Err(err) if err.is_not_found() => {
            log::warn!("no editor interface for {}", content_type.sys.id);
            vec![]
        }
        Err(err) => return Err(MigrateError::schema_fetch(err)),
    };

    Ok(IntrospectedContentType {
        schema: ContentTypeSchema::from(content_type),
        editor_interface: controls
            .into_iter()
            .filter_map(EditorInterfaceEntry::from_control)
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serde_json::json;

    use crate::core::bootstrap::introspect;
    use crate::error::MigrateError;
    use crate::test;
    use crate::view::ContentTypeResponse;

    fn content_type(id: &str) -> ContentTypeResponse {
        serde_json::from_value(json!({ "sys": { "id": id }, "name": id, "fields": [] })).unwrap()
    }

    #[test]
    fn test_select_skips_ledger_content_type() -> Result<(), MigrateError> {
        let all = vec![content_type("horse"), content_type("migration")];
        let selected = introspect::select(all, &[])?;
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].sys.id, "horse");
        Ok(())
    }

    #[test]
    fn test_select_explicit_in_request_order() -> Result<(), MigrateError> {
        let all = vec![content_type("horse"), content_type("pegasus")];
        let ids = vec!["pegasus".to_string(), "horse".to_string()];
        let selected = introspect::select(all, &ids)?;
        let ids: Vec<&str> = selected.iter().map(|c| c.sys.id.as_str()).collect();
        assert_eq!(ids, vec!["pegasus", "horse"]);
        Ok(())
    }

    #[test]
    fn test_select_missing_id_is_schema_fetch() {
        let all = vec![content_type("horse"), content_type("migration")];
        let ids = vec!["migration".to_string()];
        let result = introspect::select(all, &ids);
        assert!(matches!(result, Err(MigrateError::SchemaFetch(_))));
    }

    #[tokio::test]
    async fn test_introspect_pairs_editor_interface() -> Result<(), MigrateError> {
        let mut server = mockito::Server::new_async().await;
        let space = test::space_for_server(&server);
        let _list = test::mock_content_types(
            &mut server,
            &[
                json!({
                    "sys": { "id": "horse" },
                    "name": "Horse",
                    "fields": [{ "id": "unicorn", "name": "charlie", "type": "Symbol" }]
                }),
                json!({ "sys": { "id": "migration" }, "name": "Migration", "fields": [] }),
            ],
        )
        .await;
        let _editor = server
            .mock(
                "GET",
                "/spaces/space-id/environments/master/content_types/horse/editor_interface",
            )
            .with_status(200)
            .with_body(
                r#"{"controls": [{"fieldId": "unicorn", "widgetId": "singleLine"}, {"fieldId": "legs"}]}"#,
            )
            .create_async()
            .await;

        let introspected = introspect::introspect(&space, &[]).await?;
        assert_eq!(introspected.len(), 1);
        assert_eq!(introspected[0].schema.id, "horse");
        assert_eq!(introspected[0].editor_interface.len(), 1);
        assert_eq!(introspected[0].editor_interface[0].widget_id, "singleLine");
        Ok(())
    }

    #[tokio::test]
    async fn test_introspect_auth_failure_is_schema_fetch() -> Result<(), MigrateError> {
        let mut server = mockito::Server::new_async().await;
        let space = test::space_for_server(&server);
        let _list = server
            .mock("GET", "/spaces/space-id/environments/master/content_types")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body(r#"{"sys": {"id": "AccessTokenInvalid"}}"#)
            .create_async()
            .await;

        let result = introspect::introspect(&space, &[]).await;
        assert!(matches!(result, Err(MigrateError::SchemaFetch(_))));
        Ok(())
    }
}
