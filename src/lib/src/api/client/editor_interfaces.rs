use crate::api;
use crate::api::client;
use crate::error::MigrateError;
use crate::model::Space;
use crate::view::EditorInterfaceResponse;

pub async fn get(
    space: &Space,
    content_type_id: impl AsRef<str>,
) -> Result<EditorInterfaceResponse, MigrateError> {
    let uri = format!("/content_types/{}/editor_interface", content_type_id.as_ref());
    let url = api::endpoint::url_from_space(space, &uri);
    log::debug!("editor_interfaces::get {}", url);

    let client = client::new_for_space(space)?;
    let res = client.get(&url).send().await?;
    let body = client::parse_json_body(&url, res).await?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use crate::api;
    use crate::error::MigrateError;
    use crate::test;

    #[tokio::test]
    async fn test_get_editor_interface_controls() -> Result<(), MigrateError> {
        let mut server = mockito::Server::new_async().await;
        let space = test::space_for_server(&server);
        let mock = server
            .mock(
                "GET",
                "/spaces/space-id/environments/master/content_types/horse/editor_interface",
            )
            .with_status(200)
            .with_body(
                r#"{"sys": {"id": "default"}, "controls": [
                    {"fieldId": "unicorn", "widgetId": "singleLine"},
                    {"fieldId": "pegasus", "widgetId": "radio", "settings": {"helpText": "fly"}},
                    {"fieldId": "legs"}
                ]}"#,
            )
            .create_async()
            .await;

        let editor_interface = api::client::editor_interfaces::get(&space, "horse").await?;
        mock.assert_async().await;
        assert_eq!(editor_interface.controls.len(), 3);
        assert_eq!(editor_interface.controls[1].widget_id.as_deref(), Some("radio"));
        assert!(editor_interface.controls[2].widget_id.is_none());
        Ok(())
    }
}
