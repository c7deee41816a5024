use serde_json::json;

use crate::api;
use crate::api::client;
use crate::constants;
use crate::error::MigrateError;
use crate::model::Space;
use crate::view::{ContentTypeNew, ContentTypeResponse};

/// List every content type of the environment, page by page.
pub async fn list(space: &Space) -> Result<Vec<ContentTypeResponse>, MigrateError> {
    let url = api::endpoint::url_from_space(space, "/content_types");
    log::debug!("content_types::list {}", url);

    let client = client::new_for_space(space)?;
    client::get_all_pages(&client, &url, &[]).await
}

pub async fn get(
    space: &Space,
    content_type_id: impl AsRef<str>,
) -> Result<Option<ContentTypeResponse>, MigrateError> {
    let uri = format!("/content_types/{}", content_type_id.as_ref());
    let url = api::endpoint::url_from_space(space, &uri);

    let client = client::new_for_space(space)?;
    let res = client.get(&url).send().await?;
    match client::parse_json_body(&url, res).await {
        Ok(body) => Ok(Some(serde_json::from_str(&body)?)),
        Err(err) if err.is_not_found() => Ok(None),
        Err(err) => Err(err),
    }
}

/// Create or update a content type with a known id, returns the new version.
pub async fn put(
    space: &Space,
    content_type_id: impl AsRef<str>,
    content_type: &ContentTypeNew,
    version: Option<u64>,
) -> Result<ContentTypeResponse, MigrateError> {
    let uri = format!("/content_types/{}", content_type_id.as_ref());
    let url = api::endpoint::url_from_space(space, &uri);
    log::debug!("content_types::put {} version {:?}", url, version);

    let client = client::new_for_space(space)?;
    let mut req = client.put(&url).body(serde_json::to_string(content_type)?);
    if let Some(version) = version {
        req = req.header(constants::VERSION_HEADER, version.to_string());
    }
    let res = req.send().await?;
    let body = client::parse_json_body(&url, res).await?;
    Ok(serde_json::from_str(&body)?)
}

pub async fn publish(
    space: &Space,
    content_type_id: impl AsRef<str>,
    version: u64,
) -> Result<ContentTypeResponse, MigrateError> {
    let uri = format!("/content_types/{}/published", content_type_id.as_ref());
    let url = api::endpoint::url_from_space(space, &uri);
    log::debug!("content_types::publish {} version {}", url, version);

    let client = client::new_for_space(space)?;
    let res = client
        .put(&url)
        .header(constants::VERSION_HEADER, version.to_string())
        .send()
        .await?;
    let body = client::parse_json_body(&url, res).await?;
    Ok(serde_json::from_str(&body)?)
}

/// The bookkeeping content type that stores one ledger entry per scope.
pub fn ledger_content_type() -> ContentTypeNew {
    ContentTypeNew {
        name: constants::LEDGER_CONTENT_TYPE_NAME.to_string(),
        display_field: constants::LEDGER_SCOPE_FIELD.to_string(),
        description: "Meta data to store the state of content model through migrations"
            .to_string(),
        fields: vec![
            json!({
                "id": constants::LEDGER_STATE_FIELD,
                "name": "Migration State",
                "type": "Object",
                "required": true
            }),
            json!({
                "id": constants::LEDGER_SCOPE_FIELD,
                "name": "Content Type ID",
                "type": "Symbol",
                "required": true,
                "validations": [{ "unique": true }]
            }),
        ],
    }
}
