//! Ledger entries: one entry of the `migration` content type per scope.

use crate::api;
use crate::api::client;
use crate::constants;
use crate::error::MigrateError;
use crate::model::Space;
use crate::view::{LedgerEntryFields, LedgerEntryNew, LedgerEntryResponse};

fn ledger_query() -> Vec<(&'static str, String)> {
    vec![(
        "content_type",
        constants::LEDGER_CONTENT_TYPE_ID.to_string(),
    )]
}

/// Every ledger entry in the environment.
pub async fn list_ledger_entries(space: &Space) -> Result<Vec<LedgerEntryResponse>, MigrateError> {
    let url = api::endpoint::url_from_space(space, "/entries");
    log::debug!("entries::list_ledger_entries {}", url);

    let client = client::new_for_space(space)?;
    client::get_all_pages(&client, &url, &ledger_query()).await
}

/// Ledger entries whose scope field equals `scope_key`.
pub async fn find_ledger_entries(
    space: &Space,
    scope_key: impl AsRef<str>,
) -> Result<Vec<LedgerEntryResponse>, MigrateError> {
    let url = api::endpoint::url_from_space(space, "/entries");
    log::debug!("entries::find_ledger_entries {} {}", url, scope_key.as_ref());

    let mut params = ledger_query();
    params.push((
        "fields.contentTypeId",
        scope_key.as_ref().to_string(),
    ));

    let client = client::new_for_space(space)?;
    client::get_all_pages(&client, &url, &params).await
}

pub async fn get(
    space: &Space,
    entry_id: impl AsRef<str>,
) -> Result<Option<LedgerEntryResponse>, MigrateError> {
    let uri = format!("/entries/{}", entry_id.as_ref());
    let url = api::endpoint::url_from_space(space, &uri);

    let client = client::new_for_space(space)?;
    let res = client.get(&url).send().await?;
    match client::parse_json_body(&url, res).await {
        Ok(body) => Ok(Some(serde_json::from_str(&body)?)),
        Err(err) if err.is_not_found() => Ok(None),
        Err(err) => Err(err),
    }
}

/// Create a ledger entry whose id is the scope key.
pub async fn create_with_id(
    space: &Space,
    entry_id: impl AsRef<str>,
    fields: LedgerEntryFields,
) -> Result<LedgerEntryResponse, MigrateError> {
    let uri = format!("/entries/{}", entry_id.as_ref());
    let url = api::endpoint::url_from_space(space, &uri);
    log::debug!("entries::create_with_id {}", url);

    let params = serde_json::to_string(&LedgerEntryNew { fields })?;
    let client = client::new_for_space(space)?;
    let res = client
        .put(&url)
        .header(
            constants::CONTENT_TYPE_HEADER,
            constants::LEDGER_CONTENT_TYPE_ID,
        )
        .body(params)
        .send()
        .await?;
    let body = client::parse_json_body(&url, res).await?;
    Ok(serde_json::from_str(&body)?)
}

/// Overwrite an existing entry's fields, guarded by its version.
pub async fn update(
    space: &Space,
    entry: &LedgerEntryResponse,
) -> Result<LedgerEntryResponse, MigrateError> {
    let uri = format!("/entries/{}", entry.sys.id);
    let url = api::endpoint::url_from_space(space, &uri);
    let version = entry.sys.version.unwrap_or_default();
    log::debug!("entries::update {} version {}", url, version);

    let params = serde_json::to_string(&LedgerEntryNew {
        fields: entry.fields.clone(),
    })?;
    let client = client::new_for_space(space)?;
    let res = client
        .put(&url)
        .header(constants::VERSION_HEADER, version.to_string())
        .body(params)
        .send()
        .await?;
    let body = client::parse_json_body(&url, res).await?;
    Ok(serde_json::from_str(&body)?)
}

pub async fn delete(
    space: &Space,
    entry_id: impl AsRef<str>,
    version: u64,
) -> Result<(), MigrateError> {
    let uri = format!("/entries/{}", entry_id.as_ref());
    let url = api::endpoint::url_from_space(space, &uri);
    log::debug!("entries::delete {} version {}", url, version);

    let client = client::new_for_space(space)?;
    let res = client
        .delete(&url)
        .header(constants::VERSION_HEADER, version.to_string())
        .send()
        .await?;
    client::parse_json_body(&url, res).await?;
    Ok(())
}
