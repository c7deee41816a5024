//! # API Client - For interacting with a space on the management API
//!

use crate::constants;
use crate::error::MigrateError;
use crate::model::Space;
use crate::view::{Collection, ErrorResponse};
use reqwest::{header, Client, ClientBuilder};
use serde::de::DeserializeOwned;
use std::time;

pub mod content_types;
pub mod editor_interfaces;
pub mod entries;
pub mod locales;

const VERSION: &str = constants::CTF_MIGRATE_VERSION;
const USER_AGENT: &str = "ctfmigrate";

// TODO: share one client per Space so keep-alive connections are reused
// across the ledger, introspection and init calls.
pub fn new_for_space(space: &Space) -> Result<Client, MigrateError> {
    match builder_for_space(space)?
        .timeout(time::Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS))
        .build()
    {
        Ok(client) => Ok(client),
        Err(reqwest_err) => Err(MigrateError::HTTP(reqwest_err)),
    }
}

pub fn builder_for_space(space: &Space) -> Result<ClientBuilder, MigrateError> {
    log::debug!("Setting bearer token for host: {}", space.host);
    let auth_header = format!("Bearer {}", space.access_token);
    let mut auth_value = match header::HeaderValue::from_str(auth_header.as_str()) {
        Ok(header) => header,
        Err(err) => {
            log::debug!("client::builder_for_space invalid header value: {}", err);
            return Err(MigrateError::basic_str(
                "Error setting request auth. Please check your access token.",
            ));
        }
    };
    auth_value.set_sensitive(true);

    let mut headers = header::HeaderMap::new();
    headers.insert(header::AUTHORIZATION, auth_value);
    headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static(constants::CONTENTFUL_CONTENT_TYPE),
    );
    Ok(Client::builder()
        .user_agent(format!("{USER_AGENT}/{VERSION}"))
        .default_headers(headers))
}

/// Returns the body of a successful response, or the API error message.
pub async fn parse_json_body(url: &str, res: reqwest::Response) -> Result<String, MigrateError> {
    let status = res.status();
    let body = res.text().await?;

    log::debug!("url: {url}\nstatus: {status}\nbody: {body}");

    if status.is_success() {
        return Ok(body);
    }

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(MigrateError::remote_not_found(url));
    }

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(MigrateError::remote_request(
            url,
            status,
            "unauthorized, check your management access token",
        ));
    }

    match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(response) => Err(MigrateError::remote_request(
            url,
            status,
            response.desc_or_msg(),
        )),
        Err(err) => {
            log::debug!("Err: {}", err);
            Err(MigrateError::remote_request(url, status, body))
        }
    }
}

/// Follows `skip` until every item of the collection at `url` is read.
pub async fn get_all_pages<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    params: &[(&str, String)],
) -> Result<Vec<T>, MigrateError> {
    let mut items: Vec<T> = vec![];
    let limit = constants::DEFAULT_PAGE_LIMIT.to_string();
    loop {
        let skip = items.len().to_string();
        let res = client
            .get(url)
            .query(params)
            .query(&[("limit", limit.as_str()), ("skip", skip.as_str())])
            .send()
            .await?;
        let body = parse_json_body(url, res).await?;
        let page: Collection<T> = serde_json::from_str(&body)?;
        let is_last = page.is_last_page();
        log::debug!(
            "get_all_pages {} skip {} got {} of {}",
            url,
            page.skip,
            page.items.len(),
            page.total
        );
        items.extend(page.items);
        if is_last {
            return Ok(items);
        }
    }
}
