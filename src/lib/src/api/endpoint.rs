use crate::error::MigrateError;
use crate::model::Space;

/// `{host}/spaces/{space}/environments/{env}{uri}`
pub fn url_from_space(space: &Space, uri: &str) -> String {
    format!("{}{}", space.url(), uri)
}

/// A management API host such as `https://api.eu.contentful.com`, without
/// the trailing slash.
pub fn parse_host(host: impl AsRef<str>) -> Result<String, MigrateError> {
    let host = host.as_ref().trim();
    let url = url::Url::parse(host)?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(MigrateError::invalid_host(host));
    }
    if url.host_str().is_none() {
        return Err(MigrateError::invalid_host(host));
    }
    Ok(host.trim_end_matches('/').to_string())
}
