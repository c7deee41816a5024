use crate::api;
use crate::api::client;
use crate::error::MigrateError;
use crate::model::Space;
use crate::view::LocaleResponse;

pub async fn list(space: &Space) -> Result<Vec<LocaleResponse>, MigrateError> {
    let url = api::endpoint::url_from_space(space, "/locales");
    log::debug!("locales::list {}", url);

    let client = client::new_for_space(space)?;
    client::get_all_pages(&client, &url, &[]).await
}

/// Code of the locale flagged `default` in the environment.
pub async fn get_default(space: &Space) -> Result<String, MigrateError> {
    let locales = list(space).await?;
    locales
        .into_iter()
        .find(|locale| locale.default)
        .map(|locale| locale.code)
        .ok_or_else(|| {
            MigrateError::basic_str(format!("no default locale found in {}", space.url()))
        })
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;

    use crate::api;
    use crate::error::MigrateError;
    use crate::test;

    #[tokio::test]
    async fn test_get_default_locale() -> Result<(), MigrateError> {
        let mut server = mockito::Server::new_async().await;
        let space = test::space_for_server(&server);
        let mock = server
            .mock("GET", "/spaces/space-id/environments/master/locales")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(
                r#"{"total": 2, "skip": 0, "limit": 1000, "items": [
                    {"code": "fr-CA", "default": false},
                    {"code": "en-CA", "default": true}
                ]}"#,
            )
            .create_async()
            .await;

        let locale = api::client::locales::get_default(&space).await?;
        mock.assert_async().await;
        assert_eq!(locale, "en-CA");
        Ok(())
    }
}
