use std::path::Path;

use crate::api;
use crate::config::MigrationsConfig;
use crate::constants;
use crate::error::MigrateError;
use crate::model::Space;

/// Create and publish the ledger content type, then write the layout config
/// into the migrations folder. A space that already has it is left alone.
pub async fn init(
    space: &Space,
    migrations_dir: &Path,
    consolidated: bool,
) -> Result<(), MigrateError> {
    let id = constants::LEDGER_CONTENT_TYPE_ID;
    match api::client::content_types::get(space, id).await? {
        Some(_) => {
            log::info!("content type '{}' already exists in {}", id, space.space_id);
        }
        None => {
            let content_type = api::client::content_types::ledger_content_type();
            let created = api::client::content_types::put(space, id, &content_type, None).await?;
            let version = created.sys.version.unwrap_or(1);
            api::client::content_types::publish(space, id, version).await?;
            log::info!("created content type '{}' in {}", id, space.space_id);
        }
    }

    MigrationsConfig::new(consolidated).save(migrations_dir)
}

#[cfg(test)]
mod tests {
    use crate::command;
    use crate::config::MigrationsConfig;
    use crate::error::MigrateError;
    use crate::test;

    #[tokio::test]
    async fn test_init_creates_and_publishes() -> Result<(), MigrateError> {
        test::run_empty_dir_test_async(|dir| async move {
            let mut server = mockito::Server::new_async().await;
            let space = test::space_for_server(&server);
            let path = test::environment_path("/content_types/migration");
            let get = server
                .mock("GET", path.as_str())
                .with_status(404)
                .with_body(r#"{"sys": {"id": "NotFound"}}"#)
                .create_async()
                .await;
            let put = server
                .mock("PUT", path.as_str())
                .match_body(mockito::Matcher::PartialJsonString(
                    r#"{"name": "Migration", "displayField": "contentTypeId"}"#.to_string(),
                ))
                .with_status(201)
                .with_body(r#"{"sys": {"id": "migration", "version": 1}, "fields": []}"#)
                .create_async()
                .await;
            let publish = server
                .mock("PUT", format!("{path}/published").as_str())
                .match_header("x-contentful-version", "1")
                .with_status(200)
                .with_body(r#"{"sys": {"id": "migration", "version": 2}, "fields": []}"#)
                .create_async()
                .await;

            let migrations = dir.join("migrations");
            command::init(&space, &migrations, true).await?;

            get.assert_async().await;
            put.assert_async().await;
            publish.assert_async().await;
            assert!(MigrationsConfig::get(&migrations).consolidated);
            Ok(dir)
        })
        .await
    }

    #[tokio::test]
    async fn test_init_keeps_existing_content_type() -> Result<(), MigrateError> {
        test::run_empty_dir_test_async(|dir| async move {
            let mut server = mockito::Server::new_async().await;
            let space = test::space_for_server(&server);
            let path = test::environment_path("/content_types/migration");
            let _get = server
                .mock("GET", path.as_str())
                .with_status(200)
                .with_body(r#"{"sys": {"id": "migration", "version": 2}, "fields": []}"#)
                .create_async()
                .await;
            let put = server
                .mock("PUT", mockito::Matcher::Any)
                .expect(0)
                .create_async()
                .await;

            command::init(&space, &dir, false).await?;
            put.assert_async().await;
            assert!(MigrationsConfig::config_file(&dir).exists());
            Ok(dir)
        })
        .await
    }
}
