// Bootstrap from a mocked content model, then load what it wrote

use std::sync::Arc;

use mockito::Matcher;
use regex::Regex;
use serde_json::json;

use libctfmigrate::command;
use libctfmigrate::config::MigrationsConfig;
use libctfmigrate::error::MigrateError;
use libctfmigrate::model::ScopeSelection;
use libctfmigrate::opts::{BootstrapOpts, LoadOpts};
use libctfmigrate::test::{self, RecordingEngine};

const ENVIRONMENT: &str = "/spaces/space-id/environments/master";

async fn mock_horse_model(server: &mut mockito::ServerGuard) -> (mockito::Mock, mockito::Mock) {
    let list = test::mock_content_types(
        server,
        &[
            json!({
                "sys": { "id": "horse", "version": 4 },
                "name": "Horse",
                "displayField": "name",
                "fields": [{ "id": "name", "name": "Name", "type": "Symbol", "localized": false }]
            }),
            json!({ "sys": { "id": "migration" }, "name": "Migration", "fields": [] }),
        ],
    )
    .await;
    let editor = server
        .mock(
            "GET",
            format!("{ENVIRONMENT}/content_types/horse/editor_interface").as_str(),
        )
        .with_status(200)
        .with_body(r#"{"controls": [{"fieldId": "name", "widgetId": "singleLine"}]}"#)
        .create_async()
        .await;
    (list, editor)
}

#[tokio::test]
async fn test_bootstrap_writes_one_script_per_content_type() -> Result<(), MigrateError> {
    test::run_empty_dir_test_async(|dir| async move {
        let migrations_dir = dir.join("migrations");
        let mut server = mockito::Server::new_async().await;
        let (_list, editor) = mock_horse_model(&mut server).await;

        let space = test::space_for_server(&server);
        let opts = BootstrapOpts::new(&migrations_dir, vec![], false);
        let created = command::bootstrap(&space, &opts).await?;

        assert_eq!(created.len(), 1);
        assert_eq!(created[0].scope_id, "horse");
        let pattern = Regex::new(r"^\d{14}-create-horse\.js$")?;
        assert!(pattern.is_match(&created[0].file_name));

        let source = std::fs::read_to_string(migrations_dir.join("horse").join(&created[0].file_name))?;
        assert!(source.starts_with("module.exports.description = 'Create content model for Horse';\n"));
        assert!(source.contains("const horse = migration.createContentType('horse')"));
        assert!(source.contains("horse.createField('name')"));
        assert!(source.contains("horse.changeEditorInterface('name', 'singleLine');"));
        assert!(source.ends_with("module.exports.down = migration => migration.deleteContentType('horse');\n"));
        editor.assert_async().await;

        Ok(dir)
    })
    .await
}

#[tokio::test]
async fn test_bootstrap_with_write_state_marks_scripts_applied() -> Result<(), MigrateError> {
    test::run_empty_dir_test_async(|dir| async move {
        let migrations_dir = dir.join("migrations");
        test::write_txt_file_to_path(
            {
                std::fs::create_dir_all(migrations_dir.join("horse"))?;
                migrations_dir.join("horse").join("20170101000000-old-horse.js")
            },
            "module.exports.description = 'stale';",
        )?;

        let mut server = mockito::Server::new_async().await;
        let (_list, _editor) = mock_horse_model(&mut server).await;
        let _locales = test::mock_default_locale(&mut server, "en-US").await;
        let _find = server
            .mock("GET", format!("{ENVIRONMENT}/entries").as_str())
            .match_query(Matcher::UrlEncoded(
                "fields.contentTypeId".into(),
                "horse".into(),
            ))
            .with_status(200)
            .with_body(test::ledger_entries_body(&[]))
            .create_async()
            .await;
        let create = server
            .mock("PUT", format!("{ENVIRONMENT}/entries/horse").as_str())
            .match_body(Matcher::PartialJsonString(
                r#"{"fields": {"contentTypeId": {"en-US": "horse"}}}"#.to_string(),
            ))
            .with_status(201)
            .with_body(test::ledger_entry_json("horse", "en-US", 1, &[]).to_string())
            .create_async()
            .await;

        let space = test::space_for_server(&server);
        let opts = BootstrapOpts::new(&migrations_dir, vec![String::from("horse")], true);
        let created = command::bootstrap(&space, &opts).await?;
        assert_eq!(created.len(), 1);
        assert!(!migrations_dir
            .join("horse")
            .join("20170101000000-old-horse.js")
            .exists());
        create.assert_async().await;

        // The fresh script is already applied, so up has nothing to do
        let title = created[0].file_name.as_str();
        let _entries = test::mock_ledger_entries(
            &mut server,
            &[test::ledger_entry_json("horse", "en-US", 1, &[title])],
        )
        .await;
        let engine = Arc::new(RecordingEngine::default());
        let load_opts = LoadOpts::from_args(&migrations_dir, vec![String::from("horse")], false);
        let ran = command::up(&space, &load_opts, engine.clone(), None).await?;
        assert_eq!(ran, 0);
        assert!(engine.runs().is_empty());

        let listed = command::list(&space, &load_opts).await?;
        assert_eq!(listed.len(), 1);
        let records = match &listed[0].1 {
            Ok(records) => records.clone(),
            Err(err) => panic!("list failed: {err}"),
        };
        assert_eq!(records.len(), 1);
        assert!(records[0].is_applied());
        assert_eq!(records[0].title, title);

        Ok(dir)
    })
    .await
}

#[tokio::test]
async fn test_bootstrap_unknown_content_type_is_schema_fetch() -> Result<(), MigrateError> {
    test::run_empty_dir_test_async(|dir| async move {
        let mut server = mockito::Server::new_async().await;
        let (_list, _editor) = mock_horse_model(&mut server).await;

        let space = test::space_for_server(&server);
        let opts = BootstrapOpts::new(dir.join("migrations"), vec![String::from("unicorn")], false);
        let result = command::bootstrap(&space, &opts).await;
        assert!(matches!(result, Err(MigrateError::SchemaFetch(_))));

        Ok(dir)
    })
    .await
}

#[tokio::test]
async fn test_bootstrap_reports_scope_it_could_not_write() -> Result<(), MigrateError> {
    test::run_empty_dir_test_async(|dir| async move {
        let migrations_dir = dir.join("migrations");
        std::fs::create_dir_all(&migrations_dir)?;
        // A file where the pegasus folder should go
        test::write_txt_file_to_path(migrations_dir.join("pegasus"), "not a folder")?;

        let mut server = mockito::Server::new_async().await;
        let _list = test::mock_content_types(
            &mut server,
            &[
                json!({ "sys": { "id": "horse" }, "name": "Horse", "fields": [] }),
                json!({ "sys": { "id": "pegasus" }, "name": "Pegasus", "fields": [] }),
            ],
        )
        .await;
        let _editors = server
            .mock(
                "GET",
                Matcher::Regex(format!("^{ENVIRONMENT}/content_types/[a-z]+/editor_interface$")),
            )
            .with_status(200)
            .with_body(r#"{"controls": []}"#)
            .create_async()
            .await;

        let space = test::space_for_server(&server);
        let opts = BootstrapOpts::new(&migrations_dir, vec![], false);
        let result = command::bootstrap(&space, &opts).await;

        match result {
            Err(MigrateError::ScopeFailures(err)) => {
                assert!(err.as_str().contains("pegasus"));
                assert!(!err.as_str().contains("horse"));
            }
            other => panic!("expected scope failures, got {other:?}"),
        }
        let horse_scripts = std::fs::read_dir(migrations_dir.join("horse"))?.count();
        assert_eq!(horse_scripts, 1);

        Ok(dir)
    })
    .await
}

#[tokio::test]
async fn test_consolidated_bootstrap_then_up() -> Result<(), MigrateError> {
    test::run_empty_dir_test_async(|dir| async move {
        let migrations_dir = dir.join("migrations");
        std::fs::create_dir_all(&migrations_dir)?;
        MigrationsConfig::new(true).save(&migrations_dir)?;
        test::write_txt_file_to_path(
            migrations_dir.join("20170101000000-old.js"),
            "module.exports.description = 'stale';",
        )?;

        let mut server = mockito::Server::new_async().await;
        let (_list, _editor) = mock_horse_model(&mut server).await;
        let _locales = test::mock_default_locale(&mut server, "en-US").await;
        let find_empty = server
            .mock("GET", format!("{ENVIRONMENT}/entries").as_str())
            .match_query(Matcher::UrlEncoded(
                "fields.contentTypeId".into(),
                "consolidated".into(),
            ))
            .with_status(200)
            .with_body(test::ledger_entries_body(&[]))
            .create_async()
            .await;
        let create = server
            .mock("PUT", format!("{ENVIRONMENT}/entries/consolidated").as_str())
            .match_header("x-contentful-content-type", "migration")
            .match_body(Matcher::PartialJsonString(
                r#"{"fields": {"contentTypeId": {"en-US": "consolidated"}}}"#.to_string(),
            ))
            .with_status(201)
            .with_body(test::ledger_entry_json("consolidated", "en-US", 1, &[]).to_string())
            .create_async()
            .await;

        let space = test::space_for_server(&server);
        let opts = BootstrapOpts::new(&migrations_dir, vec![], true);
        assert!(opts.consolidated);
        let created = command::bootstrap(&space, &opts).await?;
        assert_eq!(created.len(), 1);
        let bootstrapped = created[0].file_name.clone();

        // Scripts sit in the root, the layout config survives the wipe
        assert!(migrations_dir.join(&bootstrapped).is_file());
        assert!(!migrations_dir.join("20170101000000-old.js").exists());
        assert!(!migrations_dir.join("horse").exists());
        assert!(MigrationsConfig::get(&migrations_dir).consolidated);
        create.assert_async().await;
        find_empty.remove_async().await;
        create.remove_async().await;

        // A hand written script on top of the bootstrapped one
        test::write_txt_file_to_path(
            migrations_dir.join("29990101000000-add-tail.js"),
            "module.exports.description = 'Add tail';",
        )?;
        let applied =
            test::ledger_entry_json("consolidated", "en-US", 1, &[bootstrapped.as_str()]);
        let _entries = test::mock_ledger_entries(&mut server, &[applied.clone()]).await;
        let _find = server
            .mock("GET", format!("{ENVIRONMENT}/entries").as_str())
            .match_query(Matcher::UrlEncoded(
                "fields.contentTypeId".into(),
                "consolidated".into(),
            ))
            .with_status(200)
            .with_body(test::ledger_entries_body(&[applied]))
            .create_async()
            .await;
        let update = server
            .mock("PUT", format!("{ENVIRONMENT}/entries/consolidated").as_str())
            .match_header("x-contentful-version", "1")
            .match_body(Matcher::PartialJsonString(
                r#"{"fields": {"state": {"en-US": {"lastRun": "29990101000000-add-tail.js"}}}}"#
                    .to_string(),
            ))
            .with_status(200)
            .with_body(test::ledger_entry_json("consolidated", "en-US", 2, &[]).to_string())
            .create_async()
            .await;

        let load_opts = LoadOpts::from_args(&migrations_dir, vec![], false);
        assert_eq!(load_opts.selection, ScopeSelection::Consolidated);
        let engine = Arc::new(RecordingEngine::default());
        let ran = command::up(&space, &load_opts, engine.clone(), None).await?;

        assert_eq!(ran, 1);
        assert_eq!(engine.titles(), vec!["29990101000000-add-tail.js"]);
        assert_eq!(engine.runs()[0].scope.key(), "consolidated");
        update.assert_async().await;

        Ok(dir)
    })
    .await
}
