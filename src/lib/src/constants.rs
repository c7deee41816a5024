// Version
pub const CTF_MIGRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Filenames and dirs
pub const MIGRATIONS_DIR: &str = "migrations";
pub const MIGRATIONS_CONFIG_FILENAME: &str = "config.json";
pub const CONFIG_DIR: &str = ".config";
pub const CTF_MIGRATE: &str = "ctfmigrate";
pub const DEFAULT_SCRIPT_EXTENSION: &str = "js";

// Remote platform
pub const DEFAULT_HOST: &str = "https://api.contentful.com";
pub const DEFAULT_ENVIRONMENT_ID: &str = "master";
pub const CONTENTFUL_CONTENT_TYPE: &str = "application/vnd.contentful.management.v1+json";
pub const CONTENT_TYPE_HEADER: &str = "X-Contentful-Content-Type";
pub const VERSION_HEADER: &str = "X-Contentful-Version";
pub const ACCESS_TOKEN_ENV: &str = "CONTENTFUL_MANAGEMENT_ACCESS_TOKEN";
pub const SPACE_ID_ENV: &str = "CONTENTFUL_SPACE_ID";
pub const ENVIRONMENT_ID_ENV: &str = "CONTENTFUL_ENV_ID";

// Ledger bookkeeping content type
pub const LEDGER_CONTENT_TYPE_ID: &str = "migration";
pub const LEDGER_CONTENT_TYPE_NAME: &str = "Migration";
pub const LEDGER_SCOPE_FIELD: &str = "contentTypeId";
pub const LEDGER_STATE_FIELD: &str = "state";
/// Ledger entry id used when every script shares one scope.
pub const CONSOLIDATED_SCOPE_KEY: &str = "consolidated";

// Paging and concurrency
pub const DEFAULT_PAGE_LIMIT: usize = 1000;
pub const DEFAULT_NUM_WORKERS: usize = 5;
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

// Formats
pub const SCRIPT_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";
pub const LIST_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Engine environment passed to external runners
pub const ENGINE_SPACE_ID_ENV: &str = "CTF_SPACE_ID";
pub const ENGINE_ENVIRONMENT_ID_ENV: &str = "CTF_ENVIRONMENT_ID";
pub const ENGINE_ACCESS_TOKEN_ENV: &str = "CTF_MANAGEMENT_TOKEN";
pub const ENGINE_DIRECTION_ENV: &str = "CTF_MIGRATION_DIRECTION";
pub const ENGINE_DRY_RUN_ENV: &str = "CTF_DRY_RUN";
pub const ENGINE_SCOPE_ENV: &str = "CTF_SCOPE";
