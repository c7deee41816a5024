pub mod content_type;
pub mod migration;
pub mod scope;
pub mod space;

pub use crate::model::content_type::{
    ContentTypeSchema, EditorInterfaceEntry, Field, IntrospectedContentType,
};
pub use crate::model::migration::{Direction, MigrationLedger, MigrationRecord, MigrationScript};
pub use crate::model::scope::{Scope, ScopeSelection};
pub use crate::model::space::Space;
