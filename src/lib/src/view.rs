//! Wire shapes of the management API resources we read and write
//!

pub mod collection;
pub mod content_type;
pub mod editor_interface;
pub mod entry;
pub mod error_response;
pub mod locale;
pub mod sys;

pub use crate::view::collection::Collection;
pub use crate::view::content_type::{ContentTypeNew, ContentTypeResponse, FieldResponse};
pub use crate::view::editor_interface::{ControlResponse, EditorInterfaceResponse};
pub use crate::view::entry::{LedgerEntryFields, LedgerEntryNew, LedgerEntryResponse};
pub use crate::view::error_response::ErrorResponse;
pub use crate::view::locale::LocaleResponse;
pub use crate::view::sys::Sys;
