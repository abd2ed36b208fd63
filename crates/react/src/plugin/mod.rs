//! Plugin glue: selection status, UI messages, and the sequential export flow.
//!
//! - `messages`: payloads exchanged with the plugin UI and host node types.
//! - `session`: selection classification, preview, and batch export over a host.

/// UI message payloads and host node types.
pub mod messages;
/// Selection preview and export flow.
pub mod session;

pub use messages::{ExportOptions, NodeKind, SceneNode, UiMessage};
pub use session::{
    DEFAULT_COMPONENT_NAME, DOWNLOAD_FOLDER, NO_SELECTION_NOTICE, NodeExport, PluginHost,
    SelectionStatus, decode_markup, export_selection, preview_selection, resolve_identifier,
};
