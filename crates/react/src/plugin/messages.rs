//! Payloads exchanged with the plugin UI.

use crate::mode::RenderMode;
use crate::transpile::{DEFAULT_INTERFACE_NAME, TranspileOptions};
use iconcraft_core::IconCraftError;
use serde::{Deserialize, Serialize};

/// Design-tool node types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    /// Frame node.
    Frame,
    /// Main component.
    Component,
    /// Component instance.
    Instance,
    /// Any other node type (text, vector, group, ...).
    #[serde(other)]
    Unsupported,
}

impl NodeKind {
    /// Whether nodes of this kind can be exported as icons.
    pub const fn is_exportable(self) -> bool {
        !matches!(self, Self::Unsupported)
    }
}

/// A selected node as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneNode {
    /// Node name as typed by the designer.
    pub name: String,
    /// Node type.
    #[serde(rename = "type")]
    pub kind: NodeKind,
}

impl SceneNode {
    /// Creates a node description.
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Messages posted from the plugin sandbox to its UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiMessage {
    /// Component name derived from the current selection.
    #[serde(rename_all = "camelCase")]
    SetFrameName {
        /// Sanitized identifier
        frame_name: String,
    },
    /// Source shown in the preview pane.
    PreviewCode {
        /// Module source (empty when nothing is selected)
        content: String,
    },
    /// File the UI should offer for download.
    #[serde(rename_all = "camelCase")]
    DownloadFile {
        /// `<identifier>.tsx`
        file_name: String,
        /// Module source
        content: String,
        /// Target folder hint
        folder_name: String,
    },
    /// More than one node is selected.
    MultipleFramesSelected,
}

impl UiMessage {
    /// Serializes the message as the JSON object the UI expects.
    pub fn to_json(&self) -> Result<String, IconCraftError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Export options sent by the UI with an `export-icons` request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportOptions {
    /// Render paths with framer-motion.
    #[serde(alias = "useFramerMotion")]
    pub use_animation: bool,
    /// Props type name; blank means [`DEFAULT_INTERFACE_NAME`].
    pub interface_name: String,
    /// Name typed in the UI; only used when a node name sanitizes to nothing.
    pub component_name: String,
}

impl ExportOptions {
    /// Transpile options for this request.
    pub fn transpile_options(&self) -> TranspileOptions {
        let interface_name = self.interface_name.trim();
        let interface_name = if interface_name.is_empty() {
            DEFAULT_INTERFACE_NAME
        } else {
            interface_name
        };
        TranspileOptions::new(
            interface_name,
            RenderMode::from_use_animation(self.use_animation),
        )
    }
}
