//! Selection handling and export flow on top of a [`PluginHost`].
//!
//! Nodes are processed one at a time in selection order. The only point that
//! waits on the outside world is [`PluginHost::export_svg`]; there is no
//! cancellation or timeout.

use super::messages::{ExportOptions, SceneNode, UiMessage};
use crate::transpile::{TranspileOptions, transpile};
use iconcraft_core::{IconCraftError, is_valid_identifier, sanitize_component_name};
use serde::Serialize;
use std::borrow::Cow;

/// Name shown when nothing usable is selected.
pub const DEFAULT_COMPONENT_NAME: &str = "IconComponent";

/// Folder hint attached to download messages.
pub const DOWNLOAD_FOLDER: &str = "Downloads";

/// Notice shown when an export is requested with an empty selection.
pub const NO_SELECTION_NOTICE: &str = "Please select at least one frame.";

/// The design-tool side of the plugin.
pub trait PluginHost {
    /// Exports `node` as SVG bytes.
    fn export_svg(&mut self, node: &SceneNode) -> Result<Vec<u8>, IconCraftError>;

    /// Posts a message to the plugin UI.
    fn post_message(&mut self, message: UiMessage);

    /// Shows a transient notification to the user.
    fn notify(&mut self, message: &str);
}

/// What the current selection means for the plugin UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SelectionStatus {
    /// Nothing selected, or a single node that cannot be exported.
    Empty,
    /// One frame, component or instance.
    Single {
        /// Sanitized component name
        identifier: String,
    },
    /// More than one node.
    Multiple,
}

impl SelectionStatus {
    /// Classifies a selection.
    pub fn from_selection(selection: &[SceneNode]) -> Self {
        match selection {
            [] => Self::Empty,
            [node] if node.kind.is_exportable() => Self::Single {
                identifier: resolve_identifier(&node.name, DEFAULT_COMPONENT_NAME),
            },
            [_] => Self::Empty,
            _ => Self::Multiple,
        }
    }
}

/// Decodes exported SVG bytes. Invalid UTF-8 is replaced, never rejected.
pub fn decode_markup(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

/// Sanitizes `node_name`, falling back to `fallback` and then to
/// [`DEFAULT_COMPONENT_NAME`] when the name sanitizes to nothing.
pub fn resolve_identifier(node_name: &str, fallback: &str) -> String {
    let identifier = [node_name, fallback, DEFAULT_COMPONENT_NAME]
        .into_iter()
        .map(sanitize_component_name)
        .find(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_COMPONENT_NAME.to_string());
    if !is_valid_identifier(&identifier) {
        log::warn!(
            "component name {:?} (from {:?}) is not a valid JavaScript identifier",
            identifier,
            node_name
        );
    }
    identifier
}

/// Generated module for one exported node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeExport {
    /// Component name.
    pub identifier: String,
    /// Module source.
    pub code: String,
}

impl NodeExport {
    /// Transpiles the exported markup of a node named `node_name`.
    pub fn new(node_name: &str, svg: &[u8], options: &ExportOptions) -> Self {
        let identifier = resolve_identifier(node_name, &options.component_name);
        let code = transpile(&decode_markup(svg), &identifier, &options.transpile_options());
        Self { identifier, code }
    }

    /// `<identifier>.tsx`
    pub fn file_name(&self) -> String {
        format!("{}.tsx", self.identifier)
    }

    /// Download message followed by the preview message.
    pub fn messages(&self) -> [UiMessage; 2] {
        [
            UiMessage::DownloadFile {
                file_name: self.file_name(),
                content: self.code.clone(),
                folder_name: DOWNLOAD_FOLDER.to_string(),
            },
            UiMessage::PreviewCode {
                content: self.code.clone(),
            },
        ]
    }

    /// Notification shown once the file is ready.
    pub fn notice(&self) -> String {
        format!("Prepared {} for download.", self.file_name())
    }
}

/// Posts the status messages for a selection change.
///
/// A single exportable node is exported and previewed with
/// [`TranspileOptions::preview`].
pub fn preview_selection<H>(
    selection: &[SceneNode],
    host: &mut H,
) -> Result<SelectionStatus, IconCraftError>
where
    H: PluginHost + ?Sized,
{
    let status = SelectionStatus::from_selection(selection);
    match (&status, selection.first()) {
        (SelectionStatus::Single { identifier }, Some(node)) => {
            host.post_message(UiMessage::SetFrameName {
                frame_name: identifier.clone(),
            });
            let svg = host.export_svg(node)?;
            let content = transpile(&decode_markup(&svg), identifier, &TranspileOptions::preview());
            host.post_message(UiMessage::PreviewCode { content });
        }
        (SelectionStatus::Multiple, _) => {
            host.post_message(UiMessage::MultipleFramesSelected);
        }
        _ => {
            host.post_message(UiMessage::SetFrameName {
                frame_name: DEFAULT_COMPONENT_NAME.to_string(),
            });
            host.post_message(UiMessage::PreviewCode {
                content: String::new(),
            });
        }
    }
    Ok(status)
}

/// Exports every frame, component and instance in `selection`, in order.
///
/// Returns the number of files prepared. Unsupported nodes are skipped. The
/// first export failure stops the batch; messages for earlier nodes have
/// already been posted by then.
pub fn export_selection<H>(
    selection: &[SceneNode],
    options: &ExportOptions,
    host: &mut H,
) -> Result<usize, IconCraftError>
where
    H: PluginHost + ?Sized,
{
    if selection.is_empty() {
        host.notify(NO_SELECTION_NOTICE);
        return Ok(0);
    }

    let mut prepared = 0;
    for node in selection {
        if !node.kind.is_exportable() {
            log::debug!("skipping {:?} ({:?})", node.name, node.kind);
            continue;
        }

        let svg = host.export_svg(node)?;
        let export = NodeExport::new(&node.name, &svg, options);
        for message in export.messages() {
            host.post_message(message);
        }
        host.notify(&export.notice());
        prepared += 1;
    }
    Ok(prepared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::messages::NodeKind;

    #[test]
    fn status_for_each_selection_shape() {
        assert_eq!(SelectionStatus::from_selection(&[]), SelectionStatus::Empty);
        assert_eq!(
            SelectionStatus::from_selection(&[SceneNode::new("As=Arrow Up", NodeKind::Component)]),
            SelectionStatus::Single {
                identifier: "ArrowUp".to_string()
            }
        );
        assert_eq!(
            SelectionStatus::from_selection(&[SceneNode::new("Label", NodeKind::Unsupported)]),
            SelectionStatus::Empty
        );
        assert_eq!(
            SelectionStatus::from_selection(&[
                SceneNode::new("A", NodeKind::Frame),
                SceneNode::new("B", NodeKind::Frame),
            ]),
            SelectionStatus::Multiple
        );
    }

    #[test]
    fn status_serializes_with_tag() {
        let status = SelectionStatus::Single {
            identifier: "Star".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&status).unwrap(),
            r#"{"status":"single","identifier":"Star"}"#
        );
    }

    #[test]
    fn identifier_fallbacks() {
        assert_eq!(resolve_identifier("Icon Name", "Other"), "IconName");
        assert_eq!(resolve_identifier("As= ", "My Icon"), "MyIcon");
        assert_eq!(resolve_identifier("  ", ""), DEFAULT_COMPONENT_NAME);
    }

    #[test]
    fn lossy_decoding() {
        let bytes = b"<path d=\"M0 0\"/>\xff";
        assert_eq!(decode_markup(bytes), "<path d=\"M0 0\"/>\u{FFFD}");
    }

    #[test]
    fn node_export_messages() {
        let export = NodeExport::new(
            "As=Star",
            br#"<svg><path d="M0 0" fill="red"/></svg>"#,
            &ExportOptions::default(),
        );
        assert_eq!(export.identifier, "Star");
        assert_eq!(export.file_name(), "Star.tsx");
        assert_eq!(export.notice(), "Prepared Star.tsx for download.");

        let [download, preview] = export.messages();
        match download {
            UiMessage::DownloadFile {
                file_name,
                content,
                folder_name,
            } => {
                assert_eq!(file_name, "Star.tsx");
                assert_eq!(folder_name, DOWNLOAD_FOLDER);
                assert!(content.contains(r#"<path d="M0 0" fill={color} {...props} />"#));
            }
            other => panic!("unexpected message: {:?}", other),
        }
        assert_eq!(
            preview,
            UiMessage::PreviewCode {
                content: export.code.clone()
            }
        );
    }
}
