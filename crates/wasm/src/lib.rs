use iconcraft_core::TranspileWarning;
use iconcraft_react::plugin::{
    ExportOptions, NodeExport, NodeKind, SceneNode, SelectionStatus, UiMessage,
};
use iconcraft_react::{DEFAULT_INTERFACE_NAME, RenderMode, TranspileOptions};
use serde::de::IntoDeserializer;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

// ============================================================================
// Transpile Config
// ============================================================================

/// Configuration accepted by the WASM transpile function.
/// Mirrors the NAPI `TranspileConfig` for parity.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WasmTranspileConfig {
    /// Props type name (defaults to `IconProps`).
    #[serde(default, alias = "interfaceName")]
    pub interface_name: Option<String>,
    /// Render paths as `motion.path`. Defaults to false.
    #[serde(default, alias = "useAnimation", alias = "useFramerMotion")]
    pub use_animation: Option<bool>,
    /// Declare the props interface inside the module. Defaults to false.
    #[serde(default, alias = "declareInterface")]
    pub declare_interface: Option<bool>,
}

fn parse_config(config: JsValue) -> Result<WasmTranspileConfig, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(WasmTranspileConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))
}

fn build_transpile_options(cfg: &WasmTranspileConfig) -> TranspileOptions {
    let interface_name = cfg
        .interface_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_INTERFACE_NAME);
    TranspileOptions {
        declare_interface: cfg.declare_interface.unwrap_or(false),
        ..TranspileOptions::new(
            interface_name,
            RenderMode::from_use_animation(cfg.use_animation.unwrap_or(false)),
        )
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

// ============================================================================
// Transpile API
// ============================================================================

/// Result of converting one SVG export into a component module.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranspileResult {
    /// Generated TSX module code.
    pub code: String,
    /// Number of `<path>` elements rendered.
    pub fragment_count: usize,
    /// Malformed tags that were skipped.
    pub warnings: Vec<TranspileWarning>,
}

/// Turns a design-tool node name into a component identifier.
#[wasm_bindgen]
pub fn sanitize_component_name(name: &str) -> String {
    iconcraft_core::sanitize_component_name(name)
}

/// Converts exported SVG markup into a recolorable React component module.
///
/// # Arguments
///
/// * `markup` - SVG text exported by the design tool
/// * `identifier` - Component name (already sanitized)
/// * `config` - Optional `{ interfaceName, useAnimation, declareInterface }`
///
/// # Returns
///
/// Returns `{ code, fragmentCount, warnings }`. Malformed `<path` tags are
/// reported in `warnings` rather than failing the call.
#[wasm_bindgen]
pub fn transpile(markup: &str, identifier: &str, config: JsValue) -> Result<JsValue, JsError> {
    let cfg = parse_config(config)?;
    let transpiled =
        iconcraft_react::transpile_with_diagnostics(markup, identifier, &build_transpile_options(&cfg));

    to_js(&TranspileResult {
        code: transpiled.code,
        fragment_count: transpiled.fragment_count,
        warnings: transpiled.diagnostics.warnings,
    })
}

// ============================================================================
// Plugin Session API
// ============================================================================

/// Messages and notice for one exported node.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeExportResult {
    /// Component name.
    pub identifier: String,
    /// `download-file` followed by `preview-code`.
    pub messages: Vec<UiMessage>,
    /// Notification text for the user.
    pub notice: String,
}

/// Classifies the current selection.
///
/// `nodes` is an array of `{ name, type }` objects with design-tool node
/// types (`"FRAME"`, `"COMPONENT"`, `"INSTANCE"`, anything else).
///
/// # Example (JavaScript)
///
/// ```javascript
/// import { selection_status } from './iconcraft_wasm';
///
/// const status = selection_status(figma.currentPage.selection.map(({ name, type }) => ({ name, type })));
/// // { status: "single", identifier: "ArrowRight" }
/// ```
#[wasm_bindgen]
pub fn selection_status(nodes: JsValue) -> Result<JsValue, JsError> {
    let nodes: Vec<SceneNode> = serde_wasm_bindgen::from_value(nodes)
        .map_err(|e| JsError::new(&format!("Invalid selection: {}", e)))?;
    to_js(&SelectionStatus::from_selection(&nodes))
}

/// Whether a design-tool node type (`"FRAME"`, `"TEXT"`, ...) can be exported.
#[wasm_bindgen]
pub fn is_exportable(node_type: &str) -> bool {
    let kind: Result<NodeKind, serde::de::value::Error> =
        NodeKind::deserialize(node_type.into_deserializer());
    kind.is_ok_and(NodeKind::is_exportable)
}

/// Transpiles the exported bytes of one node for download.
///
/// `node` is a `{ name, type }` object. The host awaits each node's SVG
/// export itself and calls this once per node, in selection order. Returns
/// `null` for node types that cannot be exported.
///
/// # Example (JavaScript)
///
/// ```javascript
/// import { export_node, is_exportable } from './iconcraft_wasm';
///
/// for (const node of figma.currentPage.selection) {
///   if (!is_exportable(node.type)) continue;
///   const svg = await node.exportAsync({ format: 'SVG' });
///   const { messages, notice } = export_node({ name: node.name, type: node.type }, svg, options);
///   messages.forEach((message) => figma.ui.postMessage(message));
///   figma.notify(notice);
/// }
/// ```
#[wasm_bindgen]
pub fn export_node(node: JsValue, svg: &[u8], options: JsValue) -> Result<JsValue, JsError> {
    let node: SceneNode = serde_wasm_bindgen::from_value(node)
        .map_err(|e| JsError::new(&format!("Invalid node: {}", e)))?;
    if !node.kind.is_exportable() {
        return Ok(JsValue::NULL);
    }

    let options: ExportOptions = if options.is_undefined() || options.is_null() {
        ExportOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))?
    };

    let export = NodeExport::new(&node.name, svg, &options);
    to_js(&NodeExportResult {
        messages: export.messages().to_vec(),
        notice: export.notice(),
        identifier: export.identifier,
    })
}
