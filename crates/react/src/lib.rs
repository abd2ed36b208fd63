#![deny(missing_docs)]
//! iconcraft React engine: render modes, component codegen, transpile pipeline, and plugin glue.

/// Component module code generation.
pub mod codegen;
/// Static vs. animatable path rendering.
pub mod mode;
/// Plugin session layer (selection status, UI messages, export flow).
pub mod plugin;
/// SVG to component pipeline.
pub mod transpile;

pub use codegen::{ComponentSpec, generate_component_module, render_fragment};
pub use mode::{MOTION_IMPORT, RenderMode};
pub use plugin::{
    ExportOptions, NodeExport, NodeKind, PluginHost, SceneNode, SelectionStatus, UiMessage,
    export_selection, preview_selection,
};
pub use transpile::{
    DEFAULT_INTERFACE_NAME, INLINE_PROPS_TYPE, TranspileOptions, Transpiled,
    build_component_spec, transpile, transpile_with_diagnostics,
};
