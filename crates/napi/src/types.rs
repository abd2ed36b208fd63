//! NAPI-exposed data structures.

use napi_derive::napi;

/// Options accepted by `transpile` and `transpileBatch`.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct TranspileConfig {
    /// Props type name (defaults to `IconProps`).
    pub interface_name: Option<String>,
    /// Render paths as `motion.path`. Defaults to false.
    pub use_animation: Option<bool>,
    /// Declare the props interface inside the module. Defaults to false.
    pub declare_interface: Option<bool>,
}

/// Tokenizer warning returned from Rust
#[napi(object)]
#[derive(Debug, Clone)]
pub struct WarningEntry {
    /// Warning type (e.g., "unterminated_tag")
    pub warning_type: String,
    /// Line number where the skipped tag starts
    pub line: u32,
    /// Column number where the skipped tag starts
    pub column: u32,
    /// Human-readable message
    pub message: String,
}

/// Result returned by `transpile`.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct TranspileResult {
    /// Generated TSX module text.
    pub code: String,
    /// Number of `<path>` elements rendered.
    pub fragment_count: u32,
    /// Skipped malformed tags.
    pub warnings: Vec<WarningEntry>,
}
