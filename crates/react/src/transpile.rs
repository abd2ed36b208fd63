//! SVG markup to component module pipeline.

use crate::codegen::{ComponentSpec, generate_component_module};
use crate::mode::RenderMode;
use iconcraft_core::{FragmentSet, TranspileDiagnostics, normalize_markup};
use serde::{Deserialize, Serialize};

/// Props type name used when the caller does not supply one.
pub const DEFAULT_INTERFACE_NAME: &str = "IconProps";

/// Inline props type used by the selection preview.
pub const INLINE_PROPS_TYPE: &str = "{ color: string }";

/// Options controlling the generated module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranspileOptions {
    /// Props type for the component (`React.FC<interface_name>`).
    pub interface_name: String,
    /// Element used for each path.
    pub render_mode: RenderMode,
    /// Declare the props interface inside the module. Off by default; the
    /// consumer normally provides the type.
    pub declare_interface: bool,
}

impl Default for TranspileOptions {
    fn default() -> Self {
        Self {
            interface_name: DEFAULT_INTERFACE_NAME.to_string(),
            render_mode: RenderMode::Static,
            declare_interface: false,
        }
    }
}

impl TranspileOptions {
    /// Options with a named props interface and the given mode.
    pub fn new(interface_name: impl Into<String>, render_mode: RenderMode) -> Self {
        Self {
            interface_name: interface_name.into(),
            render_mode,
            ..Self::default()
        }
    }

    /// Options used for the live selection preview: static paths typed with
    /// an inline `{ color: string }`.
    pub fn preview() -> Self {
        Self {
            interface_name: INLINE_PROPS_TYPE.to_string(),
            render_mode: RenderMode::Static,
            declare_interface: false,
        }
    }
}

/// Generated module plus what the tokenizer reported along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transpiled {
    /// Component module source text.
    pub code: String,
    /// Number of path elements rendered.
    pub fragment_count: usize,
    /// Skipped malformed tags.
    pub diagnostics: TranspileDiagnostics,
}

/// Builds the component spec for `markup`, keeping the tokenizer warnings.
pub fn build_component_spec(
    markup: &str,
    identifier: &str,
    options: &TranspileOptions,
) -> (ComponentSpec, TranspileDiagnostics) {
    let FragmentSet {
        fragments,
        diagnostics,
    } = normalize_markup(markup);
    let spec = ComponentSpec {
        identifier: identifier.to_string(),
        interface_name: options.interface_name.clone(),
        render_mode: options.render_mode,
        declare_interface: options.declare_interface,
        fragments,
    };
    (spec, diagnostics)
}

/// Converts SVG markup into a component module, with diagnostics.
pub fn transpile_with_diagnostics(
    markup: &str,
    identifier: &str,
    options: &TranspileOptions,
) -> Transpiled {
    let (spec, diagnostics) = build_component_spec(markup, identifier, options);
    log::debug!(
        "transpiling {} with {} path(s) in {:?} mode",
        identifier,
        spec.fragments.len(),
        options.render_mode
    );
    Transpiled {
        code: generate_component_module(&spec),
        fragment_count: spec.fragments.len(),
        diagnostics,
    }
}

/// Converts SVG markup into a component module.
///
/// Never fails: markup without `<path>` elements yields a component with an
/// empty group.
///
/// # Examples
///
/// ```
/// use iconcraft_react::{TranspileOptions, transpile};
///
/// let code = transpile(
///     r##"<path d="M0 0L1 1" fill="#000000" stroke-width="2"/>"##,
///     "Star",
///     &TranspileOptions::default(),
/// );
/// assert!(code.contains("export const Star: React.FC<IconProps> = ({ color, ...props }) => ("));
/// assert!(code.contains(r#"<path d="M0 0L1 1" fill={color} strokeWidth="2" {...props} />"#));
/// ```
pub fn transpile(markup: &str, identifier: &str, options: &TranspileOptions) -> String {
    transpile_with_diagnostics(markup, identifier, options).code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_deserialize_with_defaults() {
        let options: TranspileOptions =
            serde_json::from_str(r#"{"renderMode":"animatable"}"#).unwrap();
        assert_eq!(options.interface_name, DEFAULT_INTERFACE_NAME);
        assert_eq!(options.render_mode, RenderMode::Animatable);
        assert!(!options.declare_interface);
    }

    #[test]
    fn default_module_has_no_interface_block() {
        let code = transpile(r#"<path d="M0 0"/>"#, "Star", &TranspileOptions::default());
        assert!(code.starts_with("import React from \"react\";\n\nexport const Star: React.FC<IconProps>"));
        assert!(!code.contains("interface"));
    }

    #[test]
    fn transpile_is_deterministic() {
        let markup = r##"<svg><path d="M0 0" fill="#123456"/><path d="M1 1" stroke="red"/></svg>"##;
        let options = TranspileOptions::new("GlyphProps", RenderMode::Animatable);
        assert_eq!(
            transpile(markup, "Glyph", &options),
            transpile(markup, "Glyph", &options)
        );
    }

    #[test]
    fn diagnostics_are_forwarded() {
        let result = transpile_with_diagnostics(
            r#"<path d="M0 0"/><path d="M1 1""#,
            "Broken",
            &TranspileOptions::default(),
        );
        assert_eq!(result.fragment_count, 1);
        assert_eq!(result.diagnostics.count(), 1);
        assert!(result.code.contains(r#"<path d="M0 0" {...props} />"#));
    }

    #[test]
    fn empty_markup_gives_empty_group() {
        let result = transpile_with_diagnostics("", "Empty", &TranspileOptions::default());
        assert_eq!(result.fragment_count, 0);
        assert!(result.code.contains("  <g>\n  </g>\n"));
    }

    #[test]
    fn preview_options_use_inline_type() {
        let code = transpile(r#"<path d="M0 0"/>"#, "Preview", &TranspileOptions::preview());
        assert!(code.contains("export const Preview: React.FC<{ color: string }>"));
        assert!(!code.contains("interface"));
    }
}
