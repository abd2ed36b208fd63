//! Code generation for the icon component module.
//!
//! The module shape is fixed:
//! - `react` import, plus the render mode's extension import
//! - optional props interface declaration
//! - a `React.FC` that destructures `color` and spreads the remaining props
//!   onto every path inside a single `<g>`

use crate::mode::RenderMode;
use iconcraft_core::{COLOR_PARAM, NormalizedFragment, is_valid_identifier};
use std::fmt::Write as FmtWrite;

const REACT_IMPORT: &str = r#"import React from "react";"#;
const PROPS_SPREAD: &str = "{...props}";
const FRAGMENT_INDENT: &str = "    ";

/// Everything the module generator needs for one icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSpec {
    /// Exported component name.
    pub identifier: String,
    /// Props type used in `React.FC<...>`.
    pub interface_name: String,
    /// Element used for each fragment.
    pub render_mode: RenderMode,
    /// Emit `export interface <interface_name>` when the name is an identifier.
    pub declare_interface: bool,
    /// Path fragments in document order.
    pub fragments: Vec<NormalizedFragment>,
}

impl ComponentSpec {
    fn declares_interface(&self) -> bool {
        self.declare_interface && is_valid_identifier(&self.interface_name)
    }
}

/// Renders one fragment as a self-closing JSX element.
///
/// # Examples
///
/// ```
/// use iconcraft_core::normalize_markup;
/// use iconcraft_react::{RenderMode, codegen::render_fragment};
///
/// let set = normalize_markup(r#"<path d="M0 0" stroke="red"/>"#);
/// assert_eq!(
///     render_fragment(&set.fragments[0], RenderMode::Animatable),
///     r#"<motion.path d="M0 0" stroke={color} {...props} />"#
/// );
/// ```
pub fn render_fragment(fragment: &NormalizedFragment, mode: RenderMode) -> String {
    if fragment.is_empty() {
        format!("<{} {} />", mode.primitive(), PROPS_SPREAD)
    } else {
        format!("<{} {} {} />", mode.primitive(), fragment, PROPS_SPREAD)
    }
}

/// Emits the import block followed by a blank line.
fn emit_imports(code: &mut String, spec: &ComponentSpec) {
    let _ = writeln!(code, "{}", REACT_IMPORT);
    if let Some(import) = spec.render_mode.extension_import() {
        let _ = writeln!(code, "{}", import);
    }
    code.push('\n');
}

fn emit_props_interface(code: &mut String, spec: &ComponentSpec) {
    if !spec.declares_interface() {
        return;
    }
    let _ = writeln!(code, "export interface {} {{", spec.interface_name);
    let _ = writeln!(code, "  {}: string;", COLOR_PARAM);
    let _ = writeln!(code, "  [key: string]: unknown;");
    let _ = writeln!(code, "}}");
    code.push('\n');
}

fn emit_component(code: &mut String, spec: &ComponentSpec) {
    let _ = writeln!(
        code,
        "export const {}: React.FC<{}> = ({{ {}, ...props }}) => (",
        spec.identifier, spec.interface_name, COLOR_PARAM
    );
    let _ = writeln!(code, "  <g>");
    for (idx, fragment) in spec.fragments.iter().enumerate() {
        if idx > 0 {
            code.push('\n');
        }
        let _ = writeln!(
            code,
            "{}{}",
            FRAGMENT_INDENT,
            render_fragment(fragment, spec.render_mode)
        );
    }
    let _ = writeln!(code, "  </g>");
    let _ = writeln!(code, ");");
}

/// Generates the complete component module for `spec`.
///
/// Output is a pure function of the spec. A spec without fragments still
/// produces a valid component whose group is empty.
pub fn generate_component_module(spec: &ComponentSpec) -> String {
    let mut code = String::new();
    emit_imports(&mut code, spec);
    emit_props_interface(&mut code, spec);
    emit_component(&mut code, spec);
    code
}
