use crate::types::{TranspileConfig, TranspileResult, WarningEntry};
use iconcraft_core::TranspileWarning;
use iconcraft_react::{RenderMode, TranspileOptions, Transpiled};

/// Converts `TranspileConfig` to `TranspileOptions`.
pub fn to_transpile_options(config: Option<&TranspileConfig>) -> TranspileOptions {
    let defaults = TranspileOptions::default();
    match config {
        Some(c) => TranspileOptions {
            interface_name: c
                .interface_name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.interface_name),
            render_mode: RenderMode::from_use_animation(c.use_animation.unwrap_or(false)),
            declare_interface: c.declare_interface.unwrap_or(defaults.declare_interface),
        },
        None => defaults,
    }
}

/// Converts a `TranspileWarning` to a `WarningEntry`.
fn convert_warning(warning: &TranspileWarning) -> WarningEntry {
    let warning_type = match warning {
        TranspileWarning::UnterminatedTag { .. } => "unterminated_tag",
        TranspileWarning::UnterminatedValue { .. } => "unterminated_value",
        TranspileWarning::UnterminatedComment { .. } => "unterminated_comment",
    };
    let location = warning.location();
    WarningEntry {
        warning_type: warning_type.to_string(),
        line: location.line as u32,
        column: location.column as u32,
        message: warning.to_string(),
    }
}

/// Converts a `Transpiled` to a `TranspileResult`.
pub fn convert_transpiled(transpiled: Transpiled) -> TranspileResult {
    TranspileResult {
        warnings: transpiled
            .diagnostics
            .warnings
            .iter()
            .map(convert_warning)
            .collect(),
        fragment_count: transpiled.fragment_count as u32,
        code: transpiled.code,
    }
}
