use serde::Serialize;
use thiserror::Error;

/// Source location information for diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Resolves a byte offset inside `input` to a line/column pair.
    ///
    /// Columns count characters, not bytes.
    pub fn from_offset(input: &str, offset: usize) -> Self {
        let offset = offset.min(input.len());
        let before = &input[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
        let column = before[line_start..].chars().count() + 1;
        Self { line, column }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors surfaced while driving a conversion for a host.
///
/// The sanitizer and the transpiler are total; these errors only come from
/// the collaborators around them.
#[derive(Debug, Error)]
pub enum IconCraftError {
    /// The host could not export vector markup for a node.
    #[error("Failed to export '{node}': {message}")]
    Export {
        /// Name of the node as shown in the design tool
        node: String,
        /// Message reported by the host
        message: String,
    },
    /// A host message could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IconCraftError {
    /// Create an export error for the given node
    pub fn export(node: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Export {
            node: node.into(),
            message: message.into(),
        }
    }
}

/// Non-fatal findings reported while tokenizing markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TranspileWarning {
    /// `<path` opener without a closing `>`; the element was skipped
    UnterminatedTag {
        /// Where the opener starts
        location: SourceLocation,
    },
    /// Quoted attribute value that never closes; the element was skipped
    UnterminatedValue {
        /// Where the value starts
        location: SourceLocation,
        /// Attribute name
        attribute: String,
    },
    /// `<!--` without a closing `-->`; scanning resumed after the opener
    UnterminatedComment {
        /// Where the comment starts
        location: SourceLocation,
    },
}

impl TranspileWarning {
    /// Get the location of this warning
    pub fn location(&self) -> &SourceLocation {
        match self {
            TranspileWarning::UnterminatedTag { location } => location,
            TranspileWarning::UnterminatedValue { location, .. } => location,
            TranspileWarning::UnterminatedComment { location } => location,
        }
    }
}

impl std::fmt::Display for TranspileWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranspileWarning::UnterminatedTag { location } => {
                write!(f, "{}: unterminated <path> tag skipped", location)
            }
            TranspileWarning::UnterminatedValue {
                location,
                attribute,
            } => {
                write!(
                    f,
                    "{}: unterminated value for '{}', <path> skipped",
                    location, attribute
                )
            }
            TranspileWarning::UnterminatedComment { location } => {
                write!(f, "{}: unterminated comment, scanning resumed", location)
            }
        }
    }
}

/// Collection of transpile warnings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranspileDiagnostics {
    /// Warnings in document order
    pub warnings: Vec<TranspileWarning>,
}

impl TranspileDiagnostics {
    /// Create a new empty diagnostics collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a warning to the collection
    pub fn add_warning(&mut self, warning: TranspileWarning) {
        self.warnings.push(warning);
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Get total count of warnings
    pub fn count(&self) -> usize {
        self.warnings.len()
    }
}
