#![deny(missing_docs)]
//! iconcraft core: component name sanitizing, SVG path tokenizing, and attribute normalization.

/// Core error and diagnostic types.
pub mod error;
/// Component name sanitizing.
pub mod name;
/// Path attribute normalization (camelCase names, color binding).
pub mod normalize;
/// `<path>` element tokenizer.
pub mod svg;

pub use error::{IconCraftError, SourceLocation, TranspileDiagnostics, TranspileWarning};
pub use name::{PROPERTY_PREFIX, is_valid_identifier, sanitize_component_name};
pub use normalize::{
    COLOR_PARAM, FragmentSet, JsxAttribute, JsxValue, NormalizedFragment, PAINT_ATTRIBUTES,
    camel_case_attribute_name, normalize_markup,
};
pub use svg::{Attribute, AttributeValue, PathElement, PathExtraction, Quote, extract_paths};
