//! Rewrites tokenized path attributes into JSX attribute form.

use crate::error::TranspileDiagnostics;
use crate::svg::{Attribute, PathElement, Quote, extract_paths};
use std::borrow::Cow;
use std::fmt;

/// Name of the component parameter that supplies the icon color.
pub const COLOR_PARAM: &str = "color";

/// Attributes whose literal value is replaced by [`COLOR_PARAM`].
pub const PAINT_ATTRIBUTES: [&str; 2] = ["fill", "stroke"];

/// Converts a hyphenated attribute name to camelCase.
///
/// Every `-` directly followed by a lowercase ASCII letter is dropped and the
/// letter upper-cased; other hyphens are kept.
///
/// # Examples
///
/// ```
/// use iconcraft_core::normalize::camel_case_attribute_name;
///
/// assert_eq!(camel_case_attribute_name("stroke-width"), "strokeWidth");
/// assert_eq!(camel_case_attribute_name("stroke-miterlimit"), "strokeMiterlimit");
/// assert_eq!(camel_case_attribute_name("d"), "d");
/// ```
pub fn camel_case_attribute_name(name: &str) -> Cow<'_, str> {
    if !name.contains('-') {
        return Cow::Borrowed(name);
    }

    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '-' {
            if let Some(next) = chars.peek().copied().filter(char::is_ascii_lowercase) {
                out.push(next.to_ascii_uppercase());
                chars.next();
                continue;
            }
        }
        out.push(ch);
    }
    Cow::Owned(out)
}

/// Value of a normalized attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsxValue {
    /// String literal passed through from the markup.
    Literal {
        /// Value text as written
        text: String,
        /// Quote used when emitting (never [`Quote::Unquoted`])
        quote: Quote,
    },
    /// Unquoted value holding both quote characters, emitted as a JS string
    /// expression: `{"..."}`.
    StringExpression {
        /// Value text as written
        text: String,
    },
    /// Bound to the color parameter: `{color}`.
    ColorBinding,
    /// Attribute without a value.
    Bare,
}

/// A single attribute after name normalization and paint substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsxAttribute {
    /// camelCased attribute name
    pub name: String,
    /// Emitted value
    pub value: JsxValue,
}

impl JsxAttribute {
    /// Normalizes one tokenized attribute.
    pub fn from_attribute(attribute: &Attribute<'_>) -> Self {
        let name = camel_case_attribute_name(attribute.name).into_owned();
        let value = match attribute.value {
            None => JsxValue::Bare,
            Some(_) if PAINT_ATTRIBUTES.contains(&name.as_str()) => JsxValue::ColorBinding,
            Some(value)
                if value.quote == Quote::Unquoted
                    && value.text.contains('"')
                    && value.text.contains('\'') =>
            {
                JsxValue::StringExpression {
                    text: value.text.to_string(),
                }
            }
            Some(value) => {
                let quote = match value.quote {
                    Quote::Unquoted if value.text.contains('"') => Quote::Single,
                    Quote::Unquoted => Quote::Double,
                    quote => quote,
                };
                JsxValue::Literal {
                    text: value.text.to_string(),
                    quote,
                }
            }
        };
        Self { name, value }
    }
}

impl fmt::Display for JsxAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            JsxValue::Literal {
                text,
                quote: Quote::Single,
            } => write!(f, "{}='{}'", self.name, text),
            JsxValue::Literal { text, .. } => write!(f, "{}=\"{}\"", self.name, text),
            JsxValue::StringExpression { text } => {
                let literal = serde_json::to_string(text).map_err(|_| fmt::Error)?;
                write!(f, "{}={{{}}}", self.name, literal)
            }
            JsxValue::ColorBinding => write!(f, "{}={{{}}}", self.name, COLOR_PARAM),
            JsxValue::Bare => f.write_str(&self.name),
        }
    }
}

/// Attribute list of one path element, ready to be placed inside a JSX tag.
///
/// Displays as the attributes joined by single spaces, without the tag name
/// or closing markers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedFragment {
    attributes: Vec<JsxAttribute>,
}

impl NormalizedFragment {
    /// Normalizes a tokenized path element.
    pub fn from_element(element: &PathElement<'_>) -> Self {
        Self {
            attributes: element
                .attributes
                .iter()
                .map(JsxAttribute::from_attribute)
                .collect(),
        }
    }

    /// Attributes in source order.
    pub fn attributes(&self) -> &[JsxAttribute] {
        &self.attributes
    }

    /// Returns true if the element had no attributes.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Returns true if any paint attribute was bound to the color parameter.
    pub fn uses_color(&self) -> bool {
        self.attributes
            .iter()
            .any(|attr| attr.value == JsxValue::ColorBinding)
    }
}

impl fmt::Display for NormalizedFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, attr) in self.attributes.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", attr)?;
        }
        Ok(())
    }
}

/// Normalized fragments of a document plus tokenizer warnings.
#[derive(Debug, Clone, Default)]
pub struct FragmentSet {
    /// Fragments in document order
    pub fragments: Vec<NormalizedFragment>,
    /// Warnings for skipped tags
    pub diagnostics: TranspileDiagnostics,
}

/// Extracts and normalizes every path element in `markup`.
///
/// # Examples
///
/// ```
/// use iconcraft_core::normalize::normalize_markup;
///
/// let set = normalize_markup(r##"<path d="M0 0L1 1" fill="#000000" stroke-width="2"/>"##);
/// assert_eq!(set.fragments[0].to_string(), r#"d="M0 0L1 1" fill={color} strokeWidth="2""#);
/// ```
pub fn normalize_markup(markup: &str) -> FragmentSet {
    let extraction = extract_paths(markup);
    FragmentSet {
        fragments: extraction
            .paths
            .iter()
            .map(NormalizedFragment::from_element)
            .collect(),
        diagnostics: extraction.diagnostics,
    }
}
