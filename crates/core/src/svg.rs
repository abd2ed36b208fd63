//! Tokenizer for `<path>` elements inside exported SVG markup.
//!
//! Only path elements are recognized. Everything else (groups, gradients,
//! masks, other shapes) is skipped without validation, and the markup is never
//! required to be well-formed XML.

use crate::error::{SourceLocation, TranspileDiagnostics, TranspileWarning};
use std::ops::Range;

const PATH_OPENER: &str = "<path";
const COMMENT_OPENER: &str = "<!--";
const COMMENT_CLOSER: &str = "-->";

/// Quoting style of an attribute value as written in the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    /// `name="value"`
    Double,
    /// `name='value'`
    Single,
    /// `name=value`
    Unquoted,
}

/// Attribute value slice, without its quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeValue<'a> {
    /// Raw value text (entities are left as written)
    pub text: &'a str,
    /// How the value was quoted
    pub quote: Quote,
}

/// A single attribute in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'a> {
    /// Attribute name as written (e.g. `stroke-width`)
    pub name: &'a str,
    /// Value, or `None` for a bare attribute
    pub value: Option<AttributeValue<'a>>,
}

/// One `<path ...>` element found in the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathElement<'a> {
    /// The element's literal text, from `<path` to its closing `>`
    pub raw: &'a str,
    /// Byte range of `raw` inside the markup
    pub span: Range<usize>,
    /// Attributes in the order they were written
    pub attributes: Vec<Attribute<'a>>,
    /// Whether the tag ended with `/>`
    pub self_closing: bool,
}

impl<'a> PathElement<'a> {
    /// Returns the first attribute with the given name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute<'a>> {
        self.attributes.iter().find(|attr| attr.name == name)
    }
}

/// Path elements extracted from a document plus any skipped-tag warnings.
#[derive(Debug, Clone, Default)]
pub struct PathExtraction<'a> {
    /// Elements in document order
    pub paths: Vec<PathElement<'a>>,
    /// Malformed tags that were skipped
    pub diagnostics: TranspileDiagnostics,
}

/// Extracts every `<path>` element from `markup`, in document order.
///
/// Tags inside `<!-- -->` comments are ignored, and a `>` inside a quoted
/// attribute value does not end the tag. Tags that never close are skipped and
/// reported in the diagnostics.
///
/// # Examples
///
/// ```
/// use iconcraft_core::svg::extract_paths;
///
/// let markup = r##"<svg><path d="M0 0L1 1" fill="#000"/><rect/><path d="M2 2"></path></svg>"##;
/// let extraction = extract_paths(markup);
/// assert_eq!(extraction.paths.len(), 2);
/// assert_eq!(extraction.paths[0].attributes[1].name, "fill");
/// assert!(!extraction.paths[1].self_closing);
/// ```
pub fn extract_paths(markup: &str) -> PathExtraction<'_> {
    let bytes = markup.as_bytes();
    let mut extraction = PathExtraction::default();
    let mut pos = 0;

    while let Some(found) = markup[pos..].find('<') {
        let start = pos + found;
        let rest = &markup[start..];

        if rest.starts_with(COMMENT_OPENER) {
            match rest[COMMENT_OPENER.len()..].find(COMMENT_CLOSER) {
                Some(end) => {
                    pos = start + COMMENT_OPENER.len() + end + COMMENT_CLOSER.len();
                    continue;
                }
                None => {
                    let warning = TranspileWarning::UnterminatedComment {
                        location: SourceLocation::from_offset(markup, start),
                    };
                    log::warn!("{}", warning);
                    extraction.diagnostics.add_warning(warning);
                    pos = start + COMMENT_OPENER.len();
                    continue;
                }
            }
        }

        if rest.starts_with(PATH_OPENER) && is_tag_boundary(bytes.get(start + PATH_OPENER.len()))
        {
            match parse_path_element(markup, start) {
                Ok(element) => {
                    pos = element.span.end;
                    extraction.paths.push(element);
                }
                Err(warning) => {
                    log::warn!("{}", warning);
                    extraction.diagnostics.add_warning(warning);
                    pos = start + PATH_OPENER.len();
                }
            }
            continue;
        }

        pos = start + 1;
    }

    extraction
}

/// `<path` must be followed by whitespace, `/` or `>` (so `<pattern>` is not a path).
fn is_tag_boundary(next: Option<&u8>) -> bool {
    match next {
        Some(b) => b.is_ascii_whitespace() || *b == b'/' || *b == b'>',
        None => true,
    }
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(|b| b.is_ascii_whitespace()) {
        pos += 1;
    }
    pos
}

fn parse_path_element(markup: &str, start: usize) -> Result<PathElement<'_>, TranspileWarning> {
    let bytes = markup.as_bytes();
    let mut attributes = Vec::new();
    let mut pos = start + PATH_OPENER.len();

    loop {
        pos = skip_whitespace(bytes, pos);
        match bytes.get(pos) {
            None => {
                return Err(TranspileWarning::UnterminatedTag {
                    location: SourceLocation::from_offset(markup, start),
                });
            }
            Some(b'>') => {
                let end = pos + 1;
                return Ok(PathElement {
                    raw: &markup[start..end],
                    span: start..end,
                    attributes,
                    self_closing: false,
                });
            }
            Some(b'/') => {
                if bytes.get(pos + 1) == Some(&b'>') {
                    let end = pos + 2;
                    return Ok(PathElement {
                        raw: &markup[start..end],
                        span: start..end,
                        attributes,
                        self_closing: true,
                    });
                }
                // Stray slash between attributes.
                pos += 1;
                continue;
            }
            Some(_) => {}
        }

        let name_start = pos;
        while let Some(&b) = bytes.get(pos) {
            if b.is_ascii_whitespace() || b == b'=' || b == b'>' || b == b'/' {
                break;
            }
            pos += 1;
        }
        let name = &markup[name_start..pos];
        if name.is_empty() {
            // Stray `=` with no name before it.
            pos += 1;
            continue;
        }

        let after_name = skip_whitespace(bytes, pos);
        if bytes.get(after_name) != Some(&b'=') {
            attributes.push(Attribute { name, value: None });
            pos = after_name;
            continue;
        }

        pos = skip_whitespace(bytes, after_name + 1);
        let value = match bytes.get(pos) {
            Some(&q @ (b'"' | b'\'')) => {
                let value_start = pos + 1;
                let Some(len) = markup[value_start..].find(q as char) else {
                    return Err(TranspileWarning::UnterminatedValue {
                        location: SourceLocation::from_offset(markup, pos),
                        attribute: name.to_string(),
                    });
                };
                pos = value_start + len + 1;
                AttributeValue {
                    text: &markup[value_start..value_start + len],
                    quote: if q == b'"' { Quote::Double } else { Quote::Single },
                }
            }
            _ => {
                let value_start = pos;
                while let Some(&b) = bytes.get(pos) {
                    let closes = b == b'>' || (b == b'/' && bytes.get(pos + 1) == Some(&b'>'));
                    if b.is_ascii_whitespace() || closes {
                        break;
                    }
                    pos += 1;
                }
                AttributeValue {
                    text: &markup[value_start..pos],
                    quote: Quote::Unquoted,
                }
            }
        };
        attributes.push(Attribute {
            name,
            value: Some(value),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(element: &PathElement<'a>) -> Vec<&'a str> {
        element.attributes.iter().map(|attr| attr.name).collect()
    }

    #[test]
    fn extracts_in_document_order() {
        let markup = r#"<svg>
  <path d="M1 1"/>
  <g><path d="M2 2"/></g>
  <path d="M3 3"/>
</svg>"#;
        let extraction = extract_paths(markup);
        let ds: Vec<&str> = extraction
            .paths
            .iter()
            .map(|p| p.attribute("d").and_then(|a| a.value).map(|v| v.text).unwrap())
            .collect();
        assert_eq!(ds, vec!["M1 1", "M2 2", "M3 3"]);
        assert!(!extraction.diagnostics.has_warnings());
    }

    #[test]
    fn no_paths_is_empty_not_error() {
        let extraction = extract_paths(r#"<svg><rect width="4" height="4"/><circle r="2"/></svg>"#);
        assert!(extraction.paths.is_empty());
        assert!(!extraction.diagnostics.has_warnings());
        assert!(extract_paths("").paths.is_empty());
    }

    #[test]
    fn keeps_raw_text_and_span() {
        let markup = r#"<svg><path d="M0 0" stroke-width="2"/></svg>"#;
        let extraction = extract_paths(markup);
        let path = &extraction.paths[0];
        assert_eq!(path.raw, r#"<path d="M0 0" stroke-width="2"/>"#);
        assert_eq!(&markup[path.span.clone()], path.raw);
        assert!(path.self_closing);
        assert_eq!(names(path), vec!["d", "stroke-width"]);
    }

    #[test]
    fn gt_inside_quoted_value_does_not_end_tag() {
        let markup = r#"<path data-note="a > b" d="M0 0"/>"#;
        let extraction = extract_paths(markup);
        assert_eq!(extraction.paths.len(), 1);
        let path = &extraction.paths[0];
        assert_eq!(path.attributes[0].value.unwrap().text, "a > b");
        assert_eq!(path.attribute("d").unwrap().value.unwrap().text, "M0 0");
    }

    #[test]
    fn handles_quote_styles_and_bare_attributes() {
        let markup = r#"<path d='M0 0' fill=red hidden opacity = "0.5" >"#;
        let path = &extract_paths(markup).paths[0];
        assert_eq!(names(path), vec!["d", "fill", "hidden", "opacity"]);
        assert_eq!(path.attributes[0].value.unwrap().quote, Quote::Single);
        assert_eq!(
            path.attributes[1].value,
            Some(AttributeValue {
                text: "red",
                quote: Quote::Unquoted
            })
        );
        assert_eq!(path.attributes[2].value, None);
        assert_eq!(path.attributes[3].value.unwrap().text, "0.5");
    }

    #[test]
    fn unquoted_value_stops_before_self_closing() {
        let path = &extract_paths("<path fill=red/>").paths[0];
        assert_eq!(path.attributes[0].value.unwrap().text, "red");
        assert!(path.self_closing);
    }

    #[test]
    fn ignores_lookalike_tags_and_comments() {
        let markup = r#"<svg>
  <pattern id="p"><pathology/></pattern>
  <!-- <path d="M9 9"/> -->
  <path d="M1 1"/>
</svg>"#;
        let extraction = extract_paths(markup);
        assert_eq!(extraction.paths.len(), 1);
        assert_eq!(extraction.paths[0].raw, r#"<path d="M1 1"/>"#);
    }

    #[test]
    fn unterminated_tag_is_reported_and_skipped() {
        let markup = "<svg>\n<path d=\"M0 0\"/>\n<path d=\"M1 1\"";
        let extraction = extract_paths(markup);
        assert_eq!(extraction.paths.len(), 1);
        assert_eq!(
            extraction.diagnostics.warnings,
            vec![TranspileWarning::UnterminatedTag {
                location: SourceLocation::new(3, 1)
            }]
        );
    }

    #[test]
    fn unterminated_comment_is_reported_and_scanning_resumes() {
        let markup = r#"<svg><!-- note <path d="M0 0"/><path d="M1 1"/></svg>"#;
        let extraction = extract_paths(markup);
        assert_eq!(extraction.paths.len(), 2);
        let second = extraction.paths[1].attribute("d").and_then(|a| a.value);
        assert_eq!(second.map(|v| v.text), Some("M1 1"));
        assert_eq!(
            extraction.diagnostics.warnings,
            vec![TranspileWarning::UnterminatedComment {
                location: SourceLocation::new(1, 6)
            }]
        );
    }

    #[test]
    fn unterminated_value_is_reported() {
        let extraction = extract_paths(r#"<path d="M0 0/>"#);
        assert!(extraction.paths.is_empty());
        assert_eq!(extraction.diagnostics.count(), 1);
        assert!(matches!(
            &extraction.diagnostics.warnings[0],
            TranspileWarning::UnterminatedValue { attribute, location }
                if attribute == "d" && location.column == 9
        ));
    }

    #[test]
    fn non_ascii_values_survive() {
        let path = &extract_paths(r#"<path aria-label="étoile ★" d="M0 0"/>"#).paths[0];
        assert_eq!(path.attributes[0].value.unwrap().text, "étoile ★");
    }
}
