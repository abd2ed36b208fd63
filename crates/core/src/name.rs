/// Variant-property prefix Figma puts in front of some node names.
pub const PROPERTY_PREFIX: &str = "As=";

/// Turns a design-tool node name into a component identifier.
///
/// All whitespace is removed, then any leading `As=` prefix. Stripping is
/// repeated so the result never starts with the prefix, which keeps the
/// function idempotent.
///
/// # Examples
///
/// ```
/// use iconcraft_core::name::sanitize_component_name;
///
/// assert_eq!(sanitize_component_name("Icon Name"), "IconName");
/// assert_eq!(sanitize_component_name("As=Arrow Left"), "ArrowLeft");
/// assert_eq!(sanitize_component_name("As= "), "");
/// ```
pub fn sanitize_component_name(raw: &str) -> String {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let mut rest = compact.as_str();
    while let Some(stripped) = rest.strip_prefix(PROPERTY_PREFIX) {
        rest = stripped;
    }
    rest.to_string()
}

/// Returns true if `name` can be used as a JavaScript binding name.
///
/// Only checks the shape (`[A-Za-z_$][A-Za-z0-9_$]*`, plus non-ASCII letters);
/// reserved words are not rejected.
///
/// # Examples
///
/// ```
/// use iconcraft_core::name::is_valid_identifier;
///
/// assert!(is_valid_identifier("ArrowLeft"));
/// assert!(!is_valid_identifier("24/Arrow"));
/// assert!(!is_valid_identifier(""));
/// ```
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let is_start = |c: char| c == '_' || c == '$' || c.is_alphabetic();
    is_start(first) && chars.all(|c| is_start(c) || c.is_alphanumeric())
}
