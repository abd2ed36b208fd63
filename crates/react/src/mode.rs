//! Render modes for the generated path elements.

use serde::{Deserialize, Serialize};

/// Import line required by [`RenderMode::Animatable`].
pub const MOTION_IMPORT: &str = r#"import { motion } from "framer-motion";"#;

/// Selects which element each path fragment renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RenderMode {
    /// Plain `<path>` elements.
    #[default]
    Static,
    /// framer-motion `<motion.path>` elements.
    Animatable,
}

impl RenderMode {
    /// Maps the plugin's "use animation" toggle to a mode.
    pub const fn from_use_animation(use_animation: bool) -> Self {
        if use_animation {
            Self::Animatable
        } else {
            Self::Static
        }
    }

    /// JSX element name used for every fragment.
    pub const fn primitive(self) -> &'static str {
        match self {
            Self::Static => "path",
            Self::Animatable => "motion.path",
        }
    }

    /// Extra import the module needs for this mode, if any.
    pub const fn extension_import(self) -> Option<&'static str> {
        match self {
            Self::Static => None,
            Self::Animatable => Some(MOTION_IMPORT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_maps_to_mode() {
        assert_eq!(RenderMode::from_use_animation(false), RenderMode::Static);
        assert_eq!(RenderMode::from_use_animation(true), RenderMode::Animatable);
    }

    #[test]
    fn primitives_and_imports() {
        assert_eq!(RenderMode::Static.primitive(), "path");
        assert_eq!(RenderMode::Static.extension_import(), None);
        assert_eq!(RenderMode::Animatable.primitive(), "motion.path");
        assert_eq!(RenderMode::Animatable.extension_import(), Some(MOTION_IMPORT));
    }

    #[test]
    fn serde_names() {
        assert_eq!(
            serde_json::to_string(&RenderMode::Animatable).unwrap(),
            "\"animatable\""
        );
        let mode: RenderMode = serde_json::from_str("\"static\"").unwrap();
        assert_eq!(mode, RenderMode::Static);
    }
}
