use iconcraft_react::{RenderMode, TranspileOptions, transpile};

const FIGMA_ARROW: &str = r##"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
<path d="M5 12H19" stroke="#1C274C" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"/>
<path d="M13 6L19 12L13 18" stroke="#1C274C" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"/>
</svg>
"##;

#[test]
fn static_module_snapshot() {
    let code = transpile(
        r##"<path d="M0 0L1 1" fill="#000000" stroke-width="2"/>"##,
        "Star",
        &TranspileOptions::default(),
    );

    insta::assert_snapshot!(code, @r#"
    import React from "react";

    export const Star: React.FC<IconProps> = ({ color, ...props }) => (
      <g>
        <path d="M0 0L1 1" fill={color} strokeWidth="2" {...props} />
      </g>
    );
    "#);
}

#[test]
fn animatable_module_snapshot() {
    let code = transpile(
        FIGMA_ARROW,
        "ArrowRight",
        &TranspileOptions::new("ArrowProps", RenderMode::Animatable),
    );

    insta::assert_snapshot!(code, @r#"
    import React from "react";
    import { motion } from "framer-motion";

    export const ArrowRight: React.FC<ArrowProps> = ({ color, ...props }) => (
      <g>
        <motion.path d="M5 12H19" stroke={color} strokeWidth="1.5" strokeLinecap="round" strokeLinejoin="round" {...props} />

        <motion.path d="M13 6L19 12L13 18" stroke={color} strokeWidth="1.5" strokeLinecap="round" strokeLinejoin="round" {...props} />
      </g>
    );
    "#);
}

#[test]
fn declared_interface_snapshot() {
    let options = TranspileOptions {
        declare_interface: true,
        ..TranspileOptions::new("StarProps", RenderMode::Static)
    };
    let code = transpile(r#"<path d="M0 0"/>"#, "Star", &options);

    insta::assert_snapshot!(code, @r#"
    import React from "react";

    export interface StarProps {
      color: string;
      [key: string]: unknown;
    }

    export const Star: React.FC<StarProps> = ({ color, ...props }) => (
      <g>
        <path d="M0 0" {...props} />
      </g>
    );
    "#);
}

#[test]
fn empty_preview_module_snapshot() {
    let code = transpile(
        r#"<svg viewBox="0 0 24 24"><circle cx="12" cy="12" r="4"/></svg>"#,
        "Blank",
        &TranspileOptions::preview(),
    );

    insta::assert_snapshot!(code, @r#"
    import React from "react";

    export const Blank: React.FC<{ color: string }> = ({ color, ...props }) => (
      <g>
      </g>
    );
    "#);
}

#[test]
fn original_colors_never_leak() {
    for mode in [RenderMode::Static, RenderMode::Animatable] {
        let code = transpile(FIGMA_ARROW, "ArrowRight", &TranspileOptions::new("P", mode));
        assert!(!code.contains("#1C274C"), "color leaked in {:?}: {}", mode, code);
        assert!(!code.contains("stroke-"), "hyphenated name in {:?}: {}", mode, code);
        assert_eq!(code.matches("stroke={color}").count(), 2);
    }
}

#[test]
fn modes_share_attribute_content() {
    let static_code = transpile(FIGMA_ARROW, "ArrowRight", &TranspileOptions::default());
    let animated_code = transpile(
        FIGMA_ARROW,
        "ArrowRight",
        &TranspileOptions::new("IconProps", RenderMode::Animatable),
    );

    let static_lines: Vec<&str> = static_code.lines().collect();
    let animated_lines: Vec<&str> = animated_code
        .lines()
        .filter(|line| !line.contains("framer-motion"))
        .collect();
    assert_eq!(static_lines.len(), animated_lines.len());
    for (plain, animated) in static_lines.iter().zip(&animated_lines) {
        assert_eq!(*plain, animated.replacen("<motion.path ", "<path ", 1));
    }
}
