use crate::domain::template::TemplateKind;
use std::fmt::Write;

/// Everything that differs between the built-in layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSheet {
    pub font_family: &'static str,
    pub background: &'static str,
    pub text_color: &'static str,
    pub accent_color: &'static str,
    pub card_background: &'static str,
    pub border_radius: &'static str,
}

const BASIC: StyleSheet = StyleSheet {
    font_family: "Arial, Helvetica, sans-serif",
    background: "#ffffff",
    text_color: "#222222",
    accent_color: "#333333",
    card_background: "#f4f4f4",
    border_radius: "0",
};

const FANCY: StyleSheet = StyleSheet {
    font_family: "Georgia, 'Times New Roman', serif",
    background: "#1d2b3a",
    text_color: "#f2efe9",
    accent_color: "#f0a04b",
    card_background: "#2b3d52",
    border_radius: "12px",
};

pub fn style_for(kind: TemplateKind) -> &'static StyleSheet {
    match kind {
        TemplateKind::Basic => &BASIC,
        TemplateKind::Fancy => &FANCY,
    }
}

impl StyleSheet {
    pub fn to_css(&self) -> String {
        let mut css = String::with_capacity(512);
        // Infallible: fmt::Write for String never errors.
        let _ = writeln!(
            css,
            "body {{ font-family: {}; background: {}; color: {}; margin: 0 auto; max-width: 48rem; padding: 2rem; }}",
            self.font_family, self.background, self.text_color
        );
        let _ = writeln!(css, "h1, h2, h3 {{ color: {}; }}", self.accent_color);
        let _ = writeln!(
            css,
            ".contact {{ background: {}; border-radius: {}; padding: 1rem; }}",
            self.card_background, self.border_radius
        );
        let _ = writeln!(css, ".projects {{ list-style: none; padding: 0; }}");
        let _ = writeln!(
            css,
            ".project {{ background: {}; border-radius: {}; margin: 0.5rem 0; padding: 0.75rem 1rem; }}",
            self.card_background, self.border_radius
        );
        let _ = write!(css, ".project a {{ color: {}; }}", self.accent_color);
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layouts_differ_in_style_data() {
        let basic = style_for(TemplateKind::Basic);
        let fancy = style_for(TemplateKind::Fancy);
        assert_ne!(basic.font_family, fancy.font_family);
        assert_ne!(basic.border_radius, fancy.border_radius);
        assert_ne!(basic.to_css(), fancy.to_css());
    }

    #[test]
    fn test_css_carries_palette() {
        let css = style_for(TemplateKind::Fancy).to_css();
        assert!(css.contains("Georgia"));
        assert!(css.contains("border-radius: 12px"));
        assert!(css.contains("#f0a04b"));
    }
}
