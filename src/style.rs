use inksac::prelude::*;

/// Terminal styling for the prompt, error channels, and file listings.
/// All styling goes through one capability check so output degrades to
/// plain text when the terminal reports no color support.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color_support: ColorSupport,
}

impl Default for Painter {
    fn default() -> Self {
        Self::new()
    }
}

impl Painter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    /// A painter that never emits escape codes. Used in tests where the
    /// rendered output is asserted literally.
    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    pub fn paint(&self, text: &str, color: Color, bold: bool) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return text.to_string();
        }

        let style = if bold {
            Style::builder().foreground(color).bold().build()
        } else {
            Style::builder().foreground(color).build()
        };
        text.style(style).to_string()
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, Color::Red, false)
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(text, Color::Yellow, false)
    }

    pub fn info(&self, text: &str) -> String {
        self.paint(text, Color::Blue, false)
    }

    pub fn heading(&self, text: &str) -> String {
        self.paint(text, Color::Cyan, false)
    }

    pub fn prompt_path(&self, text: &str) -> String {
        self.paint(text, Color::Cyan, false)
    }

    pub fn prompt_marker(&self, text: &str) -> String {
        self.paint(text, Color::Green, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_painter_passes_text_through() {
        let painter = Painter::plain();
        assert_eq!(painter.error("boom"), "boom");
        assert_eq!(painter.paint("dir", Color::Blue, true), "dir");
    }
}
