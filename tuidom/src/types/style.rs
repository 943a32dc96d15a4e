use super::{Color, TextStyle};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    /// Layer `other` on top of this style. Colors set in `other` win,
    /// text attributes accumulate.
    pub fn merge(self, other: &Style) -> Self {
        Self {
            background: other.background.or(self.background),
            foreground: other.foreground.or(self.foreground),
            text_style: TextStyle {
                bold: self.text_style.bold || other.text_style.bold,
                dim: self.text_style.dim || other.text_style.dim,
                reverse: self.text_style.reverse || other.text_style.reverse,
            },
        }
    }
}
