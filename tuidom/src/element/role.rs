/// Semantic role of an element, used by queries and assistive lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Button,
    Form,
    Heading,
    /// Single or multi-line editable text.
    TextBox,
}

impl Role {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Form => "form",
            Self::Heading => "heading",
            Self::TextBox => "textbox",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
