#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
    /// Editable text. `cursor` is a char index into `value`.
    TextInput {
        value: String,
        cursor: usize,
        selection: Option<(usize, usize)>,
        placeholder: Option<String>,
        focused: bool,
        multiline: bool,
    },
}

impl Content {
    pub fn children(&self) -> &[super::Element] {
        match self {
            Self::Children(children) => children,
            _ => &[],
        }
    }
}
