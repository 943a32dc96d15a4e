//! Find elements the way a user would: by visible text, placeholder, label,
//! role and accessible name, or test id.
//!
//! `get*` queries fail unless exactly one element matches (`get_all*` unless
//! at least one does). `query*` queries return `None` or an empty list instead.
//!
//! ```ignore
//! let screen = Screen::new(&root);
//! let email = screen.get_by_label_text(Regex::new("(?i)email")?)?;
//! let submit = screen.get_by_role(Role::Button, "Submit")?;
//! assert!(screen.query_by_text("Error")?.is_none());
//! ```

use std::fmt;

use regex::Regex;
use thiserror::Error;

use crate::element::{find_element, walk, Content, Element, Role};

/// Errors from screen queries and harness interactions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("unable to find an element {query}")]
    NotFound { query: String },

    #[error("found {count} elements {query}, expected exactly one")]
    Multiple { query: String, count: usize },

    #[error("element '{0}' is not clickable")]
    NotClickable(String),

    #[error("element '{0}' is not an editable text input")]
    NotEditable(String),
}

/// How text is compared. Exact matches ignore surrounding whitespace.
#[derive(Debug, Clone)]
pub enum TextMatch {
    Exact(String),
    Pattern(Regex),
}

impl TextMatch {
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Self::Exact(expected) => text.trim() == expected,
            Self::Pattern(re) => re.is_match(text),
        }
    }
}

impl From<&str> for TextMatch {
    fn from(s: &str) -> Self {
        Self::Exact(s.to_string())
    }
}

impl From<String> for TextMatch {
    fn from(s: String) -> Self {
        Self::Exact(s)
    }
}

impl From<Regex> for TextMatch {
    fn from(re: Regex) -> Self {
        Self::Pattern(re)
    }
}

impl From<&Regex> for TextMatch {
    fn from(re: &Regex) -> Self {
        Self::Pattern(re.clone())
    }
}

impl fmt::Display for TextMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(s) => write!(f, "{s:?}"),
            Self::Pattern(re) => write!(f, "/{}/", re.as_str()),
        }
    }
}

/// What to look for.
#[derive(Debug, Clone)]
pub enum By {
    /// Text nodes and multi-line input values.
    Text(TextMatch),
    /// Inputs whose placeholder matches.
    PlaceholderText(TextMatch),
    /// Elements labelled by a matching label element or `aria_label`.
    LabelText(TextMatch),
    /// Elements with the role, optionally filtered by accessible name.
    Role(Role, Option<TextMatch>),
    /// Elements whose `testid` data entry equals the value.
    TestId(String),
}

impl fmt::Display for By {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(m) => write!(f, "with the text {m}"),
            Self::PlaceholderText(m) => write!(f, "with the placeholder text {m}"),
            Self::LabelText(m) => write!(f, "with the label text {m}"),
            Self::Role(role, None) => write!(f, "with the role {role}"),
            Self::Role(role, Some(name)) => write!(f, "with the role {role} and name {name}"),
            Self::TestId(id) => write!(f, "with the test id {id:?}"),
        }
    }
}

/// Read-only view over a rendered element tree.
#[derive(Debug, Clone, Copy)]
pub struct Screen<'a> {
    root: &'a Element,
}

impl<'a> Screen<'a> {
    pub fn new(root: &'a Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &'a Element {
        self.root
    }

    /// All matches in document order.
    pub fn query_all(&self, by: &By) -> Vec<&'a Element> {
        match by {
            By::Text(m) => self.select(|el| el.own_text().is_some_and(|t| m.matches(t))),
            By::PlaceholderText(m) => self.select(|el| match &el.content {
                Content::TextInput {
                    placeholder: Some(p),
                    ..
                } => m.matches(p),
                _ => false,
            }),
            By::LabelText(m) => self.labelled_by(m),
            By::Role(role, name) => self.select(|el| {
                el.role == Some(*role)
                    && name.as_ref().map_or(true, |name| {
                        self.accessible_name(el).is_some_and(|n| name.matches(&n))
                    })
            }),
            By::TestId(id) => self.select(|el| el.get_data("testid") == Some(id)),
        }
    }

    /// The single match, or `None`. Several matches is an error.
    pub fn query(&self, by: &By) -> Result<Option<&'a Element>, QueryError> {
        let mut found = self.query_all(by);
        match found.len() {
            0 => Ok(None),
            1 => Ok(found.pop()),
            count => Err(QueryError::Multiple {
                query: by.to_string(),
                count,
            }),
        }
    }

    /// The single match. No match or several matches is an error.
    pub fn get(&self, by: &By) -> Result<&'a Element, QueryError> {
        self.query(by)?.ok_or_else(|| QueryError::NotFound {
            query: by.to_string(),
        })
    }

    /// At least one match.
    pub fn get_all(&self, by: &By) -> Result<Vec<&'a Element>, QueryError> {
        let found = self.query_all(by);
        if found.is_empty() {
            return Err(QueryError::NotFound {
                query: by.to_string(),
            });
        }
        Ok(found)
    }

    pub fn get_by_text(&self, m: impl Into<TextMatch>) -> Result<&'a Element, QueryError> {
        self.get(&By::Text(m.into()))
    }

    pub fn query_by_text(
        &self,
        m: impl Into<TextMatch>,
    ) -> Result<Option<&'a Element>, QueryError> {
        self.query(&By::Text(m.into()))
    }

    pub fn query_all_by_text(&self, m: impl Into<TextMatch>) -> Vec<&'a Element> {
        self.query_all(&By::Text(m.into()))
    }

    pub fn get_by_placeholder_text(
        &self,
        m: impl Into<TextMatch>,
    ) -> Result<&'a Element, QueryError> {
        self.get(&By::PlaceholderText(m.into()))
    }

    pub fn get_by_label_text(&self, m: impl Into<TextMatch>) -> Result<&'a Element, QueryError> {
        self.get(&By::LabelText(m.into()))
    }

    pub fn get_by_role(
        &self,
        role: Role,
        name: impl Into<TextMatch>,
    ) -> Result<&'a Element, QueryError> {
        self.get(&By::Role(role, Some(name.into())))
    }

    pub fn query_all_by_test_id(&self, id: impl Into<String>) -> Vec<&'a Element> {
        self.query_all(&By::TestId(id.into()))
    }

    /// Name exposed to assistive tech: `aria_label`, then an associated
    /// label's text, then the element's own text.
    pub fn accessible_name(&self, element: &Element) -> Option<String> {
        if let Some(label) = &element.aria_label {
            return Some(label.clone());
        }
        let mut from_label = None;
        walk(self.root, &mut |el| {
            if from_label.is_none() && el.label_for.as_deref() == Some(element.id.as_str()) {
                from_label = el.own_text().map(str::to_string);
            }
        });
        from_label.or_else(|| match &element.content {
            Content::Text(text) => Some(text.clone()),
            _ => None,
        })
    }

    fn labelled_by(&self, m: &TextMatch) -> Vec<&'a Element> {
        let mut targets: Vec<&'a Element> = Vec::new();
        walk(self.root, &mut |el| {
            if el.aria_label.as_deref().is_some_and(|l| m.matches(l)) {
                targets.push(el);
            }
            let Some(target) = &el.label_for else {
                return;
            };
            if el.own_text().is_some_and(|t| m.matches(t)) {
                if let Some(found) = find_element(self.root, target) {
                    targets.push(found);
                }
            }
        });
        let mut seen = std::collections::HashSet::new();
        targets.retain(|el| seen.insert(el.id.clone()));
        targets
    }

    fn select(&self, accept: impl Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut found = Vec::new();
        walk(self.root, &mut |el| {
            if accept(el) {
                found.push(el);
            }
        });
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_ignores_surrounding_whitespace() {
        let m = TextMatch::from("Submit");
        assert!(m.matches("  Submit\n"));
        assert!(!m.matches("Submit now"));
    }

    #[test]
    fn pattern_match_is_a_search() {
        let m = TextMatch::from(Regex::new("(?i)submit").unwrap());
        assert!(m.matches("Please SUBMIT now"));
    }

    #[test]
    fn error_messages_name_the_query() {
        let by = By::Role(Role::Button, Some("Send".into()));
        let err = QueryError::NotFound {
            query: by.to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unable to find an element with the role button and name \"Send\""
        );
    }
}
