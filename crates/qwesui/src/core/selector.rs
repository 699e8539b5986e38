//! Typed selectors for the markup conventions the controllers watch.
//!
//! # Design
//! - Controllers never build selector strings; they hand a [`Selector`] to the host.
//! - Browser hosts render it with [`Selector::to_css`]; in-memory hosts match it directly.

/// CSS rendering of [`Selector::Focusable`].
pub const FOCUSABLE_CSS: &str =
    r#"button, [href], input, select, textarea, [tabindex]:not([tabindex="-1"])"#;

/// Tags that are focusable without further attributes.
pub const FOCUSABLE_TAGS: &[&str] = &["button", "input", "select", "textarea"];

/// A single element selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector<'a> {
    /// `.name`
    Class(&'a str),
    /// `.a.b` (every class present).
    AllClasses(&'a [&'a str]),
    /// `[name]`
    Attr(&'a str),
    /// `[name="value"]`
    AttrEq(&'a str, &'a str),
    /// `tag`
    Tag(&'a str),
    /// Interactive elements that can take focus, in document order.
    Focusable,
}

impl Selector<'_> {
    /// Render as a CSS selector string.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Class(name) => format!(".{name}"),
            Self::AllClasses(names) => names.iter().map(|name| format!(".{name}")).collect(),
            Self::Attr(name) => format!("[{name}]"),
            Self::AttrEq(name, value) => format!("[{name}=\"{}\"]", escape_value(value)),
            Self::Tag(tag) => (*tag).to_string(),
            Self::Focusable => FOCUSABLE_CSS.to_string(),
        }
    }
}

fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
