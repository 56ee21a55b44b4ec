use std::fmt::{self, Display};

/// A fragment of HTML that is trusted not to be escaped again.
///
/// Every fragment a [`RenderContext`](crate::RenderContext) hands back is a `Markup`, so a
/// builder can glue fragments together without worrying about double escaping. Plain text
/// enters through [`Markup::escape`], raw html through [`Markup::from_trusted`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Markup(String);

impl Markup {
    /// Escape `text` so it renders literally inside an html document.
    pub fn escape(text: &str) -> Self {
        Self(escape(text))
    }

    /// Wrap html that is already safe to emit as-is.
    pub fn from_trusted(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Join fragments, inserting `separator` verbatim between each pair.
    ///
    /// ```rust
    /// # use breadcrumbs::Markup;
    /// let joined = Markup::join(
    ///     [Markup::escape("a"), Markup::escape("b"), Markup::escape("c")],
    ///     " / ",
    /// );
    /// assert_eq!(joined.as_str(), "a / b / c");
    /// ```
    pub fn join(items: impl IntoIterator<Item = Markup>, separator: &str) -> Self {
        let mut out = String::new();
        for (idx, item) in items.into_iter().enumerate() {
            if idx > 0 {
                out.push_str(separator);
            }
            out.push_str(&item.0);
        }
        Self(out)
    }

    /// Build `<tag attr="value">inner</tag>`. Attribute values are escaped, `inner` is not.
    pub fn element(tag: &str, attributes: &[(&str, &str)], inner: &Markup) -> Self {
        let mut out = String::with_capacity(tag.len() * 2 + inner.0.len() + 5);
        out.push('<');
        out.push_str(tag);
        for (name, value) in attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape(value));
            out.push('"');
        }
        out.push('>');
        out.push_str(&inner.0);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
        Self(out)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn escape(text: &str) -> String {
    askama_escape::escape(text, askama_escape::Html).to_string()
}

impl Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Markup> for String {
    fn from(markup: Markup) -> Self {
        markup.0
    }
}

impl PartialEq<str> for Markup {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Markup {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
