use std::fmt;
use std::rc::Rc;

use serde::Deserialize;

use crate::builder::{Builder, SimpleBuilder};

/// The separator used between breadcrumbs when none is configured.
pub const DEFAULT_SEPARATOR: &str = " » ";

/// How a trail is rendered.
///
/// Every option except the builder can be read from a config file:
///
/// ```rust
/// # use breadcrumbs::BreadcrumbsConfig;
/// let config: BreadcrumbsConfig =
///     serde_json::from_str(r#"{ "tag": "li", "wrapper": "ul" }"#).unwrap();
/// assert_eq!(config.separator, " » ");
/// assert_eq!(config.tag.as_deref(), Some("li"));
/// ```
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct BreadcrumbsConfig {
    /// Inserted verbatim between rendered breadcrumbs.
    pub separator: String,

    /// Wraps the whole trail, e.g. `ul` or `nav`.
    pub wrapper: Option<String>,

    /// Wraps each breadcrumb, e.g. `li`.
    pub tag: Option<String>,

    /// Replaces [`SimpleBuilder`] when set.
    #[serde(skip)]
    pub builder: Option<Rc<dyn Builder>>,
}

impl Default for BreadcrumbsConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl BreadcrumbsConfig {
    pub fn new() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            wrapper: None,
            tag: None,
            builder: None,
        }
    }

    /// Set the separator inserted between breadcrumbs (default: `" » "`).
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Wrap the whole trail in a `wrapper` element.
    pub fn wrapper(mut self, wrapper: impl Into<String>) -> Self {
        self.wrapper = Some(wrapper.into());
        self
    }

    /// Wrap each breadcrumb in a `tag` element.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Render with `builder` instead of the [`SimpleBuilder`].
    pub fn builder(mut self, builder: impl Builder + 'static) -> Self {
        self.builder = Some(Rc::new(builder));
        self
    }

    /// The builder a trail is rendered with.
    pub fn resolved_builder(&self) -> Rc<dyn Builder> {
        self.builder
            .clone()
            .unwrap_or_else(|| Rc::new(SimpleBuilder))
    }
}

impl fmt::Debug for BreadcrumbsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreadcrumbsConfig")
            .field("separator", &self.separator)
            .field("wrapper", &self.wrapper)
            .field("tag", &self.tag)
            .field("builder", &self.builder.as_ref().map(|_| ".."))
            .finish()
    }
}
