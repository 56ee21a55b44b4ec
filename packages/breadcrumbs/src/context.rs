use crate::controller::LookupScope;
use crate::element::{Params, RouteParams};
use crate::error::HostError;
use crate::markup::Markup;

/// The host environment a trail is rendered in: usually the current request or view.
///
/// Translation, url generation and accessors are always provided by the host. The markup
/// helpers have default implementations that produce plain html, escaping text through
/// [`Markup::escape`].
pub trait RenderContext {
    /// Look up the translation of `key` in `scope`, interpolating `params`.
    fn translate(&self, key: &str, scope: &LookupScope, params: &Params)
        -> Result<String, HostError>;

    /// Generate a url from a set of route parameters.
    fn url_for(&self, route: &RouteParams) -> Result<String, HostError>;

    /// Call the accessor `name` on this context (for example a named route helper).
    ///
    /// `Ok(None)` means the accessor exists but has no url right now.
    fn call_accessor(&self, name: &str) -> Result<Option<String>, HostError>;

    /// Append a fragment to the output stream of the current render.
    fn concat(&self, fragment: Markup);

    /// Create a link to `url` displaying `text`.
    fn link_to(&self, text: &str, url: &str) -> Markup {
        Markup::element("a", &[("href", url)], &self.text(text))
    }

    /// Wrap `inner` in a `tag` element.
    fn content_tag(&self, tag: &str, inner: Markup) -> Markup {
        Markup::element(tag, &[], &inner)
    }

    /// Turn plain text into markup.
    fn text(&self, text: &str) -> Markup {
        Markup::escape(text)
    }
}
