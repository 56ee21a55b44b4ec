use crate::config::BreadcrumbsConfig;
use crate::context::RenderContext;
use crate::controller::Controller;
use crate::element::{Element, Label, Path};
use crate::error::{BreadcrumbError, Result};
use crate::markup::Markup;
use crate::resolve::{resolve_name, resolve_path};

/// Turns a trail of breadcrumbs into markup.
///
/// Implement this to replace how trails are rendered, and hand the builder to
/// [`BreadcrumbsConfig::builder`]. [`Builder::compute_name`] and [`Builder::compute_path`]
/// resolve labels and paths the same way [`SimpleBuilder`] does.
pub trait Builder {
    /// Render `elements`, root first, in `cx`.
    ///
    /// There is no default rendering: a builder that doesn't override this fails with
    /// [`BreadcrumbError::NotImplemented`].
    fn render(
        &self,
        cx: &dyn RenderContext,
        elements: &[Element],
        config: &BreadcrumbsConfig,
    ) -> Result<Markup> {
        let _ = (cx, elements, config);
        Err(BreadcrumbError::NotImplemented)
    }

    /// The text displayed for `label`, declared by `owner`.
    fn compute_name(
        &self,
        cx: &dyn RenderContext,
        label: &Label,
        owner: &dyn Controller,
    ) -> Result<String> {
        resolve_name(label, owner, cx)
    }

    /// The url `path` links to, if any.
    fn compute_path(&self, cx: &dyn RenderContext, path: &Path) -> Result<Option<String>> {
        resolve_path(path, cx)
    }
}

/// The default builder: links separated by [`BreadcrumbsConfig::separator`].
///
/// The last breadcrumb is the current page and is never linked; neither is a breadcrumb
/// without a url. With a `tag` every breadcrumb is wrapped in it, with a `wrapper` the whole
/// trail is.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleBuilder;

impl SimpleBuilder {
    fn render_element(
        &self,
        cx: &dyn RenderContext,
        element: &Element,
        is_last: bool,
        config: &BreadcrumbsConfig,
    ) -> Result<Markup> {
        let name = self.compute_name(cx, &element.label, element.owner.as_ref())?;

        // the current page is never linked, so its path isn't resolved either
        let url = if is_last {
            None
        } else {
            self.compute_path(cx, &element.path)?
        };

        let content = match url {
            Some(url) => cx.link_to(&name, &url),
            None => cx.text(&name),
        };

        Ok(match &config.tag {
            Some(tag) => cx.content_tag(tag, content),
            None => content,
        })
    }
}

impl Builder for SimpleBuilder {
    fn render(
        &self,
        cx: &dyn RenderContext,
        elements: &[Element],
        config: &BreadcrumbsConfig,
    ) -> Result<Markup> {
        let last = elements.len().saturating_sub(1);

        let mut items = Vec::with_capacity(elements.len());
        for (idx, element) in elements.iter().enumerate() {
            items.push(self.render_element(cx, element, idx == last, config)?);
        }

        let joined = Markup::join(items, &config.separator);

        Ok(match &config.wrapper {
            Some(wrapper) => cx.content_tag(wrapper, joined),
            None => joined,
        })
    }
}
