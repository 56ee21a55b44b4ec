#![doc = include_str!("../README.md")]

mod builder;
mod config;
mod context;
mod controller;
mod declare;
mod element;
mod error;
mod markup;
mod memory;
mod trail;

pub mod resolve;

pub use crate::builder::{Builder, SimpleBuilder};
pub use crate::config::{BreadcrumbsConfig, DEFAULT_SEPARATOR};
pub use crate::context::RenderContext;
pub use crate::controller::{Controller, ControllerPath, LookupScope, TRANSLATION_NAMESPACE};
pub use crate::declare::{Declarations, HookOptions};
pub use crate::element::{Element, Label, Params, Path, RouteParams};
pub use crate::error::{BreadcrumbError, HostError, Result};
pub use crate::markup::Markup;
pub use crate::memory::MemoryContext;
pub use crate::trail::Trail;

/// Render the breadcrumbs of `trail`.
///
/// Uses the builder injected through [`BreadcrumbsConfig::builder`], or [`SimpleBuilder`].
pub fn render_breadcrumbs(
    cx: &dyn RenderContext,
    trail: &Trail,
    config: &BreadcrumbsConfig,
) -> Result<Markup> {
    let builder = config.resolved_builder();
    tracing::debug!(
        elements = trail.len(),
        custom_builder = config.builder.is_some(),
        "rendering breadcrumbs"
    );
    builder.render(cx, trail.elements(), config)
}

/// Render the breadcrumbs of `trail` and append them to the output of `cx`.
///
/// The rendered trail is handed to `block`, and whatever it returns is written out with
/// [`RenderContext::concat`]. Nothing is written if rendering fails.
///
/// ```rust
/// # use breadcrumbs::*;
/// let cx = MemoryContext::new();
/// let mut trail = Trail::new(ControllerPath::new("books"));
/// trail.add_breadcrumb("Home", "/");
/// trail.add_breadcrumb("Books", "/books");
///
/// render_breadcrumbs_with(&cx, &trail, &BreadcrumbsConfig::default(), |crumbs| {
///     Markup::from_trusted(format!("<nav>{crumbs}</nav>"))
/// })
/// .unwrap();
///
/// assert_eq!(cx.output(), "<nav><a href=\"/\">Home</a> » Books</nav>");
/// ```
pub fn render_breadcrumbs_with(
    cx: &dyn RenderContext,
    trail: &Trail,
    config: &BreadcrumbsConfig,
    block: impl FnOnce(Markup) -> Markup,
) -> Result<()> {
    let content = render_breadcrumbs(cx, trail, config)?;
    cx.concat(block(content));
    Ok(())
}
