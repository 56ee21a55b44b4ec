//! Turning the declared label and path of a breadcrumb into the text and url that get rendered.

use crate::context::RenderContext;
use crate::controller::{Controller, LookupScope};
use crate::element::{Label, Params, Path};
use crate::error::{BreadcrumbError, Result};

/// Resolve a label into the text displayed for it.
///
/// Lookup keys are translated in the scope of `owner`, the controller that declared the
/// breadcrumb. A dynamic label is called with `owner` once; its result must be a static
/// label or key.
pub fn resolve_name(label: &Label, owner: &dyn Controller, cx: &dyn RenderContext) -> Result<String> {
    let computed;
    let label = match label {
        Label::Dynamic(f) => {
            computed = f(owner);
            &computed
        }
        label => label,
    };

    let name = match label {
        Label::Text(text) => text.clone(),
        Label::Key(key) => translate(cx, key, owner, &Params::new())?,
        Label::KeyWithParams(key, params) => translate(cx, key, owner, params)?,
        Label::Dynamic(_) => {
            return Err(BreadcrumbError::UnsupportedLabelType(
                "a dynamic label returned another dynamic label".to_string(),
            ))
        }
    };

    tracing::trace!(?label, %name, "resolved breadcrumb label");
    Ok(name)
}

fn translate(
    cx: &dyn RenderContext,
    key: &str,
    owner: &dyn Controller,
    params: &Params,
) -> Result<String> {
    let scope = LookupScope::for_controller(owner);
    Ok(cx.translate(key, &scope, params)?)
}

/// Resolve a path into the url a breadcrumb links to. `None` means the breadcrumb is not linked.
pub fn resolve_path(path: &Path, cx: &dyn RenderContext) -> Result<Option<String>> {
    let url = match path {
        Path::Dynamic(f) => f(cx)?,
        Path::Route(route) => Some(cx.url_for(route)?),
        Path::Accessor(name) => cx.call_accessor(name)?,
        Path::Url(url) => Some(url.clone()),
        Path::Absent => None,
    };

    tracing::trace!(?path, ?url, "resolved breadcrumb path");
    Ok(url)
}
