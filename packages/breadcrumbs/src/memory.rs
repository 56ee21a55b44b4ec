use std::cell::RefCell;
use std::collections::HashMap;

use crate::context::RenderContext;
use crate::controller::LookupScope;
use crate::element::{Params, RouteParams};
use crate::error::HostError;
use crate::markup::Markup;

type RouteFn = Box<dyn Fn(&RouteParams) -> Result<String, HostError>>;
type AccessorFn = Box<dyn Fn() -> Option<String>>;

#[derive(Default)]
struct MemoryContextState {
    lookups: Vec<(String, String)>,
    output: String,
}

/// A [`RenderContext`] that keeps translations, routes and accessors in memory.
///
/// Useful for rendering trails outside of a web framework and in tests.
///
/// ```rust
/// # use breadcrumbs::*;
/// let cx = MemoryContext::new()
///     .with_translation("breadcrumbs.books.index", "Books")
///     .with_accessor("root_path", || Some("/".to_string()));
///
/// let mut trail = Trail::new(ControllerPath::new("books"));
/// trail.add_breadcrumb("Home", Path::accessor("root_path"));
/// trail.add_breadcrumb(Label::key("index"), "/books");
///
/// let html = render_breadcrumbs(&cx, &trail, &BreadcrumbsConfig::default()).unwrap();
/// assert_eq!(html.as_str(), "<a href=\"/\">Home</a> » Books");
/// ```
pub struct MemoryContext {
    translations: HashMap<String, String>,
    accessors: HashMap<String, AccessorFn>,
    routes: RouteFn,
    state: RefCell<MemoryContextState>,
}

impl Default for MemoryContext {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryContext {
    pub fn new() -> Self {
        Self {
            translations: HashMap::new(),
            accessors: HashMap::new(),
            routes: Box::new(default_url_for),
            state: RefCell::new(MemoryContextState::default()),
        }
    }

    /// Add a translation under its full key, e.g. `breadcrumbs.admin/users.dashboard`.
    ///
    /// `%{name}` in the translation is replaced by the `name` interpolation parameter.
    pub fn with_translation(mut self, key: impl ToString, translation: impl ToString) -> Self {
        self.translations
            .insert(key.to_string(), translation.to_string());
        self
    }

    /// Register an accessor that [`Path::Accessor`](crate::Path::Accessor) paths can name.
    pub fn with_accessor(
        mut self,
        name: impl ToString,
        accessor: impl Fn() -> Option<String> + 'static,
    ) -> Self {
        self.accessors.insert(name.to_string(), Box::new(accessor));
        self
    }

    /// Replace the url generator used for [`Path::Route`](crate::Path::Route) paths.
    ///
    /// The default generator builds `/<controller>[/<id>][/<action>]` and appends any other
    /// parameter as a query string. The `index` and `show` actions are left out of the path.
    pub fn with_routes(
        mut self,
        routes: impl Fn(&RouteParams) -> Result<String, HostError> + 'static,
    ) -> Self {
        self.routes = Box::new(routes);
        self
    }

    /// Every translation lookup made so far, as `(scope, key)` pairs.
    pub fn lookups(&self) -> Vec<(String, String)> {
        self.state.borrow().lookups.clone()
    }

    /// Everything appended through [`RenderContext::concat`].
    pub fn output(&self) -> String {
        self.state.borrow().output.clone()
    }
}

impl RenderContext for MemoryContext {
    fn translate(
        &self,
        key: &str,
        scope: &LookupScope,
        params: &Params,
    ) -> Result<String, HostError> {
        self.state
            .borrow_mut()
            .lookups
            .push((scope.to_string(), key.to_string()));

        let full_key = format!("{scope}.{key}");
        let Some(translation) = self.translations.get(&full_key) else {
            return Err(format!("translation missing: {full_key}").into());
        };

        let mut translation = translation.clone();
        for (name, value) in params {
            translation = translation.replace(&format!("%{{{name}}}"), value);
        }
        Ok(translation)
    }

    fn url_for(&self, route: &RouteParams) -> Result<String, HostError> {
        (self.routes)(route)
    }

    fn call_accessor(&self, name: &str) -> Result<Option<String>, HostError> {
        match self.accessors.get(name) {
            Some(accessor) => Ok(accessor()),
            None => Err(format!("undefined accessor `{name}`").into()),
        }
    }

    fn concat(&self, fragment: Markup) {
        self.state.borrow_mut().output.push_str(fragment.as_str());
    }
}

fn default_url_for(route: &RouteParams) -> Result<String, HostError> {
    let Some(controller) = route.get("controller") else {
        return Err(format!("no route matches {route:?}").into());
    };

    let mut url = format!("/{}", controller.trim_matches('/'));
    if let Some(id) = route.get("id") {
        url.push('/');
        url.push_str(id);
    }
    match route.get("action") {
        None | Some("index") | Some("show") => {}
        Some(action) => {
            url.push('/');
            url.push_str(action);
        }
    }

    let mut query = form_urlencoded::Serializer::new(String::new());
    let mut has_query = false;
    for (key, value) in route.iter() {
        if !matches!(key, "controller" | "action" | "id") {
            query.append_pair(key, value);
            has_query = true;
        }
    }
    if has_query {
        url.push('?');
        url.push_str(&query.finish());
    }

    Ok(url)
}
