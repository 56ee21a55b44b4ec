use std::fmt::{self, Display};

use crate::element::{Label, Path};
use crate::error::HostError;

/// The namespace every breadcrumb translation lives under.
pub const TRANSLATION_NAMESPACE: &str = "breadcrumbs";

/// The controller (or handler) that declared a breadcrumb.
///
/// Labels given as lookup keys are translated in a scope derived from the declaring
/// controller's path, so `:dashboard` declared in `admin/users` is looked up as
/// `breadcrumbs.admin/users.dashboard`.
pub trait Controller {
    /// The route path of this controller, e.g. `admin/users`.
    fn controller_path(&self) -> String;

    /// Call the `breadcrumb_<name>` method of this controller.
    ///
    /// Used by [`Declarations::add_method`](crate::Declarations::add_method). A missing label
    /// in the returned pair means "don't add a breadcrumb for this request".
    fn breadcrumb_method(&self, name: &str) -> Result<(Option<Label>, Path), HostError> {
        Err(format!(
            "undefined method `breadcrumb_{name}` for controller `{}`",
            self.controller_path()
        )
        .into())
    }
}

/// A controller that is nothing more than its path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControllerPath(String);

impl ControllerPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }
}

impl Controller for ControllerPath {
    fn controller_path(&self) -> String {
        self.0.clone()
    }
}

/// The scope a breadcrumb translation is looked up in.
///
/// Displays as `breadcrumbs.<controller-path>`. Hosts with nested translation tables can use
/// [`LookupScope::segments`] instead, which splits the controller path on `/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupScope {
    namespace: &'static str,
    controller_path: String,
}

impl LookupScope {
    pub fn for_controller(controller: &dyn Controller) -> Self {
        Self {
            namespace: TRANSLATION_NAMESPACE,
            controller_path: controller.controller_path(),
        }
    }

    /// The scope as a list of keys: the namespace followed by each controller path segment.
    pub fn segments(&self) -> Vec<&str> {
        std::iter::once(self.namespace)
            .chain(self.controller_path.split('/').filter(|s| !s.is_empty()))
            .collect()
    }
}

impl Display for LookupScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.controller_path.is_empty() {
            f.write_str(self.namespace)
        } else {
            write!(f, "{}.{}", self.namespace, self.controller_path)
        }
    }
}
