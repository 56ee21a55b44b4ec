use std::rc::Rc;

use crate::controller::Controller;
use crate::element::{Element, Label, Path};
use crate::error::Result;
use crate::trail::Trail;

/// Which actions of a controller a declared breadcrumb applies to.
///
/// ```rust
/// # use breadcrumbs::HookOptions;
/// let options = HookOptions::new().except(["index"]);
/// assert!(options.applies_to("show"));
/// assert!(!options.applies_to("index"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HookOptions {
    only: Option<Vec<String>>,
    except: Vec<String>,
}

impl HookOptions {
    /// Apply to every action.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply only to `actions`.
    pub fn only<S: ToString>(mut self, actions: impl IntoIterator<Item = S>) -> Self {
        self.only
            .get_or_insert_with(Vec::new)
            .extend(actions.into_iter().map(|a| a.to_string()));
        self
    }

    /// Never apply to `actions`.
    pub fn except<S: ToString>(mut self, actions: impl IntoIterator<Item = S>) -> Self {
        self.except
            .extend(actions.into_iter().map(|a| a.to_string()));
        self
    }

    pub fn applies_to(&self, action: &str) -> bool {
        if self.except.iter().any(|a| a == action) {
            return false;
        }
        match &self.only {
            Some(only) => only.iter().any(|a| a == action),
            None => true,
        }
    }
}

#[derive(Clone, Debug)]
enum Source {
    Static(Label, Path),
    Method(String),
}

#[derive(Clone, Debug)]
struct Registration {
    source: Source,
    options: HookOptions,
}

/// Breadcrumbs declared once for a controller type, added to the trail of every matching request.
///
/// The host runs [`Declarations::apply`] from its before-action pipeline. Breadcrumbs added
/// this way are owned by the controller the declarations were made for, so a parent
/// controller's keys keep being looked up in the parent's scope.
///
/// ```rust
/// # use breadcrumbs::*;
/// let declarations = Declarations::new(ControllerPath::new("books"))
///     .add("Home", "/", HookOptions::new())
///     .add("Books", "/books", HookOptions::new().except(["index"]));
///
/// let mut trail = Trail::new(ControllerPath::new("books"));
/// declarations.apply("index", &ControllerPath::new("books"), &mut trail).unwrap();
/// assert_eq!(trail.len(), 1);
/// ```
pub struct Declarations {
    owner: Rc<dyn Controller>,
    registrations: Vec<Registration>,
}

impl Declarations {
    pub fn new(owner: impl Controller + 'static) -> Self {
        Self {
            owner: Rc::new(owner),
            registrations: Vec::new(),
        }
    }

    /// Declare a breadcrumb with a fixed label and path.
    pub fn add(
        mut self,
        label: impl Into<Label>,
        path: impl Into<Path>,
        options: HookOptions,
    ) -> Self {
        self.registrations.push(Registration {
            source: Source::Static(label.into(), path.into()),
            options,
        });
        self
    }

    /// Declare a breadcrumb computed per request by the controller's `breadcrumb_<name>` method.
    ///
    /// When the method returns no label the breadcrumb is skipped for that request.
    pub fn add_method(mut self, name: impl Into<String>, options: HookOptions) -> Self {
        self.registrations.push(Registration {
            source: Source::Method(name.into()),
            options,
        });
        self
    }

    /// Add the breadcrumbs declared for `action`, in declaration order, to `trail`.
    ///
    /// `controller` is the instance handling the request; its `breadcrumb_<name>` methods are
    /// called for method declarations. If any method fails, nothing is added to `trail`.
    pub fn apply(&self, action: &str, controller: &dyn Controller, trail: &mut Trail) -> Result<()> {
        let mut pending = Vec::new();
        for registration in &self.registrations {
            if !registration.options.applies_to(action) {
                continue;
            }

            let (label, path) = match &registration.source {
                Source::Static(label, path) => (Some(label.clone()), path.clone()),
                Source::Method(name) => controller.breadcrumb_method(name)?,
            };

            // TODO: a method returning no label may be hiding a lookup failure; consider
            // surfacing it as an error once hosts can opt into strict declarations.
            let Some(label) = label else {
                tracing::debug!(
                    action,
                    source = ?registration.source,
                    "skipping declared breadcrumb without a label"
                );
                continue;
            };

            pending.push(Element::new(label, path, self.owner.clone()));
        }

        for element in pending {
            trail.push(element);
        }
        Ok(())
    }
}

impl std::fmt::Debug for Declarations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Declarations")
            .field("owner", &self.owner.controller_path())
            .field("registrations", &self.registrations)
            .finish()
    }
}
