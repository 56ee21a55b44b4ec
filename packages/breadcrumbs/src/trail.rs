use std::rc::Rc;

use serde_json::Value;

use crate::controller::Controller;
use crate::element::{Element, Label, Path};
use crate::error::{BreadcrumbError, Result};

/// The breadcrumbs collected while handling one request, root first.
///
/// Create one per request. Breadcrumbs are rendered in the order they were added;
/// duplicates are kept.
pub struct Trail {
    controller: Rc<dyn Controller>,
    elements: Vec<Element>,
}

impl Trail {
    /// Create an empty trail for a request handled by `controller`.
    pub fn new(controller: impl Controller + 'static) -> Self {
        Self::for_controller(Rc::new(controller))
    }

    pub fn for_controller(controller: Rc<dyn Controller>) -> Self {
        Self {
            controller,
            elements: Vec::new(),
        }
    }

    /// Add a breadcrumb owned by the current controller.
    pub fn add_breadcrumb(&mut self, label: impl Into<Label>, path: impl Into<Path>) {
        let owner = self.controller.clone();
        self.add_breadcrumb_for(label, path, owner);
    }

    /// Add a breadcrumb whose label lookups are scoped to `owner`.
    pub fn add_breadcrumb_for(
        &mut self,
        label: impl Into<Label>,
        path: impl Into<Path>,
        owner: Rc<dyn Controller>,
    ) {
        self.push(Element::new(label, path, owner));
    }

    pub fn push(&mut self, element: Element) {
        tracing::trace!(?element, position = self.elements.len(), "adding breadcrumb");
        self.elements.push(element);
    }

    /// Add every breadcrumb of a serialized trail, owned by the current controller.
    ///
    /// `definition` is an array of `{"label": .., "path": ..}` objects, see
    /// [`Element::from_value`]. Nothing is added if any entry is malformed.
    pub fn extend_from_value(&mut self, definition: &Value) -> Result<()> {
        let Value::Array(entries) = definition else {
            return Err(BreadcrumbError::InvalidTrail(format!(
                "expected a list of breadcrumbs, got `{definition}`"
            )));
        };

        let elements = entries
            .iter()
            .map(|entry| Element::from_value(entry, self.controller.clone()))
            .collect::<Result<Vec<_>>>()?;

        for element in elements {
            self.push(element);
        }
        Ok(())
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<'a> IntoIterator for &'a Trail {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for Trail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trail")
            .field("controller", &self.controller.controller_path())
            .field("elements", &self.elements)
            .finish()
    }
}
