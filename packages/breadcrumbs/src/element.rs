use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use crate::context::RenderContext;
use crate::controller::Controller;
use crate::error::{BreadcrumbError, HostError, Result};

/// Interpolation parameters for a translated label.
pub type Params = BTreeMap<String, String>;

/// A structured set of route parameters, handed to the host's url generator.
///
/// ```rust
/// # use breadcrumbs::RouteParams;
/// let route = RouteParams::new().with("controller", "books").with("id", 7);
/// assert_eq!(route.get("id"), Some("7"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.insert(key.into(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for RouteParams {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// What a breadcrumb displays.
#[derive(Clone)]
pub enum Label {
    /// Displayed as-is.
    Text(String),

    /// Translated in the scope of the declaring controller.
    Key(String),

    /// Translated in the scope of the declaring controller with interpolation parameters.
    KeyWithParams(String, Params),

    /// Computed from the declaring controller when the trail is rendered.
    ///
    /// The returned label must not itself be dynamic.
    Dynamic(Rc<dyn Fn(&dyn Controller) -> Label>),
}

impl Label {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn key(key: impl Into<String>) -> Self {
        Self::Key(key.into())
    }

    pub fn key_with<K, V>(key: impl Into<String>, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: ToString,
    {
        let params = params
            .into_iter()
            .map(|(k, v)| (k.into(), v.to_string()))
            .collect();
        Self::KeyWithParams(key.into(), params)
    }

    pub fn dynamic(f: impl Fn(&dyn Controller) -> Label + 'static) -> Self {
        Self::Dynamic(Rc::new(f))
    }

    /// Read a label from its serialized form.
    ///
    /// - `"Home"` is static text
    /// - `{"key": "dashboard"}` is a lookup key
    /// - `{"key": "book", "params": {"title": "Dune"}}` and `["book", {"title": "Dune"}]` are
    ///   lookup keys with interpolation parameters
    ///
    /// Anything else fails with [`BreadcrumbError::UnsupportedLabelType`].
    pub fn from_value(value: &Value) -> Result<Self> {
        let unsupported = || BreadcrumbError::UnsupportedLabelType(value.to_string());

        match value {
            Value::String(text) => Ok(Self::Text(text.clone())),
            Value::Object(object) => {
                let key = object
                    .get("key")
                    .and_then(Value::as_str)
                    .ok_or_else(unsupported)?;
                match object.get("params") {
                    None => Ok(Self::Key(key.to_string())),
                    Some(params) => {
                        let params = scalar_map(params).ok_or_else(unsupported)?;
                        Ok(Self::KeyWithParams(key.to_string(), params))
                    }
                }
            }
            Value::Array(pair) => match pair.as_slice() {
                [Value::String(key), params] => {
                    let params = scalar_map(params).ok_or_else(unsupported)?;
                    Ok(Self::KeyWithParams(key.clone(), params))
                }
                _ => Err(unsupported()),
            },
            _ => Err(unsupported()),
        }
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Key(key) => f.debug_tuple("Key").field(key).finish(),
            Self::KeyWithParams(key, params) => f
                .debug_tuple("KeyWithParams")
                .field(key)
                .field(params)
                .finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Where a breadcrumb links to.
#[derive(Clone, Default)]
pub enum Path {
    /// A literal url.
    Url(String),

    /// Route parameters passed to the host's url generator.
    Route(RouteParams),

    /// Computed from the render context when the trail is rendered.
    ///
    /// Host errors returned by the closure abort the render like any other host failure.
    Dynamic(Rc<dyn Fn(&dyn RenderContext) -> Result<Option<String>, HostError>>),

    /// The name of an accessor on the render context, such as `root_path`.
    Accessor(String),

    /// The breadcrumb is not linked.
    #[default]
    Absent,
}

impl Path {
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    pub fn accessor(name: impl Into<String>) -> Self {
        Self::Accessor(name.into())
    }

    pub fn dynamic(
        f: impl Fn(&dyn RenderContext) -> Result<Option<String>, HostError> + 'static,
    ) -> Self {
        Self::Dynamic(Rc::new(f))
    }

    /// Read a path from its serialized form.
    ///
    /// - `"/books"` is a literal url
    /// - `null` is no link at all
    /// - `{"accessor": "root_path"}` names an accessor on the render context
    /// - any other object is a set of route parameters
    ///
    /// Anything else fails with [`BreadcrumbError::UnsupportedPathType`].
    pub fn from_value(value: &Value) -> Result<Self> {
        let unsupported = || BreadcrumbError::UnsupportedPathType(value.to_string());

        match value {
            Value::Null => Ok(Self::Absent),
            Value::String(url) => Ok(Self::Url(url.clone())),
            Value::Object(object) => {
                if let Some(accessor) = object.get("accessor") {
                    if object.len() != 1 {
                        return Err(unsupported());
                    }
                    let name = accessor.as_str().ok_or_else(unsupported)?;
                    return Ok(Self::Accessor(name.to_string()));
                }
                let params = scalar_map(value).ok_or_else(unsupported)?;
                Ok(Self::Route(RouteParams(params)))
            }
            _ => Err(unsupported()),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.debug_tuple("Url").field(url).finish(),
            Self::Route(route) => f.debug_tuple("Route").field(route).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
            Self::Accessor(name) => f.debug_tuple("Accessor").field(name).finish(),
            Self::Absent => f.write_str("Absent"),
        }
    }
}

impl From<&str> for Path {
    fn from(url: &str) -> Self {
        Self::Url(url.to_string())
    }
}

impl From<String> for Path {
    fn from(url: String) -> Self {
        Self::Url(url)
    }
}

impl From<RouteParams> for Path {
    fn from(route: RouteParams) -> Self {
        Self::Route(route)
    }
}

impl<T: Into<Path>> From<Option<T>> for Path {
    fn from(path: Option<T>) -> Self {
        path.map(Into::into).unwrap_or_default()
    }
}

/// A single breadcrumb in a [`Trail`](crate::Trail).
#[derive(Clone)]
pub struct Element {
    pub label: Label,
    pub path: Path,

    /// The controller that declared this breadcrumb. Label lookups are scoped to it.
    pub owner: Rc<dyn Controller>,
}

impl Element {
    pub fn new(label: impl Into<Label>, path: impl Into<Path>, owner: Rc<dyn Controller>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            owner,
        }
    }

    /// Read an element from `{"label": .., "path": ..}`.
    ///
    /// The path is optional. A value that is not an object is read as a bare label with no path.
    pub fn from_value(value: &Value, owner: Rc<dyn Controller>) -> Result<Self> {
        let Value::Object(object) = value else {
            return Ok(Self::new(Label::from_value(value)?, Path::Absent, owner));
        };

        let label = object.get("label").unwrap_or(&Value::Null);
        let path = object.get("path").unwrap_or(&Value::Null);

        Ok(Self::new(
            Label::from_value(label)?,
            Path::from_value(path)?,
            owner,
        ))
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("label", &self.label)
            .field("path", &self.path)
            .field("owner", &self.owner.controller_path())
            .finish()
    }
}

// Flattens an object of strings, numbers and booleans into string pairs.
fn scalar_map(value: &Value) -> Option<BTreeMap<String, String>> {
    let object = value.as_object()?;
    let mut map = BTreeMap::new();
    for (key, value) in object {
        let value = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => return None,
        };
        map.insert(key.clone(), value);
    }
    Some(map)
}
