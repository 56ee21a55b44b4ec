/// An error reported by the host environment (missing translation, missing route, missing accessor...).
///
/// Host errors are carried through [`BreadcrumbError::Host`] without modification.
pub type HostError = Box<dyn std::error::Error + Send + Sync>;

/// A result with a [`BreadcrumbError`] as the error type.
pub type Result<T, E = BreadcrumbError> = std::result::Result<T, E>;

/// An error that can occur while resolving or rendering a breadcrumb trail.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BreadcrumbError {
    /// The label of a breadcrumb was not one of the supported shapes.
    #[error("unsupported breadcrumb label: {0}")]
    UnsupportedLabelType(String),

    /// The path of a breadcrumb was not one of the supported shapes.
    #[error("unsupported breadcrumb path: {0}")]
    UnsupportedPathType(String),

    /// A serialized trail was not a list of breadcrumbs.
    #[error("invalid breadcrumb trail: {0}")]
    InvalidTrail(String),

    /// The builder used to render the trail does not implement `render`.
    #[error("this breadcrumb builder does not implement `render`")]
    NotImplemented,

    /// The host environment failed while looking up a translation, url or accessor.
    #[error(transparent)]
    Host(HostError),
}

impl From<HostError> for BreadcrumbError {
    fn from(err: HostError) -> Self {
        Self::Host(err)
    }
}
