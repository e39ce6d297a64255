//! Attribute resolution.
//!
//! A host may expose a field either as a stored value or as something it
//! computes on demand. `Attr` captures both shapes so callers never have to
//! care which one they were given.

use std::fmt;
use std::sync::Arc;

/// A host attribute: a stored value or a zero-argument closure.
pub enum Attr<T> {
    /// A stored value, cloned out on every read.
    Value(T),
    /// A closure invoked on every read.
    Computed(Arc<dyn Fn() -> T + Send + Sync>),
}

impl<T> Attr<T> {
    /// Build an attribute that is computed each time it is read.
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::Computed(Arc::new(f))
    }

    /// Whether reading this attribute runs a closure.
    #[must_use]
    pub const fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }
}

impl<T: Clone> Attr<T> {
    /// Read the attribute, invoking it if it is computed.
    #[must_use]
    pub fn get(&self) -> T {
        match self {
            Self::Value(value) => value.clone(),
            Self::Computed(f) => f(),
        }
    }
}

impl<T> From<T> for Attr<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: Clone> Clone for Attr<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Value(value) => Self::Value(value.clone()),
            Self::Computed(f) => Self::Computed(Arc::clone(f)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Attr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Resolve an optional attribute, `None` when it is absent.
#[must_use]
pub fn resolve<T: Clone>(attr: Option<&Attr<T>>) -> Option<T> {
    attr.map(Attr::get)
}

/// Resolve an optional attribute, falling back to `default` when absent.
#[must_use]
pub fn resolve_or<T: Clone>(attr: Option<&Attr<T>>, default: T) -> T {
    match attr {
        Some(attr) => attr.get(),
        None => default,
    }
}
