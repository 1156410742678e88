//! Typed widget handles.

use std::fmt;
use std::marker::PhantomData;

use super::WidgetVariant;
use crate::widget_id::WidgetId;

/// Type-safe handle to a registered widget.
///
/// Returned by the registry builders. Resolving it with
/// [`Registry::get_as`](crate::Registry::get_as) yields the concrete type
/// directly, without matching on [`Widget`](super::Widget).
///
/// `PhantomData<fn() -> T>` keeps the handle `Copy`, `Send` and `Sync`
/// whatever `T` is; it is only an id.
pub struct WidgetHandle<T> {
    id: WidgetId,
    _phantom: PhantomData<fn() -> T>,
}

// Manual impls: derives would require `T: Clone` and friends.
impl<T> Clone for WidgetHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for WidgetHandle<T> {}

impl<T> PartialEq for WidgetHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for WidgetHandle<T> {}

impl<T> std::hash::Hash for WidgetHandle<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T: WidgetVariant> fmt::Debug for WidgetHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WidgetHandle<{}>({})", T::KIND, self.id)
    }
}

impl<T> WidgetHandle<T> {
    /// Only the registry mints handles.
    pub(crate) fn new(id: WidgetId) -> Self {
        Self {
            id,
            _phantom: PhantomData,
        }
    }

    /// Get the widget ID.
    pub fn id(&self) -> WidgetId {
        self.id
    }
}

impl<T> From<WidgetHandle<T>> for WidgetId {
    fn from(handle: WidgetHandle<T>) -> Self {
        handle.id
    }
}
