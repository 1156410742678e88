//! Widget identifiers.

use serde::Serialize;
use std::fmt;

/// Unique identifier of a registered widget.
///
/// Ids are handed out by a [`Registry`](crate::Registry) in construction order,
/// starting at 0. They are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Create a widget ID from a raw u64.
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw u64 value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for WidgetId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Monotonic id source owned by a registry.
#[derive(Debug, Default)]
pub(crate) struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// The id the next call to [`IdAllocator::allocate`] will return.
    pub(crate) fn peek(&self) -> WidgetId {
        WidgetId(self.next)
    }

    pub(crate) fn allocate(&mut self) -> WidgetId {
        let id = WidgetId(self.next);
        self.next += 1;
        id
    }
}
