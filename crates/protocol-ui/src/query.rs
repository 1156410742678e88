//! Id filters for registry queries.

use std::ops::{Range, RangeInclusive};

use crate::widget::WidgetHandle;
use crate::widget_id::WidgetId;
use protocol_core::alloc::HashSet;

/// Which ids a query accepts.
///
/// Converts from a single id or handle, a raw `u64`, arrays, slices and vecs
/// of ids, and ranges of raw ids. Membership is checked per id, so a range
/// never implies the ids in it exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum IdFilter {
    /// Every id.
    #[default]
    Any,
    /// Exactly these ids.
    Set(HashSet<WidgetId>),
    /// Raw ids in `start..end`.
    Range(Range<u64>),
}

impl IdFilter {
    /// Returns true if `id` passes the filter.
    pub fn matches(&self, id: WidgetId) -> bool {
        match self {
            IdFilter::Any => true,
            IdFilter::Set(ids) => ids.contains(&id),
            IdFilter::Range(range) => range.contains(&id.as_u64()),
        }
    }
}

impl From<WidgetId> for IdFilter {
    fn from(id: WidgetId) -> Self {
        IdFilter::Set(HashSet::from_iter([id]))
    }
}

impl From<u64> for IdFilter {
    fn from(id: u64) -> Self {
        WidgetId::from_raw(id).into()
    }
}

impl<T> From<WidgetHandle<T>> for IdFilter {
    fn from(handle: WidgetHandle<T>) -> Self {
        handle.id().into()
    }
}

impl From<&[WidgetId]> for IdFilter {
    fn from(ids: &[WidgetId]) -> Self {
        ids.iter().copied().collect()
    }
}

impl From<Vec<WidgetId>> for IdFilter {
    fn from(ids: Vec<WidgetId>) -> Self {
        ids.into_iter().collect()
    }
}

impl<const N: usize> From<[WidgetId; N]> for IdFilter {
    fn from(ids: [WidgetId; N]) -> Self {
        ids.into_iter().collect()
    }
}

impl<const N: usize> From<[u64; N]> for IdFilter {
    fn from(ids: [u64; N]) -> Self {
        ids.into_iter().map(WidgetId::from_raw).collect()
    }
}

impl From<Range<u64>> for IdFilter {
    fn from(range: Range<u64>) -> Self {
        IdFilter::Range(range)
    }
}

impl From<RangeInclusive<u64>> for IdFilter {
    fn from(range: RangeInclusive<u64>) -> Self {
        let (start, end) = range.into_inner();
        match end.checked_add(1) {
            Some(end) => IdFilter::Range(start..end),
            // saturates: u64::MAX itself is never a live id
            None => IdFilter::Range(start..u64::MAX),
        }
    }
}

impl FromIterator<WidgetId> for IdFilter {
    fn from_iter<I: IntoIterator<Item = WidgetId>>(iter: I) -> Self {
        IdFilter::Set(iter.into_iter().collect())
    }
}
