//! Widget API errors.

use thiserror::Error;

use crate::kind::WidgetKind;
use crate::widget_id::WidgetId;

/// Errors caused by invalid use of the widget API.
///
/// These are always returned to the caller. Failures inside button callbacks
/// are a different matter, see [`ActionError`](crate::action::ActionError).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// Slider value outside its bounds.
    #[error("value {attempted} out of range for slider with range [{low}, {high}]")]
    OutOfRange { attempted: i64, low: i64, high: i64 },

    /// Slider created with `low > high`.
    #[error("invalid slider bounds: low {low} is greater than high {high}")]
    InvalidBounds { low: i64, high: i64 },

    /// No widget registered under this id.
    #[error("no widget registered with id {0}")]
    NotFound(WidgetId),

    /// The widget exists but is of another kind.
    #[error("widget {id} is a {found}, expected a {expected}")]
    KindMismatch {
        id: WidgetId,
        expected: WidgetKind,
        found: WidgetKind,
    },
}

/// Result type for widget operations.
pub type WidgetResult<T> = Result<T, WidgetError>;
