use super::WidgetBase;
use crate::error::{WidgetError, WidgetResult};
use crate::widget_id::WidgetId;

/// Slider widget - an integer value within `[low, high]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slider {
    base: WidgetBase,
    low: i64,
    high: i64,
    value: i64,
}

impl Slider {
    pub const DEFAULT_LOW: i64 = 0;
    pub const DEFAULT_HIGH: i64 = 100;
    pub const DEFAULT_VALUE: i64 = 50;

    /// Check that `low..=high` is a valid range containing `value`.
    pub(crate) fn validate(low: i64, high: i64, value: i64) -> WidgetResult<()> {
        if low > high {
            return Err(WidgetError::InvalidBounds { low, high });
        }
        check_range(value, low, high)
    }

    /// Caller must have run [`Slider::validate`] on the same values.
    pub(crate) fn new(base: WidgetBase, low: i64, high: i64, value: i64) -> Self {
        debug_assert!(Self::validate(low, high, value).is_ok());
        Self { base, low, high, value }
    }

    pub fn base(&self) -> &WidgetBase {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    pub fn id(&self) -> WidgetId {
        self.base.id()
    }

    pub fn label(&self) -> &str {
        self.base.label()
    }

    pub fn low(&self) -> i64 {
        self.low
    }

    pub fn high(&self) -> i64 {
        self.high
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Set the value. Fails, leaving the value untouched, unless
    /// `low <= new_value <= high`.
    pub fn set_value(&mut self, new_value: i64) -> WidgetResult<()> {
        check_range(new_value, self.low, self.high)?;
        self.value = new_value;
        tracing::trace!(widget = %self.base.id(), value = new_value, "slider value set");
        Ok(())
    }
}

fn check_range(value: i64, low: i64, high: i64) -> WidgetResult<()> {
    if (low..=high).contains(&value) {
        Ok(())
    } else {
        Err(WidgetError::OutOfRange {
            attempted: value,
            low,
            high,
        })
    }
}
