//! Builders that construct and register widgets.
//!
//! A widget only exists once it is registered, so every builder borrows the
//! [`Registry`] and `build()` is the single point where an id is assigned.

use serde_json::Value;
use std::rc::Rc;

use crate::action::{Action, ActionArgs, ActionResult};
use crate::error::WidgetResult;
use crate::registry::Registry;
use crate::widget::button::default_action;
use crate::widget::{Button, Slider, Toggle, WidgetHandle};

/// Builder for a [`Button`].
pub struct ButtonBuilder<'a> {
    registry: &'a mut Registry,
    label: Option<String>,
    action: Option<Action>,
    args: ActionArgs,
}

impl<'a> ButtonBuilder<'a> {
    pub(crate) fn new(registry: &'a mut Registry) -> Self {
        Self {
            registry,
            label: None,
            action: None,
            args: ActionArgs::new(),
        }
    }

    /// Set the displayed label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the action run on trigger. Without one the button logs `Click!`.
    pub fn on_trigger<F>(mut self, action: F) -> Self
    where
        F: Fn(&ActionArgs) -> ActionResult + 'static,
    {
        self.action = Some(Rc::new(action));
        self
    }

    /// Bind the next positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value);
        self
    }

    /// Bind a named argument.
    pub fn named(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args.insert(key, value);
        self
    }

    /// Build the button and add it to the registry.
    pub fn build(self) -> WidgetHandle<Button> {
        let action = self.action.unwrap_or_else(default_action);
        let args = self.args;
        self.registry
            .insert(self.label, |base| Button::new(base, action, args))
    }
}

/// Builder for a [`Toggle`].
pub struct ToggleBuilder<'a> {
    registry: &'a mut Registry,
    label: Option<String>,
    state: bool,
}

impl<'a> ToggleBuilder<'a> {
    pub(crate) fn new(registry: &'a mut Registry) -> Self {
        Self {
            registry,
            label: None,
            state: false,
        }
    }

    /// Set the displayed label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the initial state (default `false`).
    pub fn state(mut self, state: bool) -> Self {
        self.state = state;
        self
    }

    /// Build the toggle and add it to the registry.
    pub fn build(self) -> WidgetHandle<Toggle> {
        let state = self.state;
        self.registry
            .insert(self.label, |base| Toggle::new(base, state))
    }
}

/// Builder for a [`Slider`].
pub struct SliderBuilder<'a> {
    registry: &'a mut Registry,
    label: Option<String>,
    low: i64,
    high: i64,
    value: i64,
}

impl<'a> SliderBuilder<'a> {
    pub(crate) fn new(registry: &'a mut Registry) -> Self {
        Self {
            registry,
            label: None,
            low: Slider::DEFAULT_LOW,
            high: Slider::DEFAULT_HIGH,
            value: Slider::DEFAULT_VALUE,
        }
    }

    /// Set the displayed label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the inclusive bounds (default `0..=100`).
    pub fn range(mut self, low: i64, high: i64) -> Self {
        self.low = low;
        self.high = high;
        self
    }

    /// Set the initial value (default 50).
    pub fn value(mut self, value: i64) -> Self {
        self.value = value;
        self
    }

    /// Build the slider and add it to the registry.
    ///
    /// Fails with [`InvalidBounds`](crate::WidgetError::InvalidBounds) when
    /// `low > high` and [`OutOfRange`](crate::WidgetError::OutOfRange) when the
    /// initial value is outside the bounds. A failed build registers nothing
    /// and consumes no id.
    pub fn build(self) -> WidgetResult<WidgetHandle<Slider>> {
        let Self {
            registry,
            label,
            low,
            high,
            value,
        } = self;
        Slider::validate(low, high, value)?;
        Ok(registry.insert(label, |base| Slider::new(base, low, high, value)))
    }
}
