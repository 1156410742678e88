//! Widget types.
//!
//! # Architecture
//!
//! Every widget is one variant of the closed [`Widget`] enum:
//! - [`Button`] - runs a bound action when triggered
//! - [`Toggle`] - flips a boolean state
//! - [`Slider`] - holds an integer clamped to `[low, high]`
//!
//! Each variant embeds a [`WidgetBase`] carrying its id and label. Widgets are
//! only created through a [`Registry`](crate::Registry), which assigns the id
//! and keeps ownership; callers get a copyable [`WidgetHandle`] back.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut registry = Registry::new();
//! let toggle: WidgetHandle<Toggle> = registry.add_toggle().label("Ears").build();
//!
//! if let Some(toggle) = registry.get_as_mut(toggle) {
//!     toggle.toggle();
//! }
//! ```

pub mod button;
pub mod handle;
pub mod record;
pub mod slider;
pub mod toggle;

pub use button::*;
pub use handle::*;
pub use record::*;
pub use slider::*;
pub use toggle::*;

use std::fmt;

use crate::kind::WidgetKind;
use crate::widget_id::WidgetId;

/// Identity shared by every widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetBase {
    id: WidgetId,
    label: String,
}

impl WidgetBase {
    /// Create the base for a widget of `kind`.
    ///
    /// Without an explicit label the widget is called `<Kind>_<id>`.
    pub(crate) fn new(id: WidgetId, kind: WidgetKind, label: Option<String>) -> Self {
        let label = label.unwrap_or_else(|| format!("{}_{}", kind.name(), id.as_u64()));
        Self { id, label }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }
}

/// A registered widget.
#[derive(Debug)]
pub enum Widget {
    Button(Button),
    Toggle(Toggle),
    Slider(Slider),
}

impl Widget {
    pub fn base(&self) -> &WidgetBase {
        match self {
            Widget::Button(button) => button.base(),
            Widget::Toggle(toggle) => toggle.base(),
            Widget::Slider(slider) => slider.base(),
        }
    }

    pub fn base_mut(&mut self) -> &mut WidgetBase {
        match self {
            Widget::Button(button) => button.base_mut(),
            Widget::Toggle(toggle) => toggle.base_mut(),
            Widget::Slider(slider) => slider.base_mut(),
        }
    }

    /// Get the widget's unique identifier.
    pub fn id(&self) -> WidgetId {
        self.base().id()
    }

    pub fn label(&self) -> &str {
        self.base().label()
    }

    pub fn kind(&self) -> WidgetKind {
        match self {
            Widget::Button(_) => WidgetKind::Button,
            Widget::Toggle(_) => WidgetKind::Toggle,
            Widget::Slider(_) => WidgetKind::Slider,
        }
    }

    pub fn as_button(&self) -> Option<&Button> {
        Button::from_widget(self)
    }

    pub fn as_button_mut(&mut self) -> Option<&mut Button> {
        Button::from_widget_mut(self)
    }

    pub fn as_toggle(&self) -> Option<&Toggle> {
        Toggle::from_widget(self)
    }

    pub fn as_toggle_mut(&mut self) -> Option<&mut Toggle> {
        Toggle::from_widget_mut(self)
    }

    pub fn as_slider(&self) -> Option<&Slider> {
        Slider::from_widget(self)
    }

    pub fn as_slider_mut(&mut self) -> Option<&mut Slider> {
        Slider::from_widget_mut(self)
    }

    /// Snapshot of this widget's identity and state.
    pub fn to_record(&self) -> WidgetRecord {
        let state = match self {
            Widget::Button(button) => WidgetState::Button {
                args: button.args().positional().to_vec(),
                named: button.args().named().clone(),
            },
            Widget::Toggle(toggle) => WidgetState::Toggle { state: toggle.state() },
            Widget::Slider(slider) => WidgetState::Slider {
                low: slider.low(),
                high: slider.high(),
                value: slider.value(),
            },
        };
        WidgetRecord {
            id: self.id(),
            kind: self.kind(),
            label: self.label().to_string(),
            state,
        }
    }

    /// The record rendered as JSON. For display and debugging only.
    pub fn to_json(&self) -> serde_json::Value {
        self.to_record().to_json()
    }
}

impl fmt::Display for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Button {}
    impl Sealed for super::Toggle {}
    impl Sealed for super::Slider {}
}

/// Implemented by each concrete widget type so typed handles can resolve
/// against a [`Widget`].
pub trait WidgetVariant: sealed::Sealed + Sized {
    const KIND: WidgetKind;

    fn from_widget(widget: &Widget) -> Option<&Self>;

    fn from_widget_mut(widget: &mut Widget) -> Option<&mut Self>;

    fn into_widget(self) -> Widget;
}

macro_rules! impl_widget_variant {
    ($ty:ident) => {
        impl WidgetVariant for $ty {
            const KIND: WidgetKind = WidgetKind::$ty;

            fn from_widget(widget: &Widget) -> Option<&Self> {
                match widget {
                    Widget::$ty(inner) => Some(inner),
                    _ => None,
                }
            }

            fn from_widget_mut(widget: &mut Widget) -> Option<&mut Self> {
                match widget {
                    Widget::$ty(inner) => Some(inner),
                    _ => None,
                }
            }

            fn into_widget(self) -> Widget {
                Widget::$ty(self)
            }
        }

        impl From<$ty> for Widget {
            fn from(inner: $ty) -> Self {
                Widget::$ty(inner)
            }
        }
    };
}

impl_widget_variant!(Button);
impl_widget_variant!(Toggle);
impl_widget_variant!(Slider);
