//! Interactable widgets for the ProtoCol control front end.
//!
//! Three widget kinds are available: [`Button`], [`Toggle`] and [`Slider`].
//! They are created through a [`Registry`], which assigns each one a
//! sequential [`WidgetId`] and keeps ownership. The host application looks
//! widgets up again by id or by kind and invokes their behaviour.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use protocol_ui::*;
//!
//! let mut registry = Registry::new();
//!
//! let blink = registry
//!     .add_button()
//!     .label("Blink")
//!     .arg("eyes")
//!     .named("times", 2)
//!     .on_trigger(|args| {
//!         let part: String = args.arg(0)?;
//!         let times: u32 = args.get("times")?;
//!         send_blink(&part, times).map_err(ActionError::failed)
//!     })
//!     .build();
//! let visor = registry.add_toggle().build();
//! let brightness = registry.add_slider().range(0, 255).value(128).build()?;
//!
//! // Action failures are logged, never returned.
//! registry.trigger(blink)?;
//! registry.toggle(visor)?;
//! registry.set_value(brightness, 200)?;
//!
//! for (id, widget) in registry.get_all(WidgetKind::Toggle | WidgetKind::Slider, IdFilter::Any) {
//!     println!("{id}: {widget}");
//! }
//! ```

pub mod action;
pub mod builder;
pub mod error;
pub mod kind;
pub mod query;
pub mod registry;
pub mod widget;
pub mod widget_id;

pub use action::{Action, ActionArgs, ActionError, ActionResult, TriggerOutcome};
pub use builder::{ButtonBuilder, SliderBuilder, ToggleBuilder};
pub use error::{WidgetError, WidgetResult};
pub use kind::{WidgetKind, WidgetKinds};
pub use query::IdFilter;
pub use registry::{Registry, Selection};
pub use widget::{
    Button, Slider, Toggle, Widget, WidgetBase, WidgetHandle, WidgetRecord, WidgetState, WidgetVariant,
};
pub use widget_id::WidgetId;
