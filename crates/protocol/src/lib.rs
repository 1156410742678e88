//! ProtoCol - control front end building blocks for a protogen head.
//!
//! This crate bundles the ProtoCol crates behind one dependency:
//!
//! - [`core`] - logging setup, configuration and collection aliases
//! - [`ui`] - the interactable widget registry
//!
//! # Quick Start
//!
//! ```ignore
//! use protocol::prelude::*;
//!
//! fn main() -> Result<(), WidgetError> {
//!     protocol::init(&Config::default());
//!
//!     let mut registry = Registry::new();
//!     let visor = registry.add_toggle().label("Visor").build();
//!     registry.toggle(visor)?;
//!     Ok(())
//! }
//! ```

pub use protocol_core as core;
pub use protocol_ui as ui;

pub use protocol_core::{Config, LogConfig};

/// Install logging according to `config`.
pub fn init(config: &Config) {
    protocol_core::logging::init_with(&config.log);
    tracing::debug!("protocol {} initialised", env!("CARGO_PKG_VERSION"));
}

/// Commonly used types.
pub mod prelude {
    pub use protocol_core::{Config, LogConfig};
    pub use protocol_ui::{
        ActionArgs, ActionError, ActionResult, Button, IdFilter, Registry, Slider, Toggle, TriggerOutcome, Widget,
        WidgetError, WidgetHandle, WidgetId, WidgetKind, WidgetKinds, WidgetRecord, WidgetResult,
    };
}
