//! Test utilities for ProtoCol.
//!
//! - [`RecordingAction`] - a button action that records every invocation
//!   and can be told to fail
//! - [`populate_scenario`] - registers the canonical Button / Toggle / Slider
//!   trio (ids 0, 1, 2 on a fresh registry)
//!
//! # Example
//!
//! ```rust
//! use protocol_test_utils::RecordingAction;
//! use protocol_ui::Registry;
//!
//! let recorder = RecordingAction::new();
//! let mut registry = Registry::new();
//! let button = registry.add_button().arg(7).on_trigger(recorder.action()).build();
//!
//! registry.trigger(button).unwrap();
//! assert_eq!(recorder.call_count(), 1);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use protocol_ui::{ActionArgs, ActionError, ActionResult, Button, Registry, Slider, Toggle, WidgetHandle};

/// Button action that records the arguments of every call.
///
/// Clones share the same call log.
#[derive(Debug, Clone, Default)]
pub struct RecordingAction {
    calls: Rc<RefCell<Vec<ActionArgs>>>,
    fail_with: Option<ActionError>,
}

impl RecordingAction {
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder whose action records the call and then returns `error`.
    pub fn failing(error: ActionError) -> Self {
        Self {
            calls: Rc::default(),
            fail_with: Some(error),
        }
    }

    /// The action to hand to [`ButtonBuilder::on_trigger`](protocol_ui::ButtonBuilder::on_trigger).
    pub fn action(&self) -> impl Fn(&ActionArgs) -> ActionResult + 'static {
        let calls = Rc::clone(&self.calls);
        let fail_with = self.fail_with.clone();
        move |args: &ActionArgs| {
            calls.borrow_mut().push(args.clone());
            match &fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    /// Arguments of every recorded call, oldest first.
    pub fn calls(&self) -> Vec<ActionArgs> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }
}

/// Handles to the widgets registered by [`populate_scenario`].
#[derive(Debug)]
pub struct Scenario {
    pub button: WidgetHandle<Button>,
    pub toggle: WidgetHandle<Toggle>,
    pub slider: WidgetHandle<Slider>,
    pub recorder: RecordingAction,
}

/// Register a recording Button, a Toggle and a default Slider, in that order.
pub fn populate_scenario(registry: &mut Registry) -> Scenario {
    let recorder = RecordingAction::new();
    let button = registry.add_button().on_trigger(recorder.action()).build();
    let toggle = registry.add_toggle().build();
    let slider = registry
        .add_slider()
        .build()
        .expect("default slider bounds are valid");

    Scenario {
        button,
        toggle,
        slider,
        recorder,
    }
}
