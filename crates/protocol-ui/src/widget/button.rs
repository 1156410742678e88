use std::fmt;
use std::rc::Rc;

use super::WidgetBase;
use crate::action::{Action, ActionArgs, ActionResult, TriggerOutcome, run_contained};
use crate::widget_id::WidgetId;

/// Button widget - runs an action with arguments bound at construction.
pub struct Button {
    base: WidgetBase,
    action: Action,
    args: ActionArgs,
}

impl Button {
    pub(crate) fn new(base: WidgetBase, action: Action, args: ActionArgs) -> Self {
        Self { base, action, args }
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

    /// Arguments passed to the action on every trigger.
    pub fn args(&self) -> &ActionArgs {
        &self.args
    }

    /// Run the action with the bound arguments.
    ///
    /// Never fails: argument mismatches, reported failures and panics are
    /// logged and returned as [`TriggerOutcome::Contained`]. The button stays
    /// usable afterwards.
    pub fn trigger(&self) -> TriggerOutcome {
        run_contained(self.base.id(), self.base.label(), self.action.as_ref(), &self.args)
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("base", &self.base)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

/// Action used when a button is built without one.
pub(crate) fn default_action() -> Action {
    Rc::new(|_: &ActionArgs| -> ActionResult {
        tracing::info!("Click!");
        Ok(())
    })
}
