//! Button actions and the error boundary around them.
//!
//! A button binds a callback to a fixed set of positional and named
//! arguments. Invoking the callback goes through [`run_contained`], which
//! turns every failure (including a panic) into a logged
//! [`TriggerOutcome::Contained`] so a misbehaving action can never take the
//! UI down with it.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use thiserror::Error;

use crate::widget_id::WidgetId;

/// Result returned by a button action.
pub type ActionResult = Result<(), ActionError>;

/// Callback type for button actions.
pub type Action = Rc<dyn Fn(&ActionArgs) -> ActionResult>;

/// Failure raised by a button action.
///
/// Never propagated out of [`Button::trigger`](crate::Button::trigger); it is
/// logged and reported through [`TriggerOutcome::Contained`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The bound arguments don't fit what the action expects.
    #[error("argument mismatch: {0}")]
    ArgumentMismatch(String),

    /// The action ran and reported a failure.
    #[error("{0}")]
    Failed(String),

    /// The action panicked.
    #[error("action panicked: {0}")]
    Panicked(String),
}

impl ActionError {
    pub fn mismatch(msg: impl fmt::Display) -> Self {
        ActionError::ArgumentMismatch(msg.to_string())
    }

    pub fn failed(msg: impl fmt::Display) -> Self {
        ActionError::Failed(msg.to_string())
    }
}

impl From<serde_json::Error> for ActionError {
    fn from(err: serde_json::Error) -> Self {
        ActionError::ArgumentMismatch(err.to_string())
    }
}

/// Arguments bound to a button at construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionArgs {
    positional: Vec<Value>,
    named: IndexMap<String, Value>,
}

impl ActionArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.positional.push(value.into());
    }

    /// Bind a named argument, replacing any previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.named.insert(key.into(), value.into());
    }

    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    pub fn named(&self) -> &IndexMap<String, Value> {
        &self.named
    }

    /// Total number of bound arguments, positional and named.
    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// Decode the positional argument at `index`.
    pub fn arg<T: DeserializeOwned>(&self, index: usize) -> Result<T, ActionError> {
        let value = self.positional.get(index).ok_or_else(|| {
            ActionError::mismatch(format!(
                "missing positional argument {} (got {})",
                index,
                self.positional.len()
            ))
        })?;
        decode(value).map_err(|err| ActionError::mismatch(format!("positional argument {}: {}", index, err)))
    }

    /// Decode the named argument `key`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T, ActionError> {
        let value = self
            .named
            .get(key)
            .ok_or_else(|| ActionError::mismatch(format!("missing named argument '{}'", key)))?;
        decode(value).map_err(|err| ActionError::mismatch(format!("named argument '{}': {}", key, err)))
    }

    /// Decode the named argument `key`, falling back to `default` when it is absent.
    ///
    /// A present value of the wrong type is still a mismatch.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, ActionError> {
        if self.named.contains_key(key) {
            self.get(key)
        } else {
            Ok(default)
        }
    }

    /// Fail unless exactly `count` positional arguments are bound.
    pub fn expect_arity(&self, count: usize) -> Result<(), ActionError> {
        if self.positional.len() == count {
            Ok(())
        } else {
            Err(ActionError::mismatch(format!(
                "takes {} positional arguments but {} were given",
                count,
                self.positional.len()
            )))
        }
    }

    /// Fail if a named argument outside `allowed` is bound.
    pub fn expect_keys(&self, allowed: &[&str]) -> Result<(), ActionError> {
        match self.named.keys().find(|key| !allowed.contains(&key.as_str())) {
            Some(key) => Err(ActionError::mismatch(format!("unexpected named argument '{}'", key))),
            None => Ok(()),
        }
    }
}

fn decode<T: DeserializeOwned>(value: &Value) -> Result<T, serde_json::Error> {
    T::deserialize(value)
}

/// What happened when a button was triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The action ran to completion.
    Completed,
    /// The action failed; the failure was logged and swallowed.
    Contained(ActionError),
}

impl TriggerOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, TriggerOutcome::Completed)
    }

    pub fn error(&self) -> Option<&ActionError> {
        match self {
            TriggerOutcome::Completed => None,
            TriggerOutcome::Contained(err) => Some(err),
        }
    }
}

/// Run `action` with `args`, containing any failure.
pub(crate) fn run_contained(
    id: WidgetId,
    label: &str,
    action: &dyn Fn(&ActionArgs) -> ActionResult,
    args: &ActionArgs,
) -> TriggerOutcome {
    let result = panic::catch_unwind(AssertUnwindSafe(|| action(args)))
        .unwrap_or_else(|payload| Err(ActionError::Panicked(panic_message(payload.as_ref()))));

    match result {
        Ok(()) => {
            tracing::debug!(widget = %id, label, "button triggered");
            TriggerOutcome::Completed
        }
        Err(err) => {
            match &err {
                ActionError::ArgumentMismatch(_) => tracing::warn!(
                    widget = %id,
                    label,
                    "{}; double check the bound arguments, continuing execution",
                    err
                ),
                _ => tracing::error!(widget = %id, label, "button action failed: {}", err),
            }
            TriggerOutcome::Contained(err)
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ActionArgs {
        let mut args = ActionArgs::new();
        args.push(3);
        args.push("eyes");
        args.insert("brightness", 0.5);
        args
    }

    #[test]
    fn test_typed_access() {
        let args = args();
        assert_eq!(args.len(), 3);
        assert_eq!(args.arg::<u32>(0), Ok(3));
        assert_eq!(args.arg::<String>(1), Ok("eyes".to_string()));
        assert_eq!(args.get::<f64>("brightness"), Ok(0.5));
        assert_eq!(args.get_or::<bool>("blink", true), Ok(true));
    }

    #[test]
    fn test_mismatches() {
        let args = args();
        assert!(matches!(args.arg::<u32>(1), Err(ActionError::ArgumentMismatch(_))));
        assert!(matches!(args.arg::<u32>(5), Err(ActionError::ArgumentMismatch(_))));
        assert!(matches!(args.get::<u32>("missing"), Err(ActionError::ArgumentMismatch(_))));
        assert!(matches!(args.get_or::<bool>("brightness", false), Err(ActionError::ArgumentMismatch(_))));
        assert_eq!(
            args.expect_arity(1),
            Err(ActionError::ArgumentMismatch("takes 1 positional arguments but 2 were given".to_string()))
        );
        assert!(args.expect_arity(2).is_ok());
        assert!(args.expect_keys(&["brightness"]).is_ok());
        assert!(args.expect_keys(&[]).is_err());
    }

    #[test]
    fn test_run_contained_completed() {
        let outcome = run_contained(WidgetId::from_raw(0), "ok", &|_| Ok(()), &ActionArgs::new());
        assert!(outcome.is_completed());
        assert_eq!(outcome.error(), None);
    }

    #[test]
    fn test_run_contained_failure() {
        let outcome = run_contained(
            WidgetId::from_raw(0),
            "fails",
            &|_| Err(ActionError::failed("serial port unplugged")),
            &ActionArgs::new(),
        );
        assert_eq!(outcome, TriggerOutcome::Contained(ActionError::Failed("serial port unplugged".into())));
    }

    #[test]
    fn test_run_contained_panic() {
        let outcome = run_contained(WidgetId::from_raw(0), "panics", &|_| panic!("boom"), &ActionArgs::new());
        assert_eq!(outcome, TriggerOutcome::Contained(ActionError::Panicked("boom".into())));
    }
}
