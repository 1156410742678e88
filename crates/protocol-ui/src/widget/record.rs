//! Structured widget snapshots.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::kind::WidgetKind;
use crate::widget_id::WidgetId;

/// Snapshot of a widget's identity and state.
///
/// Meant for display and debugging. It is not a stable storage format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetRecord {
    pub id: WidgetId,
    pub kind: WidgetKind,
    pub label: String,
    pub state: WidgetState,
}

/// Per-kind part of a [`WidgetRecord`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WidgetState {
    Button {
        args: Vec<Value>,
        named: IndexMap<String, Value>,
    },
    Toggle {
        state: bool,
    },
    Slider {
        low: i64,
        high: i64,
        value: i64,
    },
}

impl WidgetRecord {
    pub fn to_json(&self) -> Value {
        // Every field is plain data with string keys, so this cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl fmt::Display for WidgetRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} ({}): ", self.kind, self.label, self.id)?;
        match &self.state {
            WidgetState::Button { args, named } => {
                write!(f, "args={}", Value::from(args.clone()))?;
                write!(f, " named={}", serde_json::to_string(named).unwrap_or_default())
            }
            WidgetState::Toggle { state } => write!(f, "state={}", state),
            WidgetState::Slider { low, high, value } => {
                write!(f, "low={} high={} value={}", low, high, value)
            }
        }
    }
}
