use super::WidgetBase;
use crate::widget_id::WidgetId;

/// Toggle widget - a boolean switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggle {
    base: WidgetBase,
    state: bool,
}

impl Toggle {
    pub(crate) fn new(base: WidgetBase, state: bool) -> Self {
        Self { base, state }
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

    pub fn state(&self) -> bool {
        self.state
    }

    pub fn set_state(&mut self, state: bool) {
        self.state = state;
    }

    /// Flip the state.
    pub fn toggle(&mut self) {
        self.state = !self.state;
        tracing::trace!(widget = %self.base.id(), state = self.state, "toggled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::WidgetKind;

    fn toggle(state: bool) -> Toggle {
        Toggle::new(WidgetBase::new(WidgetId::from_raw(1), WidgetKind::Toggle, None), state)
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut toggle = toggle(false);
        toggle.toggle();
        assert!(toggle.state());
        toggle.toggle();
        assert!(!toggle.state());
    }

    #[test]
    fn test_set_state() {
        let mut toggle = toggle(true);
        toggle.set_state(false);
        assert!(!toggle.state());
    }
}
