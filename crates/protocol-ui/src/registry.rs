//! The widget registry.

use indexmap::IndexMap;
use protocol_core::alloc::RandomState;

use crate::action::TriggerOutcome;
use crate::builder::{ButtonBuilder, SliderBuilder, ToggleBuilder};
use crate::error::{WidgetError, WidgetResult};
use crate::kind::WidgetKinds;
use crate::query::IdFilter;
use crate::widget::{Button, Slider, Toggle, Widget, WidgetBase, WidgetHandle, WidgetRecord, WidgetVariant};
use crate::widget_id::{IdAllocator, WidgetId};

/// Widgets selected by [`Registry::get_all`], keyed by id in insertion order.
pub type Selection<'a> = IndexMap<WidgetId, &'a Widget, RandomState>;

/// Owner of every widget, keyed by id.
///
/// Widgets are added through the `add_*` builders, which assign ids
/// sequentially from 0. Entries are never removed, so an id stays valid for
/// the registry's whole lifetime. Separate registries number their widgets
/// independently.
///
/// # Example
///
/// ```rust,ignore
/// let mut registry = Registry::new();
///
/// let fire = registry.add_button().on_trigger(|_| Ok(())).build();
/// let ears = registry.add_toggle().build();
/// let jaw = registry.add_slider().range(0, 10).value(3).build()?;
///
/// registry.toggle(ears)?;
/// let sliders = registry.get_all(WidgetKind::Slider, IdFilter::Any);
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    widgets: IndexMap<WidgetId, Widget, RandomState>,
    ids: IdAllocator,
}

impl Registry {
    /// Create an empty registry. The first widget gets id 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a [`Button`].
    pub fn add_button(&mut self) -> ButtonBuilder<'_> {
        ButtonBuilder::new(self)
    }

    /// Start building a [`Toggle`].
    pub fn add_toggle(&mut self) -> ToggleBuilder<'_> {
        ToggleBuilder::new(self)
    }

    /// Start building a [`Slider`].
    pub fn add_slider(&mut self) -> SliderBuilder<'_> {
        SliderBuilder::new(self)
    }

    /// Assign the next id, build the widget around it and store it.
    pub(crate) fn insert<T, F>(&mut self, label: Option<String>, make: F) -> WidgetHandle<T>
    where
        T: WidgetVariant,
        F: FnOnce(WidgetBase) -> T,
    {
        let id = self.ids.allocate();
        let widget = make(WidgetBase::new(id, T::KIND, label)).into_widget();
        tracing::trace!(widget = %id, kind = %T::KIND, label = widget.label(), "registered widget");

        let previous = self.widgets.insert(id, widget);
        debug_assert!(previous.is_none(), "widget id {} registered twice", id);

        WidgetHandle::new(id)
    }

    /// Get the widget registered under `id`, or `None` if there is none.
    pub fn get(&self, id: impl Into<WidgetId>) -> Option<&Widget> {
        self.widgets.get(&id.into())
    }

    /// Get mutable reference to widget.
    pub fn get_mut(&mut self, id: impl Into<WidgetId>) -> Option<&mut Widget> {
        self.widgets.get_mut(&id.into())
    }

    /// Like [`Registry::get`], but an unknown id is a [`WidgetError::NotFound`].
    pub fn require(&self, id: impl Into<WidgetId>) -> WidgetResult<&Widget> {
        let id = id.into();
        self.widgets.get(&id).ok_or(WidgetError::NotFound(id))
    }

    /// Resolve a typed handle.
    pub fn get_as<T: WidgetVariant>(&self, handle: WidgetHandle<T>) -> Option<&T> {
        self.get(handle).and_then(T::from_widget)
    }

    /// Resolve a typed handle mutably.
    pub fn get_as_mut<T: WidgetVariant>(&mut self, handle: WidgetHandle<T>) -> Option<&mut T> {
        self.get_mut(handle).and_then(T::from_widget_mut)
    }

    /// Widgets whose kind is in `kinds` and whose id passes `ids`, in
    /// insertion order.
    ///
    /// ```rust,ignore
    /// registry.get_all(WidgetKind::Button | WidgetKind::Slider, IdFilter::Any);
    /// registry.get_all(WidgetKinds::all(), [0, 1]);
    /// registry.get_all(WidgetKind::Toggle, 0..2);
    /// ```
    pub fn get_all(&self, kinds: impl Into<WidgetKinds>, ids: impl Into<IdFilter>) -> Selection<'_> {
        let kinds = kinds.into();
        let ids = ids.into();
        self.widgets
            .iter()
            .filter(|(id, widget)| kinds.matches(widget.kind()) && ids.matches(**id))
            .map(|(id, widget)| (*id, widget))
            .collect()
    }

    /// Every widget, in insertion order.
    pub fn all(&self) -> impl Iterator<Item = &Widget> + '_ {
        self.widgets.values()
    }

    /// Iterate over all `(id, widget)` pairs, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (WidgetId, &Widget)> + '_ {
        self.widgets.iter().map(|(id, widget)| (*id, widget))
    }

    /// Records of every widget, in insertion order.
    pub fn records(&self) -> Vec<WidgetRecord> {
        self.all().map(Widget::to_record).collect()
    }

    pub fn contains(&self, id: impl Into<WidgetId>) -> bool {
        self.widgets.contains_key(&id.into())
    }

    /// Get the number of registered widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// The id the next registered widget will receive.
    pub fn next_id(&self) -> WidgetId {
        self.ids.peek()
    }

    /// Trigger the button registered under `id`.
    ///
    /// Failures of the action itself are contained, see [`Button::trigger`].
    /// Only a bad id is an error.
    pub fn trigger(&self, id: impl Into<WidgetId>) -> WidgetResult<TriggerOutcome> {
        Ok(self.variant::<Button>(id.into())?.trigger())
    }

    /// Flip the toggle registered under `id`, returning its new state.
    pub fn toggle(&mut self, id: impl Into<WidgetId>) -> WidgetResult<bool> {
        let toggle = self.variant_mut::<Toggle>(id.into())?;
        toggle.toggle();
        Ok(toggle.state())
    }

    /// Set the value of the slider registered under `id`.
    pub fn set_value(&mut self, id: impl Into<WidgetId>, value: i64) -> WidgetResult<()> {
        self.variant_mut::<Slider>(id.into())?.set_value(value)
    }

    fn variant<T: WidgetVariant>(&self, id: WidgetId) -> WidgetResult<&T> {
        let widget = self.require(id)?;
        T::from_widget(widget).ok_or(WidgetError::KindMismatch {
            id,
            expected: T::KIND,
            found: widget.kind(),
        })
    }

    fn variant_mut<T: WidgetVariant>(&mut self, id: WidgetId) -> WidgetResult<&mut T> {
        let widget = self.widgets.get_mut(&id).ok_or(WidgetError::NotFound(id))?;
        let found = widget.kind();
        T::from_widget_mut(widget).ok_or(WidgetError::KindMismatch {
            id,
            expected: T::KIND,
            found,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionError;
    use crate::kind::WidgetKind;

    fn id(raw: u64) -> WidgetId {
        WidgetId::from_raw(raw)
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut registry = Registry::new();
        assert_eq!(registry.next_id(), id(0));

        let button = registry.add_button().build();
        let toggle = registry.add_toggle().build();
        let slider = registry.add_slider().build().unwrap();

        assert_eq!(button.id(), id(0));
        assert_eq!(toggle.id(), id(1));
        assert_eq!(slider.id(), id(2));
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.next_id(), id(3));
    }

    #[test]
    fn test_default_labels() {
        let mut registry = Registry::new();
        registry.add_button().build();
        registry.add_toggle().label("Ears").build();
        registry.add_slider().build().unwrap();

        let labels: Vec<_> = registry.all().map(Widget::label).collect();
        assert_eq!(labels, vec!["Button_0", "Ears", "Slider_2"]);
    }

    #[test]
    fn test_get_miss() {
        let mut registry = Registry::new();
        registry.add_toggle().build();

        assert!(registry.get(id(0)).is_some());
        assert!(registry.get(id(1)).is_none());
        assert_eq!(registry.require(id(7)).unwrap_err(), WidgetError::NotFound(id(7)));
        assert!(!registry.contains(id(1)));
    }

    #[test]
    fn test_failed_slider_consumes_no_id() {
        let mut registry = Registry::new();
        let err = registry.add_slider().range(5, 1).build().unwrap_err();
        assert_eq!(err, WidgetError::InvalidBounds { low: 5, high: 1 });
        assert!(registry.add_slider().value(101).build().is_err());

        assert!(registry.is_empty());
        assert_eq!(registry.add_toggle().build().id(), id(0));
    }

    #[test]
    fn test_typed_handles() {
        let mut registry = Registry::new();
        let slider = registry.add_slider().range(-10, 10).value(0).build().unwrap();

        registry.get_as_mut(slider).unwrap().set_value(-10).unwrap();
        assert_eq!(registry.get_as(slider).map(Slider::value), Some(-10));
    }

    #[test]
    fn test_get_all_filters() {
        let mut registry = Registry::new();
        registry.add_button().build();
        registry.add_toggle().build();
        registry.add_slider().build().unwrap();
        registry.add_toggle().build();

        let toggles = registry.get_all(WidgetKind::Toggle, IdFilter::Any);
        assert_eq!(toggles.keys().copied().collect::<Vec<_>>(), vec![id(1), id(3)]);

        let both = registry.get_all(WidgetKind::Toggle, [1u64, 2]);
        assert_eq!(both.keys().copied().collect::<Vec<_>>(), vec![id(1)]);

        assert_eq!(registry.get_all(WidgetKinds::all(), IdFilter::Any).len(), 4);
        assert!(registry.get_all(WidgetKinds::empty(), IdFilter::Any).is_empty());
    }

    #[test]
    fn test_registry_operations() {
        let mut registry = Registry::new();
        let button = registry
            .add_button()
            .on_trigger(|_| Err(ActionError::failed("no hardware")))
            .build();
        let toggle = registry.add_toggle().build();
        let slider = registry.add_slider().build().unwrap();

        let outcome = registry.trigger(button).unwrap();
        assert_eq!(outcome.error(), Some(&ActionError::Failed("no hardware".into())));

        assert_eq!(registry.toggle(toggle), Ok(true));
        assert_eq!(registry.toggle(toggle), Ok(false));

        registry.set_value(slider, 10).unwrap();
        assert_eq!(registry.get_as(slider).unwrap().value(), 10);

        assert_eq!(
            registry.toggle(slider),
            Err(WidgetError::KindMismatch {
                id: id(2),
                expected: WidgetKind::Toggle,
                found: WidgetKind::Slider,
            })
        );
        assert_eq!(registry.trigger(id(9)).unwrap_err(), WidgetError::NotFound(id(9)));
    }
}
