use super::base::{WidgetId, WidgetSurface};
use crate::{
    signals::{ReadSignal, WriteSignal, create_signal},
    style::{ACTIVE_PSEUDO_CLASS, Theme},
};

pub struct ToggleButton {
    surface: Box<dyn WidgetSurface>,
    state: (ReadSignal<bool>, WriteSignal<bool>),
}

impl ToggleButton {
    pub fn new(surface: Box<dyn WidgetSurface>) -> Self {
        let mut button = Self {
            surface,
            state: create_signal(false),
        };
        button.set_active(false);
        button
    }

    pub fn styled(mut surface: Box<dyn WidgetSurface>, class: &str) -> Self {
        surface.set_style_class(class);
        Self::new(surface)
    }

    pub fn themed(surface: Box<dyn WidgetSurface>, theme: Theme) -> Self {
        Self::styled(surface, &theme.class("toggle-button"))
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.set_active(active);
        self
    }

    pub fn active(&self) -> bool {
        self.state.0.get()
    }

    pub fn set_active(&mut self, active: bool) {
        self.surface.set_pseudo_class(ACTIVE_PSEUDO_CLASS, active);
        self.state.1.set(active); // notifies on every set, unchanged values included
    }

    pub fn state(&self) -> ReadSignal<bool> {
        self.state.0.clone()
    }

    pub fn id(&self) -> WidgetId {
        self.surface.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessButton;
    use crate::signals::create_effect;
    use crate::style::{ACTIVE_PSEUDO_CLASS, Theme};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn buttons_start_inactive() {
        let widget = HeadlessButton::new("1x1");
        let button = ToggleButton::new(Box::new(widget.clone()));

        assert!(!button.active());
        assert!(!widget.has_pseudo_class(ACTIVE_PSEUDO_CLASS));
    }

    #[test]
    fn activating_applies_the_pseudo_class() {
        let widget = HeadlessButton::new("2x2");
        let mut button = ToggleButton::new(Box::new(widget.clone()));

        button.set_active(true);

        assert!(button.active());
        assert!(widget.has_pseudo_class(ACTIVE_PSEUDO_CLASS));

        button.set_active(false);

        assert!(!button.active());
        assert!(!widget.has_pseudo_class(ACTIVE_PSEUDO_CLASS));
    }

    #[test]
    fn construction_honors_the_initial_flag() {
        let widget = HeadlessButton::new("3x3");
        let button = ToggleButton::new(Box::new(widget.clone())).with_active(true);

        assert!(button.active());
        assert!(widget.has_pseudo_class(ACTIVE_PSEUDO_CLASS));
    }

    #[test]
    fn repeated_sets_notify_every_time() {
        let mut button = ToggleButton::new(Box::new(HeadlessButton::new("4x4")));

        let runs = Rc::new(Cell::new(0u32));
        let state = button.state();
        let runs_in_effect = runs.clone();
        create_effect(move || {
            state.get();
            runs_in_effect.set(runs_in_effect.get() + 1);
        });
        assert_eq!(runs.get(), 1);

        button.set_active(true);
        button.set_active(true);

        assert_eq!(runs.get(), 3);
        assert!(button.active());
    }

    #[test]
    fn a_no_op_set_still_notifies() {
        let mut button = ToggleButton::new(Box::new(HeadlessButton::new("5x5")));

        let runs = Rc::new(Cell::new(0u32));
        let state = button.state();
        let runs_in_effect = runs.clone();
        create_effect(move || {
            state.get();
            runs_in_effect.set(runs_in_effect.get() + 1);
        });

        button.set_active(false);

        assert_eq!(runs.get(), 2);
        assert!(!button.active());
    }

    #[test]
    fn observers_see_the_new_value_and_the_applied_style() {
        let widget = HeadlessButton::new("6x6");
        let mut button = ToggleButton::new(Box::new(widget.clone()));

        let seen = Rc::new(Cell::new(false));
        let state = button.state();
        let widget_in_effect = widget.clone();
        let seen_in_effect = seen.clone();
        create_effect(move || {
            let active = state.get();
            assert_eq!(
                widget_in_effect.has_pseudo_class(ACTIVE_PSEUDO_CLASS),
                active
            );
            seen_in_effect.set(active);
        });

        button.set_active(true);

        assert!(seen.get());
    }

    #[test]
    fn themed_buttons_carry_the_theme_style_class() {
        let widget = HeadlessButton::new("7x7");
        let _button = ToggleButton::themed(Box::new(widget.clone()), Theme::Minimal);

        assert_eq!(
            widget.style_class().as_deref(),
            Some("minimal__toggle-button")
        );
    }
}
