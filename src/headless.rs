use std::cell::RefCell;
use std::rc::Rc;

use crate::widgets::{GridSurface, WidgetId, WidgetSurface};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Placement {
    pub child: WidgetId,
    pub col: u32,
    pub row: u32,
}

impl Placement {
    pub fn cell(&self) -> (u32, u32) {
        (self.col, self.row)
    }
}

#[derive(Default)]
struct GridState {
    style_class: Option<String>,
    pseudo_classes: Vec<String>,
    placements: Vec<Placement>,
    height: f32,
    destroy_count: usize,
}

#[derive(Clone)]
pub struct HeadlessGrid {
    id: WidgetId,
    state: Rc<RefCell<GridState>>, // shared with clones
}

impl HeadlessGrid {
    pub fn new() -> Self {
        Self {
            id: WidgetId::new(),
            state: Rc::new(RefCell::new(GridState::default())),
        }
    }

    pub fn placements(&self) -> Vec<Placement> {
        self.state.borrow().placements.clone()
    }

    pub fn height(&self) -> f32 {
        self.state.borrow().height
    }

    pub fn destroy_count(&self) -> usize {
        self.state.borrow().destroy_count
    }

    pub fn style_class(&self) -> Option<String> {
        self.state.borrow().style_class.clone()
    }
}

impl Default for HeadlessGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetSurface for HeadlessGrid {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn set_style_class(&mut self, class: &str) {
        self.state.borrow_mut().style_class = Some(class.to_string());
    }

    fn set_pseudo_class(&mut self, class: &str, enabled: bool) {
        set_pseudo(&mut self.state.borrow_mut().pseudo_classes, class, enabled);
    }
}

impl GridSurface for HeadlessGrid {
    fn attach(&mut self, child: WidgetId, col: u32, row: u32) {
        self.state
            .borrow_mut()
            .placements
            .push(Placement { child, col, row });
    }

    fn set_height(&mut self, height: f32) {
        self.state.borrow_mut().height = height;
    }

    fn destroy_children(&mut self) {
        let mut state = self.state.borrow_mut();
        state.placements.clear();
        state.destroy_count += 1;
    }
}

#[derive(Default)]
struct ButtonState {
    style_class: Option<String>,
    pseudo_classes: Vec<String>,
}

#[derive(Clone)]
pub struct HeadlessButton {
    id: WidgetId,
    label: String,
    state: Rc<RefCell<ButtonState>>,
}

impl HeadlessButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: WidgetId::new(),
            label: label.into(),
            state: Rc::new(RefCell::new(ButtonState::default())),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn style_class(&self) -> Option<String> {
        self.state.borrow().style_class.clone()
    }

    pub fn has_pseudo_class(&self, class: &str) -> bool {
        self.state
            .borrow()
            .pseudo_classes
            .iter()
            .any(|c| c == class)
    }
}

impl WidgetSurface for HeadlessButton {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn set_style_class(&mut self, class: &str) {
        self.state.borrow_mut().style_class = Some(class.to_string());
    }

    fn set_pseudo_class(&mut self, class: &str, enabled: bool) {
        set_pseudo(&mut self.state.borrow_mut().pseudo_classes, class, enabled);
    }
}

fn set_pseudo(classes: &mut Vec<String>, class: &str, enabled: bool) {
    if enabled {
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    } else {
        classes.retain(|c| c != class);
    }
}
