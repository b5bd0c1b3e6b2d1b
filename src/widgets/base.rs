use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(0);
impl WidgetId {
    pub fn new() -> Self {
        Self(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }
}

pub trait WidgetSurface {
    fn id(&self) -> WidgetId;

    fn set_style_class(&mut self, class: &str);

    fn set_pseudo_class(&mut self, class: &str, enabled: bool);
}

pub trait GridSurface: WidgetSurface {
    fn attach(&mut self, child: WidgetId, col: u32, row: u32);

    fn set_height(&mut self, height: f32);

    fn destroy_children(&mut self);
}
