pub mod headless;
pub mod layout;
pub mod signals;
pub mod style;
pub mod widgets;

pub use layout::{Grid, Rect};
pub use style::Theme;
pub use widgets::{ButtonBar, GridSurface, ToggleButton, WidgetId, WidgetSurface};

pub use glam::{Vec2, vec2};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

pub fn init_logging() {
    env_logger::init();
}
