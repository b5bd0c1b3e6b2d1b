pub mod base;
pub mod button_bar;
pub mod toggle_button;

pub use base::{GridSurface, WidgetId, WidgetSurface};
pub use button_bar::ButtonBar;
pub use toggle_button::ToggleButton;
