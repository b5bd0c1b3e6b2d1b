pub mod theme;

pub use theme::Theme;

pub const ACTIVE_PSEUDO_CLASS: &str = "activate";
