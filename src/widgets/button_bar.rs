use super::base::{GridSurface, WidgetId};
use crate::{
    layout::{Grid, Rect},
    style::Theme,
};

pub struct ButtonBar {
    surface: Box<dyn GridSurface>,
    children: Vec<WidgetId>,
    grid: Grid,
    width: f32,
    height: f32,
}

impl ButtonBar {
    pub fn new(mut surface: Box<dyn GridSurface>, width: f32) -> Self {
        let grid = Grid::default();
        surface.set_height(grid.row_height);

        let bar = Self {
            surface,
            children: Vec::new(),
            grid,
            width,
            height: grid.row_height,
        };
        bar.warn_if_misaligned();
        bar
    }

    pub fn styled(mut surface: Box<dyn GridSurface>, class: &str, width: f32) -> Self {
        surface.set_style_class(class);
        Self::new(surface, width)
    }

    pub fn themed(surface: Box<dyn GridSurface>, theme: Theme, width: f32) -> Self {
        Self::styled(surface, &theme.class("button-bar"), width)
    }

    pub fn with_columns(mut self, cols: u32) -> Self {
        self.grid.cols = cols.max(1);
        self.apply_height();
        self.warn_if_misaligned();
        self
    }

    pub fn with_row_height(mut self, height: f32) -> Self {
        self.set_row_height(height);
        self
    }

    pub fn add_button(&mut self, button: WidgetId) {
        let (col, row) = self.grid.cell(self.children.len());
        log::trace!("attaching {button:?} at ({col}, {row})");

        self.surface.attach(button, col, row);
        self.children.push(button);
        self.apply_height();
    }

    pub fn remove_buttons(&mut self) {
        log::debug!("destroying {} buttons", self.children.len());

        self.surface.destroy_children();
        self.children.clear();
        self.apply_height();
    }

    pub fn set_row_height(&mut self, height: f32) {
        self.grid.row_height = height;
        self.apply_height();
    }

    fn apply_height(&mut self) {
        self.height = self.grid.height(self.children.len());
        self.surface.set_height(self.height);
    }

    fn warn_if_misaligned(&self) {
        if self.width % self.grid.cols as f32 != 0.0 {
            log::warn!(
                "bar width {} is not a multiple of {} columns; cells will not align evenly",
                self.width,
                self.grid.cols,
            );
        }
    }

    pub fn id(&self) -> WidgetId {
        self.surface.id()
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn row_height(&self) -> f32 {
        self.grid.row_height
    }

    pub fn columns(&self) -> u32 {
        self.grid.cols
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn children(&self) -> &[WidgetId] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn cell_rect(&self, index: usize) -> Rect {
        self.grid.cell_rect(index, self.width)
    }
}
