use halo::headless::{HeadlessButton, HeadlessGrid};
use halo::signals::{create_effect, create_memo};
use halo::{ButtonBar, Theme, ToggleButton};

fn main() -> halo::Result<()> {
    halo::init_logging();

    let grid = HeadlessGrid::new();
    let mut bar = ButtonBar::themed(Box::new(grid.clone()), Theme::Default, 144.0);

    let presets = ["1x1", "2x2", "3x2", "4x2", "4x4", "6x4"];
    let mut buttons: Vec<(HeadlessButton, ToggleButton)> = Vec::new();

    for label in presets {
        let widget = HeadlessButton::new(label);
        let button = ToggleButton::themed(Box::new(widget.clone()), Theme::Default);
        bar.add_button(button.id());
        buttons.push((widget, button));
    }

    println!(
        "bar: {} buttons, {} columns, height {}px",
        bar.len(),
        bar.columns(),
        bar.height()
    );
    for (i, (widget, _)) in buttons.iter().enumerate() {
        let rect = bar.cell_rect(i);
        println!(
            "  {:>4} at ({}, {}) px",
            widget.label(),
            rect.origin.x,
            rect.origin.y
        );
    }

    let (status_widget, mut status_button) = buttons.remove(4);
    let state = status_button.state();
    let status = create_memo(move || {
        if state.get() {
            "4x4 selected"
        } else {
            "nothing selected"
        }
    });

    let widget = status_widget.clone();
    create_effect(move || {
        println!(
            "status: {} (pseudo-classes applied: {})",
            status.get(),
            widget.has_pseudo_class("activate")
        );
    });

    status_button.set_active(true);
    status_button.set_active(false);

    bar.set_row_height(48.0);
    println!("taller rows: height {}px", bar.height());

    bar.remove_buttons();
    println!("cleared: height {}px", bar.height());

    Ok(())
}
