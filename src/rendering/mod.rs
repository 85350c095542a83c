mod layout;

pub use layout::{GridLayout, GRID_HEIGHT_FRACTION};

use macroquad::prelude::*;
use crate::application::{Phase, SimulationController};
use crate::domain::GridState;
use crate::ui::{self, Button};

/// Draw every cell: live ones filled, all of them outlined
pub fn draw_grid(grid: &GridState, layout: &GridLayout) {
    let alive_color = Color::from_rgba(0, 228, 48, 255);
    let grid_line_color = Color::from_rgba(80, 80, 80, 255);
    let size = layout.cell_size;

    for (row, col, cell) in grid.iter_cells() {
        let (x, y) = layout.cell_origin(row, col);

        if cell.is_alive() {
            // One extra pixel hides the seam under the outline
            draw_rectangle(x, y, size + 1.0, size + 1.0, alive_color);
        }
        draw_rectangle_lines(x, y, size, size, 1.0, grid_line_color);
    }
}

/// Title plus the start button
pub fn draw_menu(start_button: &Button, mouse_pos: (f32, f32)) {
    let title_size: u16 = 60;
    let title = measure_text(ui::TITLE, None, title_size, 1.0);
    draw_text(
        ui::TITLE,
        (screen_width() - title.width) / 2.0,
        100.0 + title.height,
        title_size as f32,
        WHITE,
    );

    start_button.draw(mouse_pos);
}

/// One-line status strip along the top edge
pub fn draw_status(sim: &SimulationController) {
    let status_color = match sim.phase() {
        Phase::Running => Color::from_rgba(0, 255, 0, 255),
        _ => Color::from_rgba(255, 165, 0, 255),
    };

    let text = format!(
        "{} | Generation: {} | Population: {} | Space: pause  R: random  C: clear",
        sim.phase().name(),
        sim.generation(),
        sim.grid().population(),
    );
    draw_text(&text, 10.0, 20.0, 18.0, status_color);
}
