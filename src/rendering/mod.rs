use macroquad::prelude::*;

use crate::application::Simulation;
use crate::domain::{Cell, Lattice, Rule};

/// Height reserved at the bottom of the window for the status line
pub const STATUS_HEIGHT: f32 = 24.0;

/// Format large numbers with K/M suffixes
pub fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Grayscale mapping: 0 is black, 1 is white
pub fn cell_color(cell: Cell) -> Color {
    match cell {
        Cell::Dead => BLACK,
        Cell::Alive => WHITE,
    }
}

/// Largest square cell size that fits the whole lattice in the given area
pub fn fit_cell_size(dimensions: (usize, usize), area_width: f32, area_height: f32) -> f32 {
    let (length, width) = dimensions;
    (area_width / width as f32).min(area_height / length as f32)
}

/// Draw the lattice as a matrix: row `x` runs down the screen, column `y` across
pub fn draw_lattice(lattice: &Lattice) {
    let cell_size = fit_cell_size(
        lattice.dimensions(),
        screen_width(),
        screen_height() - STATUS_HEIGHT,
    );

    // Background is the dead color, so only live cells need drawing
    for (x, y, cell) in lattice.iter_cells() {
        if cell.is_alive() {
            draw_rectangle(
                y as f32 * cell_size,
                x as f32 * cell_size,
                cell_size,
                cell_size,
                cell_color(cell),
            );
        }
    }
}

/// Draw the status line with rule, generation and population
pub fn draw_status(sim: &Simulation) {
    let automaton = sim.automaton();
    let lattice = automaton.lattice();
    let (length, width) = lattice.dimensions();

    let status = if sim.is_finished() {
        "Done"
    } else if sim.is_running {
        "Running"
    } else {
        "Paused"
    };

    let line = format!(
        "{} {}x{} | gen {} | alive {} | step {:.1}ms | {}",
        automaton.rule().name(),
        length,
        width,
        automaton.generation(),
        format_number(lattice.alive_count()),
        sim.last_step_time_ms,
        status,
    );

    draw_rectangle(
        0.0,
        screen_height() - STATUS_HEIGHT,
        screen_width(),
        STATUS_HEIGHT,
        Color::from_rgba(30, 30, 30, 255),
    );
    draw_text(&line, 6.0, screen_height() - 7.0, 18.0, Color::from_rgba(180, 180, 180, 255));
}
