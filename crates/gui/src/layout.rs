//! Gallery cell geometry.

use egui::{Pos2, Rect, Vec2};

/// Height reserved above each image for its title
pub const TITLE_HEIGHT: f32 = 20.0;
/// Gap between neighbouring cells
pub const CELL_SPACING: f32 = 8.0;

/// Rectangle of cell `(row, col)` in a `grid` laid over `area`.
pub fn cell_rect(area: Rect, grid: (usize, usize), row: usize, col: usize) -> Rect {
    let (grid_rows, grid_cols) = grid;
    let gaps_x = CELL_SPACING * grid_cols.saturating_sub(1) as f32;
    let gaps_y = CELL_SPACING * grid_rows.saturating_sub(1) as f32;
    let cell_w = (area.width() - gaps_x) / grid_cols.max(1) as f32;
    let cell_h = (area.height() - gaps_y) / grid_rows.max(1) as f32;

    let min = Pos2::new(
        area.min.x + col as f32 * (cell_w + CELL_SPACING),
        area.min.y + row as f32 * (cell_h + CELL_SPACING),
    );
    Rect::from_min_size(min, Vec2::new(cell_w.max(0.0), cell_h.max(0.0)))
}

/// Largest rectangle with the image's aspect ratio centred in `bounds`.
pub fn fit_image(bounds: Rect, size: [usize; 2]) -> Rect {
    let [width, height] = size;
    if width == 0 || height == 0 || bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return Rect::from_center_size(bounds.center(), Vec2::ZERO);
    }

    let aspect = width as f32 / height as f32;
    let scale = if bounds.width() / bounds.height() > aspect {
        bounds.height() / height as f32
    } else {
        bounds.width() / width as f32
    };
    Rect::from_center_size(
        bounds.center(),
        Vec2::new(width as f32 * scale, height as f32 * scale),
    )
}
