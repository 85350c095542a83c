/// Share of the window height the grid occupies
pub const GRID_HEIGHT_FRACTION: f32 = 0.9;

/// Pixel geometry of the grid on screen.
/// The simulation itself only knows rows and columns; everything in pixels lives here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
    pub cell_size: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl GridLayout {
    /// Square cells sized from the window height, grid centred in the window
    pub fn fit(rows: usize, cols: usize, screen_width: f32, screen_height: f32) -> Self {
        let rows_f = rows.max(1) as f32;
        let cell_size = (screen_height * GRID_HEIGHT_FRACTION / rows_f).floor().max(1.0);

        Self {
            rows,
            cols,
            cell_size,
            offset_x: (screen_width - cols as f32 * cell_size) / 2.0,
            offset_y: (screen_height - rows as f32 * cell_size) / 2.0,
        }
    }

    /// Map a pixel to the (row, col) under it, if any
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }

        let local_x = x - self.offset_x;
        let local_y = y - self.offset_y;
        if local_x < 0.0 || local_y < 0.0 {
            return None;
        }

        let col = (local_x / self.cell_size) as usize;
        let row = (local_y / self.cell_size) as usize;
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    /// Top-left pixel of a cell
    pub fn cell_origin(&self, row: usize, col: usize) -> (f32, f32) {
        (
            self.offset_x + col as f32 * self.cell_size,
            self.offset_y + row as f32 * self.cell_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_centres_grid() {
        let layout = GridLayout::fit(32, 32, 1024.0, 768.0);

        // floor(768 * 0.9 / 32) = 21
        assert_eq!(layout.cell_size, 21.0);
        assert_eq!(layout.offset_x, (1024.0 - 32.0 * 21.0) / 2.0);
        assert_eq!(layout.offset_y, (768.0 - 32.0 * 21.0) / 2.0);
    }

    #[test]
    fn test_cell_at_maps_inside() {
        let layout = GridLayout::fit(32, 32, 1024.0, 768.0);
        let (x, y) = layout.cell_origin(5, 7);

        assert_eq!(layout.cell_at(x + 1.0, y + 1.0), Some((5, 7)));
        assert_eq!(layout.cell_at(layout.offset_x, layout.offset_y), Some((0, 0)));
    }

    #[test]
    fn test_cell_at_rejects_outside() {
        let layout = GridLayout::fit(32, 32, 1024.0, 768.0);

        assert_eq!(layout.cell_at(0.0, 0.0), None);
        assert_eq!(layout.cell_at(layout.offset_x - 0.5, layout.offset_y + 5.0), None);

        let (x, y) = layout.cell_origin(31, 31);
        assert_eq!(layout.cell_at(x + layout.cell_size + 1.0, y), None);
        assert_eq!(layout.cell_at(x, y + layout.cell_size + 1.0), None);
    }

    #[test]
    fn test_cell_at_rejects_non_finite() {
        let layout = GridLayout::fit(32, 32, 1024.0, 768.0);

        assert_eq!(layout.cell_at(f32::NAN, 100.0), None);
        assert_eq!(layout.cell_at(300.0, f32::NAN), None);
        assert_eq!(layout.cell_at(f32::INFINITY, 100.0), None);
    }

    #[test]
    fn test_tiny_window_keeps_one_pixel_cells() {
        let layout = GridLayout::fit(500, 500, 200.0, 100.0);
        assert_eq!(layout.cell_size, 1.0);
    }
}
