//! CPU-based pixel buffer renderer for headless capture
//!
//! Renders the grid to an RGBA buffer without GPU dependencies, one pixel
//! per cell.

use std::path::Path;

use anyhow::{Context, Result};

use crate::prelude::*;

/// CPU-based renderer that outputs to a pixel buffer
pub struct PixelRenderer {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// RGBA pixel buffer (4 bytes per pixel)
    pub buffer: Vec<u8>,
    /// Drawn wherever a cell is empty
    pub background: Color,
}

impl PixelRenderer {
    /// Create a renderer sized for a grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            buffer: vec![0u8; width * height * 4],
            background: Color::BLACK,
        }
    }

    /// Draw every cell of `grid`, resizing the buffer if the grid changed size
    pub fn render<G: GridView>(&mut self, grid: &G) {
        if grid.width() != self.width || grid.height() != self.height {
            self.width = grid.width();
            self.height = grid.height();
            self.buffer.resize(self.width * self.height * 4, 0);
        }

        let background = self.background.to_rgba();
        for (pixel, cell) in self.buffer.chunks_exact_mut(4).zip(grid.cells()) {
            let rgba = match cell.material {
                MaterialKind::Sand | MaterialKind::Water => cell.color.to_rgba(),
                MaterialKind::Empty => background,
            };
            pixel.copy_from_slice(&rgba);
        }
    }

    /// RGBA bytes of the pixel at (x, y)
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        let mut rgba = [0u8; 4];
        rgba.copy_from_slice(&self.buffer[idx..idx + 4]);
        Some(rgba)
    }

    /// Save the buffer as PNG
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        use image::{ImageBuffer, Rgba};

        let path = path.as_ref();
        let width = u32::try_from(self.width)
            .with_context(|| format!("Image width {} does not fit in u32", self.width))?;
        let height = u32::try_from(self.height)
            .with_context(|| format!("Image height {} does not fit in u32", self.height))?;
        let img: ImageBuffer<Rgba<u8>, _> =
            ImageBuffer::from_raw(width, height, self.buffer.clone())
                .ok_or_else(|| anyhow::anyhow!("Failed to create image buffer"))?;

        img.save(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_draws_cells_and_background() {
        let mut grid = Grid::new(4, 3).unwrap();
        let sand = Cell::new(MaterialKind::Sand, Color::new(237, 200, 85));
        let water = Cell::new(MaterialKind::Water, Color::new(0, 153, 255));
        grid.set_cell(1, 1, sand);
        grid.set_cell(3, 2, water);

        let mut renderer = PixelRenderer::new(4, 3);
        renderer.render(&grid);

        assert_eq!(renderer.pixel(1, 1), Some([237, 200, 85, 255]));
        assert_eq!(renderer.pixel(3, 2), Some([0, 153, 255, 255]));
        assert_eq!(renderer.pixel(0, 0), Some([0, 0, 0, 255]));
        assert_eq!(renderer.pixel(4, 0), None);
    }

    #[test]
    fn test_render_uses_custom_background() {
        let grid = Grid::new(2, 2).unwrap();
        let mut renderer = PixelRenderer::new(2, 2);
        renderer.background = Color::new(10, 20, 30);

        renderer.render(&grid);

        assert_eq!(renderer.pixel(1, 1), Some([10, 20, 30, 255]));
    }

    #[test]
    fn test_render_resizes_to_grid() {
        let grid = Grid::new(8, 5).unwrap();
        let mut renderer = PixelRenderer::new(1, 1);

        renderer.render(&grid.snapshot());

        assert_eq!((renderer.width, renderer.height), (8, 5));
        assert_eq!(renderer.buffer.len(), 8 * 5 * 4);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_save_png_rejects_oversized_width() {
        let renderer = PixelRenderer {
            width: u32::MAX as usize + 1,
            height: 1,
            buffer: Vec::new(),
            background: Color::BLACK,
        };
        let dir = tempfile::tempdir().unwrap();

        let err = renderer.save_png(dir.path().join("wide.png")).unwrap_err();

        assert!(err.to_string().contains("width"), "{}", err);
        assert!(!dir.path().join("wide.png").exists());
    }

    #[test]
    fn test_save_png_round_trip() {
        let mut grid = Grid::new(6, 4).unwrap();
        grid.set_cell(2, 3, Cell::new(MaterialKind::Sand, Color::new(230, 198, 101)));
        let mut renderer = PixelRenderer::new(6, 4);
        renderer.render(&grid);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        renderer.save_png(&path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (6, 4));
        assert_eq!(img.get_pixel(2, 3).0, [230, 198, 101, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
    }
}
