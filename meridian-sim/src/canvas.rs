//! Terminal canvas
//!
//! An in-memory RGB framebuffer that `embedded-graphics` draws into, turned
//! into text by sampling blocks of pixels per character cell.

use std::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

use crate::config::CanvasConfig;

/// Framebuffer printable as text
#[derive(Debug, Clone)]
pub struct TextCanvas {
    size: Size,
    cell: Size,
    pixels: Vec<Rgb888>,
}

impl TextCanvas {
    /// Create a canvas from its configuration, filled black
    pub fn new(config: &CanvasConfig) -> Self {
        let size = Size::new(config.width, config.height);
        Self {
            size,
            cell: Size::new(config.cell_width.max(1), config.cell_height.max(1)),
            pixels: vec![Rgb888::BLACK; size.width as usize * size.height as usize],
        }
    }

    /// Color of a pixel, `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb888> {
        if x < self.size.width && y < self.size.height {
            self.pixels.get(y as usize * self.size.width as usize + x as usize).copied()
        } else {
            None
        }
    }

    /// Render as lines of text, one character per cell
    ///
    /// Each cell shows the most frequent non-black color in it.
    pub fn to_text(&self) -> String {
        let cols = self.size.width.div_ceil(self.cell.width);
        let rows = self.size.height.div_ceil(self.cell.height);
        let mut out = String::with_capacity(((cols + 1) * rows) as usize);

        for row in 0..rows {
            for col in 0..cols {
                out.push(glyph(self.dominant_color(col, row)));
            }
            out.push('\n');
        }
        out
    }

    fn dominant_color(&self, col: u32, row: u32) -> Option<Rgb888> {
        let mut counts: Vec<(Rgb888, usize)> = Vec::new();
        for y in row * self.cell.height..(row + 1) * self.cell.height {
            for x in col * self.cell.width..(col + 1) * self.cell.width {
                let Some(color) = self.pixel(x, y) else {
                    continue;
                };
                if color == Rgb888::BLACK {
                    continue;
                }
                match counts.iter_mut().find(|(c, _)| *c == color) {
                    Some((_, n)) => *n += 1,
                    None => counts.push((color, 1)),
                }
            }
        }
        counts
            .into_iter()
            .max_by_key(|(_, n)| *n)
            .map(|(color, _)| color)
    }
}

/// Character for a cell color
fn glyph(color: Option<Rgb888>) -> char {
    match color {
        None => ' ',
        Some(c) if c.r() > 0 && c.g() == 0 && c.b() == 0 => '*',
        Some(c) if c.r() > 0x80 && c.g() > 0x80 && c.b() > 0x80 => '#',
        Some(_) => '+',
    }
}

impl OriginDimensions for TextCanvas {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for TextCanvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (width, height) = (self.size.width as i32, self.size.height as i32);
        for Pixel(point, color) in pixels {
            if (0..width).contains(&point.x) && (0..height).contains(&point.y) {
                let index = point.y as usize * width as usize + point.x as usize;
                self.pixels[index] = color;
            }
        }
        Ok(())
    }
}
