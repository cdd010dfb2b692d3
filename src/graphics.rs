use bitedit::{EditorConfig, EditorSession, GridLayout, ToolMode};
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::PhysicalPosition;
use winit::window::Window;

use crate::palette::Palette;

const BACKGROUND: [u8; 4] = [128, 128, 128, 255];
const BLACK: [u8; 4] = [0, 0, 0, 255];
const WHITE: [u8; 4] = [255, 255, 255, 255];
const RED: [u8; 4] = [255, 0, 0, 255];
const HIGHLIGHT: [u8; 4] = [0, 240, 240, 255];

pub struct GraphicsRenderer {
    pixels: Pixels,
    width: u32,
    height: u32,
    layout: GridLayout,
    palette: Palette,
}

impl GraphicsRenderer {
    pub fn new(window: &Window, config: &EditorConfig) -> Result<Self, pixels::Error> {
        let (width, height) = config.canvas_size();
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self {
            pixels,
            width,
            height,
            layout: config.layout(),
            palette: Palette::new(config),
        })
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        // the canvas keeps its size; only the scaled surface follows the window
        if let Err(err) = self.pixels.resize_surface(width, height) {
            log::error!("Failed to resize surface: {}", err);
        }
    }

    /// Converts a window position into canvas pixel coordinates, or `None` if
    /// the position is outside the scaled canvas.
    pub fn window_to_canvas(&self, position: PhysicalPosition<f64>) -> Option<(i32, i32)> {
        self.pixels
            .window_pos_to_pixel((position.x as f32, position.y as f32))
            .ok()
            .map(|(x, y)| (x as i32, y as i32))
    }

    pub fn render(&mut self, session: &EditorSession) {
        let mut canvas = Canvas {
            frame: self.pixels.frame_mut(),
            width: self.width as i32,
            height: self.height as i32,
        };
        canvas.clear(BACKGROUND);

        let p = &self.palette;
        canvas.fill_rect(p.mini_left, p.mini_top, p.mini_side, p.mini_side, WHITE);
        for tool in ToolMode::ALL {
            Self::draw_button(&mut canvas, tool, p.center_of(tool), p.radius);
        }
        canvas.fill_triangle(p.highlight(session.tool()), HIGHLIGHT);

        Self::draw_grid(&mut canvas, session, self.layout, p);
    }

    pub fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }

    fn draw_grid(canvas: &mut Canvas<'_>, session: &EditorSession, layout: GridLayout, palette: &Palette) {
        let border = layout.border as i32;
        let square = layout.cell_size().max(0) as i32;

        for (row, cells) in session.grid().rows().enumerate() {
            for (col, &painted) in cells.iter().enumerate() {
                let (row, col) = (row as i32, col as i32);
                let x = border + col * square;
                let y = border + row * square;
                if painted {
                    canvas.fill_rect(x, y, square, square, BLACK);
                    canvas.put_pixel(palette.mini_left + col, palette.mini_top + row, BLACK);
                } else {
                    canvas.fill_rect(x, y, square, square, WHITE);
                    canvas.outline_rect(x, y, square, square, BLACK);
                }
            }
        }
    }

    fn draw_button(canvas: &mut Canvas<'_>, tool: ToolMode, (x, y): (i32, i32), radius: i32) {
        match tool {
            ToolMode::Black => canvas.fill_circle(x, y, radius, BLACK),
            ToolMode::White => {
                canvas.fill_circle(x, y, radius, WHITE);
                canvas.ring(x, y, radius, 2, BLACK);
            }
            ToolMode::Fill => {
                canvas.fill_circle(x, y, radius, BLACK);
                canvas.ring(x, y, radius / 2, 2, WHITE);
            }
            ToolMode::WhiteFill => {
                canvas.fill_circle(x, y, radius, WHITE);
                canvas.ring(x, y, radius / 2, 2, BLACK);
            }
            ToolMode::Blackout | ToolMode::Whiteout => {
                let face = if tool == ToolMode::Blackout { BLACK } else { WHITE };
                canvas.fill_circle(x, y, radius, face);
                // exclamation mark
                canvas.fill_rect(x - 1, y - 9, 3, 10, RED);
                canvas.fill_circle(x, y + radius / 2, 2, RED);
            }
            ToolMode::Checker => {
                for r in (2..radius).step_by(4) {
                    canvas.ring(x, y, r, 1, WHITE);
                }
                for r in (0..radius + 2).step_by(4) {
                    canvas.ring(x, y, r, 1, BLACK);
                }
            }
        }
    }
}

/// RGBA frame buffer with clipped drawing primitives.
struct Canvas<'a> {
    frame: &'a mut [u8],
    width: i32,
    height: i32,
}

impl Canvas<'_> {
    fn clear(&mut self, color: [u8; 4]) {
        for pixel in self.frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color);
        }
    }

    fn put_pixel(&mut self, x: i32, y: i32, color: [u8; 4]) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        let index = ((y * self.width + x) * 4) as usize;
        if let Some(pixel) = self.frame.get_mut(index..index + 4) {
            pixel.copy_from_slice(&color);
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: [u8; 4]) {
        for py in y..y + h {
            for px in x..x + w {
                self.put_pixel(px, py, color);
            }
        }
    }

    fn outline_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: [u8; 4]) {
        if w <= 0 || h <= 0 {
            return;
        }
        for px in x..x + w {
            self.put_pixel(px, y, color);
            self.put_pixel(px, y + h - 1, color);
        }
        for py in y..y + h {
            self.put_pixel(x, py, color);
            self.put_pixel(x + w - 1, py, color);
        }
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: [u8; 4]) {
        self.ring(cx, cy, radius, radius + 1, color);
    }

    /// Circle outline `thickness` pixels wide, growing inward from `radius`.
    fn ring(&mut self, cx: i32, cy: i32, radius: i32, thickness: i32, color: [u8; 4]) {
        let outer = radius * radius;
        let inner_radius = radius - thickness;
        let inner = if inner_radius < 0 { -1 } else { inner_radius * inner_radius };
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let d = dx * dx + dy * dy;
                if d <= outer && d > inner {
                    self.put_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }

    fn fill_triangle(&mut self, points: [(i32, i32); 3], color: [u8; 4]) {
        let [a, b, c] = points;
        let min_x = a.0.min(b.0).min(c.0);
        let max_x = a.0.max(b.0).max(c.0);
        let min_y = a.1.min(b.1).min(c.1);
        let max_y = a.1.max(b.1).max(c.1);
        let edge = |p: (i32, i32), q: (i32, i32), x: i32, y: i32| (q.0 - p.0) * (y - p.1) - (q.1 - p.1) * (x - p.0);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let e0 = edge(a, b, x, y);
                let e1 = edge(b, c, x, y);
                let e2 = edge(c, a, x, y);
                let inside = (e0 >= 0 && e1 >= 0 && e2 >= 0) || (e0 <= 0 && e1 <= 0 && e2 <= 0);
                if inside {
                    self.put_pixel(x, y, color);
                }
            }
        }
    }
}
