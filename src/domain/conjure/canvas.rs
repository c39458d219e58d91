//! Freehand drawing surface.
//!
//! Pointer input is recorded as strokes and only rasterized when a snapshot is
//! requested. Rendering mirrors a 2D canvas with a round-capped, round-joined
//! pen on a transparent background.

use base64::Engine;

/// Pen colour, `#c0c0c0`.
pub const STROKE_COLOR: [u8; 3] = [0xc0, 0xc0, 0xc0];

/// Pen width in pixels.
pub const LINE_WIDTH: f64 = 2.0;

/// A pointer position relative to the canvas' top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A connected run of pointer positions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stroke(pub Vec<Point>);

#[derive(Clone, Debug)]
pub struct Canvas {
    width: u32,
    height: u32,
    strokes: Vec<Stroke>,
    drawing: bool,
    has_drawing: bool,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            strokes: Vec::new(),
            drawing: false,
            has_drawing: false,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Whether the pen has actually moved while down at least once since the
    /// canvas was last initialised.
    pub fn has_drawing(&self) -> bool {
        self.has_drawing
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Re-initialises the canvas for a new display size. Everything drawn so
    /// far is discarded.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    pub fn pointer_down(&mut self, point: Point) {
        self.drawing = true;
        self.strokes.push(Stroke(vec![point]));
    }

    pub fn pointer_move(&mut self, point: Point) {
        if !self.drawing {
            return;
        }
        if let Some(stroke) = self.strokes.last_mut() {
            stroke.0.push(point);
            self.has_drawing = true;
        }
    }

    /// Pointer released or left the canvas.
    pub fn pointer_up(&mut self) {
        self.drawing = false;
    }

    /// Renders all strokes into a row-major RGBA8 buffer.
    pub fn rasterize(&self) -> Vec<u8> {
        let mut pixels = vec![0_u8; self.width as usize * self.height as usize * 4];
        let radius = LINE_WIDTH / 2.0;

        for stroke in &self.strokes {
            // A lone `moveTo` without a following `lineTo` paints nothing.
            for segment in stroke.0.windows(2) {
                self.fill_segment(&mut pixels, segment[0], segment[1], radius);
            }
        }
        pixels
    }

    fn fill_segment(&self, pixels: &mut [u8], from: Point, to: Point, radius: f64) {
        let min_x = (from.x.min(to.x) - radius).floor().max(0.0);
        let min_y = (from.y.min(to.y) - radius).floor().max(0.0);
        let max_x = (from.x.max(to.x) + radius).ceil().min(f64::from(self.width));
        let max_y = (from.y.max(to.y) + radius).ceil().min(f64::from(self.height));
        if min_x >= max_x || min_y >= max_y {
            return;
        }

        for y in min_y as u32..max_y as u32 {
            for x in min_x as u32..max_x as u32 {
                let center = Point {
                    x: f64::from(x) + 0.5,
                    y: f64::from(y) + 0.5,
                };
                if distance_to_segment(center, from, to) <= radius {
                    let offset = (y as usize * self.width as usize + x as usize) * 4;
                    pixels[offset..offset + 3].copy_from_slice(&STROKE_COLOR);
                    pixels[offset + 3] = 0xff;
                }
            }
        }
    }

    /// Encodes the current drawing as a PNG image.
    pub fn to_png(&self) -> Result<Vec<u8>, Error> {
        let pixels = self.rasterize();
        let mut png = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut png, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&pixels)?;
            writer.finish()?;
        }
        Ok(png)
    }

    /// Encodes the current drawing as a `data:image/png;base64,...` URL.
    pub fn to_data_url(&self) -> Result<String, Error> {
        let png = self.to_png()?;
        Ok(format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(png)
        ))
    }
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let length = dx * dx + dy * dy;
    let t = if length == 0.0 {
        0.0
    } else {
        (((p.x - a.x) * dx + (p.y - a.y) * dy) / length).clamp(0.0, 1.0)
    };
    let (cx, cy) = (a.x + t * dx, a.y + t * dy);
    ((p.x - cx).powi(2) + (p.y - cy).powi(2)).sqrt()
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to encode drawing: {0}")]
    Encoding(#[from] png::EncodingError),
}
