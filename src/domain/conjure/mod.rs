//! The conjure page: a text prompt and a freehand drawing, submitted together.

pub mod canvas;

pub use self::canvas::{Canvas, Point, Stroke};
use {crate::domain::cue::Cue, serde::Serialize};

/// Display size of the drawing area on the largest layout.
pub const DEFAULT_SIZE: (u32, u32) = (169, 169);

/// The payload produced by a submission.
#[derive(Clone, Debug, Serialize)]
pub struct Submission {
    pub text: String,
    /// PNG data URL of the drawing.
    pub drawing: String,
}

#[derive(Clone, Debug)]
pub struct Form {
    prompt: String,
    canvas: Canvas,
}

impl Default for Form {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE.0, DEFAULT_SIZE.1)
    }
}

impl Form {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            prompt: String::new(),
            canvas: Canvas::new(width, height),
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Submitting requires a non-blank prompt and something drawn.
    pub fn can_submit(&self) -> bool {
        !self.prompt.trim().is_empty() && self.canvas.has_drawing()
    }

    /// Machine interface artwork; lights up once the form is ready.
    pub fn art(&self) -> &'static str {
        if self.can_submit() {
            "MACHINE INTERFACE_2.png"
        } else {
            "MACHINE INTERFACE_1.png"
        }
    }

    /// Builds the submission payload. Returns `None` while the form is
    /// incomplete. The prompt is submitted as typed, untrimmed.
    pub fn submit(&self) -> Result<Option<Submission>, canvas::Error> {
        if !self.can_submit() {
            return Ok(None);
        }
        Cue::ConjurePress.play();

        Ok(Some(Submission {
            text: self.prompt.clone(),
            drawing: self.canvas.to_data_url()?,
        }))
    }
}
