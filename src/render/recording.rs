use egui::Color32;

use crate::render::canvas::Canvas;
use crate::simulation::Point;

/// One recorded drawing call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Color32),
    Line {
        from: Point,
        to: Point,
        color: Color32,
        width: f32,
    },
    Polyline {
        points: Vec<Point>,
        color: Color32,
        width: f32,
    },
    FillCircle {
        center: Point,
        radius: f32,
        color: Color32,
    },
    StrokeCircle {
        center: Point,
        radius: f32,
        color: Color32,
        width: f32,
    },
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color32,
    },
    Text {
        text: String,
        anchor: Point,
        size: f32,
        color: Color32,
    },
}

/// Canvas that keeps a list of draw calls instead of pixels
#[derive(Debug)]
pub struct RecordingCanvas {
    width: f32,
    height: f32,
    available: bool,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            available: true,
            commands: Vec::new(),
        }
    }

    /// A canvas that reports itself as unavailable
    pub fn detached(width: f32, height: f32) -> Self {
        Self {
            available: false,
            ..Self::new(width, height)
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain recorded commands
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn clear(&mut self, color: Color32) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Color32, width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn stroke_polyline(&mut self, points: &[Point], color: Color32, width: f32) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            color,
            width,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color32) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color32, width: f32) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            width,
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color32) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, anchor: Point, size: f32, color: Color32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            anchor,
            size,
            color,
        });
    }
}
