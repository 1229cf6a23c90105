use egui::Color32;

use crate::simulation::Point;

/// Drawing surface the field renderer draws through.
///
/// Coordinates are world units with the origin at the top-left corner.
pub trait Canvas {
    fn width(&self) -> f32;

    fn height(&self) -> f32;

    /// Whether drawing can happen at all (e.g. a detached surface)
    fn is_available(&self) -> bool {
        true
    }

    /// Fill the whole surface, ignoring alpha
    fn clear(&mut self, color: Color32);

    fn stroke_line(&mut self, from: Point, to: Point, color: Color32, width: f32);

    fn stroke_polyline(&mut self, points: &[Point], color: Color32, width: f32) {
        for pair in points.windows(2) {
            self.stroke_line(pair[0], pair[1], color, width);
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color32);

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color32, width: f32);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color32);

    /// Text horizontally centred on `anchor.x` with its baseline at `anchor.y`
    fn fill_text(&mut self, text: &str, anchor: Point, size: f32, color: Color32);
}
