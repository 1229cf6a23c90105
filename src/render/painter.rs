use egui::emath::RectTransform;
use egui::{pos2, Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use crate::render::canvas::Canvas;
use crate::simulation::Point;

/// Largest rect with the canvas aspect ratio that fits centred in `screen`
pub fn fit_rect(canvas: Vec2, screen: Rect) -> Rect {
    if canvas.x <= 0.0 || canvas.y <= 0.0 {
        return Rect::from_center_size(screen.center(), Vec2::ZERO);
    }
    let scale = (screen.width() / canvas.x).min(screen.height() / canvas.y).max(0.0);
    Rect::from_center_size(screen.center(), canvas * scale)
}

/// Canvas backed by an egui painter.
///
/// World coordinates span `size` and are mapped onto `target`; stroke widths
/// and font sizes scale with it.
pub struct PainterCanvas<'p> {
    painter: &'p Painter,
    size: Vec2,
    transform: RectTransform,
}

impl<'p> PainterCanvas<'p> {
    pub fn new(painter: &'p Painter, size: Vec2, target: Rect) -> Self {
        let world = Rect::from_min_size(Pos2::ZERO, size);
        Self {
            painter,
            size,
            transform: RectTransform::from_to(world, target),
        }
    }

    fn pos(&self, point: Point) -> Pos2 {
        self.transform.transform_pos(pos2(point.x, point.y))
    }

    fn scale(&self) -> f32 {
        self.transform.scale().x
    }

    fn stroke(&self, color: Color32, width: f32) -> Stroke {
        Stroke::new(width * self.scale(), color)
    }
}

impl Canvas for PainterCanvas<'_> {
    fn width(&self) -> f32 {
        self.size.x
    }

    fn height(&self) -> f32 {
        self.size.y
    }

    /// A minimized window leaves nothing to draw on
    fn is_available(&self) -> bool {
        let target = self.transform.to();
        target.is_finite() && target.width() > 0.0 && target.height() > 0.0
    }

    fn clear(&mut self, color: Color32) {
        self.painter.rect_filled(*self.transform.to(), 0.0, color.to_opaque());
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Color32, width: f32) {
        self.painter
            .line_segment([self.pos(from), self.pos(to)], self.stroke(color, width));
    }

    fn stroke_polyline(&mut self, points: &[Point], color: Color32, width: f32) {
        let points = points.iter().map(|p| self.pos(*p)).collect();
        self.painter.add(Shape::line(points, self.stroke(color, width)));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color32) {
        self.painter
            .circle_filled(self.pos(center), radius * self.scale(), color);
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color32, width: f32) {
        self.painter
            .circle_stroke(self.pos(center), radius * self.scale(), self.stroke(color, width));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color32) {
        let min = self.pos(Point::new(x, y));
        let rect = Rect::from_min_size(min, Vec2::new(width, height) * self.scale());
        self.painter.rect_filled(rect, 0.0, color);
    }

    fn fill_text(&mut self, text: &str, anchor: Point, size: f32, color: Color32) {
        self.painter.text(
            self.pos(anchor),
            Align2::CENTER_BOTTOM,
            text,
            FontId::proportional(size * self.scale()),
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::FieldRenderer;
    use crate::simulation::{Entity, SimulationParameters, Traits, VisualMode};
    use egui::{Context, LayerId, RawInput};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const WORLD: Vec2 = Vec2::new(800.0, 600.0);

    /// Run `draw` inside one egui pass and return the shapes it produced
    fn paint<F>(target: Rect, draw: F) -> Vec<Shape>
    where
        F: FnOnce(&mut PainterCanvas<'_>),
    {
        let ctx = Context::default();
        ctx.begin_pass(RawInput::default());
        let painter = ctx.layer_painter(LayerId::background());
        let mut canvas = PainterCanvas::new(&painter, WORLD, target);
        draw(&mut canvas);
        let output = ctx.end_pass();
        output.shapes.into_iter().map(|clipped| clipped.shape).collect()
    }

    fn texts(shapes: &[Shape]) -> Vec<String> {
        shapes
            .iter()
            .filter_map(|shape| match shape {
                Shape::Text(text) => Some(text.galley.text().to_owned()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_fit_rect_letterboxes() {
        let wide = fit_rect(WORLD, Rect::from_min_size(Pos2::ZERO, Vec2::new(1600.0, 600.0)));
        assert_eq!(wide, Rect::from_min_max(pos2(400.0, 0.0), pos2(1200.0, 600.0)));

        let tall = fit_rect(WORLD, Rect::from_min_size(Pos2::ZERO, Vec2::new(400.0, 900.0)));
        assert_eq!(tall.size(), Vec2::new(400.0, 300.0));
        assert_eq!(tall.center(), pos2(200.0, 450.0));
    }

    #[test]
    fn test_zero_target_is_unavailable() {
        paint(Rect::from_min_size(Pos2::ZERO, Vec2::ZERO), |canvas| {
            assert!(!canvas.is_available());
        });

        paint(Rect::from_min_size(Pos2::ZERO, WORLD), |canvas| {
            assert!(canvas.is_available());
        });
    }

    #[test]
    fn test_primitives_are_scaled_into_target() {
        // Half-size target offset by (10, 20)
        let target = Rect::from_min_size(pos2(10.0, 20.0), WORLD * 0.5);
        let shapes = paint(target, |canvas| {
            canvas.fill_circle(Point::new(100.0, 200.0), 10.0, Color32::RED);
            canvas.fill_rect(0.0, 0.0, 40.0, 4.0, Color32::BLUE);
        });

        let circle = shapes
            .iter()
            .find_map(|shape| match shape {
                Shape::Circle(circle) => Some(*circle),
                _ => None,
            })
            .expect("circle");
        assert_eq!(circle.center, pos2(60.0, 120.0));
        assert_eq!(circle.radius, 5.0);
        assert_eq!(circle.fill, Color32::RED);

        let rect = shapes
            .iter()
            .find_map(|shape| match shape {
                Shape::Rect(rect) => Some(rect.rect),
                _ => None,
            })
            .expect("rect");
        assert_eq!(rect, Rect::from_min_size(pos2(10.0, 20.0), Vec2::new(20.0, 2.0)));
    }

    #[test]
    fn test_labels_and_markers_always_render() {
        let entities = vec![
            Entity::new(0, Point::new(100.0, 100.0), Point::default(), Traits::new(0.5, 0.5, 0.5, 0.5), 0.0),
            Entity::new(1, Point::new(160.0, 100.0), Point::default(), Traits::new(0.5, 0.5, 0.5, 0.5), 45.0),
        ];
        let params = SimulationParameters {
            visual_mode: VisualMode::Quantum,
            quantum_effects: 0.0,
            ..Default::default()
        };

        let shapes = paint(Rect::from_min_size(Pos2::ZERO, WORLD), |canvas| {
            let mut rng = ChaCha8Rng::seed_from_u64(1);
            FieldRenderer::default()
                .render_frame(canvas, &entities, &params, &mut rng)
                .unwrap();
        });

        let labels = texts(&shapes);
        assert!(labels.contains(&"Culture 1".to_string()));
        assert!(labels.contains(&"Culture 2".to_string()));
        assert!(labels.contains(&"\u{221e}".to_string()));

        // Label sits above the body, bottom edge at y - 15
        let name = shapes
            .iter()
            .find_map(|shape| match shape {
                Shape::Text(text) if text.galley.text() == "Culture 1" => {
                    Some(Rect::from_min_size(text.pos, text.galley.size()))
                }
                _ => None,
            })
            .expect("name label");
        assert!((name.center().x - 100.0).abs() < 1.0);
        assert!((name.bottom() - 85.0).abs() <= 1.0);
    }
}
