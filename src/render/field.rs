use egui::Color32;
use rand::Rng;

use crate::config::{
    COLLAPSE_PROBABILITY, COLLAPSE_RING_RADII, COLLAPSE_THRESHOLD, FIELD_CELL_GAP,
    FIELD_CELL_SIZE, FIELD_MIN_AMPLITUDE, GRID_SPACING, MARKER_FONT_SIZE, NAME_FONT_SIZE,
    TRAIT_BAR_HEIGHT, TRAIT_BAR_SPACING, TRAIT_BAR_WIDTH, UNCERTAINTY_BAND_SCALE,
    UNCERTAINTY_BAND_THRESHOLD, WAVE_THRESHOLD,
};
use crate::error::RenderError;
use crate::render::canvas::Canvas;
use crate::render::color::{hsl, hsla, with_alpha};
use crate::simulation::metrics::{for_each_pair, is_entangled, similarity};
use crate::simulation::{Entity, Point, SimulationParameters, VisualMode};

const GRID_COLOR: Color32 = Color32::from_rgb(200, 200, 200);
const GRID_ALPHA: f32 = 0.3;
const GRID_LINE_WIDTH: f32 = 0.5;
const CONNECTION_COLOR: Color32 = Color32::from_rgb(100, 149, 237);
const ENTANGLEMENT_COLOR: Color32 = Color32::from_rgb(255, 100, 255);
const ENTANGLEMENT_ALPHA: f32 = 0.7;
const ENTANGLEMENT_MARKER: &str = "\u{221e}";
const TRAIL_COLOR: Color32 = Color32::from_rgb(100, 100, 100);
const TRAIL_ALPHA: f32 = 0.2;
const WAVE_COLOR: Color32 = Color32::from_rgb(170, 100, 200);
const RING_COLOR: Color32 = Color32::WHITE;
const RING_ALPHA: f32 = 0.7;
const RING_WIDTH: f32 = 2.0;
const LABEL_OFFSET: f32 = 15.0;
const BAND_ALPHA: f32 = 0x44 as f32 / 255.0;

/// Bar colours for tradition, innovation, globalization, localization
pub const TRAIT_COLORS: [Color32; 4] = [
    Color32::from_rgb(0xff, 0x59, 0x5e),
    Color32::from_rgb(0xff, 0xca, 0x3a),
    Color32::from_rgb(0x8a, 0xc9, 0x26),
    Color32::from_rgb(0x19, 0x82, 0xc4),
];

/// One interference cell above the visibility threshold
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldCell {
    /// Top-left corner
    pub x: f32,
    pub y: f32,
    pub amplitude: f32,
    pub phase: f32,
}

impl FieldCell {
    pub fn color(&self) -> Color32 {
        let hue = (self.phase * 30.0).rem_euclid(360.0);
        hsla(hue, 0.7, 0.6, (self.amplitude * 0.3).min(0.2))
    }
}

/// A collapse cue drawn this frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollapseEvent {
    pub entity_id: u32,
    pub center: Point,
}

/// What a frame produced besides pixels
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub collapse: Option<CollapseEvent>,
    pub field_cells: usize,
}

/// Synthetic interference over a 20-unit grid covering the canvas
pub fn interference_field(
    entities: &[Entity],
    params: &SimulationParameters,
    width: f32,
    height: f32,
) -> Vec<FieldCell> {
    let intensity = params.quantum_effects;
    let mut cells = Vec::new();

    let mut x = 0.0;
    while x < width {
        let mut y = 0.0;
        while y < height {
            let mut amplitude = 0.0;
            let mut phase = 0.0;
            for entity in entities {
                let distance = Point::new(x, y).distance(entity.position);
                amplitude += ((distance * intensity * 0.1).cos() + 1.0) / (distance + 1.0);
                phase += distance * intensity * 0.1;
            }
            if amplitude > FIELD_MIN_AMPLITUDE {
                cells.push(FieldCell {
                    x,
                    y,
                    amplitude,
                    phase,
                });
            }
            y += FIELD_CELL_SIZE;
        }
        x += FIELD_CELL_SIZE;
    }

    cells
}

/// Draws the entity snapshot in the current visual mode
#[derive(Debug, Clone)]
pub struct FieldRenderer {
    background: Color32,
}

impl Default for FieldRenderer {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
        }
    }
}

impl FieldRenderer {
    pub fn new(background: Color32) -> Self {
        Self { background }
    }

    /// Draw one frame, rolling for a collapse cue. An empty snapshot draws nothing.
    pub fn render_frame<C, R>(
        &self,
        canvas: &mut C,
        entities: &[Entity],
        params: &SimulationParameters,
        rng: &mut R,
    ) -> Result<FrameReport, RenderError>
    where
        C: Canvas + ?Sized,
        R: Rng + ?Sized,
    {
        if !canvas.is_available() {
            return Err(RenderError::SurfaceUnavailable);
        }
        if entities.is_empty() {
            return Ok(FrameReport::default());
        }

        let mut collapse = None;
        if shows_interference(params)
            && params.quantum_effects > COLLAPSE_THRESHOLD
            && rng.gen_bool(COLLAPSE_PROBABILITY)
        {
            let target = &entities[rng.gen_range(0..entities.len())];
            collapse = Some(CollapseEvent {
                entity_id: target.id,
                center: target.position,
            });
        }

        self.draw(canvas, entities, params, collapse)
    }

    /// Draw a snapshot without rolling; `collapse` rings are drawn as given.
    pub fn draw<C>(
        &self,
        canvas: &mut C,
        entities: &[Entity],
        params: &SimulationParameters,
        collapse: Option<CollapseEvent>,
    ) -> Result<FrameReport, RenderError>
    where
        C: Canvas + ?Sized,
    {
        if !canvas.is_available() {
            return Err(RenderError::SurfaceUnavailable);
        }
        let mut report = FrameReport::default();
        if entities.is_empty() {
            return Ok(report);
        }

        canvas.clear(self.background);

        if params.visual_mode == VisualMode::Physical {
            draw_grid(canvas);
        }

        draw_connections(canvas, entities, params);

        for entity in entities {
            draw_entity(canvas, entity, params);
        }

        if shows_interference(params) {
            report.field_cells = draw_interference(canvas, entities, params);

            if let Some(event) = collapse {
                let ring = with_alpha(RING_COLOR, RING_ALPHA);
                for radius in COLLAPSE_RING_RADII {
                    canvas.stroke_circle(event.center, radius, ring, RING_WIDTH);
                }
                report.collapse = Some(event);
            }
        }

        Ok(report)
    }
}

fn shows_interference(params: &SimulationParameters) -> bool {
    params.visual_mode == VisualMode::Quantum && params.quantum_effects > WAVE_THRESHOLD
}

fn draw_grid<C: Canvas + ?Sized>(canvas: &mut C) {
    let (width, height) = (canvas.width(), canvas.height());
    let color = with_alpha(GRID_COLOR, GRID_ALPHA);

    let mut y = 0.0;
    while y < height {
        canvas.stroke_line(Point::new(0.0, y), Point::new(width, y), color, GRID_LINE_WIDTH);
        y += GRID_SPACING;
    }

    let mut x = 0.0;
    while x < width {
        canvas.stroke_line(Point::new(x, 0.0), Point::new(x, height), color, GRID_LINE_WIDTH);
        x += GRID_SPACING;
    }
}

/// Opacity of a connection line; 0 at the interaction radius
pub fn connection_alpha(distance: f32, similarity: f32, interaction_radius: f32) -> f32 {
    ((interaction_radius - distance) / interaction_radius * similarity).min(1.0)
}

fn draw_connections<C: Canvas + ?Sized>(canvas: &mut C, entities: &[Entity], params: &SimulationParameters) {
    for_each_pair(entities, |a, b| {
        let distance = a.position.distance(b.position);
        if distance >= params.interaction_radius {
            return;
        }

        let alpha = connection_alpha(distance, similarity(a, b), params.interaction_radius);
        canvas.stroke_line(a.position, b.position, with_alpha(CONNECTION_COLOR, alpha), alpha * 2.0);

        if params.visual_mode == VisualMode::Quantum && is_entangled(a, b) {
            canvas.fill_text(
                ENTANGLEMENT_MARKER,
                a.position.midpoint(b.position),
                MARKER_FONT_SIZE,
                with_alpha(ENTANGLEMENT_COLOR, ENTANGLEMENT_ALPHA),
            );
        }
    });
}

/// Body colour: trait RGB in cultural mode, the fixed hue otherwise
pub fn body_color(entity: &Entity, mode: VisualMode) -> Color32 {
    match mode {
        VisualMode::Cultural => {
            let channel = |v: f32| (v * 255.0).floor().clamp(0.0, 255.0) as u8;
            Color32::from_rgb(
                channel(entity.traits.tradition),
                channel(entity.traits.innovation),
                channel(entity.traits.globalization),
            )
        }
        _ => hsl(entity.hue, 0.7, 0.6),
    }
}

fn draw_entity<C: Canvas + ?Sized>(canvas: &mut C, entity: &Entity, params: &SimulationParameters) {
    if params.visual_mode == VisualMode::Physical && entity.history.len() > 1 {
        let trail: Vec<Point> = entity.history.iter().copied().collect();
        canvas.stroke_polyline(&trail, with_alpha(TRAIL_COLOR, TRAIL_ALPHA), 1.0);
    }

    if params.visual_mode == VisualMode::Quantum {
        for point in &entity.wave_points {
            canvas.fill_circle(
                point.position,
                5.0 * point.probability,
                with_alpha(WAVE_COLOR, point.probability * 0.5),
            );
        }
    }

    canvas.fill_circle(entity.position, entity.radius, body_color(entity, params.visual_mode));

    canvas.fill_text(
        &entity.name,
        Point::new(entity.position.x, entity.position.y - LABEL_OFFSET),
        NAME_FONT_SIZE,
        Color32::BLACK,
    );

    if params.visual_mode == VisualMode::Cultural {
        draw_trait_bars(canvas, entity, params.cultural_quantum_state);
    }
}

fn draw_trait_bars<C: Canvas + ?Sized>(canvas: &mut C, entity: &Entity, cultural_quantum_state: f32) {
    let left = entity.position.x - TRAIT_BAR_WIDTH / 2.0;

    for (index, (value, color)) in entity
        .traits
        .as_array()
        .into_iter()
        .zip(TRAIT_COLORS)
        .enumerate()
    {
        let top = entity.position.y + LABEL_OFFSET + index as f32 * TRAIT_BAR_SPACING;
        canvas.fill_rect(left, top, TRAIT_BAR_WIDTH * value, TRAIT_BAR_HEIGHT, color);

        if cultural_quantum_state > UNCERTAINTY_BAND_THRESHOLD {
            let (low, high) = uncertainty_band(value, cultural_quantum_state);
            canvas.fill_rect(
                left + TRAIT_BAR_WIDTH * low,
                top,
                TRAIT_BAR_WIDTH * (high - low),
                TRAIT_BAR_HEIGHT,
                with_alpha(color, BAND_ALPHA),
            );
        }
    }
}

/// `[value - u, value + u]` clamped to [0, 1], `u = state * 0.3`
pub fn uncertainty_band(value: f32, cultural_quantum_state: f32) -> (f32, f32) {
    let half_width = cultural_quantum_state * UNCERTAINTY_BAND_SCALE;
    ((value - half_width).max(0.0), (value + half_width).min(1.0))
}

fn draw_interference<C: Canvas + ?Sized>(
    canvas: &mut C,
    entities: &[Entity],
    params: &SimulationParameters,
) -> usize {
    let cells = interference_field(entities, params, canvas.width(), canvas.height());
    let side = FIELD_CELL_SIZE - FIELD_CELL_GAP;
    for cell in &cells {
        canvas.fill_rect(cell.x, cell.y, side, side, cell.color());
    }
    cells.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::{DrawCommand, RecordingCanvas};
    use crate::simulation::Traits;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn entity(id: u32, x: f32, y: f32, traits: Traits) -> Entity {
        Entity::new(id, Point::new(x, y), Point::default(), traits, 120.0)
    }

    fn pair(traits_b: Traits) -> Vec<Entity> {
        vec![
            entity(0, 100.0, 100.0, Traits::new(0.5, 0.5, 0.5, 0.5)),
            entity(1, 160.0, 100.0, traits_b),
        ]
    }

    fn params(mode: VisualMode) -> SimulationParameters {
        SimulationParameters {
            visual_mode: mode,
            ..Default::default()
        }
    }

    fn render(entities: &[Entity], params: &SimulationParameters, seed: u64) -> (Vec<DrawCommand>, FrameReport) {
        let mut canvas = RecordingCanvas::new(800.0, 600.0);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let report = FieldRenderer::default()
            .render_frame(&mut canvas, entities, params, &mut rng)
            .unwrap();
        (canvas.take(), report)
    }

    fn grid_lines(commands: &[DrawCommand]) -> usize {
        commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { color, .. } if *color == with_alpha(GRID_COLOR, GRID_ALPHA)))
            .count()
    }

    #[test]
    fn test_grid_only_in_physical_mode() {
        let entities = pair(Traits::new(0.5, 0.5, 0.5, 0.5));

        let (physical, _) = render(&entities, &params(VisualMode::Physical), 1);
        // 12 horizontal + 16 vertical
        assert_eq!(grid_lines(&physical), 28);

        let (cultural, _) = render(&entities, &params(VisualMode::Cultural), 1);
        assert_eq!(grid_lines(&cultural), 0);
    }

    #[test]
    fn test_connection_alpha_and_width() {
        let entities = pair(Traits::new(0.5, 0.5, 0.5, 0.5));
        let (commands, _) = render(&entities, &params(VisualMode::Cultural), 1);

        let line = commands
            .iter()
            .find_map(|c| match c {
                DrawCommand::Line { color, width, .. } => Some((*color, *width)),
                _ => None,
            })
            .expect("connection line");
        // (150 - 60) / 150 * 1.0
        assert_eq!(line.0, with_alpha(CONNECTION_COLOR, 0.6));
        assert_eq!(line.0.a(), 153);
        assert!((line.1 - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_connection_alpha_formula() {
        assert_eq!(connection_alpha(0.0, 1.0, 150.0), 1.0);
        assert!((connection_alpha(75.0, 0.5, 150.0) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_no_connection_beyond_interaction_radius() {
        let entities = vec![
            entity(0, 100.0, 100.0, Traits::new(0.5, 0.5, 0.5, 0.5)),
            entity(1, 400.0, 100.0, Traits::new(0.5, 0.5, 0.5, 0.5)),
        ];
        let (commands, _) = render(&entities, &params(VisualMode::Cultural), 1);
        assert!(!commands.iter().any(|c| matches!(c, DrawCommand::Line { .. })));
    }

    #[test]
    fn test_entanglement_marker_in_quantum_mode() {
        let similar = pair(Traits::new(0.5, 0.5, 0.5, 0.5));
        let (commands, _) = render(&similar, &params(VisualMode::Quantum), 1);
        let marker = commands.iter().find_map(|c| match c {
            DrawCommand::Text { text, anchor, .. } if text == ENTANGLEMENT_MARKER => Some(*anchor),
            _ => None,
        });
        assert_eq!(marker, Some(Point::new(130.0, 100.0)));

        let distinct = pair(Traits::new(0.0, 1.0, 0.0, 1.0));
        let (commands, _) = render(&distinct, &params(VisualMode::Quantum), 1);
        assert!(!commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Text { text, .. } if text == ENTANGLEMENT_MARKER)));

        let (physical, _) = render(&similar, &params(VisualMode::Physical), 1);
        assert!(!physical
            .iter()
            .any(|c| matches!(c, DrawCommand::Text { text, .. } if text == ENTANGLEMENT_MARKER)));
    }

    #[test]
    fn test_trail_drawn_in_physical_mode() {
        let mut entities = pair(Traits::new(0.5, 0.5, 0.5, 0.5));
        entities[0].history.extend([Point::new(90.0, 100.0), Point::new(95.0, 100.0)]);

        let (commands, _) = render(&entities, &params(VisualMode::Physical), 1);
        let trails: Vec<_> = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polyline { .. }))
            .collect();
        assert_eq!(trails.len(), 1, "single-point history draws no trail");

        let (cultural, _) = render(&entities, &params(VisualMode::Cultural), 1);
        assert!(!cultural.iter().any(|c| matches!(c, DrawCommand::Polyline { .. })));
    }

    #[test]
    fn test_cultural_body_colour_from_traits() {
        let e = entity(0, 0.0, 0.0, Traits::new(1.0, 0.5, 0.0, 0.3));
        assert_eq!(body_color(&e, VisualMode::Cultural), Color32::from_rgb(255, 127, 0));
        assert_eq!(body_color(&e, VisualMode::Physical), hsl(120.0, 0.7, 0.6));
    }

    #[test]
    fn test_trait_bars_and_uncertainty_bands() {
        let entities = pair(Traits::new(0.5, 0.5, 0.5, 0.5));
        let mut p = params(VisualMode::Cultural);

        let (commands, _) = render(&entities, &p, 1);
        let rects = commands.iter().filter(|c| matches!(c, DrawCommand::FillRect { .. })).count();
        assert_eq!(rects, 8, "four bars per entity");

        p.cultural_quantum_state = 0.9;
        let (commands, _) = render(&entities, &p, 1);
        let rects: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { x, width, .. } => Some((*x, *width)),
                _ => None,
            })
            .collect();
        assert_eq!(rects.len(), 16, "bars plus bands");
        // First entity, first trait: value 0.5, band [0.23, 0.77]
        assert!((rects[0].0 - 80.0).abs() < 1e-4 && (rects[0].1 - 20.0).abs() < 1e-4);
        assert!((rects[1].0 - (80.0 + 40.0 * 0.23)).abs() < 1e-3);
        assert!((rects[1].1 - 40.0 * 0.54).abs() < 1e-3);
    }

    #[test]
    fn test_uncertainty_band_clamps() {
        let (low, high) = uncertainty_band(0.95, 1.0);
        assert!((low - 0.65).abs() < 1e-6);
        assert_eq!(high, 1.0);
        let (low, high) = uncertainty_band(0.1, 1.0);
        assert_eq!(low, 0.0);
        assert!((high - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_wave_points_only_in_quantum_mode() {
        let mut entities = pair(Traits::new(0.5, 0.5, 0.5, 0.5));
        entities[0].wave_points.push(crate::simulation::WavePoint {
            position: Point::new(105.0, 100.0),
            probability: 0.8,
        });

        let circles = |commands: &[DrawCommand]| {
            commands
                .iter()
                .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
                .count()
        };

        let (quantum, _) = render(&entities, &params(VisualMode::Quantum), 1);
        assert_eq!(circles(&quantum), 3);
        assert!(quantum.iter().any(|c| matches!(
            c,
            DrawCommand::FillCircle { radius, color, .. } if (*radius - 4.0).abs() < 1e-6 && color.a() == 102
        )));

        let (physical, _) = render(&entities, &params(VisualMode::Physical), 1);
        assert_eq!(circles(&physical), 2);
    }

    #[test]
    fn test_interference_field_only_when_strong() {
        let entities = pair(Traits::new(0.5, 0.5, 0.5, 0.5));
        let mut p = params(VisualMode::Quantum);

        p.quantum_effects = 0.5;
        let (_, report) = render(&entities, &p, 1);
        assert_eq!(report.field_cells, 0);

        p.quantum_effects = 0.6;
        let (commands, report) = render(&entities, &p, 1);
        assert!(report.field_cells > 0);
        let cell_rects = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { width, height, .. } if *width == 18.0 && *height == 18.0))
            .count();
        assert_eq!(cell_rects, report.field_cells);
    }

    #[test]
    fn test_interference_cell_at_entity() {
        let entities = vec![entity(0, 20.0, 40.0, Traits::new(0.5, 0.5, 0.5, 0.5))];
        let p = SimulationParameters {
            quantum_effects: 1.0,
            ..Default::default()
        };
        let cells = interference_field(&entities, &p, 800.0, 600.0);
        let at_entity = cells
            .iter()
            .find(|c| c.x == 20.0 && c.y == 40.0)
            .expect("cell under the entity");
        // cos(0) + 1 over 0 + 1
        assert_eq!(at_entity.amplitude, 2.0);
        assert_eq!(at_entity.phase, 0.0);
        assert_eq!(at_entity.color().a(), 51);
        assert!(cells.iter().all(|c| c.amplitude > 0.05));
    }

    #[test]
    fn test_collapse_requires_strong_effects() {
        let entities = pair(Traits::new(0.5, 0.5, 0.5, 0.5));
        let mut p = params(VisualMode::Quantum);
        p.quantum_effects = 0.7;

        let mut canvas = RecordingCanvas::new(800.0, 600.0);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let renderer = FieldRenderer::default();
        for _ in 0..2000 {
            let report = renderer.render_frame(&mut canvas, &entities, &p, &mut rng).unwrap();
            assert!(report.collapse.is_none());
            canvas.take();
        }
    }

    #[test]
    fn test_collapse_draws_rings() {
        let entities = pair(Traits::new(0.5, 0.5, 0.5, 0.5));
        let mut p = params(VisualMode::Quantum);
        p.quantum_effects = 0.9;

        let mut canvas = RecordingCanvas::new(800.0, 600.0);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let renderer = FieldRenderer::default();

        let mut collapses = 0;
        for _ in 0..2000 {
            let report = renderer.render_frame(&mut canvas, &entities, &p, &mut rng).unwrap();
            let commands = canvas.take();
            let rings: Vec<f32> = commands
                .iter()
                .filter_map(|c| match c {
                    DrawCommand::StrokeCircle { radius, .. } => Some(*radius),
                    _ => None,
                })
                .collect();

            match report.collapse {
                Some(event) => {
                    collapses += 1;
                    assert_eq!(rings, vec![10.0, 30.0, 50.0, 70.0, 90.0]);
                    assert!(entities.iter().any(|e| e.id == event.entity_id && e.position == event.center));
                }
                None => assert!(rings.is_empty()),
            }
        }
        // Expected ~20
        assert!((5..50).contains(&collapses), "{} collapses", collapses);
    }

    #[test]
    fn test_draw_repeats_collapse_without_rolling() {
        let entities = pair(Traits::new(0.5, 0.5, 0.5, 0.5));
        let mut p = params(VisualMode::Quantum);
        p.quantum_effects = 0.9;
        let event = CollapseEvent {
            entity_id: 1,
            center: entities[1].position,
        };

        let mut canvas = RecordingCanvas::new(800.0, 600.0);
        let renderer = FieldRenderer::default();
        let report = renderer.draw(&mut canvas, &entities, &p, Some(event)).unwrap();
        assert_eq!(report.collapse, Some(event));
        let rings = canvas
            .take()
            .into_iter()
            .filter(|c| matches!(c, DrawCommand::StrokeCircle { center, .. } if *center == event.center))
            .count();
        assert_eq!(rings, 5);

        // Rings only show while the interference field does
        p.visual_mode = VisualMode::Cultural;
        let report = renderer.draw(&mut canvas, &entities, &p, Some(event)).unwrap();
        assert!(report.collapse.is_none());
        assert!(!canvas.take().iter().any(|c| matches!(c, DrawCommand::StrokeCircle { .. })));
    }

    #[test]
    fn test_unavailable_surface_is_an_error() {
        let entities = pair(Traits::new(0.5, 0.5, 0.5, 0.5));
        let mut canvas = RecordingCanvas::detached(800.0, 600.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let result = FieldRenderer::default().render_frame(
            &mut canvas,
            &entities,
            &SimulationParameters::default(),
            &mut rng,
        );
        assert!(matches!(result, Err(RenderError::SurfaceUnavailable)));
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn test_empty_snapshot_draws_nothing() {
        let (commands, report) = render(&[], &params(VisualMode::Quantum), 1);
        assert!(commands.is_empty());
        assert_eq!(report, FrameReport::default());
    }

    #[test]
    fn test_names_drawn_above_bodies() {
        let entities = pair(Traits::new(0.5, 0.5, 0.5, 0.5));
        let (commands, _) = render(&entities, &params(VisualMode::Physical), 1);
        let labels: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, anchor, .. } => Some((text.clone(), *anchor)),
                _ => None,
            })
            .collect();
        assert_eq!(
            labels,
            vec![
                ("Culture 1".to_string(), Point::new(100.0, 85.0)),
                ("Culture 2".to_string(), Point::new(160.0, 85.0)),
            ]
        );
    }
}
