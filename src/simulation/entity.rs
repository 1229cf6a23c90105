use std::collections::VecDeque;
use std::f32::consts::TAU;

use rand::Rng;

use crate::config::{
    CANVAS_HEIGHT, CANVAS_WIDTH, DIFFUSION_RATE, ENTITY_RADIUS, HISTORY_LEN, MAX_INITIAL_SPEED,
    SPAWN_MARGIN, WAVE_POINT_COUNT, WAVE_SPREAD_SCALE, WAVE_THRESHOLD,
};
use crate::simulation::params::SimulationParameters;

/// A point (or vector) in world coordinates
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// The four cultural dimensions, each in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Traits {
    pub tradition: f32,
    pub innovation: f32,
    pub globalization: f32,
    pub localization: f32,
}

impl Traits {
    pub const COUNT: usize = 4;

    pub const fn new(tradition: f32, innovation: f32, globalization: f32, localization: f32) -> Self {
        Self {
            tradition,
            innovation,
            globalization,
            localization,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.gen(), rng.gen(), rng.gen(), rng.gen())
    }

    /// Values in canonical order: tradition, innovation, globalization, localization
    pub fn as_array(&self) -> [f32; Traits::COUNT] {
        [
            self.tradition,
            self.innovation,
            self.globalization,
            self.localization,
        ]
    }

    /// One-sided exponential blend toward `other`; convex, so values stay in [0, 1]
    pub fn blend_toward(&mut self, other: &Traits, weight: f32) {
        let keep = 1.0 - weight;
        self.tradition = self.tradition * keep + other.tradition * weight;
        self.innovation = self.innovation * keep + other.innovation * weight;
        self.globalization = self.globalization * keep + other.globalization * weight;
        self.localization = self.localization * keep + other.localization * weight;
    }
}

/// Sampled point of an entity's probability cloud
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WavePoint {
    pub position: Point,
    /// Gaussian weight in (0, 1]
    pub probability: f32,
}

/// A simulated point-mass carrying cultural traits.
///
/// Entities are never mutated in place during a step: [`Entity::update`]
/// reads the pre-step snapshot and returns the next state.
#[derive(Clone, Debug)]
pub struct Entity {
    pub id: u32,
    pub name: String,
    pub position: Point,
    pub velocity: Point,
    pub radius: f32,
    /// Fixed hue in degrees [0, 360)
    pub hue: f32,
    pub traits: Traits,
    /// Most recent positions, oldest first
    pub history: VecDeque<Point>,
    pub wave_points: Vec<WavePoint>,
}

impl Entity {
    pub fn new(id: u32, position: Point, velocity: Point, traits: Traits, hue: f32) -> Self {
        Self {
            id,
            name: display_name(id),
            position,
            velocity,
            radius: ENTITY_RADIUS,
            hue,
            traits,
            history: VecDeque::with_capacity(HISTORY_LEN),
            wave_points: Vec::new(),
        }
    }

    /// Random position inside the spawn margin, random velocity, traits and hue
    pub fn random<R: Rng + ?Sized>(id: u32, rng: &mut R) -> Self {
        let position = Point::new(
            rng.gen_range(SPAWN_MARGIN..CANVAS_WIDTH as f32 - SPAWN_MARGIN),
            rng.gen_range(SPAWN_MARGIN..CANVAS_HEIGHT as f32 - SPAWN_MARGIN),
        );
        let velocity = Point::new(
            (rng.gen::<f32>() - 0.5) * 2.0 * MAX_INITIAL_SPEED,
            (rng.gen::<f32>() - 0.5) * 2.0 * MAX_INITIAL_SPEED,
        );
        let traits = Traits::random(rng);
        let hue = rng.gen::<f32>() * 360.0;
        Self::new(id, position, velocity, traits, hue)
    }

    /// Advance one step against `snapshot`, the state of every entity before
    /// this step (including `self`).
    pub fn update<R: Rng + ?Sized>(
        &self,
        snapshot: &[Entity],
        params: &SimulationParameters,
        rng: &mut R,
    ) -> Entity {
        let mut next = self.clone();
        next.record_position();

        if params.enable_physics {
            for other in snapshot.iter().filter(|other| other.id != self.id) {
                let dx = other.position.x - self.position.x;
                let dy = other.position.y - self.position.y;
                let dist = (dx * dx + dy * dy).sqrt();

                // Coincident entities exert nothing
                if dist <= 0.0 || dist >= params.interaction_radius {
                    continue;
                }

                let force = params.gravity_constant / (dist * dist);
                next.velocity.x += force * dx / dist * params.time_step;
                next.velocity.y += force * dy / dist * params.time_step;

                if dist < params.cultural_radius {
                    next.traits.blend_toward(&other.traits, DIFFUSION_RATE);
                }
            }
        }

        next.position.x += next.velocity.x * params.time_step;
        next.position.y += next.velocity.y * params.time_step;
        next.reflect();

        if params.quantum_effects > WAVE_THRESHOLD {
            next.wave_points = sample_wave_points(next.position, params.quantum_effects, rng);
        } else {
            next.wave_points.clear();
        }

        next
    }

    fn record_position(&mut self) {
        self.history.push_back(self.position);
        while self.history.len() > HISTORY_LEN {
            self.history.pop_front();
        }
    }

    /// Invert velocity on boundary crossing; position is left as is
    fn reflect(&mut self) {
        if self.position.x < 0.0 || self.position.x > CANVAS_WIDTH as f32 {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > CANVAS_HEIGHT as f32 {
            self.velocity.y = -self.velocity.y;
        }
    }
}

pub fn display_name(id: u32) -> String {
    format!("Culture {}", id + 1)
}

fn sample_wave_points<R: Rng + ?Sized>(center: Point, quantum_effects: f32, rng: &mut R) -> Vec<WavePoint> {
    let spread = quantum_effects * WAVE_SPREAD_SCALE;

    (0..WAVE_POINT_COUNT)
        .map(|_| {
            let angle = rng.gen::<f32>() * TAU;
            let distance = rng.gen::<f32>() * spread;
            let probability = (-(distance * distance) / (2.0 * spread * spread)).exp();
            WavePoint {
                position: Point::new(
                    center.x + angle.cos() * distance,
                    center.y + angle.sin() * distance,
                ),
                probability,
            }
        })
        .collect()
}
