use std::fmt;

use crate::config::{
    DEFAULT_CULTURAL_QUANTUM_STATE, DEFAULT_CULTURAL_RADIUS, DEFAULT_GRAVITY_CONSTANT,
    DEFAULT_INTERACTION_RADIUS, DEFAULT_QUANTUM_EFFECTS, DEFAULT_TIME_STEP, GRAVITY_RANGE,
    INTERACTION_RADIUS_RANGE, MIN_CULTURAL_RADIUS, TIME_STEP_RANGE,
};

/// Which layers the renderer draws
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VisualMode {
    /// Reference grid and trails
    #[default]
    Physical,
    /// Trait-coloured bodies and trait bars
    Cultural,
    /// Wave points, entanglement markers, interference field, collapses
    Quantum,
}

impl fmt::Display for VisualMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VisualMode::Physical => "physical",
            VisualMode::Cultural => "cultural",
            VisualMode::Quantum => "quantum",
        };
        f.write_str(name)
    }
}

/// Parameters injected read-only into every step and frame.
///
/// The core assumes values are already in range; the `adjust_*` helpers are
/// what the UI collaborator uses to keep them there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
    pub time_step: f32,
    pub quantum_effects: f32,
    pub cultural_quantum_state: f32,
    pub enable_physics: bool,
    pub gravity_constant: f32,
    pub interaction_radius: f32,
    pub cultural_radius: f32,
    pub visual_mode: VisualMode,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP,
            quantum_effects: DEFAULT_QUANTUM_EFFECTS,
            cultural_quantum_state: DEFAULT_CULTURAL_QUANTUM_STATE,
            enable_physics: true,
            gravity_constant: DEFAULT_GRAVITY_CONSTANT,
            interaction_radius: DEFAULT_INTERACTION_RADIUS,
            cultural_radius: DEFAULT_CULTURAL_RADIUS,
            visual_mode: VisualMode::default(),
        }
    }
}

impl SimulationParameters {
    pub fn adjust_quantum_effects(&mut self, delta: f32) {
        self.quantum_effects = (self.quantum_effects + delta).clamp(0.0, 1.0);
    }

    pub fn adjust_cultural_quantum_state(&mut self, delta: f32) {
        self.cultural_quantum_state = (self.cultural_quantum_state + delta).clamp(0.0, 1.0);
    }

    pub fn adjust_gravity(&mut self, delta: f32) {
        self.gravity_constant = (self.gravity_constant + delta).clamp(GRAVITY_RANGE.0, GRAVITY_RANGE.1);
    }

    pub fn adjust_time_step(&mut self, delta: f32) {
        self.time_step = (self.time_step + delta).clamp(TIME_STEP_RANGE.0, TIME_STEP_RANGE.1);
    }

    /// Shrinking the interaction radius drags the cultural radius with it
    pub fn adjust_interaction_radius(&mut self, delta: f32) {
        self.interaction_radius = (self.interaction_radius + delta)
            .clamp(INTERACTION_RADIUS_RANGE.0, INTERACTION_RADIUS_RANGE.1);
        self.cultural_radius = self.cultural_radius.min(self.interaction_radius);
    }

    pub fn adjust_cultural_radius(&mut self, delta: f32) {
        self.cultural_radius =
            (self.cultural_radius + delta).clamp(MIN_CULTURAL_RADIUS, self.interaction_radius);
    }

    pub fn toggle_physics(&mut self) {
        self.enable_physics = !self.enable_physics;
    }
}
