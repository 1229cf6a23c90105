use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{COLLAPSE_MESSAGE, ENTITY_COUNT, STATUS_MESSAGE_MILLIS};
use crate::error::RenderError;
use crate::render::{Canvas, CollapseEvent, FieldRenderer, FrameReport};
use crate::simulation::{
    classify_status, initialize_entities, step_simulation, Entity, QuantumStatus,
    SimulationParameters,
};

/// Transient message shown by the UI until its scheduled clear fires
#[derive(Clone, Debug, PartialEq)]
pub struct StatusMessage {
    pub id: u64,
    pub text: String,
}

/// Deferred clear of one specific message, valid only within its generation
#[derive(Clone, Copy, Debug)]
struct ScheduledClear {
    due: Instant,
    generation: u64,
    message_id: u64,
}

/// Result of one loop iteration
#[derive(Clone, Debug)]
pub struct FrameOutcome {
    pub frame: u64,
    pub report: FrameReport,
    pub status: QuantumStatus,
    pub status_changed: bool,
}

/// Owns the entity snapshot and everything a frame reads or writes.
///
/// One call to [`Session::frame`] is one animation frame: step every entity
/// against the previous snapshot, render the new one, then sample the status.
pub struct Session {
    entities: Vec<Entity>,
    params: SimulationParameters,
    rng: ChaCha8Rng,
    renderer: FieldRenderer,
    status: QuantumStatus,
    message: Option<StatusMessage>,
    scheduled: Vec<ScheduledClear>,
    /// Collapse cue of the latest frame, kept for redraws
    last_collapse: Option<CollapseEvent>,
    /// Bumped on reset; clears from older generations are ignored
    generation: u64,
    next_message_id: u64,
    frame_number: u64,
    running: bool,
}

impl Session {
    /// Seeded sessions replay identically; `None` seeds from entropy
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(rng)
    }

    pub fn with_rng(mut rng: ChaCha8Rng) -> Self {
        let entities = initialize_entities(ENTITY_COUNT, &mut rng);
        Self {
            entities,
            params: SimulationParameters::default(),
            rng,
            renderer: FieldRenderer::default(),
            status: QuantumStatus::default(),
            message: None,
            scheduled: Vec::new(),
            last_collapse: None,
            generation: 0,
            next_message_id: 0,
            frame_number: 0,
            running: true,
        }
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    /// Changes take effect on the next frame
    pub fn params_mut(&mut self) -> &mut SimulationParameters {
        &mut self.params
    }

    pub fn status(&self) -> QuantumStatus {
        self.status
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_ref().map(|m| m.text.as_str())
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop requesting frames; the snapshot is kept as is
    pub fn pause(&mut self) {
        if self.running {
            log::info!("Simulation paused at frame {}", self.frame_number);
        }
        self.running = false;
    }

    pub fn resume(&mut self) {
        if !self.running {
            log::info!("Simulation resumed");
        }
        self.running = true;
    }

    /// Fresh entity batch; message, status and pending clears are dropped
    pub fn reset(&mut self) {
        let entities = initialize_entities(ENTITY_COUNT, &mut self.rng);
        self.replace_entities(entities);
        log::info!("Session reset (generation {})", self.generation);
    }

    /// Swap in a whole new entity set, starting a new generation
    pub fn replace_entities(&mut self, entities: Vec<Entity>) {
        self.entities = entities;
        self.status = QuantumStatus::default();
        self.message = None;
        self.scheduled.clear();
        self.last_collapse = None;
        self.generation += 1;
    }

    /// Show `text` and schedule its clear `STATUS_MESSAGE_MILLIS` after `now`
    pub fn post_message(&mut self, text: impl Into<String>, now: Instant) {
        let id = self.next_message_id;
        self.next_message_id += 1;
        self.message = Some(StatusMessage {
            id,
            text: text.into(),
        });
        self.scheduled.push(ScheduledClear {
            due: now + Duration::from_millis(STATUS_MESSAGE_MILLIS),
            generation: self.generation,
            message_id: id,
        });
    }

    /// Fire every deferred clear due at `now`.
    ///
    /// A clear only removes the message it was scheduled for, and only within
    /// the generation that scheduled it.
    pub fn poll_deferred(&mut self, now: Instant) {
        let generation = self.generation;
        let mut fired = Vec::new();
        self.scheduled.retain(|clear| {
            if clear.generation != generation {
                return false;
            }
            if clear.due <= now {
                fired.push(clear.message_id);
                return false;
            }
            true
        });

        if let Some(current) = &self.message {
            if fired.contains(&current.id) {
                self.message = None;
            }
        }
    }

    /// When the earliest pending clear is due, if any
    pub fn next_clear_due(&self) -> Option<Instant> {
        self.scheduled
            .iter()
            .filter(|clear| clear.generation == self.generation)
            .map(|clear| clear.due)
            .min()
    }

    /// Draw the current snapshot again without stepping or rolling
    pub fn redraw<C>(&self, canvas: &mut C) -> Result<FrameReport, RenderError>
    where
        C: Canvas + ?Sized,
    {
        self.renderer
            .draw(canvas, &self.entities, &self.params, self.last_collapse)
    }

    /// Run one full frame: deferred actions, step, render, classify
    pub fn frame<C>(&mut self, canvas: &mut C, now: Instant) -> Result<FrameOutcome, RenderError>
    where
        C: Canvas + ?Sized,
    {
        self.poll_deferred(now);

        // Nothing advances on a frame that cannot be drawn
        if !canvas.is_available() {
            return Err(RenderError::SurfaceUnavailable);
        }

        let next = step_simulation(&self.entities, &self.params, &mut self.rng);
        self.entities = next;

        let report = self
            .renderer
            .render_frame(canvas, &self.entities, &self.params, &mut self.rng)?;
        self.last_collapse = report.collapse;

        if let Some(event) = report.collapse {
            log::debug!(
                "Collapse event on entity {} at ({:.1}, {:.1})",
                event.entity_id,
                event.center.x,
                event.center.y
            );
            self.post_message(COLLAPSE_MESSAGE, now);
        }

        let previous = self.status;
        self.status = classify_status(&self.entities, previous, &mut self.rng);
        let status_changed = self.status != previous;
        if status_changed {
            log::info!("Quantum status: {} -> {}", previous, self.status);
        }

        self.frame_number += 1;

        Ok(FrameOutcome {
            frame: self.frame_number,
            report,
            status: self.status,
            status_changed,
        })
    }
}
