/// Canvas dimensions in world units (one unit per pixel)
pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 600;

// ============================================
// Entities
// ============================================

/// Entities created per session and on every reset
pub const ENTITY_COUNT: usize = 8;

/// Rendering radius of an entity body
pub const ENTITY_RADIUS: f32 = 10.0;

/// Spawn margin: entities start inside [margin, size - margin]
pub const SPAWN_MARGIN: f32 = 50.0;

/// Initial velocity components are drawn from [-MAX, MAX)
pub const MAX_INITIAL_SPEED: f32 = 1.0;

/// Trail length (positions kept per entity)
pub const HISTORY_LEN: usize = 100;

/// Weight of a neighbour's trait value per diffusion contact
pub const DIFFUSION_RATE: f32 = 0.01;

/// Wave points sampled per entity when quantum effects are strong
pub const WAVE_POINT_COUNT: usize = 10;

/// Quantum effects above this produce wave points and the interference field
pub const WAVE_THRESHOLD: f32 = 0.5;

/// Wave spread in world units per unit of quantum effects
pub const WAVE_SPREAD_SCALE: f32 = 30.0;

// ============================================
// Similarity / classification
// ============================================

/// Pairs more similar than this count as entangled
pub const ENTANGLEMENT_SIMILARITY: f32 = 0.8;

/// Per-frame probability that the quantum status is resampled
pub const STATUS_SAMPLE_PROBABILITY: f64 = 0.05;

/// Uncertainty at or above this is "high"
pub const UNCERTAINTY_THRESHOLD: f32 = 0.1;

/// Entanglement ratio at or above this is "high"
pub const ENTANGLEMENT_THRESHOLD: f32 = 0.3;

// ============================================
// Rendering
// ============================================

/// Reference grid spacing (physical mode)
pub const GRID_SPACING: f32 = 50.0;

/// Interference field cell size
pub const FIELD_CELL_SIZE: f32 = 20.0;

/// Gap left between filled interference cells
pub const FIELD_CELL_GAP: f32 = 2.0;

/// Interference cells at or below this amplitude are skipped
pub const FIELD_MIN_AMPLITUDE: f32 = 0.05;

/// Trait bar geometry (cultural mode)
pub const TRAIT_BAR_WIDTH: f32 = 40.0;
pub const TRAIT_BAR_HEIGHT: f32 = 3.0;
pub const TRAIT_BAR_SPACING: f32 = 5.0;

/// Cultural quantum state above this shows uncertainty bands
pub const UNCERTAINTY_BAND_THRESHOLD: f32 = 0.5;

/// Band half-width per unit of cultural quantum state
pub const UNCERTAINTY_BAND_SCALE: f32 = 0.3;

/// Label font sizes in pixels
pub const NAME_FONT_SIZE: f32 = 12.0;
pub const MARKER_FONT_SIZE: f32 = 14.0;

// ============================================
// Collapse events
// ============================================

/// Quantum effects above this may trigger collapse events
pub const COLLAPSE_THRESHOLD: f32 = 0.7;

/// Per-frame probability of a collapse event
pub const COLLAPSE_PROBABILITY: f64 = 0.01;

/// Ring radii drawn around the collapsing entity
pub const COLLAPSE_RING_RADII: [f32; 5] = [10.0, 30.0, 50.0, 70.0, 90.0];

/// How long the collapse message stays visible
pub const STATUS_MESSAGE_MILLIS: u64 = 2000;

pub const COLLAPSE_MESSAGE: &str = "Quantum collapse event!";

// ============================================
// Parameter defaults and UI ranges
// ============================================

pub const DEFAULT_TIME_STEP: f32 = 0.5;
pub const DEFAULT_QUANTUM_EFFECTS: f32 = 0.3;
pub const DEFAULT_CULTURAL_QUANTUM_STATE: f32 = 0.2;
pub const DEFAULT_GRAVITY_CONSTANT: f32 = 5.0;
pub const DEFAULT_INTERACTION_RADIUS: f32 = 150.0;
pub const DEFAULT_CULTURAL_RADIUS: f32 = 100.0;

pub const TIME_STEP_RANGE: (f32, f32) = (0.1, 2.0);
pub const GRAVITY_RANGE: (f32, f32) = (0.0, 10.0);
pub const INTERACTION_RADIUS_RANGE: (f32, f32) = (50.0, 300.0);
pub const MIN_CULTURAL_RADIUS: f32 = 10.0;

/// Keyboard adjustment steps
pub const QUANTUM_STEP: f32 = 0.05;
pub const GRAVITY_STEP: f32 = 0.5;
pub const RADIUS_STEP: f32 = 10.0;
pub const TIME_STEP_STEP: f32 = 0.1;

// ============================================
// Runtime overrides
// ============================================

/// Environment variable holding a u64 seed for deterministic sessions
pub const SEED_ENV: &str = "QUANTUM_CULTURE_SEED";

