pub mod entity;
pub mod metrics;
pub mod params;
pub mod status;
pub mod world;

pub use entity::{Entity, Point, Traits, WavePoint};
pub use metrics::{distance, similarity};
pub use params::{SimulationParameters, VisualMode};
pub use status::{classify_status, PopulationStats, QuantumStatus};
pub use world::{initialize_entities, step_simulation};
