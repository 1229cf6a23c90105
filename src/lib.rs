//! Quantum-inspired cultural interaction visualizer.
//!
//! Cultures drift through a 2D space, attract each other, exchange traits and
//! render as a field whose appearance depends on the selected visual mode.

pub mod app;
pub mod config;
pub mod error;
pub mod gpu;
pub mod render;
pub mod session;
pub mod simulation;

pub use error::{GpuError, RenderError};
pub use session::{FrameOutcome, Session};
