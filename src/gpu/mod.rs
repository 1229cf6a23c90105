mod context;
mod ui;

pub use context::GpuContext;
pub use ui::UiRenderer;
