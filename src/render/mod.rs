pub mod canvas;
pub mod color;
pub mod field;
pub mod painter;
pub mod recording;

pub use canvas::Canvas;
pub use field::{interference_field, CollapseEvent, FieldCell, FieldRenderer, FrameReport};
pub use painter::{fit_rect, PainterCanvas};
pub use recording::{DrawCommand, RecordingCanvas};
