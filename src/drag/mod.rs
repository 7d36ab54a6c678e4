pub mod event;
pub mod indicator;
pub mod state;
pub mod tracker;

pub use event::DragEvent;
pub use indicator::ColumnHighlight;
pub use state::{Bounds, DragSession, HoverTarget, HoverZone, Point};
pub use tracker::DragTracker;
