pub mod rect;
pub mod segment;

pub use rect::Rect;
pub use segment::Segment;
