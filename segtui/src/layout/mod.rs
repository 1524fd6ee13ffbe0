mod rect;
mod segments;

pub use rect::Rect;
pub use segments::{divider_positions, hit_segment, measure_segments, SegmentBounds};
