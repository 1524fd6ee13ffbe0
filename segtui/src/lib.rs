pub mod animation;
pub mod buffer;
pub mod error;
pub mod event;
pub mod layout;
pub mod picker;
mod render;
pub mod style;
pub mod terminal;
pub mod text;
pub mod types;

pub use animation::{Easing, IndicatorMotion, TweenConfig};
pub use buffer::{Buffer, Cell};
pub use error::Error;
pub use event::{translate, Event, Key, Modifiers, MouseButton};
pub use layout::{divider_positions, hit_segment, measure_segments, Rect, SegmentBounds};
pub use picker::SegmentedPicker;
pub use style::{
    AnyPickerStyle, DefaultPickerStyle, Divider, Fill, ItemBody, PickerStyle, SegmentConfig,
    StyleContext,
};
pub use terminal::Terminal;
pub use types::{Color, Orientation, Rgb, TextStyle};
