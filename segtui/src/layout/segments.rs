use std::collections::HashMap;
use std::hash::Hash;

use super::Rect;
use crate::style::{PickerStyle, SegmentConfig};
use crate::text::display_width;
use crate::types::Orientation;

/// Per-layout mapping from item to its measured cell rectangle.
/// Rebuilt on every measurement pass, never carried across size changes.
pub type SegmentBounds<T> = HashMap<T, Rect>;

/// Measure every item's segment inside `area`, laying segments out along the
/// main axis with one cell reserved between neighbors for a divider.
///
/// Horizontal segments take their width from the styled label plus padding and
/// span the full height of `area`; vertical segments are one row plus padding
/// tall and span the full width. Segments that no longer fit are clamped to
/// the remaining space.
pub fn measure_segments<T, F>(
    items: &[T],
    label: F,
    style: &dyn PickerStyle,
    disabled: bool,
    selected: &T,
    orientation: Orientation,
    area: Rect,
) -> SegmentBounds<T>
where
    T: Clone + Eq + Hash,
    F: Fn(&T) -> String,
{
    let vertical = orientation.is_vertical();
    let main_limit = if vertical { area.height } else { area.width };

    let mut bounds = SegmentBounds::with_capacity(items.len());
    let mut offset = 0u16;

    for item in items {
        let config = SegmentConfig {
            disabled,
            selected: item == selected,
            label: label(item),
        };
        let body = style.item_body(&config);

        let extent = if vertical {
            1 + 2 * body.padding
        } else {
            display_width(&body.text) as u16 + 2 * body.padding
        };
        let extent = extent.min(main_limit.saturating_sub(offset));

        let rect = if vertical {
            Rect::new(area.x, area.y + offset, area.width, extent)
        } else {
            Rect::new(area.x + offset, area.y, extent, area.height)
        };
        if rect.is_empty() {
            log::debug!("segment clamped to empty rect, picker area too small");
        }
        bounds.insert(item.clone(), rect);

        // one cell between segments belongs to the divider
        offset = offset
            .saturating_add(extent)
            .saturating_add(1)
            .min(main_limit);
    }

    bounds
}

/// Divider coordinates along the main axis: every segment's trailing edge,
/// ascending, minus the last one (no divider after the final segment).
pub fn divider_positions<T>(bounds: &SegmentBounds<T>, orientation: Orientation) -> Vec<u16> {
    let mut edges: Vec<u16> = bounds
        .values()
        .map(|rect| rect.main_end(orientation))
        .collect();
    edges.sort_unstable();
    edges.dedup();
    edges.pop();
    edges
}

/// The first item (in supplied order) whose segment contains the point.
pub fn hit_segment<'a, T>(items: &'a [T], bounds: &SegmentBounds<T>, x: u16, y: u16) -> Option<&'a T>
where
    T: Eq + Hash,
{
    items
        .iter()
        .find(|item| bounds.get(*item).is_some_and(|rect| rect.contains(x, y)))
}
