use std::collections::HashSet;
use std::hash::Hash;
use std::time::Instant;

use crate::animation::{IndicatorMotion, TweenConfig};
use crate::buffer::Buffer;
use crate::error::Error;
use crate::event::{Event, MouseButton};
use crate::layout::{hit_segment, measure_segments, Rect, SegmentBounds};
use crate::render::draw_picker;
use crate::style::PickerStyle;
use crate::types::Orientation;

/// A segmented control: one strip of options with an animated selection
/// indicator and a drag-to-select pointer gesture.
///
/// The selection itself lives outside the widget. `layout` and
/// `handle_event` borrow it from the caller: the widget reads it to place
/// the indicator and writes it while a gesture is in progress.
pub struct SegmentedPicker<T> {
    items: Vec<T>,
    label: Box<dyn Fn(&T) -> String + Send + Sync>,
    orientation: Orientation,
    disabled: bool,
    tween: TweenConfig,
    area: Rect,
    bounds: SegmentBounds<T>,
    /// Bounds of the currently highlighted segment.
    indicator: Rect,
    /// In-progress drag point, projected onto the layout axis.
    drag: Option<(u16, u16)>,
    motion: IndicatorMotion,
}

impl<T: Clone + Eq + Hash> SegmentedPicker<T> {
    /// Build a picker over an ordered collection of unique items and an
    /// item-to-label mapping.
    pub fn new(
        items: impl IntoIterator<Item = T>,
        label: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Result<Self, Error> {
        let items: Vec<T> = items.into_iter().collect();
        if items.is_empty() {
            return Err(Error::EmptyItems);
        }
        let mut seen = HashSet::with_capacity(items.len());
        if !items.iter().all(|item| seen.insert(item.clone())) {
            return Err(Error::DuplicateItem);
        }

        Ok(Self {
            items,
            label: Box::new(label),
            orientation: Orientation::Horizontal,
            disabled: false,
            tween: TweenConfig::spring(),
            area: Rect::default(),
            bounds: SegmentBounds::new(),
            indicator: Rect::default(),
            drag: None,
            motion: IndicatorMotion::new(),
        })
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn vertical(mut self) -> Self {
        self.orientation = Orientation::Vertical;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn tween(mut self, tween: TweenConfig) -> Self {
        self.tween = tween;
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn bounds(&self) -> &SegmentBounds<T> {
        &self.bounds
    }

    pub fn indicator(&self) -> Rect {
        self.indicator
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.motion.is_animating(Instant::now())
    }

    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.motion.set_reduced_motion(enabled);
    }

    /// Measurement pass: lay the items out inside `area` and rebuild the
    /// bounds map. When no drag is in progress the indicator is re-synced to
    /// the selection's segment, which also covers first appearance and
    /// terminal resize.
    pub fn layout(&mut self, area: Rect, style: &dyn PickerStyle, selected: &T) {
        self.area = area;
        self.bounds = measure_segments(
            &self.items,
            |item| (self.label)(item),
            style,
            self.disabled,
            selected,
            self.orientation,
            area,
        );
        log::debug!(
            "picker layout: {} segments in {:?}",
            self.bounds.len(),
            area
        );
        if self.drag.is_none() {
            self.indicator = self.selection_bounds(selected);
        }
    }

    fn selection_bounds(&self, selected: &T) -> Rect {
        match self.bounds.get(selected) {
            Some(rect) => *rect,
            None => {
                log::warn!("selection is not one of the picker items, falling back to the first");
                self.items
                    .first()
                    .and_then(|item| self.bounds.get(item))
                    .copied()
                    .unwrap_or_default()
            }
        }
    }

    /// Feed one input event through the gesture state machine. Returns true
    /// if the picker consumed the event.
    ///
    /// A press inside the picker area starts a drag immediately; every
    /// movement and the release re-test the pointer against the segment
    /// bounds, selecting whichever segment contains it. Pointer positions
    /// inside no segment leave the selection unchanged. Release clears the
    /// drag point, snapping the indicator back to the selected segment.
    pub fn handle_event(&mut self, event: &Event, selected: &mut T) -> bool {
        if self.disabled {
            return false;
        }
        match *event {
            Event::PointerDown {
                x,
                y,
                button: MouseButton::Left,
            } => {
                if !self.area.contains(x, y) {
                    return false;
                }
                self.update_drag(x, y, selected);
                true
            }
            Event::PointerDrag {
                x,
                y,
                button: MouseButton::Left,
            } => {
                if self.drag.is_none() {
                    return false;
                }
                self.update_drag(x, y, selected);
                true
            }
            Event::PointerUp {
                x,
                y,
                button: MouseButton::Left,
            } => {
                if self.drag.is_none() {
                    return false;
                }
                self.select_at(x, y, selected);
                self.drag = None;
                true
            }
            _ => false,
        }
    }

    fn update_drag(&mut self, x: u16, y: u16, selected: &mut T) {
        let (cx, cy) = self.area.center();
        self.drag = Some(if self.orientation.is_vertical() {
            (cx, y)
        } else {
            (x, cy)
        });
        self.select_at(x, y, selected);
    }

    fn select_at(&mut self, x: u16, y: u16, selected: &mut T) {
        if let Some(item) = hit_segment(&self.items, &self.bounds, x, y) {
            if let Some(rect) = self.bounds.get(item) {
                self.indicator = *rect;
            }
            if selected != item {
                log::trace!("pointer at ({x}, {y}) selects a new segment");
                *selected = item.clone();
            }
        }
    }

    /// Draw the picker into the buffer: selection fill first, item labels on
    /// top, dividers last. The fill is presented at the drag point while a
    /// gesture is active, otherwise at the indicator rect, with tweened
    /// motion between presented positions.
    pub fn render(&mut self, buf: &mut Buffer, style: &dyn PickerStyle, selected: &T) {
        let now = Instant::now();
        let presented = match self.drag {
            Some((px, py)) => {
                Rect::centered_at(px, py, self.indicator.width, self.indicator.height)
            }
            None => self.indicator,
        };
        self.motion.retarget(presented, self.tween, now);
        let shown = self.motion.sample(now).unwrap_or(presented);

        draw_picker(
            buf,
            style,
            self.area,
            self.orientation,
            &self.items,
            |item| (self.label)(item),
            &self.bounds,
            self.disabled,
            selected,
            shown,
        );
    }
}

impl<T> std::fmt::Debug for SegmentedPicker<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SegmentedPicker")
            .field("items", &self.items.len())
            .field("orientation", &self.orientation)
            .field("disabled", &self.disabled)
            .field("indicator", &self.indicator)
            .field("drag", &self.drag)
            .finish()
    }
}
