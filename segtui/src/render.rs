use std::hash::Hash;

use crate::buffer::{Buffer, Cell};
use crate::layout::{divider_positions, Rect, SegmentBounds};
use crate::style::{PickerStyle, SegmentConfig};
use crate::text::{char_width, display_width};
use crate::types::{Orientation, Rgb, TextStyle};

/// Draw one picker frame. Paint order matches the widget's stacking: the
/// selection fill at the bottom, item labels above it, dividers on top.
#[allow(clippy::too_many_arguments)]
pub(crate) fn draw_picker<T, F>(
    buf: &mut Buffer,
    style: &dyn PickerStyle,
    area: Rect,
    orientation: Orientation,
    items: &[T],
    label: F,
    bounds: &SegmentBounds<T>,
    disabled: bool,
    selected: &T,
    fill_rect: Rect,
) where
    T: Clone + Eq + Hash,
    F: Fn(&T) -> String,
{
    draw_fill(buf, style, area, disabled, fill_rect);

    for item in items {
        let Some(rect) = bounds.get(item) else {
            continue;
        };
        let config = SegmentConfig {
            disabled,
            selected: item == selected,
            label: label(item),
        };
        draw_item(buf, style, orientation, *rect, &config);
    }

    draw_dividers(buf, style, area, orientation, bounds);
}

fn draw_fill(buf: &mut Buffer, style: &dyn PickerStyle, area: Rect, disabled: bool, rect: Rect) {
    // the fill carries no label of its own
    let config = SegmentConfig {
        disabled,
        selected: false,
        label: String::new(),
    };
    let bg = style.selection_fill(&config).background.to_rgb();

    // clip to the picker area so mid-animation overshoot stays inside it
    buf.fill_bg(rect.intersection(&area), bg);
}

fn draw_item(
    buf: &mut Buffer,
    style: &dyn PickerStyle,
    orientation: Orientation,
    rect: Rect,
    config: &SegmentConfig,
) {
    if rect.is_empty() {
        return;
    }
    let body = style.item_body(config);
    let fg = body.foreground.to_rgb();
    let bg_override = body.background.map(|c| c.to_rgb());

    let (x, y, max_x) = if orientation.is_vertical() {
        let text_width = display_width(&body.text) as u16;
        let x = rect.x + rect.width.saturating_sub(text_width) / 2;
        (x, rect.y + rect.height / 2, rect.right())
    } else {
        let x = rect.x + body.padding;
        (x, rect.y + rect.height / 2, rect.right().saturating_sub(body.padding))
    };

    draw_text(buf, &body.text, x, y, max_x, fg, bg_override, body.text_style);
}

#[allow(clippy::too_many_arguments)]
fn draw_text(
    buf: &mut Buffer,
    text: &str,
    x: u16,
    y: u16,
    max_x: u16,
    fg: Rgb,
    bg_override: Option<Rgb>,
    attrs: TextStyle,
) {
    let mut x = x;
    for ch in text.chars() {
        let width = char_width(ch) as u16;
        if width == 0 {
            continue;
        }
        if x + width > max_x {
            break;
        }
        // preserve the existing background unless the body sets one
        let bg = bg_override
            .or_else(|| buf.get(x, y).map(|cell| cell.bg))
            .unwrap_or(Rgb::BLACK);
        buf.set(x, y, Cell::new(ch).fg(fg).bg(bg).attrs(attrs));
        if width == 2 {
            if let Some(tail) = buf.get_mut(x + 1, y) {
                *tail = Cell {
                    glyph: ' ',
                    fg,
                    bg,
                    attrs,
                    wide_tail: true,
                };
            }
        }
        x += width;
    }
}

fn draw_dividers<T>(
    buf: &mut Buffer,
    style: &dyn PickerStyle,
    area: Rect,
    orientation: Orientation,
    bounds: &SegmentBounds<T>,
) {
    let divider = style.divider(orientation);
    let fg = divider.color.to_rgb();

    for position in divider_positions(bounds, orientation) {
        if orientation.is_vertical() {
            for x in area.x..area.right() {
                set_glyph(buf, x, position, divider.glyph, fg);
            }
        } else {
            for y in area.y..area.bottom() {
                set_glyph(buf, position, y, divider.glyph, fg);
            }
        }
    }
}

fn set_glyph(buf: &mut Buffer, x: u16, y: u16, glyph: char, fg: Rgb) {
    if let Some(cell) = buf.get_mut(x, y) {
        cell.glyph = glyph;
        cell.fg = fg;
        // keep the background underneath
    }
}
