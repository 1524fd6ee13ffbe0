use segtui::{Buffer, DefaultPickerStyle, Orientation, PickerStyle, Rect, SegmentedPicker};

fn render_horizontal(
    items: &[&'static str],
    selected: &'static str,
    area: Rect,
) -> (Buffer, SegmentedPicker<&'static str>) {
    let style = DefaultPickerStyle::new();
    let mut picker =
        SegmentedPicker::new(items.to_vec(), |item: &&str| item.to_string()).unwrap();
    picker.layout(area, &style, &selected);

    let mut buf = Buffer::new(60, 10);
    picker.render(&mut buf, &style, &selected);
    (buf, picker)
}

// ============================================================================
// Selection Fill
// ============================================================================

#[test]
fn test_fill_paints_selected_segment_background() {
    let (buf, picker) = render_horizontal(&["One", "Two"], "One", Rect::new(0, 0, 40, 3));
    let accent = DefaultPickerStyle::new().accent.to_rgb();

    let rect = picker.bounds()["One"];
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            assert_eq!(buf.get(x, y).unwrap().bg, accent, "fill covers ({x},{y})");
        }
    }
}

#[test]
fn test_fill_stops_at_segment_edge() {
    let (buf, _) = render_horizontal(&["One", "Two"], "One", Rect::new(0, 0, 40, 3));
    let accent = DefaultPickerStyle::new().accent.to_rgb();

    // "Two" occupies [6, 11); its cells keep the default background
    assert_ne!(buf.get(8, 1).unwrap().bg, accent);
}

// ============================================================================
// Labels
// ============================================================================

#[test]
fn test_labels_are_drawn_with_padding() {
    let (buf, _) = render_horizontal(&["One", "Two"], "One", Rect::new(0, 0, 40, 3));

    // one cell of padding, label on the center row
    assert_eq!(buf.get(1, 1).unwrap().glyph, 'O');
    assert_eq!(buf.get(2, 1).unwrap().glyph, 'n');
    assert_eq!(buf.get(3, 1).unwrap().glyph, 'e');
    assert_eq!(buf.get(7, 1).unwrap().glyph, 'T');
}

#[test]
fn test_selected_label_uses_contrast_foreground() {
    let (buf, _) = render_horizontal(&["One", "Two"], "One", Rect::new(0, 0, 40, 3));
    let style = DefaultPickerStyle::new();

    assert_eq!(buf.get(1, 1).unwrap().fg, style.on_accent.to_rgb());
    assert_eq!(buf.get(7, 1).unwrap().fg, style.accent.to_rgb());
    assert!(buf.get(1, 1).unwrap().attrs.bold, "selected label is bold");
}

#[test]
fn test_wide_labels_mark_continuation_cells() {
    let (buf, _) = render_horizontal(&["日本", "En"], "En", Rect::new(0, 0, 40, 3));

    assert_eq!(buf.get(1, 1).unwrap().glyph, '日');
    assert!(buf.get(2, 1).unwrap().wide_tail);
    assert_eq!(buf.get(3, 1).unwrap().glyph, '本');
}

// ============================================================================
// Dividers
// ============================================================================

#[test]
fn test_divider_column_spans_picker_height() {
    let (buf, _) = render_horizontal(&["One", "Two"], "One", Rect::new(0, 0, 40, 3));
    let divider = DefaultPickerStyle::new()
        .divider(Orientation::Horizontal);

    for y in 0..3 {
        let cell = buf.get(5, y).unwrap();
        assert_eq!(cell.glyph, divider.glyph, "divider glyph at (5,{y})");
        assert_eq!(cell.fg, divider.color.to_rgb());
    }
}

#[test]
fn test_vertical_divider_row_spans_picker_width() {
    let style = DefaultPickerStyle::new();
    let mut picker = SegmentedPicker::new(["One", "Two"], |item: &&str| item.to_string())
        .unwrap()
        .vertical();
    let selected = "One";
    picker.layout(Rect::new(0, 0, 12, 10), &style, &selected);

    let mut buf = Buffer::new(60, 10);
    picker.render(&mut buf, &style, &selected);

    // "One" fills rows [0,3), so the divider lives on row 3
    let glyph = style.divider(Orientation::Vertical).glyph;
    for x in 0..12 {
        assert_eq!(buf.get(x, 3).unwrap().glyph, glyph, "divider glyph at ({x},3)");
    }
}

#[test]
fn test_single_segment_renders_no_divider() {
    let (buf, _) = render_horizontal(&["Only"], "Only", Rect::new(0, 0, 40, 3));
    let glyph = DefaultPickerStyle::new()
        .divider(Orientation::Horizontal)
        .glyph;

    for y in 0..3 {
        for x in 0..40 {
            assert_ne!(buf.get(x, y).unwrap().glyph, glyph);
        }
    }
}
