use segtui::{
    AnyPickerStyle, Color, DefaultPickerStyle, Divider, Fill, ItemBody, Orientation, PickerStyle,
    Rgb, SegmentConfig, StyleContext, TextStyle,
};

fn config(selected: bool) -> SegmentConfig {
    SegmentConfig {
        disabled: false,
        selected,
        label: "Label".to_string(),
    }
}

/// Marker style for erasure and scoping tests.
struct StarStyle;

impl PickerStyle for StarStyle {
    fn divider(&self, _orientation: Orientation) -> Divider {
        Divider {
            glyph: '*',
            color: Color::rgb(1, 2, 3),
        }
    }

    fn selection_fill(&self, _config: &SegmentConfig) -> Fill {
        Fill {
            background: Color::rgb(9, 9, 9),
        }
    }

    fn item_body(&self, config: &SegmentConfig) -> ItemBody {
        ItemBody {
            text: config.label.clone(),
            foreground: Color::rgb(7, 7, 7),
            background: None,
            text_style: TextStyle::new(),
            padding: 0,
        }
    }
}

// ============================================================================
// Default Theme
// ============================================================================

#[test]
fn test_default_divider_glyph_per_orientation() {
    let style = DefaultPickerStyle::new();

    assert_eq!(style.divider(Orientation::Horizontal).glyph, '│');
    assert_eq!(style.divider(Orientation::Vertical).glyph, '─');
}

#[test]
fn test_default_label_switches_foreground_on_selection() {
    let style = DefaultPickerStyle::new();

    let plain = style.item_body(&config(false));
    let chosen = style.item_body(&config(true));

    assert_eq!(plain.foreground, style.accent);
    assert_eq!(chosen.foreground, style.on_accent);
    assert!(chosen.text_style.bold, "selected label is bold");
    assert!(!plain.text_style.bold);
}

#[test]
fn test_default_label_dims_when_disabled() {
    let style = DefaultPickerStyle::new();
    let body = style.item_body(&SegmentConfig {
        disabled: true,
        selected: false,
        label: "Label".to_string(),
    });

    assert!(body.text_style.dim);
}

#[test]
fn test_default_fill_uses_accent() {
    let style = DefaultPickerStyle::new();
    assert_eq!(style.selection_fill(&config(false)).background, style.accent);
}

#[test]
fn test_default_body_carries_label_text() {
    let style = DefaultPickerStyle::new();
    let body = style.item_body(&config(false));

    assert_eq!(body.text, "Label");
    assert_eq!(body.padding, 1);
}

// ============================================================================
// Type Erasure
// ============================================================================

#[test]
fn test_any_style_delegates() {
    let any = AnyPickerStyle::new(StarStyle);

    assert_eq!(any.divider(Orientation::Horizontal).glyph, '*');
    assert_eq!(
        any.selection_fill(&config(false)).background,
        Color::rgb(9, 9, 9)
    );
    assert_eq!(any.item_body(&config(false)).text, "Label");
}

#[test]
fn test_any_style_clones_share_implementation() {
    let any = AnyPickerStyle::new(StarStyle);
    let copy = any.clone();

    assert_eq!(copy.divider(Orientation::Vertical).glyph, '*');
}

// ============================================================================
// Style Context
// ============================================================================

#[test]
fn test_context_starts_with_default_theme() {
    let ctx = StyleContext::new();
    assert_eq!(ctx.current().divider(Orientation::Horizontal).glyph, '│');
}

#[test]
fn test_scoped_style_applies_and_restores() {
    let mut ctx = StyleContext::new();

    let inner = ctx.scoped(StarStyle, |ctx| {
        ctx.current().divider(Orientation::Horizontal).glyph
    });

    assert_eq!(inner, '*', "scoped style is active inside the closure");
    assert_eq!(
        ctx.current().divider(Orientation::Horizontal).glyph,
        '│',
        "default is restored afterwards"
    );
}

#[test]
fn test_scoped_styles_nest() {
    let mut ctx = StyleContext::new();

    ctx.scoped(StarStyle, |ctx| {
        let nested = ctx.scoped(DefaultPickerStyle::new(), |ctx| {
            ctx.current().divider(Orientation::Horizontal).glyph
        });
        assert_eq!(nested, '│');
        assert_eq!(ctx.current().divider(Orientation::Horizontal).glyph, '*');
    });
}

// ============================================================================
// Colors
// ============================================================================

#[test]
fn test_rgb_passthrough() {
    assert_eq!(Color::rgb(10, 20, 30).to_rgb(), Rgb::new(10, 20, 30));
}

#[test]
fn test_oklch_resolves_to_displayable_rgb() {
    let bright = Color::oklch(0.9, 0.0, 0.0).to_rgb();
    let dark = Color::oklch(0.1, 0.0, 0.0).to_rgb();

    assert!(bright.r > dark.r, "lightness maps to brighter channels");
}
