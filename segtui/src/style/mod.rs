use std::sync::Arc;

use crate::types::{Color, Orientation, TextStyle};

/// Per-segment configuration handed to a style's rendering operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentConfig {
    pub disabled: bool,
    pub selected: bool,
    pub label: String,
}

/// Divider appearance for a given picker orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Divider {
    pub glyph: char,
    pub color: Color,
}

/// Selection-highlight appearance. On a cell grid the highlight is a block
/// of background color sized to the highlighted segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    pub background: Color,
}

/// Segment label appearance. `padding` is measured in cells along the main
/// axis and participates in segment measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemBody {
    pub text: String,
    pub foreground: Color,
    pub background: Option<Color>,
    pub text_style: TextStyle,
    pub padding: u16,
}

/// Rendering contract for a segmented picker: divider appearance, selection
/// fill appearance, and item body appearance. All three operations are pure.
pub trait PickerStyle: Send + Sync {
    fn divider(&self, orientation: Orientation) -> Divider;
    fn selection_fill(&self, config: &SegmentConfig) -> Fill;
    fn item_body(&self, config: &SegmentConfig) -> ItemBody;
}

/// Type-erased style so heterogeneous implementations share one storage slot.
#[derive(Clone)]
pub struct AnyPickerStyle {
    inner: Arc<dyn PickerStyle>,
}

impl AnyPickerStyle {
    pub fn new(style: impl PickerStyle + 'static) -> Self {
        Self {
            inner: Arc::new(style),
        }
    }
}

impl PickerStyle for AnyPickerStyle {
    fn divider(&self, orientation: Orientation) -> Divider {
        self.inner.divider(orientation)
    }

    fn selection_fill(&self, config: &SegmentConfig) -> Fill {
        self.inner.selection_fill(config)
    }

    fn item_body(&self, config: &SegmentConfig) -> ItemBody {
        self.inner.item_body(config)
    }
}

impl std::fmt::Debug for AnyPickerStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AnyPickerStyle(..)")
    }
}

/// Active-style resolution: a process default plus an explicit override
/// stack. `scoped` overrides the active style for the duration of a closure,
/// which is how a style is applied to a subtree of the UI.
#[derive(Debug)]
pub struct StyleContext {
    default: AnyPickerStyle,
    overrides: Vec<AnyPickerStyle>,
}

impl StyleContext {
    pub fn new() -> Self {
        Self {
            default: AnyPickerStyle::new(DefaultPickerStyle::new()),
            overrides: Vec::new(),
        }
    }

    pub fn current(&self) -> &AnyPickerStyle {
        self.overrides.last().unwrap_or(&self.default)
    }

    pub fn scoped<R>(
        &mut self,
        style: impl PickerStyle + 'static,
        f: impl FnOnce(&mut StyleContext) -> R,
    ) -> R {
        self.overrides.push(AnyPickerStyle::new(style));
        let result = f(self);
        self.overrides.pop();
        result
    }
}

impl Default for StyleContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Built-in theme: colored block fill, colored line dividers, label
/// foreground switched between accent and fill-contrast on selection.
#[derive(Debug, Clone, Copy)]
pub struct DefaultPickerStyle {
    pub accent: Color,
    pub on_accent: Color,
    pub divider: Color,
}

impl DefaultPickerStyle {
    pub const fn new() -> Self {
        Self {
            accent: Color::oklch(0.72, 0.17, 150.0),
            on_accent: Color::oklch(0.98, 0.01, 150.0),
            divider: Color::oklch(0.55, 0.12, 150.0),
        }
    }
}

impl Default for DefaultPickerStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl PickerStyle for DefaultPickerStyle {
    fn divider(&self, orientation: Orientation) -> Divider {
        let glyph = if orientation.is_vertical() {
            '─'
        } else {
            '│'
        };
        Divider {
            glyph,
            color: self.divider,
        }
    }

    fn selection_fill(&self, _config: &SegmentConfig) -> Fill {
        Fill {
            background: self.accent,
        }
    }

    fn item_body(&self, config: &SegmentConfig) -> ItemBody {
        let mut text_style = TextStyle::new();
        if config.selected {
            text_style = text_style.bold();
        }
        if config.disabled {
            text_style = text_style.dim();
        }
        ItemBody {
            text: config.label.clone(),
            foreground: if config.selected {
                self.on_accent
            } else {
                self.accent
            },
            background: None,
            text_style,
            padding: 1,
        }
    }
}
