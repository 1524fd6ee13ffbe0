use std::fs::File;
use std::time::Duration;

use segtui::{
    translate, Color, Divider, Event, Fill, ItemBody, Key, Orientation, PickerStyle, Rect,
    SegmentConfig, SegmentedPicker, StyleContext, Terminal, TextStyle,
};
use simplelog::{Config, LevelFilter, WriteLogger};

/// Blue theme with heavier dividers and wider segments.
struct OceanStyle;

impl PickerStyle for OceanStyle {
    fn divider(&self, orientation: Orientation) -> Divider {
        let glyph = if orientation.is_vertical() {
            '━'
        } else {
            '┃'
        };
        Divider {
            glyph,
            color: Color::oklch(0.6, 0.1, 240.0),
        }
    }

    fn selection_fill(&self, _config: &SegmentConfig) -> Fill {
        Fill {
            background: Color::oklch(0.55, 0.14, 240.0),
        }
    }

    fn item_body(&self, config: &SegmentConfig) -> ItemBody {
        ItemBody {
            text: config.label.to_uppercase(),
            foreground: if config.selected {
                Color::oklch(0.97, 0.01, 240.0)
            } else {
                Color::oklch(0.75, 0.1, 240.0)
            },
            background: None,
            text_style: TextStyle::new(),
            padding: 2,
        }
    }
}

fn main() -> Result<(), segtui::Error> {
    let log_file = File::create("styled.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut ctx = StyleContext::new();
    // the ocean theme applies to everything rendered inside this scope
    ctx.scoped(OceanStyle, run)
}

fn run(ctx: &mut StyleContext) -> Result<(), segtui::Error> {
    let items = ["Hourly", "Daily", "Weekly"];
    let mut selected = "Daily";
    let mut picker = SegmentedPicker::new(items, |span: &&str| span.to_string())?;

    let mut term = Terminal::new()?;

    loop {
        let (width, _) = term.size();
        let area = Rect::new(2, 2, width.saturating_sub(4), 3);
        picker.layout(area, ctx.current(), &selected);

        term.draw(|buf| {
            picker.render(buf, ctx.current(), &selected);
        })?;

        let timeout = picker.is_animating().then(|| Duration::from_millis(16));
        for event in translate(&term.poll(timeout)?) {
            match event {
                Event::Key {
                    key: Key::Char('q'),
                    ..
                }
                | Event::Key {
                    key: Key::Escape, ..
                } => {
                    return Ok(());
                }
                ev => {
                    picker.handle_event(&ev, &mut selected);
                }
            }
        }
    }
}
