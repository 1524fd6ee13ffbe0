use std::fs::File;
use std::time::Duration;

use segtui::{
    translate, Buffer, Cell, Event, Key, Rect, Rgb, SegmentedPicker, StyleContext, Terminal,
};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> Result<(), segtui::Error> {
    // Set up file logging
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let items = ["Mon", "Tue", "Wed", "Thu", "Fri"];
    let mut selected = "Wed";
    let mut picker = SegmentedPicker::new(items, |day: &&str| day.to_string())?;

    let ctx = StyleContext::new();
    let mut term = Terminal::new()?;

    loop {
        let (width, _) = term.size();
        let area = Rect::new(2, 3, width.saturating_sub(4), 3);
        picker.layout(area, ctx.current(), &selected);

        term.draw(|buf| {
            draw_heading(buf, 2, 1, "Drag across the days, q=quit");
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

fn draw_heading(buf: &mut Buffer, x: u16, y: u16, text: &str) {
    let mut cx = x;
    for ch in text.chars() {
        buf.set(cx, y, Cell::new(ch).fg(Rgb::new(200, 200, 200)));
        cx += 1;
    }
}
