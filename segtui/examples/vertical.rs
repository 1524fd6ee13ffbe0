use std::fs::File;
use std::time::Duration;

use segtui::{translate, Event, Key, Rect, SegmentedPicker, StyleContext, Terminal};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> Result<(), segtui::Error> {
    let log_file = File::create("vertical.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let items = ["Overview", "Branches", "Commits", "Releases"];
    let mut selected = "Overview";
    let mut picker = SegmentedPicker::new(items, |page: &&str| page.to_string())?.vertical();

    let ctx = StyleContext::new();
    let mut term = Terminal::new()?;

    loop {
        let (_, height) = term.size();
        let area = Rect::new(2, 1, 14, height.saturating_sub(2));
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
