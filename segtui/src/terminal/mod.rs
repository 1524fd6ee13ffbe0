use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent},
    queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::buffer::{Buffer, Cell};
use crate::error::Error;
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

/// Crossterm host for a picker event loop. Construction claims the terminal
/// (raw mode, alternate screen, mouse capture); dropping restores it.
pub struct Terminal {
    out: Stdout,
    back: Buffer,
    front: Buffer,
}

impl Terminal {
    pub fn new() -> Result<Self, Error> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        queue!(out, EnterAlternateScreen, Hide, EnableMouseCapture)?;
        out.flush()?;

        let (width, height) = terminal::size()?;
        Ok(Self {
            out,
            back: Buffer::new(width, height),
            front: Buffer::new(width, height),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.back.width(), self.back.height())
    }

    /// Pending raw events, blocking for the first one when no timeout is
    /// given. Everything already queued is drained in one batch, so a
    /// gesture's movements keep their delivery order.
    pub fn poll(&self, timeout: Option<Duration>) -> Result<Vec<CrosstermEvent>, Error> {
        let mut events = Vec::new();
        match timeout {
            None => events.push(event::read()?),
            Some(wait) if event::poll(wait)? => events.push(event::read()?),
            Some(_) => return Ok(events),
        }
        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }
        Ok(events)
    }

    /// Render one frame: the closure draws into a cleared back buffer, then
    /// only cells that differ from the previous frame are written out.
    pub fn draw(&mut self, frame: impl FnOnce(&mut Buffer)) -> Result<(), Error> {
        let (width, height) = terminal::size()?;
        if (width, height) != self.size() {
            log::debug!("terminal resized to {width}x{height}");
            self.back = Buffer::new(width, height);
            self.front = Buffer::new(width, height);
        }

        self.back.reset();
        frame(&mut self.back);

        self.flush_changes()?;
        std::mem::swap(&mut self.back, &mut self.front);
        Ok(())
    }

    fn flush_changes(&mut self) -> Result<(), Error> {
        queue!(self.out, SetAttribute(Attribute::Reset))?;

        let mut pen = Pen::new();
        for (x, y, cell) in self.back.changes(&self.front) {
            // a wide glyph already painted its tail column
            if cell.wide_tail {
                continue;
            }
            pen.put(&mut self.out, x, y, cell)?;
        }

        queue!(self.out, SetAttribute(Attribute::Reset))?;
        self.out.flush()?;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = queue!(self.out, DisableMouseCapture, Show, LeaveAlternateScreen);
        let _ = self.out.flush();
        let _ = terminal::disable_raw_mode();
    }
}

/// Cursor position and attribute state carried across one flush, so runs of
/// similar cells skip the escape codes they don't need.
struct Pen {
    x: u16,
    y: u16,
    advance: u16,
    fg: Rgb,
    bg: Rgb,
    attrs: TextStyle,
}

impl Pen {
    fn new() -> Self {
        Self {
            x: u16::MAX,
            y: u16::MAX,
            advance: 1,
            fg: Rgb::WHITE,
            bg: Rgb::BLACK,
            attrs: TextStyle::new(),
        }
    }

    fn put(&mut self, out: &mut Stdout, x: u16, y: u16, cell: &Cell) -> io::Result<()> {
        if y != self.y || x != self.x.wrapping_add(self.advance) {
            queue!(out, MoveTo(x, y))?;
        }
        if cell.fg != self.fg {
            queue!(out, SetForegroundColor(term_color(cell.fg)))?;
            self.fg = cell.fg;
        }
        if cell.bg != self.bg {
            queue!(out, SetBackgroundColor(term_color(cell.bg)))?;
            self.bg = cell.bg;
        }
        self.switch_attrs(out, cell.attrs)?;

        write!(out, "{}", cell.glyph)?;
        self.x = x;
        self.y = y;
        self.advance = char_width(cell.glyph).max(1) as u16;
        Ok(())
    }

    fn switch_attrs(&mut self, out: &mut Stdout, attrs: TextStyle) -> io::Result<()> {
        if attrs.bold != self.attrs.bold {
            let set = if attrs.bold {
                Attribute::Bold
            } else {
                Attribute::NormalIntensity
            };
            queue!(out, SetAttribute(set))?;
        }
        if attrs.dim != self.attrs.dim {
            let set = if attrs.dim {
                Attribute::Dim
            } else {
                Attribute::NormalIntensity
            };
            queue!(out, SetAttribute(set))?;
        }
        if attrs.italic != self.attrs.italic {
            let set = if attrs.italic {
                Attribute::Italic
            } else {
                Attribute::NoItalic
            };
            queue!(out, SetAttribute(set))?;
        }
        if attrs.underline != self.attrs.underline {
            let set = if attrs.underline {
                Attribute::Underlined
            } else {
                Attribute::NoUnderline
            };
            queue!(out, SetAttribute(set))?;
        }
        self.attrs = attrs;
        Ok(())
    }
}

fn term_color(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
