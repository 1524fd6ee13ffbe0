use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

/// High-level input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Key press event
    Key { key: Key, modifiers: Modifiers },
    /// Pointer button pressed
    PointerDown { x: u16, y: u16, button: MouseButton },
    /// Pointer moved with a button held
    PointerDrag { x: u16, y: u16, button: MouseButton },
    /// Pointer button released
    PointerUp { x: u16, y: u16, button: MouseButton },
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

/// Keys the picker's hosts care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Translate raw crossterm events into picker events, preserving delivery
/// order. A gesture's release always follows its drag movements.
pub fn translate(raw: &[CrosstermEvent]) -> Vec<Event> {
    let mut events = Vec::new();

    for raw_event in raw {
        match raw_event {
            CrosstermEvent::Key(key_event) => {
                // some terminals also report release and repeat
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                let Some(key) = key_of(key_event.code) else {
                    continue;
                };
                events.push(Event::Key {
                    key,
                    modifiers: key_event.modifiers.into(),
                });
            }

            CrosstermEvent::Mouse(mouse_event) => {
                let x = mouse_event.column;
                let y = mouse_event.row;

                match mouse_event.kind {
                    MouseEventKind::Down(button) => {
                        events.push(Event::PointerDown {
                            x,
                            y,
                            button: button.into(),
                        });
                    }
                    MouseEventKind::Drag(button) => {
                        events.push(Event::PointerDrag {
                            x,
                            y,
                            button: button.into(),
                        });
                    }
                    MouseEventKind::Up(button) => {
                        events.push(Event::PointerUp {
                            x,
                            y,
                            button: button.into(),
                        });
                    }
                    _ => {}
                }
            }

            CrosstermEvent::Resize(width, height) => {
                events.push(Event::Resize {
                    width: *width,
                    height: *height,
                });
            }

            _ => {}
        }
    }

    events
}

fn key_of(code: crossterm::event::KeyCode) -> Option<Key> {
    use crossterm::event::KeyCode;
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        _ => None,
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
