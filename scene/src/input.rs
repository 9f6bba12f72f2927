/// Physical keys the viewer reacts to. Anything else is dropped by the backend.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Escape,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    // window close or system quit request
    Quit,
    // includes auto-repeat key downs
    KeyDown(Key),
}

impl Key {
    /// Movement delta for one press, `None` for non-movement keys.
    pub fn direction(self, step: i32) -> Option<(i32, i32)> {
        match self {
            Key::Up => Some((0, -step)),
            Key::Down => Some((0, step)),
            Key::Left => Some((-step, 0)),
            Key::Right => Some((step, 0)),
            Key::Escape => None,
        }
    }
}
