/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
    /// Keys with no mapping (media keys, lone modifiers, ...).
    Unidentified,
}

impl Key {
    /// The character this key would type into a text field, if any.
    ///
    /// A space or any single non-whitespace, non-control character counts.
    pub fn printable(&self) -> Option<char> {
        match *self {
            Key::Char(c) if c == ' ' || !(c.is_whitespace() || c.is_control()) => Some(c),
            _ => None,
        }
    }

    /// Parse a key name as used in scripted input ("Enter", "ArrowDown", "a").
    ///
    /// Accepts both the short and the `Arrow*` spellings; single characters
    /// map to `Key::Char`.
    pub fn from_name(name: &str) -> Option<Self> {
        let key = match name {
            "Enter" | "Return" => Key::Enter,
            "Backspace" => Key::Backspace,
            "Delete" | "Del" => Key::Delete,
            "Tab" => Key::Tab,
            "Escape" | "Esc" => Key::Escape,
            "Up" | "ArrowUp" => Key::Up,
            "Down" | "ArrowDown" => Key::Down,
            "Left" | "ArrowLeft" => Key::Left,
            "Right" | "ArrowRight" => Key::Right,
            "Home" => Key::Home,
            "End" => Key::End,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            "Insert" => Key::Insert,
            "Space" => Key::Char(' '),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => return None,
                }
            }
        };
        Some(key)
    }
}

/// Key modifiers
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

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab | KeyCode::BackTab => Key::Tab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Unidentified,
        }
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

/// Convert a crossterm key event into a key and its modifiers.
///
/// Terminals report Shift+Tab as a separate `BackTab` code; it is folded back
/// into `Tab` with the shift modifier set.
pub fn from_key_event(event: crossterm::event::KeyEvent) -> (Key, Modifiers) {
    let mut modifiers: Modifiers = event.modifiers.into();
    if event.code == crossterm::event::KeyCode::BackTab {
        modifiers.shift = true;
    }
    (event.code.into(), modifiers)
}
