//! Layout-independent key codes
//!
//! [`KeyCode`] names a physical key position, not the character it produces.
//! Backends translate their own scan/virtual-key values into this space
//! through a code table; text is delivered separately as
//! [`Event::TextInput`](crate::event::Event::TextInput).

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

macro_rules! key_codes {
    ($($variant:ident => $name:literal,)*) => {
        /// Neutral key codes
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum KeyCode {
            $($variant,)*
        }

        impl KeyCode {
            /// Every key code, in declaration order
            pub const ALL: &'static [KeyCode] = &[$(KeyCode::$variant,)*];

            /// Human-readable key name, e.g. `"Left Shift"` or `"F5"`
            pub fn name(self) -> &'static str {
                match self {
                    $(KeyCode::$variant => $name,)*
                }
            }
        }
    };
}

key_codes! {
    A => "A", B => "B", C => "C", D => "D", E => "E", F => "F", G => "G",
    H => "H", I => "I", J => "J", K => "K", L => "L", M => "M", N => "N",
    O => "O", P => "P", Q => "Q", R => "R", S => "S", T => "T", U => "U",
    V => "V", W => "W", X => "X", Y => "Y", Z => "Z",

    Digit0 => "0", Digit1 => "1", Digit2 => "2", Digit3 => "3", Digit4 => "4",
    Digit5 => "5", Digit6 => "6", Digit7 => "7", Digit8 => "8", Digit9 => "9",

    F1 => "F1", F2 => "F2", F3 => "F3", F4 => "F4", F5 => "F5", F6 => "F6",
    F7 => "F7", F8 => "F8", F9 => "F9", F10 => "F10", F11 => "F11", F12 => "F12",
    F13 => "F13", F14 => "F14", F15 => "F15", F16 => "F16", F17 => "F17", F18 => "F18",
    F19 => "F19", F20 => "F20", F21 => "F21", F22 => "F22", F23 => "F23", F24 => "F24",

    Escape => "Escape",
    Enter => "Enter",
    Tab => "Tab",
    Backspace => "Backspace",
    Space => "Space",
    Insert => "Insert",
    Delete => "Delete",
    Home => "Home",
    End => "End",
    PageUp => "Page Up",
    PageDown => "Page Down",

    Left => "Left",
    Right => "Right",
    Up => "Up",
    Down => "Down",

    LShift => "Left Shift",
    RShift => "Right Shift",
    LControl => "Left Ctrl",
    RControl => "Right Ctrl",
    LAlt => "Left Alt",
    RAlt => "Right Alt",
    LSystem => "Left System",
    RSystem => "Right System",
    Menu => "Menu",

    CapsLock => "Caps Lock",
    NumLock => "Num Lock",
    ScrollLock => "Scroll Lock",
    PrintScreen => "Print Screen",
    Pause => "Pause",

    Minus => "-",
    Equal => "=",
    LeftBracket => "[",
    RightBracket => "]",
    Backslash => "\\",
    Semicolon => ";",
    Apostrophe => "'",
    Grave => "`",
    Comma => ",",
    Period => ".",
    Slash => "/",
    NonUsBackslash => "Non-US Backslash",

    Numpad0 => "Keypad 0", Numpad1 => "Keypad 1", Numpad2 => "Keypad 2",
    Numpad3 => "Keypad 3", Numpad4 => "Keypad 4", Numpad5 => "Keypad 5",
    Numpad6 => "Keypad 6", Numpad7 => "Keypad 7", Numpad8 => "Keypad 8",
    Numpad9 => "Keypad 9",
    NumpadAdd => "Keypad +",
    NumpadSubtract => "Keypad -",
    NumpadMultiply => "Keypad *",
    NumpadDivide => "Keypad /",
    NumpadDecimal => "Keypad .",
    NumpadEnter => "Keypad Enter",
    NumpadEqual => "Keypad =",

    Unknown => "Unknown",
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by [`KeyCode::from_str`] for names outside the table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown key name: {0:?}")]
pub struct UnknownKeyName(pub String);

impl FromStr for KeyCode {
    type Err = UnknownKeyName;

    /// Parses a key name as produced by [`KeyCode::name`], ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        KeyCode::ALL
            .iter()
            .copied()
            .find(|code| code.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownKeyName(s.to_string()))
    }
}

impl KeyCode {
    /// Whether this is one of the eight modifier keys
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            KeyCode::LShift
                | KeyCode::RShift
                | KeyCode::LControl
                | KeyCode::RControl
                | KeyCode::LAlt
                | KeyCode::RAlt
                | KeyCode::LSystem
                | KeyCode::RSystem
        )
    }
}

/// Modifier key state, handed from a backend to the translator
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Alt key is held (Option on macOS)
    pub alt: bool,
    /// Control key is held
    pub ctrl: bool,
    /// Shift key is held
    pub shift: bool,
    /// System key is held (Command on macOS, Windows key on Windows)
    pub system: bool,
}

impl Modifiers {
    /// Check if no modifiers are held
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt && !self.system
    }
}

// ============================================================================
// USB HID usage table (keyboard page 0x07)
// ============================================================================

const HID_USAGES: &[(u16, KeyCode)] = &[
    (0x04, KeyCode::A),
    (0x05, KeyCode::B),
    (0x06, KeyCode::C),
    (0x07, KeyCode::D),
    (0x08, KeyCode::E),
    (0x09, KeyCode::F),
    (0x0A, KeyCode::G),
    (0x0B, KeyCode::H),
    (0x0C, KeyCode::I),
    (0x0D, KeyCode::J),
    (0x0E, KeyCode::K),
    (0x0F, KeyCode::L),
    (0x10, KeyCode::M),
    (0x11, KeyCode::N),
    (0x12, KeyCode::O),
    (0x13, KeyCode::P),
    (0x14, KeyCode::Q),
    (0x15, KeyCode::R),
    (0x16, KeyCode::S),
    (0x17, KeyCode::T),
    (0x18, KeyCode::U),
    (0x19, KeyCode::V),
    (0x1A, KeyCode::W),
    (0x1B, KeyCode::X),
    (0x1C, KeyCode::Y),
    (0x1D, KeyCode::Z),
    (0x1E, KeyCode::Digit1),
    (0x1F, KeyCode::Digit2),
    (0x20, KeyCode::Digit3),
    (0x21, KeyCode::Digit4),
    (0x22, KeyCode::Digit5),
    (0x23, KeyCode::Digit6),
    (0x24, KeyCode::Digit7),
    (0x25, KeyCode::Digit8),
    (0x26, KeyCode::Digit9),
    (0x27, KeyCode::Digit0),
    (0x28, KeyCode::Enter),
    (0x29, KeyCode::Escape),
    (0x2A, KeyCode::Backspace),
    (0x2B, KeyCode::Tab),
    (0x2C, KeyCode::Space),
    (0x2D, KeyCode::Minus),
    (0x2E, KeyCode::Equal),
    (0x2F, KeyCode::LeftBracket),
    (0x30, KeyCode::RightBracket),
    (0x31, KeyCode::Backslash),
    (0x33, KeyCode::Semicolon),
    (0x34, KeyCode::Apostrophe),
    (0x35, KeyCode::Grave),
    (0x36, KeyCode::Comma),
    (0x37, KeyCode::Period),
    (0x38, KeyCode::Slash),
    (0x39, KeyCode::CapsLock),
    (0x3A, KeyCode::F1),
    (0x3B, KeyCode::F2),
    (0x3C, KeyCode::F3),
    (0x3D, KeyCode::F4),
    (0x3E, KeyCode::F5),
    (0x3F, KeyCode::F6),
    (0x40, KeyCode::F7),
    (0x41, KeyCode::F8),
    (0x42, KeyCode::F9),
    (0x43, KeyCode::F10),
    (0x44, KeyCode::F11),
    (0x45, KeyCode::F12),
    (0x46, KeyCode::PrintScreen),
    (0x47, KeyCode::ScrollLock),
    (0x48, KeyCode::Pause),
    (0x49, KeyCode::Insert),
    (0x4A, KeyCode::Home),
    (0x4B, KeyCode::PageUp),
    (0x4C, KeyCode::Delete),
    (0x4D, KeyCode::End),
    (0x4E, KeyCode::PageDown),
    (0x4F, KeyCode::Right),
    (0x50, KeyCode::Left),
    (0x51, KeyCode::Down),
    (0x52, KeyCode::Up),
    (0x53, KeyCode::NumLock),
    (0x54, KeyCode::NumpadDivide),
    (0x55, KeyCode::NumpadMultiply),
    (0x56, KeyCode::NumpadSubtract),
    (0x57, KeyCode::NumpadAdd),
    (0x58, KeyCode::NumpadEnter),
    (0x59, KeyCode::Numpad1),
    (0x5A, KeyCode::Numpad2),
    (0x5B, KeyCode::Numpad3),
    (0x5C, KeyCode::Numpad4),
    (0x5D, KeyCode::Numpad5),
    (0x5E, KeyCode::Numpad6),
    (0x5F, KeyCode::Numpad7),
    (0x60, KeyCode::Numpad8),
    (0x61, KeyCode::Numpad9),
    (0x62, KeyCode::Numpad0),
    (0x63, KeyCode::NumpadDecimal),
    (0x64, KeyCode::NonUsBackslash),
    (0x65, KeyCode::Menu),
    (0x67, KeyCode::NumpadEqual),
    (0x68, KeyCode::F13),
    (0x69, KeyCode::F14),
    (0x6A, KeyCode::F15),
    (0x6B, KeyCode::F16),
    (0x6C, KeyCode::F17),
    (0x6D, KeyCode::F18),
    (0x6E, KeyCode::F19),
    (0x6F, KeyCode::F20),
    (0x70, KeyCode::F21),
    (0x71, KeyCode::F22),
    (0x72, KeyCode::F23),
    (0x73, KeyCode::F24),
    (0xE0, KeyCode::LControl),
    (0xE1, KeyCode::LShift),
    (0xE2, KeyCode::LAlt),
    (0xE3, KeyCode::LSystem),
    (0xE4, KeyCode::RControl),
    (0xE5, KeyCode::RShift),
    (0xE6, KeyCode::RAlt),
    (0xE7, KeyCode::RSystem),
];

/// Translate a USB HID keyboard usage into a key code
pub fn from_hid_usage(usage: u16) -> KeyCode {
    HID_USAGES
        .iter()
        .find(|(u, _)| *u == usage)
        .map(|(_, code)| *code)
        .unwrap_or(KeyCode::Unknown)
}

/// Reverse of [`from_hid_usage`]
pub fn to_hid_usage(code: KeyCode) -> Option<u16> {
    HID_USAGES
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(usage, _)| *usage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_parse_back() {
        for &code in KeyCode::ALL {
            assert_eq!(code.name().parse::<KeyCode>(), Ok(code), "{code:?}");
        }
    }

    #[test]
    fn test_key_names_ignore_case() {
        assert_eq!("left shift".parse::<KeyCode>(), Ok(KeyCode::LShift));
        assert_eq!(" f5 ".parse::<KeyCode>(), Ok(KeyCode::F5));
        assert_eq!(
            "hyper".parse::<KeyCode>(),
            Err(UnknownKeyName("hyper".to_string()))
        );
    }

    #[test]
    fn test_hid_usage_table() {
        assert_eq!(from_hid_usage(0x04), KeyCode::A);
        assert_eq!(from_hid_usage(0x27), KeyCode::Digit0);
        assert_eq!(from_hid_usage(0xE3), KeyCode::LSystem);
        assert_eq!(from_hid_usage(0x00), KeyCode::Unknown);
        assert_eq!(to_hid_usage(KeyCode::Space), Some(0x2C));
        assert_eq!(to_hid_usage(KeyCode::Unknown), None);

        // Every mapped usage is unique in both directions
        for &(usage, code) in HID_USAGES {
            assert_eq!(to_hid_usage(code), Some(usage));
        }
    }

    #[test]
    fn test_modifiers() {
        assert!(Modifiers::default().is_empty());
        assert!(KeyCode::RAlt.is_modifier());
        assert!(!KeyCode::A.is_modifier());
        let m = Modifiers {
            shift: true,
            ..Default::default()
        };
        assert!(!m.is_empty());
    }
}
