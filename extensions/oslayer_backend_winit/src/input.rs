//! Input conversion (winit -> oslayer_platform)

use oslayer_platform::{Cursor, KeyCode, Modifiers, MouseButton};
use winit::event::MouseButton as WinitMouseButton;
use winit::keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey};
use winit::window::CursorIcon;

/// Convert a winit mouse button
pub fn convert_mouse_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(n) => MouseButton::Other(n),
    }
}

/// Convert winit modifiers
pub fn convert_modifiers(modifiers: ModifiersState) -> Modifiers {
    Modifiers {
        alt: modifiers.alt_key(),
        ctrl: modifiers.control_key(),
        shift: modifiers.shift_key(),
        system: modifiers.super_key(),
    }
}

/// Convert a physical key; unidentified keys map to `Unknown`
pub fn convert_physical_key(key: &PhysicalKey) -> KeyCode {
    match key {
        PhysicalKey::Code(code) => convert_key_code(*code),
        PhysicalKey::Unidentified(_) => KeyCode::Unknown,
    }
}

/// Convert a winit key code (physical key position)
pub fn convert_key_code(code: WinitKeyCode) -> KeyCode {
    match code {
        // Letters
        WinitKeyCode::KeyA => KeyCode::A,
        WinitKeyCode::KeyB => KeyCode::B,
        WinitKeyCode::KeyC => KeyCode::C,
        WinitKeyCode::KeyD => KeyCode::D,
        WinitKeyCode::KeyE => KeyCode::E,
        WinitKeyCode::KeyF => KeyCode::F,
        WinitKeyCode::KeyG => KeyCode::G,
        WinitKeyCode::KeyH => KeyCode::H,
        WinitKeyCode::KeyI => KeyCode::I,
        WinitKeyCode::KeyJ => KeyCode::J,
        WinitKeyCode::KeyK => KeyCode::K,
        WinitKeyCode::KeyL => KeyCode::L,
        WinitKeyCode::KeyM => KeyCode::M,
        WinitKeyCode::KeyN => KeyCode::N,
        WinitKeyCode::KeyO => KeyCode::O,
        WinitKeyCode::KeyP => KeyCode::P,
        WinitKeyCode::KeyQ => KeyCode::Q,
        WinitKeyCode::KeyR => KeyCode::R,
        WinitKeyCode::KeyS => KeyCode::S,
        WinitKeyCode::KeyT => KeyCode::T,
        WinitKeyCode::KeyU => KeyCode::U,
        WinitKeyCode::KeyV => KeyCode::V,
        WinitKeyCode::KeyW => KeyCode::W,
        WinitKeyCode::KeyX => KeyCode::X,
        WinitKeyCode::KeyY => KeyCode::Y,
        WinitKeyCode::KeyZ => KeyCode::Z,

        // Digits
        WinitKeyCode::Digit0 => KeyCode::Digit0,
        WinitKeyCode::Digit1 => KeyCode::Digit1,
        WinitKeyCode::Digit2 => KeyCode::Digit2,
        WinitKeyCode::Digit3 => KeyCode::Digit3,
        WinitKeyCode::Digit4 => KeyCode::Digit4,
        WinitKeyCode::Digit5 => KeyCode::Digit5,
        WinitKeyCode::Digit6 => KeyCode::Digit6,
        WinitKeyCode::Digit7 => KeyCode::Digit7,
        WinitKeyCode::Digit8 => KeyCode::Digit8,
        WinitKeyCode::Digit9 => KeyCode::Digit9,

        // Function keys
        WinitKeyCode::F1 => KeyCode::F1,
        WinitKeyCode::F2 => KeyCode::F2,
        WinitKeyCode::F3 => KeyCode::F3,
        WinitKeyCode::F4 => KeyCode::F4,
        WinitKeyCode::F5 => KeyCode::F5,
        WinitKeyCode::F6 => KeyCode::F6,
        WinitKeyCode::F7 => KeyCode::F7,
        WinitKeyCode::F8 => KeyCode::F8,
        WinitKeyCode::F9 => KeyCode::F9,
        WinitKeyCode::F10 => KeyCode::F10,
        WinitKeyCode::F11 => KeyCode::F11,
        WinitKeyCode::F12 => KeyCode::F12,
        WinitKeyCode::F13 => KeyCode::F13,
        WinitKeyCode::F14 => KeyCode::F14,
        WinitKeyCode::F15 => KeyCode::F15,
        WinitKeyCode::F16 => KeyCode::F16,
        WinitKeyCode::F17 => KeyCode::F17,
        WinitKeyCode::F18 => KeyCode::F18,
        WinitKeyCode::F19 => KeyCode::F19,
        WinitKeyCode::F20 => KeyCode::F20,
        WinitKeyCode::F21 => KeyCode::F21,
        WinitKeyCode::F22 => KeyCode::F22,
        WinitKeyCode::F23 => KeyCode::F23,
        WinitKeyCode::F24 => KeyCode::F24,

        // Special keys
        WinitKeyCode::Escape => KeyCode::Escape,
        WinitKeyCode::Enter => KeyCode::Enter,
        WinitKeyCode::Tab => KeyCode::Tab,
        WinitKeyCode::Backspace => KeyCode::Backspace,
        WinitKeyCode::Space => KeyCode::Space,
        WinitKeyCode::Insert => KeyCode::Insert,
        WinitKeyCode::Delete => KeyCode::Delete,
        WinitKeyCode::Home => KeyCode::Home,
        WinitKeyCode::End => KeyCode::End,
        WinitKeyCode::PageUp => KeyCode::PageUp,
        WinitKeyCode::PageDown => KeyCode::PageDown,

        // Arrow keys
        WinitKeyCode::ArrowLeft => KeyCode::Left,
        WinitKeyCode::ArrowRight => KeyCode::Right,
        WinitKeyCode::ArrowUp => KeyCode::Up,
        WinitKeyCode::ArrowDown => KeyCode::Down,

        // Modifier keys
        WinitKeyCode::ShiftLeft => KeyCode::LShift,
        WinitKeyCode::ShiftRight => KeyCode::RShift,
        WinitKeyCode::ControlLeft => KeyCode::LControl,
        WinitKeyCode::ControlRight => KeyCode::RControl,
        WinitKeyCode::AltLeft => KeyCode::LAlt,
        WinitKeyCode::AltRight => KeyCode::RAlt,
        WinitKeyCode::SuperLeft => KeyCode::LSystem,
        WinitKeyCode::SuperRight => KeyCode::RSystem,
        WinitKeyCode::ContextMenu => KeyCode::Menu,

        // Locks and system keys
        WinitKeyCode::CapsLock => KeyCode::CapsLock,
        WinitKeyCode::NumLock => KeyCode::NumLock,
        WinitKeyCode::ScrollLock => KeyCode::ScrollLock,
        WinitKeyCode::PrintScreen => KeyCode::PrintScreen,
        WinitKeyCode::Pause => KeyCode::Pause,

        // Punctuation
        WinitKeyCode::Minus => KeyCode::Minus,
        WinitKeyCode::Equal => KeyCode::Equal,
        WinitKeyCode::BracketLeft => KeyCode::LeftBracket,
        WinitKeyCode::BracketRight => KeyCode::RightBracket,
        WinitKeyCode::Backslash => KeyCode::Backslash,
        WinitKeyCode::Semicolon => KeyCode::Semicolon,
        WinitKeyCode::Quote => KeyCode::Apostrophe,
        WinitKeyCode::Backquote => KeyCode::Grave,
        WinitKeyCode::Comma => KeyCode::Comma,
        WinitKeyCode::Period => KeyCode::Period,
        WinitKeyCode::Slash => KeyCode::Slash,
        WinitKeyCode::IntlBackslash => KeyCode::NonUsBackslash,

        // Keypad
        WinitKeyCode::Numpad0 => KeyCode::Numpad0,
        WinitKeyCode::Numpad1 => KeyCode::Numpad1,
        WinitKeyCode::Numpad2 => KeyCode::Numpad2,
        WinitKeyCode::Numpad3 => KeyCode::Numpad3,
        WinitKeyCode::Numpad4 => KeyCode::Numpad4,
        WinitKeyCode::Numpad5 => KeyCode::Numpad5,
        WinitKeyCode::Numpad6 => KeyCode::Numpad6,
        WinitKeyCode::Numpad7 => KeyCode::Numpad7,
        WinitKeyCode::Numpad8 => KeyCode::Numpad8,
        WinitKeyCode::Numpad9 => KeyCode::Numpad9,
        WinitKeyCode::NumpadAdd => KeyCode::NumpadAdd,
        WinitKeyCode::NumpadSubtract => KeyCode::NumpadSubtract,
        WinitKeyCode::NumpadMultiply => KeyCode::NumpadMultiply,
        WinitKeyCode::NumpadDivide => KeyCode::NumpadDivide,
        WinitKeyCode::NumpadDecimal => KeyCode::NumpadDecimal,
        WinitKeyCode::NumpadEnter => KeyCode::NumpadEnter,
        WinitKeyCode::NumpadEqual => KeyCode::NumpadEqual,

        _ => KeyCode::Unknown,
    }
}

/// Convert a system cursor
pub fn convert_cursor(cursor: Cursor) -> CursorIcon {
    match cursor {
        Cursor::Arrow => CursorIcon::Default,
        Cursor::ArrowWait => CursorIcon::Progress,
        Cursor::Wait => CursorIcon::Wait,
        Cursor::Crosshair => CursorIcon::Crosshair,
        Cursor::Hand => CursorIcon::Pointer,
        Cursor::IBeam => CursorIcon::Text,
        Cursor::NotAllowed => CursorIcon::NotAllowed,
        Cursor::SizeAll => CursorIcon::Move,
        Cursor::SizeNESW => CursorIcon::NeswResize,
        Cursor::SizeNS => CursorIcon::NsResize,
        Cursor::SizeNWSE => CursorIcon::NwseResize,
        Cursor::SizeWE => CursorIcon::EwResize,
    }
}

/// Text carried by a key event, minus control characters
///
/// winit attaches text such as `"\r"`, `"\u{8}"` or `"\u{1b}"` to Enter,
/// Backspace and Escape; those are keys, not text input.
pub fn printable_text(text: &str) -> Option<String> {
    let printable: String = text.chars().filter(|c| !c.is_control()).collect();
    if printable.is_empty() {
        None
    } else {
        Some(printable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::NativeKeyCode;

    #[test]
    fn test_letters_and_digits() {
        assert_eq!(convert_key_code(WinitKeyCode::KeyA), KeyCode::A);
        assert_eq!(convert_key_code(WinitKeyCode::KeyZ), KeyCode::Z);
        assert_eq!(convert_key_code(WinitKeyCode::Digit0), KeyCode::Digit0);
        assert_eq!(convert_key_code(WinitKeyCode::Numpad7), KeyCode::Numpad7);
    }

    #[test]
    fn test_sided_modifiers() {
        assert_eq!(convert_key_code(WinitKeyCode::ShiftLeft), KeyCode::LShift);
        assert_eq!(convert_key_code(WinitKeyCode::ShiftRight), KeyCode::RShift);
        assert_eq!(convert_key_code(WinitKeyCode::SuperRight), KeyCode::RSystem);
        assert!(convert_key_code(WinitKeyCode::AltLeft).is_modifier());
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(convert_key_code(WinitKeyCode::F35), KeyCode::Unknown);
        assert_eq!(
            convert_physical_key(&PhysicalKey::Unidentified(NativeKeyCode::Unidentified)),
            KeyCode::Unknown
        );
        assert_eq!(
            convert_physical_key(&PhysicalKey::Code(WinitKeyCode::Escape)),
            KeyCode::Escape
        );
    }

    #[test]
    fn test_mouse_buttons() {
        assert_eq!(convert_mouse_button(WinitMouseButton::Left), MouseButton::Left);
        assert_eq!(convert_mouse_button(WinitMouseButton::Back), MouseButton::Back);
        assert_eq!(
            convert_mouse_button(WinitMouseButton::Other(9)),
            MouseButton::Other(9)
        );
    }

    #[test]
    fn test_modifiers() {
        let mods = convert_modifiers(ModifiersState::SHIFT | ModifiersState::SUPER);
        assert!(mods.shift);
        assert!(mods.system);
        assert!(!mods.ctrl);
        assert!(!mods.alt);
        assert!(convert_modifiers(ModifiersState::empty()).is_empty());
    }

    #[test]
    fn test_cursor_icons() {
        assert_eq!(convert_cursor(Cursor::Arrow), CursorIcon::Default);
        assert_eq!(convert_cursor(Cursor::IBeam), CursorIcon::Text);
        assert_eq!(convert_cursor(Cursor::SizeWE), CursorIcon::EwResize);
    }

    #[test]
    fn test_printable_text() {
        assert_eq!(printable_text("a"), Some("a".to_string()));
        assert_eq!(printable_text("\r"), None);
        assert_eq!(printable_text("\u{1b}"), None);
        assert_eq!(printable_text("é"), Some("é".to_string()));
    }
}
