//! Input conversion (GLFW -> oslayer_platform)

use glfw::{GamepadAxis, GamepadButton, JoystickId, Key, StandardCursor};
use oslayer_platform::{Cursor, KeyCode, Modifiers, MouseButton};

/// GLFW keys and their neutral codes
///
/// Used in both directions: translating key notifications and answering
/// live key-state queries.
pub const KEY_TABLE: &[(Key, KeyCode)] = &[
    (Key::A, KeyCode::A),
    (Key::B, KeyCode::B),
    (Key::C, KeyCode::C),
    (Key::D, KeyCode::D),
    (Key::E, KeyCode::E),
    (Key::F, KeyCode::F),
    (Key::G, KeyCode::G),
    (Key::H, KeyCode::H),
    (Key::I, KeyCode::I),
    (Key::J, KeyCode::J),
    (Key::K, KeyCode::K),
    (Key::L, KeyCode::L),
    (Key::M, KeyCode::M),
    (Key::N, KeyCode::N),
    (Key::O, KeyCode::O),
    (Key::P, KeyCode::P),
    (Key::Q, KeyCode::Q),
    (Key::R, KeyCode::R),
    (Key::S, KeyCode::S),
    (Key::T, KeyCode::T),
    (Key::U, KeyCode::U),
    (Key::V, KeyCode::V),
    (Key::W, KeyCode::W),
    (Key::X, KeyCode::X),
    (Key::Y, KeyCode::Y),
    (Key::Z, KeyCode::Z),
    (Key::Num0, KeyCode::Digit0),
    (Key::Num1, KeyCode::Digit1),
    (Key::Num2, KeyCode::Digit2),
    (Key::Num3, KeyCode::Digit3),
    (Key::Num4, KeyCode::Digit4),
    (Key::Num5, KeyCode::Digit5),
    (Key::Num6, KeyCode::Digit6),
    (Key::Num7, KeyCode::Digit7),
    (Key::Num8, KeyCode::Digit8),
    (Key::Num9, KeyCode::Digit9),
    (Key::F1, KeyCode::F1),
    (Key::F2, KeyCode::F2),
    (Key::F3, KeyCode::F3),
    (Key::F4, KeyCode::F4),
    (Key::F5, KeyCode::F5),
    (Key::F6, KeyCode::F6),
    (Key::F7, KeyCode::F7),
    (Key::F8, KeyCode::F8),
    (Key::F9, KeyCode::F9),
    (Key::F10, KeyCode::F10),
    (Key::F11, KeyCode::F11),
    (Key::F12, KeyCode::F12),
    (Key::F13, KeyCode::F13),
    (Key::F14, KeyCode::F14),
    (Key::F15, KeyCode::F15),
    (Key::F16, KeyCode::F16),
    (Key::F17, KeyCode::F17),
    (Key::F18, KeyCode::F18),
    (Key::F19, KeyCode::F19),
    (Key::F20, KeyCode::F20),
    (Key::F21, KeyCode::F21),
    (Key::F22, KeyCode::F22),
    (Key::F23, KeyCode::F23),
    (Key::F24, KeyCode::F24),
    (Key::Escape, KeyCode::Escape),
    (Key::Enter, KeyCode::Enter),
    (Key::Tab, KeyCode::Tab),
    (Key::Backspace, KeyCode::Backspace),
    (Key::Space, KeyCode::Space),
    (Key::Insert, KeyCode::Insert),
    (Key::Delete, KeyCode::Delete),
    (Key::Home, KeyCode::Home),
    (Key::End, KeyCode::End),
    (Key::PageUp, KeyCode::PageUp),
    (Key::PageDown, KeyCode::PageDown),
    (Key::Left, KeyCode::Left),
    (Key::Right, KeyCode::Right),
    (Key::Up, KeyCode::Up),
    (Key::Down, KeyCode::Down),
    (Key::LeftShift, KeyCode::LShift),
    (Key::RightShift, KeyCode::RShift),
    (Key::LeftControl, KeyCode::LControl),
    (Key::RightControl, KeyCode::RControl),
    (Key::LeftAlt, KeyCode::LAlt),
    (Key::RightAlt, KeyCode::RAlt),
    (Key::LeftSuper, KeyCode::LSystem),
    (Key::RightSuper, KeyCode::RSystem),
    (Key::Menu, KeyCode::Menu),
    (Key::CapsLock, KeyCode::CapsLock),
    (Key::NumLock, KeyCode::NumLock),
    (Key::ScrollLock, KeyCode::ScrollLock),
    (Key::PrintScreen, KeyCode::PrintScreen),
    (Key::Pause, KeyCode::Pause),
    (Key::Minus, KeyCode::Minus),
    (Key::Equal, KeyCode::Equal),
    (Key::LeftBracket, KeyCode::LeftBracket),
    (Key::RightBracket, KeyCode::RightBracket),
    (Key::Backslash, KeyCode::Backslash),
    (Key::Semicolon, KeyCode::Semicolon),
    (Key::Apostrophe, KeyCode::Apostrophe),
    (Key::GraveAccent, KeyCode::Grave),
    (Key::Comma, KeyCode::Comma),
    (Key::Period, KeyCode::Period),
    (Key::Slash, KeyCode::Slash),
    (Key::World1, KeyCode::NonUsBackslash),
    (Key::Kp0, KeyCode::Numpad0),
    (Key::Kp1, KeyCode::Numpad1),
    (Key::Kp2, KeyCode::Numpad2),
    (Key::Kp3, KeyCode::Numpad3),
    (Key::Kp4, KeyCode::Numpad4),
    (Key::Kp5, KeyCode::Numpad5),
    (Key::Kp6, KeyCode::Numpad6),
    (Key::Kp7, KeyCode::Numpad7),
    (Key::Kp8, KeyCode::Numpad8),
    (Key::Kp9, KeyCode::Numpad9),
    (Key::KpAdd, KeyCode::NumpadAdd),
    (Key::KpSubtract, KeyCode::NumpadSubtract),
    (Key::KpMultiply, KeyCode::NumpadMultiply),
    (Key::KpDivide, KeyCode::NumpadDivide),
    (Key::KpDecimal, KeyCode::NumpadDecimal),
    (Key::KpEnter, KeyCode::NumpadEnter),
    (Key::KpEqual, KeyCode::NumpadEqual),
];

/// Convert a GLFW key
pub fn convert_key(key: Key) -> KeyCode {
    KEY_TABLE
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(KeyCode::Unknown, |(_, code)| *code)
}

/// GLFW key for a neutral code
pub fn glfw_key(code: KeyCode) -> Option<Key> {
    KEY_TABLE
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(key, _)| *key)
}

/// Convert a GLFW mouse button
///
/// Buttons past the fifth keep their GLFW number.
pub fn convert_mouse_button(button: glfw::MouseButton) -> MouseButton {
    match button {
        glfw::MouseButton::Button1 => MouseButton::Left,
        glfw::MouseButton::Button2 => MouseButton::Right,
        glfw::MouseButton::Button3 => MouseButton::Middle,
        glfw::MouseButton::Button4 => MouseButton::Back,
        glfw::MouseButton::Button5 => MouseButton::Forward,
        glfw::MouseButton::Button6 => MouseButton::Other(6),
        glfw::MouseButton::Button7 => MouseButton::Other(7),
        glfw::MouseButton::Button8 => MouseButton::Other(8),
    }
}

/// GLFW mouse button for a neutral button
pub fn glfw_mouse_button(button: MouseButton) -> Option<glfw::MouseButton> {
    match button {
        MouseButton::Left => Some(glfw::MouseButton::Button1),
        MouseButton::Right => Some(glfw::MouseButton::Button2),
        MouseButton::Middle => Some(glfw::MouseButton::Button3),
        MouseButton::Back => Some(glfw::MouseButton::Button4),
        MouseButton::Forward => Some(glfw::MouseButton::Button5),
        MouseButton::Other(6) => Some(glfw::MouseButton::Button6),
        MouseButton::Other(7) => Some(glfw::MouseButton::Button7),
        MouseButton::Other(8) => Some(glfw::MouseButton::Button8),
        MouseButton::Other(_) => None,
    }
}

/// Convert GLFW modifier bits
pub fn convert_modifiers(mods: glfw::Modifiers) -> Modifiers {
    Modifiers {
        alt: mods.contains(glfw::Modifiers::Alt),
        ctrl: mods.contains(glfw::Modifiers::Control),
        shift: mods.contains(glfw::Modifiers::Shift),
        system: mods.contains(glfw::Modifiers::Super),
    }
}

/// Closest GLFW standard cursor
///
/// GLFW only ships six shapes; the rest fall back to the arrow.
pub fn convert_cursor(cursor: Cursor) -> StandardCursor {
    match cursor {
        Cursor::Crosshair => StandardCursor::Crosshair,
        Cursor::Hand => StandardCursor::Hand,
        Cursor::IBeam => StandardCursor::IBeam,
        Cursor::SizeNS => StandardCursor::VResize,
        Cursor::SizeWE => StandardCursor::HResize,
        Cursor::Arrow
        | Cursor::ArrowWait
        | Cursor::Wait
        | Cursor::NotAllowed
        | Cursor::SizeAll
        | Cursor::SizeNESW
        | Cursor::SizeNWSE => StandardCursor::Arrow,
    }
}

/// Joystick slots in device-id order
pub const JOYSTICKS: [JoystickId; 16] = [
    JoystickId::Joystick1,
    JoystickId::Joystick2,
    JoystickId::Joystick3,
    JoystickId::Joystick4,
    JoystickId::Joystick5,
    JoystickId::Joystick6,
    JoystickId::Joystick7,
    JoystickId::Joystick8,
    JoystickId::Joystick9,
    JoystickId::Joystick10,
    JoystickId::Joystick11,
    JoystickId::Joystick12,
    JoystickId::Joystick13,
    JoystickId::Joystick14,
    JoystickId::Joystick15,
    JoystickId::Joystick16,
];

/// Mapped gamepad buttons in index order
pub const GAMEPAD_BUTTONS: [GamepadButton; 15] = [
    GamepadButton::ButtonA,
    GamepadButton::ButtonB,
    GamepadButton::ButtonX,
    GamepadButton::ButtonY,
    GamepadButton::ButtonLeftBumper,
    GamepadButton::ButtonRightBumper,
    GamepadButton::ButtonBack,
    GamepadButton::ButtonStart,
    GamepadButton::ButtonGuide,
    GamepadButton::ButtonLeftThumb,
    GamepadButton::ButtonRightThumb,
    GamepadButton::ButtonDpadUp,
    GamepadButton::ButtonDpadRight,
    GamepadButton::ButtonDpadDown,
    GamepadButton::ButtonDpadLeft,
];

/// Mapped gamepad axes in index order
pub const GAMEPAD_AXES: [GamepadAxis; 6] = [
    GamepadAxis::AxisLeftX,
    GamepadAxis::AxisLeftY,
    GamepadAxis::AxisRightX,
    GamepadAxis::AxisRightY,
    GamepadAxis::AxisLeftTrigger,
    GamepadAxis::AxisRightTrigger,
];
