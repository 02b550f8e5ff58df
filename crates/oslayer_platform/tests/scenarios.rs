//! End-to-end event scenarios against the headless backend

use oslayer_platform::headless::{HeadlessBackend, HeadlessInjector};
use oslayer_platform::prelude::*;
use oslayer_platform::{MouseMotionEvent, TextInputEvent};
use std::thread;

fn setup() -> (Platform<HeadlessBackend>, HeadlessInjector) {
    let backend = HeadlessBackend::new();
    let injector = backend.injector();
    (Platform::new(backend, PlatformConfig::default()), injector)
}

fn window_event(window: WindowId, kind: WindowEventKind) -> Event {
    Event::Window(WindowEvent { window, kind })
}

#[test]
fn test_events_drain_in_production_order() {
    let (mut platform, input) = setup();
    let w = platform.create_default_window().unwrap();

    input.focus(w, true);
    input.cursor_move(w, 10.5, 20.9);
    input.key_code(w, KeyCode::A, true, Modifiers::default());
    input.text(w, 'a');
    input.key_code(w, KeyCode::A, false, Modifiers::default());
    input.resize(w, 640, 480);
    assert_eq!(platform.pump(), 6);

    let kinds: Vec<EventKind> = platform.drain_events().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            EventKind::Window,
            EventKind::MouseMotion,
            EventKind::KeyDown,
            EventKind::TextInput,
            EventKind::KeyUp,
            EventKind::Window,
        ]
    );
    assert_eq!(platform.pending_events(), 0);
}

#[test]
fn test_events_accumulate_across_pumps_until_drained() {
    let (mut platform, input) = setup();
    let w = platform.create_default_window().unwrap();

    input.cursor_move(w, 1.0, 1.0);
    platform.pump();
    input.cursor_move(w, 2.0, 2.0);
    platform.pump();

    let events: Vec<Event> = platform.drain_events().collect();
    assert_eq!(
        events,
        vec![
            Event::MouseMotion(MouseMotionEvent { window: w, x: 1, y: 1 }),
            Event::MouseMotion(MouseMotionEvent { window: w, x: 2, y: 2 }),
        ]
    );
}

#[test]
fn test_all_windows_closing_in_one_pump_quits_once() {
    let (mut platform, input) = setup();
    let a = platform.create_default_window().unwrap();
    let b = platform.create_default_window().unwrap();

    input.close(a);
    input.close(b);
    platform.pump();

    let events: Vec<Event> = platform.drain_events().collect();
    assert_eq!(
        events,
        vec![
            window_event(a, WindowEventKind::Close),
            window_event(b, WindowEventKind::Close),
            Event::Quit,
        ]
    );

    platform.pump();
    assert_eq!(platform.poll_event(), None);

    input.close(a);
    platform.pump();
    let again: Vec<Event> = platform.drain_events().collect();
    assert_eq!(again, vec![window_event(a, WindowEventKind::Close)]);
}

#[test]
fn test_closing_some_windows_does_not_quit() {
    let (mut platform, input) = setup();
    let a = platform.create_default_window().unwrap();
    let _b = platform.create_default_window().unwrap();

    input.close(a);
    input.close(a);
    platform.pump();
    assert!(platform.drain_events().all(|e| e != Event::Quit));
}

#[test]
fn test_stale_focus_lost_keeps_current_focus() {
    let (mut platform, input) = setup();
    let a = platform.create_default_window().unwrap();
    let b = platform.create_default_window().unwrap();

    // Focus moves to b before a's focus-lost arrives
    input.focus(a, true);
    input.focus(b, true);
    input.focus(a, false);
    platform.pump();

    assert_eq!(platform.focused_window(), Some(b));
    let events: Vec<Event> = platform.drain_events().collect();
    assert_eq!(events.last(), Some(&window_event(a, WindowEventKind::FocusLost)));

    input.focus(b, false);
    platform.pump();
    assert_eq!(platform.focused_window(), None);
    assert!(!platform.is_any_focused());
}

#[test]
fn test_stale_focus_lost_keeps_held_keys() {
    let (mut platform, input) = setup();
    let a = platform.create_default_window().unwrap();
    let b = platform.create_default_window().unwrap();

    input.focus(a, true);
    input.focus(b, true);
    input.key_code(b, KeyCode::W, true, Modifiers::default());
    input.focus(a, false);
    platform.pump();

    assert_eq!(platform.focused_window(), Some(b));
    assert!(platform.is_key_pressed(KeyCode::W));
    assert!(!platform
        .drain_events()
        .any(|e| matches!(e, Event::KeyUp(_))));

    let focused: Vec<WindowId> = platform
        .windows()
        .filter(|id| platform.window_info(*id).is_some_and(|info| info.focused))
        .collect();
    assert_eq!(focused, vec![b]);
}

#[test]
fn test_notifications_for_unknown_windows_are_dropped() {
    let (mut platform, input) = setup();
    let w = platform.create_default_window().unwrap();
    let stranger = WindowId(w.0 + 100);

    input.cursor_move(stranger, 1.0, 1.0);
    input.key_code(stranger, KeyCode::Enter, true, Modifiers::default());
    input.focus(stranger, true);
    input.cursor_move(w, 3.0, 4.0);
    assert_eq!(platform.pump(), 1);
    assert_eq!(platform.focused_window(), None);

    // Notifications queued before a window is destroyed are dropped too
    input.close(w);
    platform.destroy_window(w).unwrap();
    platform.drain_events().for_each(drop);
    platform.pump();
    assert_eq!(platform.drain_events().collect::<Vec<_>>(), vec![Event::Quit]);
}

#[test]
fn test_text_is_normalized_to_strings() {
    let (mut platform, input) = setup();
    let w = platform.create_default_window().unwrap();

    input.text(w, '€');
    input.composed_text(w, "かな");
    input.composed_text(w, "");
    platform.pump();

    let texts: Vec<Event> = platform.drain_events().collect();
    assert_eq!(
        texts,
        vec![
            Event::TextInput(TextInputEvent {
                window: w,
                text: "€".to_string()
            }),
            Event::TextInput(TextInputEvent {
                window: w,
                text: "かな".to_string()
            }),
        ]
    );
}

#[test]
fn test_key_state_matches_event_stream() {
    let (mut platform, input) = setup();
    let w = platform.create_default_window().unwrap();
    let shift = Modifiers {
        shift: true,
        ..Default::default()
    };

    input.key_code(w, KeyCode::LShift, true, shift);
    input.key_code(w, KeyCode::Z, true, shift);
    platform.pump();
    assert!(platform.is_key_pressed(KeyCode::LShift));
    assert!(platform.is_key_pressed(KeyCode::Z));
    assert!(!platform.is_key_pressed(KeyCode::Unknown));

    match platform.drain_events().last() {
        Some(Event::KeyDown(key)) => {
            assert_eq!(key.code, KeyCode::Z);
            assert!(key.shift);
            assert!(!key.ctrl);
        }
        other => panic!("expected key down, got {other:?}"),
    }

    input.mouse_button(w, 3, true, 0.0, 0.0);
    assert!(platform.is_mouse_button_pressed(MouseButton::Right));
    input.mouse_button(w, 3, false, 0.0, 0.0);
    assert!(!platform.is_mouse_button_pressed(MouseButton::Right));
}

#[test]
fn test_gamepad_hotplug_and_queries() {
    let (mut platform, input) = setup();

    input.connect_device(DeviceId(0), "Test Pad", true, 15, 6);
    input.connect_device(DeviceId(1), "Flight Stick", false, 8, 3);
    platform.pump();
    assert_eq!(
        platform.drain_events().collect::<Vec<_>>(),
        vec![
            Event::GamepadAdded(DeviceId(0)),
            Event::JoystickAdded(DeviceId(1)),
        ]
    );

    let mut pad = platform.open_gamepad(DeviceId(0));
    assert!(pad.is_valid());
    assert_eq!(platform.device_name(&pad), "Test Pad");
    assert_eq!(platform.axis_count(&pad), 6);

    input.set_device_axis(DeviceId(0), 0, -32768);
    input.set_device_axis(DeviceId(0), 1, 32767);
    input.set_device_button(DeviceId(0), 0, true);
    assert_eq!(platform.axis_value(&pad, 0), -1.0);
    assert_eq!(platform.axis_value(&pad, 1), 1.0);
    assert_eq!(platform.axis_value(&pad, 6), 0.0);
    assert_eq!(platform.button_state(&pad, 0), ButtonState::Pressed);

    // A joystick is not a gamepad
    let stick_as_pad = platform.open_gamepad(DeviceId(1));
    assert!(!stick_as_pad.is_valid());

    input.disconnect_device(DeviceId(0));
    assert!(!platform.device_connected(&pad));
    assert_eq!(platform.button_state(&pad, 0), ButtonState::Released);
    assert_eq!(platform.axis_value(&pad, 1), 0.0);
    assert_eq!(platform.device_name(&pad), "");

    platform.pump();
    assert_eq!(platform.poll_event(), Some(Event::GamepadRemoved(DeviceId(0))));
    platform.close_device(&mut pad);
    assert!(!pad.is_valid());
}

#[test]
fn test_device_gone_before_pump_stays_balanced() {
    let (mut platform, input) = setup();

    input.connect_device(DeviceId(2), "Blink", true, 4, 2);
    input.disconnect_device(DeviceId(2));
    input.disconnect_device(DeviceId(2));
    platform.pump();

    assert_eq!(
        platform.drain_events().collect::<Vec<_>>(),
        vec![
            Event::JoystickAdded(DeviceId(2)),
            Event::JoystickRemoved(DeviceId(2)),
        ]
    );
}

#[test]
fn test_opening_missing_device_gives_invalid_handle() {
    let (mut platform, _) = setup();
    let handle = platform.open_joystick(DeviceId(9));
    assert!(!handle.is_valid());
    assert_eq!(platform.button_count(&handle), 0);
    assert_eq!(platform.axis_value(&handle, 0), 0.0);
}

#[test]
fn test_injection_from_other_threads_is_serialized() {
    let (mut platform, input) = setup();
    let w = platform.create_default_window().unwrap();

    let workers: Vec<_> = (0..4)
        .map(|n| {
            let input = input.clone();
            thread::spawn(move || {
                for i in 0..25 {
                    input.cursor_move(w, n as f64, i as f64);
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(platform.pump(), 100);

    // Each producer's notifications stay in its own order
    let mut last = [-1i32; 4];
    for event in platform.drain_events() {
        let Event::MouseMotion(motion) = event else {
            panic!("unexpected event {event:?}");
        };
        let producer = motion.x as usize;
        assert!(motion.y > last[producer]);
        last[producer] = motion.y;
    }
    assert_eq!(last, [24; 4]);
}

#[test]
fn test_file_drops_and_content_scale() {
    let (mut platform, input) = setup();
    let w = platform.create_default_window().unwrap();

    input.drop_file(w, "/tmp/a.txt");
    input.content_scale(Some(w), 2.0);
    input.content_scale(None, 1.5);
    platform.pump();

    let kinds: Vec<EventKind> = platform.drain_events().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            EventKind::DropFile,
            EventKind::DisplayContentScaleChanged,
            EventKind::DisplayContentScaleChanged,
        ]
    );
    assert_eq!(platform.window_info(w).unwrap().scale, 2.0);
}

#[test]
fn test_config_from_toml_drives_platform() {
    let config = PlatformConfig::from_toml_str(
        r#"
        quit_on_all_closed = false

        [window]
        title = "From TOML"
        width = 320
        height = 200
        "#,
    )
    .unwrap();

    let backend = HeadlessBackend::new();
    let input = backend.injector();
    let mut platform = Platform::new(backend, config);
    let w = platform.create_default_window().unwrap();

    let info = platform.window_info(w).unwrap();
    assert_eq!(info.title, "From TOML");
    assert_eq!(info.size, (320, 200));

    input.close(w);
    platform.pump();
    assert!(!platform.quit_sent());
}
