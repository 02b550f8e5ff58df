//! Event Dump
//!
//! Opens a window and prints every event it receives. Gamepads are opened
//! as they are plugged in and their sticks are printed while held off-center.
//!
//! Run with: cargo run -p oslayer --example event_dump
//! GLFW:     cargo run -p oslayer --example event_dump --no-default-features --features glfw

use oslayer::prelude::*;
use std::thread;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    let config =
        PlatformConfig::default().window(WindowConfig::new("oslayer event dump").size(640, 480));
    oslayer::init_logging(&config);

    let mut platform = oslayer::init(config)?;
    tracing::info!("Using {} backend", oslayer::current_backend());

    let window = platform.create_default_window()?;
    platform.command(window, WindowCommand::SetCursor(Cursor::Crosshair))?;

    let mut pads = Vec::new();

    'main: loop {
        platform.pump();

        while let Some(event) = platform.poll_event() {
            println!("{:?}", event);
            match event {
                Event::GamepadAdded(id) => {
                    let pad = platform.open_gamepad(id);
                    println!(
                        "  {} '{}': {} buttons, {} axes",
                        id,
                        platform.device_name(&pad),
                        platform.button_count(&pad),
                        platform.axis_count(&pad)
                    );
                    pads.push(pad);
                }
                Event::GamepadRemoved(id) => {
                    if let Some(index) = pads.iter().position(|p| p.id() == id) {
                        let mut pad = pads.swap_remove(index);
                        platform.close_device(&mut pad);
                    }
                }
                Event::KeyDown(key) if key.code == KeyCode::Escape => {
                    platform.request_close(window)?;
                }
                Event::Quit => break 'main,
                _ => {}
            }
        }

        for pad in &pads {
            let (x, y) = (platform.axis_value(pad, 0), platform.axis_value(pad, 1));
            if x.abs() > 0.25 || y.abs() > 0.25 {
                println!("  {} stick ({:+.2}, {:+.2})", pad.id(), x, y);
            }
        }

        thread::sleep(Duration::from_millis(16));
    }

    for mut pad in pads {
        platform.close_device(&mut pad);
    }
    platform.shutdown();
    Ok(())
}
