use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

use chip8_core::Keyboard;

use crate::keymap::keymap;

/// # EventSource
/// Owns the SDL2 event pump and mirrors host events into the core's
/// [`Keyboard`]: key transitions through the keymap, window close and
/// Escape as a quit request. The shell drains it once per frame.
pub struct EventSource {
    pump: EventPump,
}

impl EventSource {
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, String> {
        Ok(EventSource {
            pump: sdl.event_pump()?,
        })
    }

    /// Drains all pending host events into `keyboard`.
    pub fn poll(&mut self, keyboard: &mut Keyboard) {
        for event in self.pump.poll_iter() {
            match event {
                Event::Quit { .. } => keyboard.request_quit(),
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(logical)) => keyboard.press(logical),
                    (Keycode::Escape, _) => keyboard.request_quit(),
                    _ => {}
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(logical) = keymap(key) {
                        keyboard.release(logical);
                    }
                }
                _ => {}
            }
        }
    }
}
