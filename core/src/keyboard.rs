use crate::constants::KEY_COUNT;

/// # Keyboard
/// Pressed state for the 16-key hexadecimal pad, plus the quit flag.
///
/// The event source (the windowing layer's event pump) drains host events
/// once per frame and mirrors them here through `press`/`release`/
/// `request_quit`. `press` also latches the key for `FX0A`, which consumes
/// it through `take_just_pressed`; a key held since before the wait began
/// does not satisfy the wait.
pub struct Keyboard {
    keys: [bool; KEY_COUNT],
    just_pressed: Option<u8>,
    quit: bool,
}

impl Keyboard {
    pub fn new() -> Self {
        Keyboard {
            keys: [false; KEY_COUNT],
            just_pressed: None,
            quit: false,
        }
    }

    /// Whether logical key `key` (0x0..=0xF) is currently held.
    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys.get(usize::from(key)).copied().unwrap_or(false)
    }

    /// Marks `key` pressed and latches the edge.
    pub fn press(&mut self, key: u8) {
        if let Some(slot) = self.keys.get_mut(usize::from(key)) {
            *slot = true;
            self.just_pressed = Some(key);
        }
    }

    /// Marks `key` released.
    pub fn release(&mut self, key: u8) {
        if let Some(slot) = self.keys.get_mut(usize::from(key)) {
            *slot = false;
        }
    }

    /// The most recent pressed-edge since the last call, if any.
    pub fn take_just_pressed(&mut self) -> Option<u8> {
        self.just_pressed.take()
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}
