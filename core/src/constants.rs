/// Horizontal display resolution in pixels.
pub const DISPLAY_WIDTH: usize = 64;

/// Vertical display resolution in pixels.
pub const DISPLAY_HEIGHT: usize = 32;

/// Total addressable memory in bytes.
pub const MEMORY_SIZE: usize = 4096;

/// Address where ROMs are loaded and where the program counter starts.
pub const PROGRAM_START: u16 = 0x200;

/// Largest ROM that fits between `PROGRAM_START` and the end of memory.
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// Address of the built-in hexadecimal font.
pub const FONT_START: u16 = 0x000;

/// Bytes per font glyph; glyph `k` lives at `FONT_START + 5 * k`.
pub const FONT_GLYPH_SIZE: u16 = 5;

/// Number of return addresses the call stack can hold.
pub const STACK_DEPTH: usize = 16;

/// Number of keys on the hexadecimal keypad.
pub const KEY_COUNT: usize = 16;

/// Delay and sound timers decrement at 60Hz, i.e. once per ~16ms.
pub const TIMER_PERIOD_MS: u64 = 1000 / 60;

/// Frames are presented at 60Hz.
pub const FRAME_PERIOD_MS: u64 = 1000 / 60;

/// Default CPU clock speed in instructions per second.
pub const CLOCK_HZ: u32 = 500;

/// The built-in font: 16 glyphs (0-F), 5 bytes each, one row per byte.
///
/// Stored at `FONT_START` on boot; `FX29` computes glyph addresses against
/// this fixed layout.
pub const FONTSET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
