use sdl2::keyboard::Keycode;

/// Host key for each logical key of the hexadecimal pad.
///
/// The pad's 4x4 grid sits under the left four columns of a QWERTY
/// keyboard, row by row: `1..4` hold the pad's top row (1, 2, 3, C),
/// `Q..R` the second (4, 5, 6, D), `A..F` the third (7, 8, 9, E) and
/// `Z..V` the bottom one (A, 0, B, F).
const KEYMAP: [(Keycode, u8); 16] = [
    (Keycode::Num1, 0x1),
    (Keycode::Num2, 0x2),
    (Keycode::Num3, 0x3),
    (Keycode::Num4, 0xC),
    (Keycode::Q, 0x4),
    (Keycode::W, 0x5),
    (Keycode::E, 0x6),
    (Keycode::R, 0xD),
    (Keycode::A, 0x7),
    (Keycode::S, 0x8),
    (Keycode::D, 0x9),
    (Keycode::F, 0xE),
    (Keycode::Z, 0xA),
    (Keycode::X, 0x0),
    (Keycode::C, 0xB),
    (Keycode::V, 0xF),
];

/// The logical key under a host keycode, if the keycode belongs to the
/// pad at all.
pub fn keymap(key: Keycode) -> Option<u8> {
    KEYMAP
        .iter()
        .find(|(host, _)| *host == key)
        .map(|&(_, logical)| logical)
}
