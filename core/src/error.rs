use thiserror::Error;

/// Errors surfaced by the machine core.
///
/// Address violations are unreachable from correctly-decoded opcodes; one
/// escaping to the caller indicates an emulator bug and the shell treats it
/// as fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("memory access out of bounds at address {addr:#06X}")]
    AddressOutOfRange { addr: u16 },

    #[error("ROM is too large ({size} bytes), max size is {max} bytes")]
    RomTooLarge { size: usize, max: usize },
}
