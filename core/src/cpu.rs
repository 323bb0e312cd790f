use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{FONT_GLYPH_SIZE, STACK_DEPTH};
use crate::display::Display;
use crate::error::CoreError;
use crate::keyboard::Keyboard;
use crate::memory::Memory;
use crate::opcode::Instruction;
use crate::registers::Registers;
use crate::timer::TimerDriver;

/// The CPU contract: what the shell drives and the debugger decorates.
///
/// A step is fetch, program counter advance, decode, dispatch, then the
/// 60Hz timer tick. Instructions are observed in program order; the only
/// suspending operation is the wait-for-key load, during which steps keep
/// ticking the timers.
pub trait Processor {
    /// Back to the boot state; memory is left alone.
    fn reset(&mut self);

    /// Feeds the monotonic wall clock that paces the timers.
    fn set_wall_clock(&mut self, now_ms: u64);

    /// Executes one cycle against the machine's components.
    fn step(
        &mut self,
        memory: &mut Memory,
        display: &mut Display,
        keyboard: &mut Keyboard,
    ) -> Result<(), CoreError>;

    /// The register file, read by the debugger and by tests.
    fn registers(&self) -> &Registers;

    /// The raw word of the most recently fetched opcode.
    fn last_opcode(&self) -> u16;
}

/// # Cpu
/// Fetches, decodes and executes the instruction set.
///
/// The CPU owns the register file, the timer driver and the random source;
/// memory, display and keyboard are owned by the shell and passed in as
/// mutable borrows for the duration of a step.
pub struct Cpu {
    regs: Registers,
    timers: TimerDriver,
    rng: StdRng,
    last_opcode: u16,
    /// Register awaiting a key press, set by the wait-for-key load.
    waiting_key: Option<u8>,
}

impl Cpu {
    /// A CPU with an entropy-seeded random source.
    pub fn new() -> Self {
        Cpu::with_rng(StdRng::from_entropy())
    }

    /// A CPU with a deterministic random source, for reproducible runs
    /// and for asserting on random loads in tests.
    pub fn with_seed(seed: u64) -> Self {
        Cpu::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Cpu {
            regs: Registers::new(),
            timers: TimerDriver::new(),
            rng,
            last_opcode: 0x0000,
            waiting_key: None,
        }
    }

    fn execute(
        &mut self,
        instruction: Instruction,
        memory: &mut Memory,
        display: &mut Display,
        keyboard: &mut Keyboard,
    ) -> Result<(), CoreError> {
        let regs = &mut self.regs;

        match instruction {
            Instruction::Cls => display.clear(),
            Instruction::Ret => {
                if regs.sp > 0 {
                    regs.sp -= 1;
                }
                regs.pc = regs.stack[usize::from(regs.sp)];
            }
            Instruction::Jp { nnn } => regs.pc = nnn,
            Instruction::Call { nnn } => {
                // A full stack swallows the push; the jump still happens.
                if usize::from(regs.sp) < STACK_DEPTH {
                    regs.stack[usize::from(regs.sp)] = regs.pc;
                    regs.sp += 1;
                }
                regs.pc = nnn;
            }
            Instruction::SeByte { x, kk } => {
                if regs.v[usize::from(x)] == kk {
                    regs.pc += 2;
                }
            }
            Instruction::SneByte { x, kk } => {
                if regs.v[usize::from(x)] != kk {
                    regs.pc += 2;
                }
            }
            Instruction::SeReg { x, y } => {
                if regs.v[usize::from(x)] == regs.v[usize::from(y)] {
                    regs.pc += 2;
                }
            }
            Instruction::LdByte { x, kk } => regs.v[usize::from(x)] = kk,
            Instruction::AddByte { x, kk } => {
                regs.v[usize::from(x)] = regs.v[usize::from(x)].wrapping_add(kk);
            }
            Instruction::LdReg { x, y } => regs.v[usize::from(x)] = regs.v[usize::from(y)],
            Instruction::Or { x, y } => regs.v[usize::from(x)] |= regs.v[usize::from(y)],
            Instruction::And { x, y } => regs.v[usize::from(x)] &= regs.v[usize::from(y)],
            Instruction::Xor { x, y } => regs.v[usize::from(x)] ^= regs.v[usize::from(y)],
            Instruction::AddReg { x, y } => {
                let (sum, carry) =
                    regs.v[usize::from(x)].overflowing_add(regs.v[usize::from(y)]);
                // The flag is written after the result so it wins when x is VF.
                regs.v[usize::from(x)] = sum;
                regs.v[0xF] = u8::from(carry);
            }
            Instruction::Sub { x, y } => {
                let (vx, vy) = (regs.v[usize::from(x)], regs.v[usize::from(y)]);
                regs.v[usize::from(x)] = vx.wrapping_sub(vy);
                regs.v[0xF] = u8::from(vx > vy);
            }
            Instruction::Shr { x, y } => {
                let vy = regs.v[usize::from(y)];
                regs.v[usize::from(x)] = vy >> 1;
                regs.v[0xF] = vy & 0x1;
            }
            Instruction::Subn { x, y } => {
                let (vx, vy) = (regs.v[usize::from(x)], regs.v[usize::from(y)]);
                regs.v[usize::from(x)] = vy.wrapping_sub(vx);
                regs.v[0xF] = u8::from(vy > vx);
            }
            Instruction::Shl { x, y } => {
                let vy = regs.v[usize::from(y)];
                regs.v[usize::from(x)] = vy << 1;
                regs.v[0xF] = (vy & 0x80) >> 7;
            }
            Instruction::SneReg { x, y } => {
                if regs.v[usize::from(x)] != regs.v[usize::from(y)] {
                    regs.pc += 2;
                }
            }
            Instruction::LdI { nnn } => regs.i = nnn,
            Instruction::JpV0 { nnn } => regs.pc = nnn + u16::from(regs.v[0x0]),
            Instruction::Rnd { x, kk } => {
                let byte: u8 = self.rng.gen();
                regs.v[usize::from(x)] = byte & kk;
            }
            Instruction::Drw { x, y, n } => {
                let mut sprite = Vec::with_capacity(usize::from(n));
                for offset in 0..u16::from(n) {
                    sprite.push(memory.load_u8(regs.i + offset)?);
                }
                let (px, py) = (regs.v[usize::from(x)], regs.v[usize::from(y)]);
                regs.v[0xF] = 0x0;
                let erased = display.draw_sprite(px, py, &sprite);
                regs.v[0xF] = u8::from(erased);
            }
            Instruction::Skp { x } => {
                if keyboard.is_pressed(regs.v[usize::from(x)]) {
                    regs.pc += 2;
                }
            }
            Instruction::Sknp { x } => {
                if !keyboard.is_pressed(regs.v[usize::from(x)]) {
                    regs.pc += 2;
                }
            }
            Instruction::LdFromDt { x } => regs.v[usize::from(x)] = regs.dt,
            Instruction::LdKey { x } => {
                // Only a press after the wait begins may satisfy it.
                keyboard.take_just_pressed();
                self.waiting_key = Some(x);
            }
            Instruction::LdDt { x } => regs.dt = regs.v[usize::from(x)],
            Instruction::LdSt { x } => regs.st = regs.v[usize::from(x)],
            Instruction::AddI { x } => {
                regs.i = regs.i.wrapping_add(u16::from(regs.v[usize::from(x)]));
            }
            Instruction::LdFont { x } => {
                regs.i = FONT_GLYPH_SIZE * u16::from(regs.v[usize::from(x)]);
            }
            Instruction::LdBcd { x } => {
                let value = regs.v[usize::from(x)];
                memory.store_u8(regs.i, value / 100)?;
                memory.store_u8(regs.i + 1, value / 10 % 10)?;
                memory.store_u8(regs.i + 2, value % 10)?;
            }
            Instruction::Store { x } => {
                for index in 0..=u16::from(x) {
                    memory.store_u8(regs.i + index, regs.v[usize::from(index)])?;
                }
                regs.i += u16::from(x) + 1;
            }
            Instruction::Load { x } => {
                for index in 0..=u16::from(x) {
                    regs.v[usize::from(index)] = memory.load_u8(regs.i + index)?;
                }
                regs.i += u16::from(x) + 1;
            }
        }

        Ok(())
    }
}

impl Processor for Cpu {
    fn reset(&mut self) {
        self.regs.reset();
        self.timers.reset();
        self.last_opcode = 0x0000;
        self.waiting_key = None;
    }

    fn set_wall_clock(&mut self, now_ms: u64) {
        self.timers.set_wall_clock(now_ms);
    }

    fn step(
        &mut self,
        memory: &mut Memory,
        display: &mut Display,
        keyboard: &mut Keyboard,
    ) -> Result<(), CoreError> {
        if let Some(x) = self.waiting_key {
            if let Some(key) = keyboard.take_just_pressed() {
                self.regs.v[usize::from(x)] = key;
                self.waiting_key = None;
            }
            // Whether or not the wait completed, this step runs no
            // instruction; the timers still advance.
            self.timers.tick(&mut self.regs);
            return Ok(());
        }

        let word = memory.load_u16_be(self.regs.pc)?;
        self.last_opcode = word;
        self.regs.pc += 2;

        if let Some(instruction) = Instruction::decode(word) {
            self.execute(instruction, memory, display, keyboard)?;
        }

        self.timers.tick(&mut self.regs);
        Ok(())
    }

    fn registers(&self) -> &Registers {
        &self.regs
    }

    fn last_opcode(&self) -> u16 {
        self.last_opcode
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
