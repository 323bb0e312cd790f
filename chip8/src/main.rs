use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use chip8_core::constants::CLOCK_HZ;
use chip8_core::trace;

mod run;

#[derive(Parser)]
#[command(name = "chip8")]
#[command(about = "CHIP-8 virtual machine")]
struct Cli {
    /// ROM file to load
    rom: Option<PathBuf>,

    /// Emit a per-instruction trace to stdout (repeatable)
    #[arg(long, value_enum)]
    trace: Vec<TraceKind>,

    /// Seed for the random number generator
    #[arg(long)]
    seed: Option<u64>,

    /// CPU clock speed in instructions per second
    #[arg(long, default_value_t = CLOCK_HZ, value_parser = clap::value_parser!(u32).range(1..))]
    cycle_hz: u32,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum TraceKind {
    Opcode,
    Registers,
    Stack,
    All,
}

impl Cli {
    fn traces(&self) -> u8 {
        self.trace.iter().fold(trace::NONE, |mask, kind| {
            mask | match kind {
                TraceKind::Opcode => trace::OPCODE,
                TraceKind::Registers => trace::REGISTERS,
                TraceKind::Stack => trace::STACK,
                TraceKind::All => trace::ALL,
            }
        })
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    // A missing ROM path is an init error like an unreadable one, not a
    // usage error, so it shares the same exit code.
    let Some(rom) = cli.rom.clone() else {
        eprintln!("Error: missing ROM path");
        std::process::exit(1);
    };

    let config = run::Config {
        rom,
        traces: cli.traces(),
        seed: cli.seed,
        cycle_hz: cli.cycle_hz,
    };

    if let Err(e) = run::run(config) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
