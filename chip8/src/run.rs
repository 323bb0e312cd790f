use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use log::{debug, info, trace as log_trace};

use chip8_core::constants::FRAME_PERIOD_MS;
use chip8_core::{trace, Cpu, Debugger, Display, Keyboard, Memory, Processor};
use chip8_display::{EventSource, Window};

pub struct Config {
    pub rom: PathBuf,
    pub traces: u8,
    pub seed: Option<u64>,
    pub cycle_hz: u32,
}

/// Brings the machine up and runs it until quit is requested.
///
/// Everything that can fail before the first cycle fails here, so the
/// caller maps any error to a nonzero exit.
pub fn run(config: Config) -> Result<()> {
    let rom = fs::read(&config.rom)
        .with_context(|| format!("unable to read ROM {}", config.rom.display()))?;

    let sdl = sdl2::init().map_err(|e| anyhow!("SDL init failed: {e}"))?;
    let mut window = Window::new(&sdl).map_err(|e| anyhow!("window creation failed: {e}"))?;
    let mut events = EventSource::new(&sdl).map_err(|e| anyhow!("event pump failed: {e}"))?;

    let mut memory = Memory::new();
    memory.load_rom(&rom)?;
    info!("loaded ROM {} ({} bytes)", config.rom.display(), rom.len());

    let cpu = match config.seed {
        Some(seed) => Cpu::with_seed(seed),
        None => Cpu::new(),
    };

    let mut display = Display::new();
    let mut keyboard = Keyboard::new();
    let cycle_delay = Duration::from_secs(1) / config.cycle_hz;

    // The debugger is a pure decorator, so the loop drives either shape
    // through the same contract.
    if config.traces == trace::NONE {
        run_loop(
            cpu,
            &mut memory,
            &mut display,
            &mut keyboard,
            &mut window,
            &mut events,
            cycle_delay,
        )
    } else {
        let debugger = Debugger::new(cpu, std::io::stdout(), config.traces);
        run_loop(
            debugger,
            &mut memory,
            &mut display,
            &mut keyboard,
            &mut window,
            &mut events,
            cycle_delay,
        )
    }
}

/// The single-threaded cooperative loop: one instruction, one event
/// drain, a frame at 60Hz, then the cycle sleep that caps CPU speed.
fn run_loop<P: Processor>(
    mut processor: P,
    memory: &mut Memory,
    display: &mut Display,
    keyboard: &mut Keyboard,
    window: &mut Window,
    events: &mut EventSource,
    cycle_delay: Duration,
) -> Result<()> {
    let start = Instant::now();
    let mut last_frame_ms: u64 = 0;
    let mut buzzer_on = false;

    processor.reset();

    while !keyboard.quit_requested() {
        let now_ms = start.elapsed().as_millis() as u64;
        processor.set_wall_clock(now_ms);
        processor.step(memory, display, keyboard)?;

        events.poll(keyboard);

        if now_ms - last_frame_ms >= FRAME_PERIOD_MS {
            if let Some(frame) = display.take_frame() {
                window
                    .render(frame)
                    .map_err(|e| anyhow!("render failed: {e}"))?;
                log_trace!("frame presented at {now_ms}ms");
            }
            last_frame_ms = now_ms;
        }

        let buzzer = processor.registers().st > 0;
        if buzzer != buzzer_on {
            buzzer_on = buzzer;
            debug!("buzzer {}", if buzzer_on { "on" } else { "off" });
        }

        thread::sleep(cycle_delay);
    }

    info!("quit requested");
    Ok(())
}
