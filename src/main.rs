use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};
use log::info;

use frog_crossing::constants::TICK_INTERVAL;
use frog_crossing::display::TerminalRenderer;
use frog_crossing::{input, logging, Result, Session};

/// A Frogger-style crossing game for the terminal
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Milliseconds between clock ticks
    #[arg(long, default_value_t = TICK_INTERVAL.as_millis() as u64)]
    tick_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose, args.log_file.as_deref())?;

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Press/repeat/release reporting lets held keys be told apart from new
    // presses. Terminals without the kitty protocol report presses only.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    info!("keyboard enhancement: {keyboard_enhanced}");

    let result = play(&mut out, Duration::from_millis(args.tick_ms.max(1)));

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn play<W: Write>(out: &mut W, tick_interval: Duration) -> Result<()> {
    let mut session = Session::new(Some(tick_interval));
    session.attach_source("keyboard", input::run)?;
    session.start()?;

    let mut renderer = TerminalRenderer::new(out);
    let outcome = session.run(&mut renderer);
    session.stop()?;

    let last = outcome?;
    info!("final score {}, highscore {}", last.score, last.highscore);
    Ok(())
}
