//! Keyboard source: turns terminal key presses into session messages.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, error};

use crate::constants::MOVE_DISTANCE;
use crate::entities::Event;
use crate::events::Message;
use crate::session::SessionHandle;

/// How often the reader wakes up to check the stop flag.
const POLL: Duration = Duration::from_millis(50);

/// Map one key event to a message.
///
/// Only the up-to-down transition counts: repeats of a held key and releases
/// produce nothing, as do keys the game does not use.
pub fn translate(key: &KeyEvent) -> Option<Message> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let step = |dx: f64, dy: f64| Some(Message::Event(Event::Move { dx, dy }));
    match key.code {
        KeyCode::Up => step(0.0, -MOVE_DISTANCE),
        KeyCode::Down => step(0.0, MOVE_DISTANCE),
        KeyCode::Left => step(-MOVE_DISTANCE, 0.0),
        KeyCode::Right => step(MOVE_DISTANCE, 0.0),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Message::Event(Event::Restart)),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Message::Quit)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Message::Quit),
        _ => None,
    }
}

fn pump(handle: &SessionHandle, stop: &AtomicBool) -> io::Result<()> {
    while !stop.load(Ordering::Relaxed) {
        if !event::poll(POLL)? {
            continue;
        }
        if let TermEvent::Key(key) = event::read()? {
            if let Some(message) = translate(&key) {
                if !handle.send(message) {
                    break;
                }
            }
        }
    }
    Ok(())
}

/// Read the terminal until `stop` is raised or the session hangs up. A read
/// failure ends the session instead of leaving it without input.
pub fn run(handle: SessionHandle, stop: Arc<AtomicBool>) {
    if let Err(err) = pump(&handle, &stop) {
        error!("keyboard input failed: {err}");
        handle.send(Message::Quit);
    }
    debug!("keyboard input stopped");
}
