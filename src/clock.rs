//! Periodic tick source.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::debug;

use crate::entities::Event;
use crate::session::SessionHandle;

/// Sleep `interval`, then send `Tick { elapsed: n }` for `n = 0, 1, 2, ...`
/// until `stop` is raised or the session hangs up.
pub fn run(interval: Duration, handle: SessionHandle, stop: Arc<AtomicBool>) {
    let mut elapsed: u64 = 0;
    loop {
        thread::sleep(interval);
        if stop.load(Ordering::Relaxed) || !handle.send(Event::Tick { elapsed }) {
            break;
        }
        elapsed += 1;
    }
    debug!("clock stopped after {elapsed} ticks");
}
