//! The running game: event sources, the fold, and the render sink.
//!
//! A [`Session`] owns one merged channel. Every source (the clock, the
//! keyboard, or anything holding a [`SessionHandle`]) sends into it from its
//! own thread, so events are ordered by arrival. [`Session::run`] folds that
//! channel through the reducer on the calling thread, strictly one event at
//! a time, and hands each resulting state to the sink.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, info, warn};

use crate::board::initial_state;
use crate::clock;
use crate::compute::termination;
use crate::entities::GameState;
use crate::error::{Error, Result};
use crate::events::{states, until_quit, Message};

/// Receives every state the session produces.
///
/// Failures are the sink's own business: the session logs them and moves on.
pub trait StateSink {
    fn render(&mut self, state: &GameState) -> io::Result<()>;
}

impl<F> StateSink for F
where
    F: FnMut(&GameState) -> io::Result<()>,
{
    fn render(&mut self, state: &GameState) -> io::Result<()> {
        self(state)
    }
}

/// Sending end of a session's channel.
#[derive(Clone, Debug)]
pub struct SessionHandle {
    sender: Sender<Message>,
}

impl SessionHandle {
    /// Returns `false` once the session has stopped listening.
    pub fn send(&self, message: impl Into<Message>) -> bool {
        self.sender.send(message.into()).is_ok()
    }
}

pub struct Session {
    tick_interval: Option<Duration>,
    sender: Option<Sender<Message>>,
    receiver: Option<Receiver<Message>>,
    stop: Arc<AtomicBool>,
    sources: Vec<(&'static str, JoinHandle<()>)>,
    started: bool,
}

impl Session {
    /// A session whose clock ticks every `tick_interval`. `None` leaves the
    /// clock out, so only messages sent through handles drive the game.
    pub fn new(tick_interval: Option<Duration>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Session {
            tick_interval,
            sender: Some(sender),
            receiver: Some(receiver),
            stop: Arc::new(AtomicBool::new(false)),
            sources: Vec::new(),
            started: false,
        }
    }

    /// A new sending end. Fails once `run` has released the session's own sender.
    pub fn handle(&self) -> Result<SessionHandle> {
        self.sender
            .as_ref()
            .map(|sender| SessionHandle {
                sender: sender.clone(),
            })
            .ok_or(Error::Consumed)
    }

    /// Spawn `source` on its own thread with a handle and the stop flag.
    /// The thread is joined by [`Session::stop`].
    pub fn attach_source<F>(&mut self, name: &'static str, source: F) -> Result<()>
    where
        F: FnOnce(SessionHandle, Arc<AtomicBool>) + Send + 'static,
    {
        let handle = self.handle()?;
        let stop = Arc::clone(&self.stop);
        let thread = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || source(handle, stop))?;
        debug!("attached {name} source");
        self.sources.push((name, thread));
        Ok(())
    }

    /// Start the clock. A session starts once.
    pub fn start(&mut self) -> Result<()> {
        if self.started {
            return Err(Error::AlreadyStarted);
        }
        if let Some(interval) = self.tick_interval {
            let tick_source = move |handle, stop| clock::run(interval, handle, stop);
            self.attach_source("clock", tick_source)?;
        }
        self.started = true;
        info!("session started");
        Ok(())
    }

    /// Fold incoming events into states and render each one, until a `Quit`
    /// arrives or every sender is gone. Returns the last state.
    ///
    /// The state stream cannot be restarted: a second call fails.
    pub fn run<S: StateSink + ?Sized>(&mut self, sink: &mut S) -> Result<GameState> {
        if !self.started {
            return Err(Error::NotStarted);
        }
        let receiver = self.receiver.take().ok_or(Error::Consumed)?;
        // Only sources keep the channel open from here on.
        drop(self.sender.take());

        let mut last = initial_state();
        for state in states(initial_state(), until_quit(receiver.iter())) {
            if state.game_over && !last.game_over {
                info!(
                    "game over at tick {} (score {}, {:?})",
                    state.time,
                    state.score,
                    termination(&state)
                );
            }
            if state.highscore > last.highscore {
                debug!("new highscore {}", state.highscore);
            }
            if let Err(err) = sink.render(&state) {
                warn!("render failed: {err}");
            }
            last = state;
        }
        info!("session finished with highscore {}", last.highscore);
        Ok(last)
    }

    /// Raise the stop flag and wait for every source thread.
    pub fn stop(&mut self) -> Result<()> {
        self.stop.store(true, Ordering::Relaxed);
        let mut result = Ok(());
        for (name, thread) in self.sources.drain(..) {
            if thread.join().is_err() {
                result = Err(Error::SourcePanicked(name));
            }
        }
        debug!("session stopped");
        result
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
