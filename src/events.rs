//! Turning an ordered stream of events into a stream of states.

use crate::compute::reduce;
use crate::entities::{Event, GameState};

/// What event sources push into a session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Message {
    Event(Event),
    /// Stop consuming; the fold ends here.
    Quit,
}

impl From<Event> for Message {
    fn from(event: Event) -> Self {
        Message::Event(event)
    }
}

/// Fold `events` through [`reduce`], starting from `seed`. Yields one state
/// per event, in event order; `seed` itself is not yielded.
pub fn states<I>(seed: GameState, events: I) -> impl Iterator<Item = GameState>
where
    I: IntoIterator<Item = Event>,
{
    events.into_iter().scan(seed, |state, event| {
        *state = reduce(state, &event);
        Some(state.clone())
    })
}

/// The game events of a message stream, up to the first `Quit`.
pub fn until_quit<I>(messages: I) -> impl Iterator<Item = Event>
where
    I: IntoIterator<Item = Message>,
{
    messages.into_iter().map_while(|message| match message {
        Message::Event(event) => Some(event),
        Message::Quit => None,
    })
}
