//! Frog Crossing: a Frogger-style crossing game with a functional core.
//!
//! - `vector`, `entities`, `board`, `physics`, `compute`: the pure core.
//!   [`compute::reduce`] maps a state and one [`Event`] to the next state.
//! - `events`: folding an ordered event stream into a state stream.
//! - `clock`, `input`: event sources.
//! - `session`: owns the sources, the fold and the render sink.
//! - `display`: terminal render sink.

pub mod board;
pub mod clock;
pub mod compute;
pub mod constants;
pub mod display;
pub mod entities;
pub mod error;
pub mod events;
pub mod input;
pub mod logging;
pub mod physics;
pub mod session;
pub mod vector;

pub use compute::reduce;
pub use entities::{Body, BodyKind, Event, GameState};
pub use error::{Error, Result};
pub use session::{Session, SessionHandle, StateSink};
pub use vector::Vec2;
