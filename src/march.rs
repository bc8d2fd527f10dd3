//! Diagonal march of a flagged entry's marker.
//!
//! Nothing here sleeps or loops: whoever owns the schedule calls
//! [`March::tick`] once per interval until the march reports
//! [`State::Arrived`].

use crate::types::entry::GuestbookEntry;
use crate::types::position::Position;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_STEP: i32 = 10;
pub const DEFAULT_ARRIVAL_X: i32 = 100;

#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Step must be positive")]
    NonPositiveStep,
    #[error("Arrival must lie below {}", i32::MAX)]
    UnreachableArrival,
}

/// How far a march moves per tick and where it stops.
///
/// Only settings that always arrive can be built: a positive step keeps `x`
/// growing until it saturates at `i32::MAX`, which is past any accepted
/// `arrival_x`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawSettings")]
pub struct Settings {
    step: i32,
    arrival_x: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            arrival_x: DEFAULT_ARRIVAL_X,
        }
    }
}

impl Settings {
    pub fn parse(step: i32, arrival_x: i32) -> Result<Self, Error> {
        if step <= 0 {
            return Err(Error::NonPositiveStep);
        }

        if arrival_x == i32::MAX {
            return Err(Error::UnreachableArrival);
        }

        Ok(Self { step, arrival_x })
    }

    /// Added to both coordinates on every tick.
    pub fn step(&self) -> i32 {
        self.step
    }

    /// The march arrives once `x` goes past this.
    pub fn arrival_x(&self) -> i32 {
        self.arrival_x
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawSettings {
    step: i32,
    arrival_x: i32,
}

impl Default for RawSettings {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            arrival_x: DEFAULT_ARRIVAL_X,
        }
    }
}

impl TryFrom<RawSettings> for Settings {
    type Error = Error;

    fn try_from(raw: RawSettings) -> Result<Self, Self::Error> {
        Self::parse(raw.step, raw.arrival_x)
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum State {
    #[default]
    Idle,
    Advancing,
    Arrived,
}

#[derive(Debug, Clone)]
pub struct March {
    position: Position,
    state: State,
    settings: Settings,
}

impl March {
    pub fn new(start: Position, settings: Settings) -> Self {
        Self {
            position: start,
            state: State::Idle,
            settings,
        }
    }

    /// Only flagged entries march.
    pub fn for_entry(entry: &GuestbookEntry, settings: Settings) -> Option<Self> {
        entry
            .is_flagged()
            .then(|| Self::new(entry.position(), settings))
    }

    pub fn start(&mut self) -> State {
        if self.state == State::Idle {
            debug!(x = self.position.x, y = self.position.y, "March started");

            self.state = State::Advancing;
        }

        self.state
    }

    pub fn tick(&mut self) -> State {
        if self.state != State::Advancing {
            return self.state;
        }

        self.position = self.position.advance(self.settings.step);

        if self.position.x > self.settings.arrival_x {
            debug!(x = self.position.x, y = self.position.y, "March arrived");

            self.state = State::Arrived;
        }

        self.state
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn position(&self) -> Position {
        self.position
    }
}
