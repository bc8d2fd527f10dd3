use super::id::Id;
use super::position::Position;
use crate::clock::{Clock, SystemClock};
use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

pub mod form;
pub mod name;

pub use form::Form;
use name::{is_blank, FullName};

#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0} must not be null or empty")]
    InvalidArgument(Field),
    #[error("Entry already has an id")]
    IdAlreadyAssigned,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Field {
    Name,
    Text,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Name => "Name",
            Self::Text => "Text",
        };

        write!(f, "{s}")
    }
}

/// A single guestbook entry.
///
/// Built once through [`GuestbookEntry::create`] and read-only afterwards. The
/// only later change is the id, which the store hands out exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestbookEntry {
    id: Option<Id>,
    first_name: String,
    last_name: String,
    text: String,
    created_at: NaiveDateTime,
    flagged: bool,
    position: Position,
}

impl GuestbookEntry {
    pub fn create(name: impl Into<String>, text: impl Into<String>) -> Result<Self, Error> {
        Self::create_with_clock(name, text, &SystemClock)
    }

    /// Same as [`GuestbookEntry::create`], stamping the entry with `clock`.
    ///
    /// Both arguments are validated before anything else happens, so a
    /// rejected entry never reads the clock.
    pub fn create_with_clock(
        name: impl Into<String>,
        text: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, Error> {
        let name = name.into();
        let text = text.into();

        if is_blank(&name) {
            return Err(Error::InvalidArgument(Field::Name));
        }

        if is_blank(&text) {
            return Err(Error::InvalidArgument(Field::Text));
        }

        let flagged = name::is_flagged(&name);

        if flagged {
            debug!(%name, "Flagged guestbook entry name");
        }

        let FullName {
            first_name,
            last_name,
        } = name::split(&name);

        debug!(%first_name, %last_name, "Parsed guestbook entry name");

        Ok(Self {
            id: None,
            first_name,
            last_name,
            text,
            created_at: clock.now(),
            flagged,
            position: Position::ORIGIN,
        })
    }

    /// Rehydrates an entry the store has already persisted.
    pub fn from_raw(raw: RawEntry) -> Result<Self, Error> {
        if is_blank(&raw.first_name) {
            return Err(Error::InvalidArgument(Field::Name));
        }

        if is_blank(&raw.text) {
            return Err(Error::InvalidArgument(Field::Text));
        }

        Ok(Self {
            id: Some(raw.id),
            first_name: raw.first_name,
            last_name: raw.last_name,
            text: raw.text,
            created_at: raw.created_at,
            flagged: raw.flagged,
            position: Position::ORIGIN,
        })
    }

    /// Row for the store, available once the entry has an id.
    pub fn to_raw(&self) -> Option<RawEntry> {
        self.id.map(|id| RawEntry {
            id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            text: self.text.clone(),
            created_at: self.created_at,
            flagged: self.flagged,
        })
    }

    pub fn assign_id(&mut self, id: Id) -> Result<(), Error> {
        if self.id.is_some() {
            return Err(Error::IdAlreadyAssigned);
        }

        self.id = Some(id);

        Ok(())
    }

    pub fn id(&self) -> Option<Id> {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn is_flagged(&self) -> bool {
        self.flagged
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct RawEntry {
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
    pub text: String,
    pub created_at: NaiveDateTime,
    pub flagged: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Preview {
    pub id: Option<Id>,
    pub first_name: String,
    pub last_name: String,
    pub text: String,
    pub created_at: String,

    pub is_flagged: bool,
    pub has_last_name: bool,
}

impl Preview {
    pub fn from_entry(entry: &GuestbookEntry) -> Self {
        Self {
            id: entry.id,
            first_name: entry.first_name.clone(),
            last_name: entry.last_name.clone(),
            text: entry.text.clone(),
            created_at: format_created_at(entry.created_at),

            is_flagged: entry.flagged,
            has_last_name: !entry.last_name.is_empty(),
        }
    }
}

pub fn format_created_at(created_at: NaiveDateTime) -> String {
    format!("{}", created_at.format("%B %d · %Y"))
}
