use super::{Error, GuestbookEntry};
use crate::clock::Clock;
use serde::Deserialize;

/// Fields submitted by the guestbook form. Either may be missing.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Form {
    pub name: Option<String>,
    pub text: Option<String>,
}

impl Form {
    /// Missing fields are rejected just like empty ones.
    pub fn into_entry(self, clock: &impl Clock) -> Result<GuestbookEntry, Error> {
        GuestbookEntry::create_with_clock(
            self.name.unwrap_or_default(),
            self.text.unwrap_or_default(),
            clock,
        )
    }
}
