pub mod clock;
pub mod march;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use march::March;
pub use types::entry::{Error, Field, Form, GuestbookEntry, Preview, RawEntry};
pub use types::id::Id;
pub use types::position::Position;
