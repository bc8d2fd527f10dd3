pub mod entry;
pub mod id;
pub mod position;
