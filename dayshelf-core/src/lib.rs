pub mod config;
pub mod dates;
pub mod entry;
pub mod error;
mod schema;
pub mod shelf;

pub use config::Config;
pub use entry::{Entry, EntryId, EntryKind, Kind, UNTITLED_LINK, UNTITLED_NOTE};
pub use error::ShelfError;
pub use shelf::{DayView, Shelf};
