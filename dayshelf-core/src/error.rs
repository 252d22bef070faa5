use crate::entry::EntryId;
use chrono::NaiveDate;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by shelf operations.
///
/// Front-ends are expected to match on these: a duplicate path is a warning
/// the user can shrug off, a missing write permission needs a louder alert,
/// and validation failures keep whatever dialog collected the input open.
#[derive(Debug, Error)]
pub enum ShelfError {
    /// The data file cannot be written because of missing permissions.
    /// The in-memory mutation stays applied.
    #[error("no write permission for {}", .path.display())]
    NoWritePermission {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other I/O failure while writing the data file.
    #[error("writing {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("encoding shelf document: {0}")]
    Encode(#[from] serde_json::Error),

    /// The same filesystem path was already shelved on this date.
    #[error("{} is already shelved for {}", .path.display(), .date)]
    DuplicatePath { date: NaiveDate, path: PathBuf },

    #[error("note text cannot be empty")]
    EmptyNote,

    #[error("url cannot be empty")]
    EmptyUrl,

    #[error("no entry {0} on the shelf")]
    UnknownEntry(EntryId),

    #[error("entry {0} is not a note")]
    NotANote(EntryId),
}
