use std::path::PathBuf;
use strum_macros::{Display, EnumString};

/// Fallback titles used when the user leaves the title blank.
pub const UNTITLED_NOTE: &str = "Untitled Note";
pub const UNTITLED_LINK: &str = "Untitled Link";

/// Opaque identifier for an entry, assigned by the [`Shelf`](crate::Shelf)
/// when the document is loaded and whenever an entry is added.
///
/// Ids are stable for the lifetime of the process and are never persisted;
/// the on-disk records carry no identity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub(crate) u64);

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The three shapes an entry can take, with their kind-specific payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    File { path: PathBuf },
    Note { body: String },
    Link { url: String },
}

impl EntryKind {
    pub fn kind(&self) -> Kind {
        match self {
            EntryKind::File { .. } => Kind::File,
            EntryKind::Note { .. } => Kind::Note,
            EntryKind::Link { .. } => Kind::Link,
        }
    }
}

/// Payload-free discriminant, mostly for display and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Kind {
    File,
    Note,
    Link,
}

/// A single shelved item: a display title plus the kind payload.
///
/// `Entry` values handed out by the shelf are snapshots. Mutating one does
/// not touch the store; go through the shelf's update operations instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    pub kind: EntryKind,
}

impl Entry {
    /// The text a substring search should look at besides the title.
    pub(crate) fn searchable_payload(&self) -> Option<String> {
        match &self.kind {
            EntryKind::File { path } => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
            EntryKind::Note { body } => Some(body.clone()),
            EntryKind::Link { url } => Some(url.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn kind_round_trips_through_strings() {
        assert_eq!(Kind::File.to_string(), "file");
        assert_eq!(Kind::from_str("note").unwrap(), Kind::Note);
        assert_eq!(Kind::from_str("LINK").unwrap(), Kind::Link);
        assert!(Kind::from_str("folder").is_err());
    }

    #[test]
    fn file_payload_is_the_file_name_only() {
        let entry = Entry {
            id: EntryId(1),
            title: "Quarterly numbers".to_string(),
            kind: EntryKind::File {
                path: PathBuf::from("/tmp/reports/q3.pdf"),
            },
        };
        assert_eq!(entry.searchable_payload().as_deref(), Some("q3.pdf"));
    }
}
