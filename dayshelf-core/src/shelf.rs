//! The core `Shelf` struct and its associated types, providing the primary API for interaction.
use crate::config::Config;
use crate::entry::{Entry, EntryId, EntryKind, UNTITLED_LINK, UNTITLED_NOTE};
use crate::error::ShelfError;
use crate::schema;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// The central struct for all shelf operations.
///
/// A `Shelf` holds the whole document in memory: a map from calendar date to
/// the ordered entries recorded on that day. Every mutating operation writes
/// the full document back to disk before returning, so the file always
/// mirrors memory except when the write itself fails.
#[derive(Debug)]
pub struct Shelf {
    pub config: Config,
    days: BTreeMap<NaiveDate, Vec<Entry>>,
    next_id: u64,
}

/// One day's worth of (possibly filtered) entries, as returned by
/// [`Shelf::days`] and [`Shelf::search`]. Entries are snapshots.
#[derive(Debug, Clone)]
pub struct DayView {
    pub date: NaiveDate,
    pub entries: Vec<Entry>,
}

impl Shelf {
    /// Creates a new `Shelf`, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    /// Creates a new `Shelf` with a specific `Config`.
    ///
    /// Ensures the data file's directory exists and loads the document.
    /// A missing or malformed data file is treated as "no data yet".
    pub fn with_config(config: Config) -> Result<Self> {
        if let Some(parent) = config.data_file.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let mut next_id = 0;
        let days = load_document(&config.data_file, &mut next_id);
        Ok(Self {
            config,
            days,
            next_id,
        })
    }

    /// Writes the full document as pretty JSON, overwriting the data file.
    ///
    /// A permission failure maps to [`ShelfError::NoWritePermission`] so
    /// front-ends can tell the user to move the file somewhere writable;
    /// the in-memory state keeps any mutation that preceded the save.
    pub fn save(&self) -> Result<(), ShelfError> {
        let doc = schema::encode(&self.days);
        let json = serde_json::to_string_pretty(&doc)?;
        fs::write(&self.config.data_file, json).map_err(|source| {
            let path = self.config.data_file.clone();
            match source.kind() {
                io::ErrorKind::PermissionDenied => ShelfError::NoWritePermission { path, source },
                _ => ShelfError::Io { path, source },
            }
        })?;
        debug!(
            entries = self.len(),
            path = %self.config.data_file.display(),
            "saved shelf document"
        );
        Ok(())
    }

    /// Shelves a file reference on `date`.
    ///
    /// A blank title defaults to the file name. Adding a path that is
    /// already shelved on the same date is rejected with
    /// [`ShelfError::DuplicatePath`] and leaves the shelf untouched; the
    /// same path on a different date is fine.
    pub fn add_file(
        &mut self,
        date: NaiveDate,
        path: PathBuf,
        title: &str,
    ) -> Result<Entry, ShelfError> {
        if let Some(bucket) = self.days.get(&date) {
            let duplicate = bucket
                .iter()
                .any(|e| matches!(&e.kind, EntryKind::File { path: p } if *p == path));
            if duplicate {
                return Err(ShelfError::DuplicatePath { date, path });
            }
        }
        let title = match title.trim() {
            "" => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            t => t.to_string(),
        };
        let entry = self.push(date, title, EntryKind::File { path });
        self.save()?;
        Ok(entry)
    }

    /// Shelves a note on `date`. The body must be non-empty; a blank title
    /// defaults to "Untitled Note".
    pub fn add_note(
        &mut self,
        date: NaiveDate,
        title: &str,
        body: &str,
    ) -> Result<Entry, ShelfError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(ShelfError::EmptyNote);
        }
        let title = default_title(title, UNTITLED_NOTE);
        let entry = self.push(date, title, EntryKind::Note { body: body.to_string() });
        self.save()?;
        Ok(entry)
    }

    /// Shelves a link on `date`. The URL must be non-empty; a blank title
    /// defaults to "Untitled Link".
    pub fn add_link(
        &mut self,
        date: NaiveDate,
        title: &str,
        url: &str,
    ) -> Result<Entry, ShelfError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ShelfError::EmptyUrl);
        }
        let title = default_title(title, UNTITLED_LINK);
        let entry = self.push(date, title, EntryKind::Link { url: url.to_string() });
        self.save()?;
        Ok(entry)
    }

    /// Removes an entry and returns it. The date's bucket is dropped as
    /// soon as it empties, so no date key ever maps to an empty array.
    pub fn remove_entry(&mut self, id: EntryId) -> Result<Entry, ShelfError> {
        let (date, index) = self.locate(id).ok_or(ShelfError::UnknownEntry(id))?;
        let bucket = self.days.get_mut(&date).ok_or(ShelfError::UnknownEntry(id))?;
        let removed = bucket.remove(index);
        if bucket.is_empty() {
            self.days.remove(&date);
        }
        self.save()?;
        Ok(removed)
    }

    /// Retitles an entry of any kind and returns the fresh snapshot.
    ///
    /// A blank new title is a no-op: the unchanged snapshot comes back and
    /// nothing is written.
    pub fn rename_entry(&mut self, id: EntryId, new_title: &str) -> Result<Entry, ShelfError> {
        let (date, index) = self.locate(id).ok_or(ShelfError::UnknownEntry(id))?;
        let bucket = self.days.get_mut(&date).ok_or(ShelfError::UnknownEntry(id))?;
        let entry = bucket.get_mut(index).ok_or(ShelfError::UnknownEntry(id))?;
        let new_title = new_title.trim();
        if new_title.is_empty() {
            return Ok(entry.clone());
        }
        entry.title = new_title.to_string();
        let snapshot = entry.clone();
        self.save()?;
        Ok(snapshot)
    }

    /// Replaces a note's title and body, returning the fresh snapshot.
    /// The body must stay non-empty; a blank title falls back to
    /// "Untitled Note". Fails with [`ShelfError::NotANote`] on other kinds.
    pub fn update_note(
        &mut self,
        id: EntryId,
        title: &str,
        body: &str,
    ) -> Result<Entry, ShelfError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(ShelfError::EmptyNote);
        }
        let (date, index) = self.locate(id).ok_or(ShelfError::UnknownEntry(id))?;
        let bucket = self.days.get_mut(&date).ok_or(ShelfError::UnknownEntry(id))?;
        let entry = bucket.get_mut(index).ok_or(ShelfError::UnknownEntry(id))?;
        if !matches!(entry.kind, EntryKind::Note { .. }) {
            return Err(ShelfError::NotANote(id));
        }
        entry.title = default_title(title, UNTITLED_NOTE);
        entry.kind = EntryKind::Note { body: body.to_string() };
        let snapshot = entry.clone();
        self.save()?;
        Ok(snapshot)
    }

    /// Case-insensitive substring search, grouped by date descending.
    ///
    /// Matches against the title and, per kind, the path's file name, the
    /// note body, or the URL. A blank query returns the whole shelf. Dates
    /// with no matching entry are omitted entirely.
    pub fn search(&self, query: &str) -> Vec<DayView> {
        let needle = query.trim().to_lowercase();
        self.days
            .iter()
            .rev()
            .filter_map(|(date, bucket)| {
                let entries: Vec<Entry> = if needle.is_empty() {
                    bucket.clone()
                } else {
                    bucket
                        .iter()
                        .filter(|e| entry_matches(e, &needle))
                        .cloned()
                        .collect()
                };
                (!entries.is_empty()).then(|| DayView {
                    date: *date,
                    entries,
                })
            })
            .collect()
    }

    /// The whole shelf grouped by date descending.
    pub fn days(&self) -> Vec<DayView> {
        self.search("")
    }

    pub fn entry(&self, id: EntryId) -> Option<&Entry> {
        let (date, index) = self.locate(id)?;
        self.days.get(&date)?.get(index)
    }

    /// The entries recorded on one date, in insertion order.
    pub fn entries_on(&self, date: NaiveDate) -> Option<&[Entry]> {
        self.days.get(&date).map(Vec::as_slice)
    }

    /// Total number of entries across all dates.
    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    fn push(&mut self, date: NaiveDate, title: String, kind: EntryKind) -> Entry {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        let entry = Entry { id, title, kind };
        self.days.entry(date).or_default().push(entry.clone());
        entry
    }

    fn locate(&self, id: EntryId) -> Option<(NaiveDate, usize)> {
        for (date, bucket) in &self.days {
            if let Some(index) = bucket.iter().position(|e| e.id == id) {
                return Some((*date, index));
            }
        }
        None
    }
}

fn default_title(title: &str, fallback: &str) -> String {
    match title.trim() {
        "" => fallback.to_string(),
        t => t.to_string(),
    }
}

fn entry_matches(entry: &Entry, needle: &str) -> bool {
    if entry.title.to_lowercase().contains(needle) {
        return true;
    }
    entry
        .searchable_payload()
        .is_some_and(|payload| payload.to_lowercase().contains(needle))
}

fn load_document(path: &Path, next_id: &mut u64) -> BTreeMap<NaiveDate, Vec<Entry>> {
    if !path.exists() {
        return BTreeMap::new();
    }
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) => {
            warn!(%error, path = %path.display(), "could not read data file, starting empty");
            return BTreeMap::new();
        }
    };
    match serde_json::from_str::<schema::RawDoc>(&raw) {
        Ok(doc) => schema::decode(doc, next_id),
        Err(error) => {
            warn!(%error, path = %path.display(), "data file is not a shelf document, starting empty");
            BTreeMap::new()
        }
    }
}
