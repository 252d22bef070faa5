//! On-disk document shape and its conversion to the typed model.
//!
//! The document is one JSON object: `YYYY-MM-DD` keys mapping to arrays of
//! flat records. A record's kind is implied by which payload key it carries
//! (`path`, `note` or `url`); the title key is `desc`, with `title` accepted
//! on load because one of the legacy front-ends wrote notes that way.

use crate::dates::{date_key, parse_date_key};
use crate::entry::{Entry, EntryId, EntryKind};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::warn;

pub(crate) type RawDoc = BTreeMap<String, Vec<RawRecord>>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RawRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    /// Legacy title key. Read, never written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl RawRecord {
    /// Kind resolution follows the legacy dispatch order: path, note, url.
    /// A record with none of the three has no usable shape.
    fn into_kind(self) -> (Option<String>, Option<EntryKind>) {
        let title = self.desc.or(self.title);
        let kind = if let Some(path) = self.path {
            Some(EntryKind::File { path })
        } else if let Some(body) = self.note {
            Some(EntryKind::Note { body })
        } else {
            self.url.map(|url| EntryKind::Link { url })
        };
        (title, kind)
    }

    fn from_entry(entry: &Entry) -> Self {
        let mut record = RawRecord {
            desc: Some(entry.title.clone()),
            title: None,
            path: None,
            note: None,
            url: None,
        };
        match &entry.kind {
            EntryKind::File { path } => record.path = Some(path.clone()),
            EntryKind::Note { body } => record.note = Some(body.clone()),
            EntryKind::Link { url } => record.url = Some(url.clone()),
        }
        record
    }
}

/// Converts a parsed document into the in-memory map, assigning fresh ids.
///
/// Tolerated problems are dropped with a warning instead of failing the
/// whole document: an unparsable date key loses that key, a record without
/// any payload key loses that record. Empty buckets are never kept.
pub(crate) fn decode(doc: RawDoc, next_id: &mut u64) -> BTreeMap<NaiveDate, Vec<Entry>> {
    let mut days: BTreeMap<NaiveDate, Vec<Entry>> = BTreeMap::new();
    for (key, records) in doc {
        let Some(date) = parse_date_key(&key) else {
            warn!(%key, "skipping bucket with unrecognized date key");
            continue;
        };
        let mut bucket = Vec::with_capacity(records.len());
        for record in records {
            let (title, kind) = record.into_kind();
            let Some(kind) = kind else {
                warn!(%date, "skipping record without path, note or url");
                continue;
            };
            let id = EntryId(*next_id);
            *next_id += 1;
            bucket.push(Entry {
                id,
                title: title.unwrap_or_default(),
                kind,
            });
        }
        if !bucket.is_empty() {
            days.insert(date, bucket);
        }
    }
    days
}

/// Converts the in-memory map back to the document shape. `BTreeMap` keys
/// keep the output deterministic, so repeated saves are byte-stable.
pub(crate) fn encode(days: &BTreeMap<NaiveDate, Vec<Entry>>) -> RawDoc {
    days.iter()
        .map(|(date, bucket)| {
            let records = bucket.iter().map(RawRecord::from_entry).collect();
            (date_key(*date), records)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_str(json: &str) -> BTreeMap<NaiveDate, Vec<Entry>> {
        let doc: RawDoc = serde_json::from_str(json).unwrap();
        let mut next_id = 0;
        decode(doc, &mut next_id)
    }

    #[test]
    fn accepts_desc_and_legacy_title_keys() {
        let days = decode_str(
            r#"{
                "2025-01-01": [
                    { "desc": "Report", "path": "/tmp/report.pdf" },
                    { "title": "Standup", "note": "walked through the plan" }
                ]
            }"#,
        );
        let bucket = &days[&NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()];
        assert_eq!(bucket[0].title, "Report");
        assert_eq!(bucket[1].title, "Standup");
        assert!(matches!(bucket[1].kind, EntryKind::Note { .. }));
    }

    #[test]
    fn encode_writes_desc_never_title() {
        let days = decode_str(r#"{ "2025-01-01": [{ "title": "Standup", "note": "n" }] }"#);
        let json = serde_json::to_string(&encode(&days)).unwrap();
        assert!(json.contains(r#""desc":"Standup""#));
        assert!(!json.contains(r#""title""#));
    }

    #[test]
    fn payload_priority_is_path_note_url() {
        let days = decode_str(
            r#"{ "2025-01-01": [{ "desc": "x", "note": "n", "url": "https://a" }] }"#,
        );
        let bucket = &days[&NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()];
        assert!(matches!(bucket[0].kind, EntryKind::Note { .. }));
    }

    #[test]
    fn shapeless_records_and_bad_keys_are_dropped() {
        let days = decode_str(
            r#"{
                "2025-01-01": [{ "desc": "no payload" }],
                "someday": [{ "desc": "x", "url": "https://a" }],
                "2025-01-02": [{ "desc": "kept", "url": "https://b" }]
            }"#,
        );
        assert_eq!(days.len(), 1);
        let bucket = &days[&NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()];
        assert_eq!(bucket[0].title, "kept");
    }

    #[test]
    fn ids_are_assigned_in_document_order() {
        let days = decode_str(
            r#"{
                "2025-01-01": [{ "desc": "a", "url": "https://a" }],
                "2025-01-02": [{ "desc": "b", "url": "https://b" }]
            }"#,
        );
        let first = &days[&NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()][0];
        let second = &days[&NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()][0];
        assert!(first.id < second.id);
    }
}
