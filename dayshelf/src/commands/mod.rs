pub mod add;
mod editor;
pub mod link;
pub mod list;
pub mod manage;
pub mod note;
pub mod view;

use anyhow::{Result, anyhow, bail};
use chrono::NaiveDate;
use dayshelf_core::{EntryId, Shelf, ShelfError, dates};

/// Resolves an optional `--date` argument; absent means today.
pub(crate) fn resolve_date(arg: Option<&str>) -> Result<NaiveDate> {
    match arg {
        None => Ok(dates::today()),
        Some(s) => dates::parse_date_arg(s)
            .ok_or_else(|| anyhow!("'{s}' is not a date (expected YYYY-MM-DD, 'today' or 'yesterday')")),
    }
}

/// Resolves a `<date> <position>` pair from the command line to an entry id.
/// Positions are 1-based and follow the listing order for that day.
pub(crate) fn resolve_entry(shelf: &Shelf, date_arg: &str, position: usize) -> Result<EntryId> {
    let date = resolve_date(Some(date_arg))?;
    let Some(entries) = shelf.entries_on(date) else {
        bail!("nothing shelved on {date}");
    };
    if position == 0 || position > entries.len() {
        bail!(
            "no entry {position} on {date} (that day has {})",
            entries.len()
        );
    }
    Ok(entries[position - 1].id)
}

/// Wraps a failed save so the alert tells the user what actually happened:
/// the change was applied in memory but never reached the disk.
pub(crate) fn save_error(err: ShelfError) -> anyhow::Error {
    match err {
        ShelfError::NoWritePermission { .. } => anyhow::Error::from(err).context(
            "the change was not written to disk; move the data file (see `dayshelf path`) somewhere writable",
        ),
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dayshelf_core::Config;
    use tempfile::tempdir;

    fn mk_shelf() -> (Shelf, tempfile::TempDir) {
        let tmp = tempdir().unwrap();
        let config = Config {
            data_file: tmp.path().join("dayshelf.json"),
            date_format: "%A, %d %b %Y".to_string(),
            editor: None,
        };
        (Shelf::with_config(config).unwrap(), tmp)
    }

    #[test]
    fn resolve_entry_checks_date_and_bounds() {
        let (mut shelf, _tmp) = mk_shelf();
        let date = dates::parse_date_key("2025-01-01").unwrap();
        let entry = shelf.add_link(date, "Docs", "https://docs.rs").unwrap();

        assert_eq!(resolve_entry(&shelf, "2025-01-01", 1).unwrap(), entry.id);
        assert!(resolve_entry(&shelf, "2025-01-01", 0).is_err());
        assert!(resolve_entry(&shelf, "2025-01-01", 2).is_err());
        assert!(resolve_entry(&shelf, "2025-01-02", 1).is_err());
        assert!(resolve_entry(&shelf, "january", 1).is_err());
    }
}
