use super::resolve_entry;
use crate::render::Renderer;
use anyhow::{Context, Result, bail};
use dayshelf_core::{EntryKind, Shelf};

/// Prints an entry without leaving the terminal: the note text rendered as
/// markdown, or the bare path/url for the other kinds (pipe-friendly).
pub fn show(shelf: &Shelf, renderer: &Renderer, date_arg: &str, position: usize) -> Result<()> {
    let id = resolve_entry(shelf, date_arg, position)?;
    let Some(entry) = shelf.entry(id) else {
        bail!("nothing shelved at that position");
    };
    match &entry.kind {
        EntryKind::File { path } => println!("{}", path.display()),
        EntryKind::Note { body } => renderer.print_note(&entry.title, body),
        EntryKind::Link { url } => println!("{url}"),
    }
    Ok(())
}

/// Hands an entry to the OS: files go to the default application, links to
/// the default browser, notes are simply shown.
pub fn open(shelf: &Shelf, renderer: &Renderer, date_arg: &str, position: usize) -> Result<()> {
    let id = resolve_entry(shelf, date_arg, position)?;
    let Some(entry) = shelf.entry(id) else {
        bail!("nothing shelved at that position");
    };
    match &entry.kind {
        EntryKind::File { path } => {
            if !path.exists() {
                bail!("file not found: {}", path.display());
            }
            open::that(path).with_context(|| format!("opening {}", path.display()))?;
            renderer.print_info(&format!("Opened '{}'", entry.title));
        }
        EntryKind::Note { body } => renderer.print_note(&entry.title, body),
        EntryKind::Link { url } => {
            open::that(url).with_context(|| format!("opening {url}"))?;
            renderer.print_info(&format!("Opened '{}' in your browser", entry.title));
        }
    }
    Ok(())
}
