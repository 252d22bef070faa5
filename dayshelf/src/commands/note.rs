use super::{
    editor::{edit_buffer, resolve_editor},
    resolve_date, resolve_entry, save_error,
};
use crate::render::Renderer;
use anyhow::{Result, bail};
use dayshelf_core::{EntryKind, Shelf};

pub fn add_note(
    shelf: &mut Shelf,
    renderer: &Renderer,
    title: Option<String>,
    body: Option<String>,
    date: Option<String>,
) -> Result<()> {
    let date = resolve_date(date.as_deref())?;
    let body = match body {
        Some(body) => body,
        None => {
            let editor = resolve_editor(&shelf.config.editor)?;
            let buffer = edit_buffer(&editor, "")?;
            if buffer.trim().is_empty() {
                renderer.print_info("No note to shelve, because no text was received.");
                return Ok(());
            }
            buffer
        }
    };
    let entry = shelf
        .add_note(date, title.as_deref().unwrap_or(""), &body)
        .map_err(save_error)?;
    renderer.print_info(&format!("Shelved '{}' under {date}", entry.title));
    Ok(())
}

/// Reopens a note in the editor, seeded with its current title and text.
pub fn edit_note(
    shelf: &mut Shelf,
    renderer: &Renderer,
    date_arg: &str,
    position: usize,
) -> Result<()> {
    let id = resolve_entry(shelf, date_arg, position)?;
    let Some(entry) = shelf.entry(id).cloned() else {
        bail!("nothing shelved at that position");
    };
    let EntryKind::Note { body } = &entry.kind else {
        bail!(
            "entry {position} on {date_arg} is a {}; only notes can be edited (use rename for titles)",
            entry.kind.kind()
        );
    };

    let editor = resolve_editor(&shelf.config.editor)?;
    let seeded = format!("{}\n\n{}", entry.title, body);
    let buffer = edit_buffer(&editor, &seeded)?;
    let (title, new_body) = split_note_buffer(&buffer);
    if new_body.trim().is_empty() {
        renderer.print_warning("note text cannot be empty; nothing changed");
        return Ok(());
    }

    let updated = shelf.update_note(id, title, new_body).map_err(save_error)?;
    renderer.print_info(&format!("Updated '{}'", updated.title));
    Ok(())
}

/// First line is the title, everything after it is the body.
fn split_note_buffer(buffer: &str) -> (&str, &str) {
    match buffer.split_once('\n') {
        Some((first, rest)) => (first.trim(), rest),
        None => (buffer.trim(), ""),
    }
}

#[cfg(test)]
mod tests {
    use super::split_note_buffer;

    #[test]
    fn buffer_splits_into_title_and_body() {
        let (title, body) = split_note_buffer("Standup\n\nwe shipped it\n");
        assert_eq!(title, "Standup");
        assert_eq!(body.trim(), "we shipped it");
    }

    #[test]
    fn single_line_buffer_is_a_title_without_body() {
        let (title, body) = split_note_buffer("just a title");
        assert_eq!(title, "just a title");
        assert!(body.is_empty());
    }
}
