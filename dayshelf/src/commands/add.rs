use super::{resolve_date, save_error};
use crate::render::Renderer;
use anyhow::Result;
use dayshelf_core::{Shelf, ShelfError};
use std::path::PathBuf;

/// Shelves each given file. A duplicate path warns and moves on, so the
/// remaining files still get shelved.
pub fn add_files(
    shelf: &mut Shelf,
    renderer: &Renderer,
    paths: Vec<PathBuf>,
    title: Option<String>,
    date: Option<String>,
) -> Result<()> {
    let date = resolve_date(date.as_deref())?;
    let title = title.unwrap_or_default();
    for path in paths {
        match shelf.add_file(date, path, &title) {
            Ok(entry) => {
                renderer.print_info(&format!("Shelved '{}' under {date}", entry.title));
            }
            Err(err @ ShelfError::DuplicatePath { .. }) => {
                renderer.print_warning(&err.to_string());
            }
            Err(err) => return Err(save_error(err)),
        }
    }
    Ok(())
}
