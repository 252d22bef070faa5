use super::{resolve_entry, save_error};
use crate::{prompt, render::Renderer};
use anyhow::{Result, bail};
use dayshelf_core::Shelf;

pub fn rename(
    shelf: &mut Shelf,
    renderer: &Renderer,
    date_arg: &str,
    position: usize,
    title: &str,
) -> Result<()> {
    if title.trim().is_empty() {
        renderer.print_warning("empty title; nothing changed");
        return Ok(());
    }
    let id = resolve_entry(shelf, date_arg, position)?;
    let renamed = shelf.rename_entry(id, title).map_err(save_error)?;
    renderer.print_info(&format!("Renamed to '{}'", renamed.title));
    Ok(())
}

pub fn rm(
    shelf: &mut Shelf,
    renderer: &Renderer,
    date_arg: &str,
    position: usize,
    yes: bool,
) -> Result<()> {
    let id = resolve_entry(shelf, date_arg, position)?;
    let Some(entry) = shelf.entry(id).cloned() else {
        bail!("nothing shelved at that position");
    };
    if !yes && !prompt::confirm(&format!("Delete '{}'?", entry.title))? {
        renderer.print_info("Kept.");
        return Ok(());
    }
    shelf.remove_entry(id).map_err(save_error)?;
    renderer.print_info(&format!("Deleted '{}'", entry.title));
    Ok(())
}
