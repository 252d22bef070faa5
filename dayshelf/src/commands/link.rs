use super::{resolve_date, save_error};
use crate::render::Renderer;
use anyhow::Result;
use dayshelf_core::Shelf;

pub fn add_link(
    shelf: &mut Shelf,
    renderer: &Renderer,
    url: String,
    title: Option<String>,
    date: Option<String>,
) -> Result<()> {
    let date = resolve_date(date.as_deref())?;
    let entry = shelf
        .add_link(date, title.as_deref().unwrap_or(""), &url)
        .map_err(save_error)?;
    renderer.print_info(&format!("Shelved '{}' under {date}", entry.title));
    Ok(())
}
