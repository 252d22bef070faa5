use super::resolve_date;
use crate::render::Renderer;
use anyhow::Result;
use dayshelf_core::{DayView, Shelf};

pub fn list(
    shelf: &Shelf,
    renderer: &Renderer,
    date: Option<String>,
    collapsed: bool,
) -> Result<()> {
    let days: Vec<DayView> = match date {
        Some(arg) => {
            let date = resolve_date(Some(&arg))?;
            shelf
                .entries_on(date)
                .map(|entries| DayView {
                    date,
                    entries: entries.to_vec(),
                })
                .into_iter()
                .collect()
        }
        None => shelf.days(),
    };

    if days.is_empty() {
        renderer.print_info("The shelf is empty.");
        return Ok(());
    }
    renderer.print_days(&days, collapsed);
    Ok(())
}

pub fn search(shelf: &Shelf, renderer: &Renderer, query: &str) -> Result<()> {
    let days = shelf.search(query);
    if days.is_empty() {
        renderer.print_info(&format!("No matches for '{}'.", query.trim()));
        return Ok(());
    }
    let total: usize = days.iter().map(|d| d.entries.len()).sum();
    renderer.print_info(&format!("{total} matching entries.\n"));
    renderer.print_days(&days, false);
    Ok(())
}
