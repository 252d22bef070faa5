use super::theme::OneDark;
use dayshelf_core::{DayView, Entry, EntryKind, Kind};
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self {
            skin: OneDark::skin(),
            opts,
        }
    }

    pub fn print_info(&self, message: &str) {
        println!("{message}");
    }

    pub fn print_warning(&self, message: &str) {
        if self.opts.use_color {
            eprintln!("{}", format!("warning: {message}").with(Color::Yellow));
        } else {
            eprintln!("warning: {message}");
        }
    }

    /// Renders a note's title and text as markdown.
    pub fn print_note(&self, title: &str, body: &str) {
        let md = format!("# {title}\n\n{body}\n");
        if self.opts.use_color {
            self.skin.print_text(&md);
        } else {
            print!("{md}");
        }
    }

    /// Prints day sections newest first. With `collapsed`, only the day
    /// headers and entry counts show.
    pub fn print_days(&self, days: &[DayView], collapsed: bool) {
        for (i, day) in days.iter().enumerate() {
            self.print_day_header(day, collapsed);
            if !collapsed {
                for (position, entry) in day.entries.iter().enumerate() {
                    self.print_entry_line(position + 1, entry);
                }
            }
            if i + 1 < days.len() {
                println!();
            }
        }
    }

    fn print_day_header(&self, day: &DayView, collapsed: bool) {
        let marker = if collapsed { "▸" } else { "▾" };
        let mut date = day.date.format(&self.opts.date_format).to_string();
        let count = day.entries.len();
        let mut count = if collapsed {
            format!("  ({count})")
        } else {
            String::new()
        };
        if self.opts.use_color {
            date = date.with(Color::Cyan).bold().to_string();
            if !count.is_empty() {
                count = count.with(Color::DarkGrey).to_string();
            }
        }
        println!("{marker} {date}{count}");
    }

    fn print_entry_line(&self, position: usize, entry: &Entry) {
        let mut pos = format!("{position:>4}.");
        let mut kind = format!("[{}]", entry.kind.kind());
        let title = entry.title.clone();
        let mut detail = match &entry.kind {
            EntryKind::File { path } => path
                .file_name()
                .map(|name| format!("  {}", name.to_string_lossy()))
                .unwrap_or_default(),
            EntryKind::Note { .. } => String::new(),
            EntryKind::Link { url } => format!("  {url}"),
        };
        if self.opts.use_color {
            pos = pos.with(Color::DarkGrey).to_string();
            kind = kind.with(kind_color(entry.kind.kind())).to_string();
            detail = detail.with(Color::DarkGrey).to_string();
        }
        println!("{pos} {kind} {title}{detail}");
    }
}

fn kind_color(kind: Kind) -> Color {
    match kind {
        Kind::File => Color::Blue,
        Kind::Note => Color::Yellow,
        Kind::Link => Color::Green,
    }
}
