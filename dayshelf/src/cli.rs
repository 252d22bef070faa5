use crate::render::ColorMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// dayshelf — files, notes and links shelved by day
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    pub color: ColorMode,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Shelve one or more files under a date (default: today)
    Add {
        /// Files to shelve
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Display title; defaults to each file's name
        #[arg(long, short)]
        title: Option<String>,
        /// Target date: YYYY-MM-DD, `today` or `yesterday`
        #[arg(long, short)]
        date: Option<String>,
    },
    /// Shelve a note; without --body your editor opens for the text
    Note {
        /// Display title; defaults to "Untitled Note"
        title: Option<String>,
        /// Note text; skips the editor
        #[arg(long, short)]
        body: Option<String>,
        /// Target date: YYYY-MM-DD, `today` or `yesterday`
        #[arg(long, short)]
        date: Option<String>,
    },
    /// Shelve a link
    Link {
        url: String,
        /// Display title; defaults to "Untitled Link"
        #[arg(long, short)]
        title: Option<String>,
        /// Target date: YYYY-MM-DD, `today` or `yesterday`
        #[arg(long, short)]
        date: Option<String>,
    },
    /// List the shelf grouped by day, newest first (the default command)
    List {
        /// Only show this date
        #[arg(long, short)]
        date: Option<String>,
        /// Show only day headers with entry counts
        #[arg(long, short)]
        collapsed: bool,
    },
    /// Filter entries by a case-insensitive substring of their title,
    /// file name, note text or url
    Search { query: String },
    /// Print an entry: a note's text, or the path/url of other kinds
    Show { date: String, position: usize },
    /// Open a file with the default application, or a link in the browser
    Open { date: String, position: usize },
    /// Change an entry's title
    Rename {
        date: String,
        position: usize,
        title: String,
    },
    /// Rewrite a note in your editor (first buffer line is the title)
    Edit { date: String, position: usize },
    /// Delete an entry
    Rm {
        date: String,
        position: usize,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Print the data file location
    Path,
}
