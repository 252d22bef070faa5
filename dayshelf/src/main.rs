mod cli;
mod commands;
mod prompt;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use dayshelf_core::Shelf;
use render::{ColorMode, RenderOptions, Renderer};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("dayshelf: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut shelf = Shelf::new()?;

    let use_color = match cli.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if std::env::var_os("NO_COLOR").is_some() {
                false
            } else {
                io::stdout().is_terminal()
            }
        }
    };
    let renderer = Renderer::new(RenderOptions {
        date_format: shelf.config.date_format.clone(),
        use_color,
    });

    let command = cli.command.unwrap_or(Command::List {
        date: None,
        collapsed: false,
    });
    match command {
        Command::Add { paths, title, date } => {
            commands::add::add_files(&mut shelf, &renderer, paths, title, date)
        }
        Command::Note { title, body, date } => {
            commands::note::add_note(&mut shelf, &renderer, title, body, date)
        }
        Command::Link { url, title, date } => {
            commands::link::add_link(&mut shelf, &renderer, url, title, date)
        }
        Command::List { date, collapsed } => commands::list::list(&shelf, &renderer, date, collapsed),
        Command::Search { query } => commands::list::search(&shelf, &renderer, &query),
        Command::Show { date, position } => commands::view::show(&shelf, &renderer, &date, position),
        Command::Open { date, position } => commands::view::open(&shelf, &renderer, &date, position),
        Command::Rename {
            date,
            position,
            title,
        } => commands::manage::rename(&mut shelf, &renderer, &date, position, &title),
        Command::Edit { date, position } => {
            commands::note::edit_note(&mut shelf, &renderer, &date, position)
        }
        Command::Rm {
            date,
            position,
            yes,
        } => commands::manage::rm(&mut shelf, &renderer, &date, position, yes),
        Command::Path => {
            println!("{}", shelf.config.data_file.display());
            Ok(())
        }
    }
}
