use anyhow::Result;
use std::{fs, io::Write, process::Command};

pub fn resolve_editor(editor: &Option<String>) -> Result<String> {
    let editor = editor
        .as_deref()
        .map(str::to_string)
        .or_else(|| std::env::var("VISUAL").ok())
        .or_else(|| std::env::var("EDITOR").ok())
        .unwrap_or_else(|| "vim".into());
    Ok(editor)
}

/// Opens the editor on a temp buffer, optionally seeded, and returns what
/// the user left behind.
pub fn edit_buffer(editor_cmd: &str, seed: &str) -> Result<String> {
    let mut file = tempfile::Builder::new()
        .prefix("dayshelf")
        .suffix(".md")
        .tempfile()?;
    if !seed.is_empty() {
        file.write_all(seed.as_bytes())?;
        file.flush()?;
    }

    let path = file.path().to_path_buf();
    let status = Command::new(editor_cmd).arg(&path).status()?;
    if !status.success() {
        anyhow::bail!("Editor exited with status {}", status);
    }
    Ok(fs::read_to_string(&path)?)
}
