use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute path of the JSON document holding every entry.
    pub data_file: PathBuf,
    /// chrono format string used when displaying day headers.
    pub date_format: String,
    /// Preferred editor name/binary (e.g. hx for Helix). Optional; the CLI
    /// will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    data_file: Option<PathBuf>,
    date_format: Option<String>,
    editor: Option<String>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then
    /// native) and apply defaults. A missing or unreadable config file
    /// silently yields the defaults.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_default();

        let data_file = file_config.data_file.unwrap_or_else(Self::default_data_file);
        let date_format = file_config
            .date_format
            .unwrap_or_else(|| "%A, %d %b %Y".to_string());

        Ok(Self {
            data_file,
            date_format,
            editor: file_config.editor,
        })
    }

    /// Default document location: `{data_dir}/dayshelf/dayshelf.json`
    /// - macOS:   `~/Library/Application Support/dayshelf/dayshelf.json`
    /// - Linux:   `$XDG_DATA_HOME/dayshelf/...` or `~/.local/share/dayshelf/...`
    /// - Windows: `%APPDATA%\dayshelf\dayshelf.json`
    fn default_data_file() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            let mut p = base.data_dir().to_path_buf();
            p.push("dayshelf");
            p.push("dayshelf.json");
            p
        } else {
            PathBuf::from("./dayshelf/dayshelf.json")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("dayshelf")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("dayshelf").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::path::Path;

    /// Test helper to create a `Config` pointing at a throwaway data file.
    ///
    /// This is the single source of truth for test configuration.
    /// If you add a field to `Config`, you only need to update it here.
    pub(crate) fn mk_config(data_file: PathBuf) -> Config {
        Config {
            data_file,
            date_format: "%A, %d %b %Y".to_string(),
            editor: None,
        }
    }

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b
                .home_dir()
                .join(".config")
                .join("dayshelf")
                .join("config.toml");
            let expected_native = b.config_dir().join("dayshelf").join("config.toml");
            let c = super::Config::config_file_paths();
            assert_eq!(c.first(), Some(&expected_xdg));
            assert_eq!(c.get(1), Some(&expected_native));
        }
    }

    #[test]
    fn parse_file_accepts_data_file_and_editor() {
        let toml = r#"
            data_file = "/tmp/shelf.json"
            editor = "hx"
        "#;
        let fc = super::Config::parse_file(toml).unwrap();
        assert_eq!(fc.data_file.as_deref(), Some(Path::new("/tmp/shelf.json")));
        assert_eq!(fc.editor.as_deref(), Some("hx"));
        assert!(fc.date_format.is_none());
    }

    #[test]
    fn parse_file_rejects_bad_toml() {
        assert!(super::Config::parse_file("data_file = [").is_err());
    }
}
