//! Configuration loading for shai.
//!
//! The config file is a plain key=value file, by default at
//! `~/.config/shai/config`. Three keys are required: `LLM_API_URL`,
//! `LLM_API_KEY`, and `LLM_MODEL`. A missing or invalid config is always
//! fatal to startup; on first run a template file is written so the operator
//! can fill in credentials.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use url::Url;

use crate::error::{Error, Result};

/// Config key for the chat completions endpoint URL.
pub const KEY_API_URL: &str = "LLM_API_URL";

/// Config key for the bearer token.
pub const KEY_API_KEY: &str = "LLM_API_KEY";

/// Config key for the model name.
pub const KEY_MODEL: &str = "LLM_MODEL";

/// Template written on first run, with placeholder values.
const DEFAULT_TEMPLATE: &str = "\
LLM_API_URL=https://api.openai.com/v1/chat/completions
LLM_API_KEY=your_api_key_here
LLM_MODEL=gpt-4
";

/// Resolved configuration for a shai session.
///
/// Immutable after load; owned by the process for its entire lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The chat completions endpoint URL.
    pub api_url: String,

    /// The API key sent as a bearer token.
    pub api_key: String,

    /// The model requested on every turn.
    pub model: String,
}

impl Config {
    /// Returns the default config file path, `~/.config/shai/config`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("shai").join("config"))
    }

    /// Loads and validates a config file.
    ///
    /// Lines are `KEY=VALUE` pairs; blank lines and `#` comments are
    /// skipped, whitespace around keys and values is trimmed, and a later
    /// occurrence of a key overwrites an earlier one. All three required
    /// keys must be present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file cannot be read, a line cannot be
    /// parsed, a required key is missing or empty, or the API URL does not
    /// parse as a URL. No partial configuration escapes on failure.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|err| {
            let message = if err.kind() == io::ErrorKind::NotFound {
                "config file not found".to_string()
            } else {
                format!("error reading config file: {err}")
            };
            Error::config(message, Some(path.to_path_buf()))
        })?;

        let mut values = HashMap::new();
        for (lineno, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(Error::config(
                    format!("line {} is not KEY=VALUE: {line:?}", lineno + 1),
                    Some(path.to_path_buf()),
                ));
            };
            values.insert(key.trim().to_string(), value.trim().to_string());
        }

        let api_url = require(&values, KEY_API_URL, path)?;
        let api_key = require(&values, KEY_API_KEY, path)?;
        let model = require(&values, KEY_MODEL, path)?;

        if let Err(err) = Url::parse(&api_url) {
            return Err(Error::config(
                format!("{KEY_API_URL} is not a valid URL: {err}"),
                Some(path.to_path_buf()),
            ));
        }

        Ok(Config {
            api_url,
            api_key,
            model,
        })
    }

    /// Returns true if the given load error means the file does not exist.
    ///
    /// Used by the startup path to decide whether to write a template.
    pub fn is_missing_file(err: &Error) -> bool {
        matches!(err, Error::Config { message, .. } if message == "config file not found")
    }

    /// Writes the default config template to the given path, creating
    /// parent directories as needed.
    ///
    /// The template contains placeholder values; the operator must edit it
    /// before the client will authenticate.
    pub fn write_template<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|err| Error::io("error creating config directory", err))?;
        }
        fs::write(path, DEFAULT_TEMPLATE)
            .map_err(|err| Error::io("error creating default config file", err))
    }
}

fn require(values: &HashMap<String, String>, key: &str, path: &Path) -> Result<String> {
    match values.get(key) {
        Some(value) if !value.is_empty() => Ok(value.clone()),
        _ => Err(Error::config(
            format!("{key} is required in config"),
            Some(path.to_path_buf()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_valid_config() {
        let file = write_config(
            "LLM_API_URL=https://api.example.com/v1/chat/completions\n\
             LLM_API_KEY=sk-test\n\
             LLM_MODEL=gpt-4\n",
        );
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api_url, "https://api.example.com/v1/chat/completions");
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.model, "gpt-4");
    }

    #[test]
    fn load_tolerates_comments_and_blank_lines() {
        let file = write_config(
            "# shai config\n\
             \n\
             LLM_API_URL = https://api.example.com/v1/chat/completions\n\
             LLM_API_KEY = sk-test\n\
             \n\
             LLM_MODEL = gpt-4\n",
        );
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.model, "gpt-4");
    }

    #[test]
    fn later_keys_overwrite_earlier() {
        let file = write_config(
            "LLM_API_URL=https://api.example.com/v1/chat/completions\n\
             LLM_API_KEY=sk-old\n\
             LLM_API_KEY=sk-new\n\
             LLM_MODEL=gpt-4\n",
        );
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api_key, "sk-new");
    }

    #[test]
    fn each_missing_key_is_a_config_error() {
        let cases = [
            "LLM_API_KEY=sk-test\nLLM_MODEL=gpt-4\n",
            "LLM_API_URL=https://api.example.com/\nLLM_MODEL=gpt-4\n",
            "LLM_API_URL=https://api.example.com/\nLLM_API_KEY=sk-test\n",
        ];
        for contents in cases {
            let file = write_config(contents);
            let err = Config::load(file.path()).unwrap_err();
            assert!(err.is_config(), "expected config error for {contents:?}");
            assert!(err.to_string().contains("is required in config"));
        }
    }

    #[test]
    fn empty_value_is_a_config_error() {
        let file = write_config(
            "LLM_API_URL=https://api.example.com/\n\
             LLM_API_KEY=\n\
             LLM_MODEL=gpt-4\n",
        );
        let err = Config::load(file.path()).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("LLM_API_KEY"));
    }

    #[test]
    fn malformed_line_is_a_config_error() {
        let file = write_config("this is not a key value pair\n");
        let err = Config::load(file.path()).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn invalid_url_is_a_config_error() {
        let file = write_config(
            "LLM_API_URL=not a url\n\
             LLM_API_KEY=sk-test\n\
             LLM_MODEL=gpt-4\n",
        );
        let err = Config::load(file.path()).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("LLM_API_URL"));
    }

    #[test]
    fn missing_file_is_detectable() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path().join("nope")).unwrap_err();
        assert!(err.is_config());
        assert!(Config::is_missing_file(&err));

        let other = Error::config("LLM_MODEL is required in config", None);
        assert!(!Config::is_missing_file(&other));
    }

    #[test]
    fn template_round_trips_through_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("shai").join("config");
        Config::write_template(&path).unwrap();

        // The template parses; the values are placeholders the operator
        // must replace.
        let config = Config::load(&path).unwrap();
        assert_eq!(config.api_key, "your_api_key_here");
        assert_eq!(config.model, "gpt-4");
        assert!(config.api_url.starts_with("https://"));
    }
}
