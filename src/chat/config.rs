//! Configuration types for the chat application.
//!
//! This module provides CLI argument parsing via `arrrg` and the resolved
//! runtime configuration for the interactive loop.

use std::path::PathBuf;

use arrrg_derive::CommandLine;

/// System prompt used when `--system` is not given.
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful, accurate, and friendly AI assistant.";

/// Command-line arguments for the shai binary.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ChatArgs {
    /// Path to the config file.
    #[arrrg(optional, "Path to config file (default: ~/.config/shai/config)", "PATH")]
    pub config: Option<String>,

    /// System prompt to seed the conversation.
    #[arrrg(optional, "System prompt for the conversation", "PROMPT")]
    pub system: Option<String>,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,
}

/// Resolved configuration for the interactive loop.
///
/// This struct holds the values after processing command-line arguments
/// with appropriate defaults. The credentials themselves live in
/// [`crate::Config`], loaded from `config_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Path of the key=value config file to load, if resolvable.
    pub config_path: Option<PathBuf>,

    /// System prompt seeding every transcript.
    pub system_prompt: String,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,
}

impl ChatConfig {
    /// Creates a ChatConfig with default values.
    pub fn new() -> Self {
        Self {
            config_path: crate::Config::default_path(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            use_color: true,
        }
    }

    /// Sets the config file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Sets the system prompt.
    pub fn with_system_prompt(mut self, prompt: String) -> Self {
        self.system_prompt = prompt;
        self
    }

    /// Disables ANSI color output.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ChatArgs> for ChatConfig {
    fn from(args: ChatArgs) -> Self {
        let mut config = ChatConfig::new();
        if let Some(path) = args.config {
            config.config_path = Some(PathBuf::from(path));
        }
        if let Some(prompt) = args.system {
            config.system_prompt = prompt;
        }
        config.use_color = !args.no_color;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ChatConfig::new();
        assert_eq!(config.system_prompt, DEFAULT_SYSTEM_PROMPT);
        assert!(config.use_color);
    }

    #[test]
    fn config_from_args_defaults() {
        let args = ChatArgs::default();
        let config = ChatConfig::from(args);
        assert_eq!(config.system_prompt, DEFAULT_SYSTEM_PROMPT);
        assert!(config.use_color);
    }

    #[test]
    fn config_from_args_custom() {
        let args = ChatArgs {
            config: Some("/tmp/shai-config".to_string()),
            system: Some("You are terse.".to_string()),
            no_color: true,
        };
        let config = ChatConfig::from(args);
        assert_eq!(config.config_path, Some(PathBuf::from("/tmp/shai-config")));
        assert_eq!(config.system_prompt, "You are terse.");
        assert!(!config.use_color);
    }

    #[test]
    fn config_builder_pattern() {
        let config = ChatConfig::new()
            .with_config_path(PathBuf::from("/etc/shai"))
            .with_system_prompt("Test prompt".to_string())
            .without_color();

        assert_eq!(config.config_path, Some(PathBuf::from("/etc/shai")));
        assert_eq!(config.system_prompt, "Test prompt");
        assert!(!config.use_color);
    }
}
