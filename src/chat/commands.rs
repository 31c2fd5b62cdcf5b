//! Command parsing for the chat application.
//!
//! Two kinds of input bypass the API: the bare words `exit` and `quit`
//! (case-sensitive, after trimming), and slash commands that control the
//! session locally.

/// A parsed chat command.
///
/// These commands control the chat session and are not sent to the API.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatCommand {
    /// Clear the conversation history back to the seed system message.
    Clear,

    /// Display help information.
    Help,

    /// Show the current session configuration.
    ShowConfig,

    /// Exit the chat application.
    Quit,

    /// Report a parsing error back to the caller.
    Invalid(String),
}

/// Returns true if the trimmed input is one of the bare exit words.
///
/// Matching is case-sensitive: `exit` and `quit` terminate the session,
/// `Exit` is sent to the API like any other message.
pub fn is_exit_word(input: &str) -> bool {
    let input = input.trim();
    input == "exit" || input == "quit"
}

/// Parses user input for slash commands.
///
/// Returns `Some(ChatCommand)` if the input is a slash command, or `None`
/// if it should be treated as a regular message.
///
/// # Examples
///
/// ```
/// # use shai::chat::parse_command;
/// assert!(parse_command("/quit").is_some());
/// assert!(parse_command("/clear").is_some());
/// assert!(parse_command("Hello!").is_none());
/// ```
pub fn parse_command(input: &str) -> Option<ChatCommand> {
    let input = input.trim();

    if !input.starts_with('/') {
        return None;
    }

    let mut parts = input[1..].splitn(2, ' ');
    let command = parts.next()?.to_lowercase();

    let result = match command.as_str() {
        "clear" => ChatCommand::Clear,
        "help" | "?" => ChatCommand::Help,
        "config" => ChatCommand::ShowConfig,
        "quit" | "exit" | "q" => ChatCommand::Quit,
        _ => ChatCommand::Invalid(format!("Unknown command: /{command}")),
    };

    Some(result)
}

/// Returns help text describing available commands.
pub fn help_text() -> &'static str {
    r#"Available commands:
  /clear                 Clear conversation history
  /config                Show current configuration
  /help                  Show this help message
  /quit                  Exit the chat (also: exit, quit)"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_words_are_case_sensitive() {
        assert!(is_exit_word("exit"));
        assert!(is_exit_word("quit"));
        assert!(is_exit_word("  exit  "));
        assert!(!is_exit_word("Exit"));
        assert!(!is_exit_word("QUIT"));
        assert!(!is_exit_word("exit now"));
    }

    #[test]
    fn parse_quit_commands() {
        assert_eq!(parse_command("/quit"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("/exit"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("/q"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("  /quit  "), Some(ChatCommand::Quit));
    }

    #[test]
    fn parse_clear_and_help() {
        assert_eq!(parse_command("/clear"), Some(ChatCommand::Clear));
        assert_eq!(parse_command("/CLEAR"), Some(ChatCommand::Clear));
        assert_eq!(parse_command("/help"), Some(ChatCommand::Help));
        assert_eq!(parse_command("/?"), Some(ChatCommand::Help));
        assert_eq!(parse_command("/config"), Some(ChatCommand::ShowConfig));
    }

    #[test]
    fn unknown_command_is_invalid() {
        assert!(matches!(
            parse_command("/frobnicate"),
            Some(ChatCommand::Invalid(msg)) if msg.contains("/frobnicate")
        ));
    }

    #[test]
    fn non_commands() {
        assert_eq!(parse_command("Hello!"), None);
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("  "), None);
        assert_eq!(parse_command("exit"), None);
    }

    #[test]
    fn help_text_not_empty() {
        let help = help_text();
        assert!(!help.is_empty());
        assert!(help.contains("/quit"));
        assert!(help.contains("/clear"));
        assert!(help.contains("/config"));
    }
}
