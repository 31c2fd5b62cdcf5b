//! Interactive terminal chat client.
//!
//! This binary provides a REPL for chatting with an OpenAI-compatible chat
//! completion endpoint, with replies rendered as markdown.
//!
//! # Usage
//!
//! ```bash
//! # Basic usage with the default config at ~/.config/shai/config
//! shai
//!
//! # Point at a different config file
//! shai --config ./dev-config
//!
//! # Override the system prompt
//! shai --system "You are a helpful coding assistant"
//!
//! # Disable colors (useful for piping output)
//! shai --no-color
//! ```
//!
//! On first run, a template config is written so the operator can fill in
//! `LLM_API_URL`, `LLM_API_KEY`, and `LLM_MODEL`.
//!
//! # Commands
//!
//! Typing `exit` or `quit` ends the session. While chatting you can also
//! use slash commands:
//! - `/help` - Show available commands
//! - `/clear` - Clear conversation history
//! - `/config` - Show the current configuration
//! - `/quit` - Exit the application

use std::process;

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use shai::chat::{ChatArgs, ChatCommand, ChatConfig, ChatSession, help_text, is_exit_word, parse_command};
use shai::{ChatClient, Config, MarkdownRenderer, Renderer};

/// ANSI escape code for cyan text.
const ANSI_CYAN: &str = "\x1b[36m";

/// ANSI escape code for green text.
const ANSI_GREEN: &str = "\x1b[32m";

/// ANSI escape code for yellow text.
const ANSI_YELLOW: &str = "\x1b[33m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{color}{text}{ANSI_RESET}")
    } else {
        text.to_string()
    }
}

/// Loads the config, handling the first-run template flow.
///
/// Exits the process with code 1 on any configuration failure; a missing
/// file additionally gets a template written for the operator to edit.
fn load_config_or_exit(chat_config: &ChatConfig, renderer: &mut MarkdownRenderer) -> Config {
    let use_color = chat_config.use_color;
    let Some(path) = chat_config.config_path.clone() else {
        renderer.print_error("could not determine a config directory; pass --config");
        process::exit(1);
    };

    match Config::load(&path) {
        Ok(config) => config,
        Err(err) if Config::is_missing_file(&err) => {
            if let Err(write_err) = Config::write_template(&path) {
                renderer.print_error(&write_err.to_string());
                process::exit(1);
            }
            renderer.print_info(&paint(
                &format!("Created default config at {}", path.display()),
                ANSI_YELLOW,
                use_color,
            ));
            renderer.print_info(&paint(
                "Please edit the file and set your API key before continuing.",
                ANSI_YELLOW,
                use_color,
            ));
            process::exit(1);
        }
        Err(err) => {
            renderer.print_error(&err.to_string());
            process::exit(1);
        }
    }
}

/// Main entry point for the shai application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("shai [OPTIONS]");
    let chat_config = ChatConfig::from(args);
    let use_color = chat_config.use_color;
    let mut renderer = MarkdownRenderer::with_color(use_color);

    println!("{}", paint("\n=== Shai - LLM Shell ===", ANSI_CYAN, use_color));

    let config = load_config_or_exit(&chat_config, &mut renderer);
    let client = ChatClient::new(&config)?;

    println!(
        "{}",
        paint(
            &format!("Connected to {} using model {}", config.api_url, config.model),
            ANSI_GREEN,
            use_color,
        )
    );
    println!(
        "{}\n",
        paint(
            "Type your messages (type 'exit' to quit)",
            ANSI_CYAN,
            use_color,
        )
    );

    let mut session = ChatSession::new(client, chat_config.system_prompt.clone());
    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline("shai> ");

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                if is_exit_word(line) {
                    println!("Goodbye!");
                    break;
                }

                if let Some(cmd) = parse_command(line) {
                    match cmd {
                        ChatCommand::Quit => {
                            println!("Goodbye!");
                            break;
                        }
                        ChatCommand::Clear => {
                            session.clear();
                            renderer.print_info("Conversation cleared.");
                        }
                        ChatCommand::Help => {
                            for line in help_text().lines() {
                                println!("    {line}");
                            }
                        }
                        ChatCommand::ShowConfig => {
                            print_config(&session);
                        }
                        ChatCommand::Invalid(message) => {
                            renderer.print_error(&message);
                        }
                    }
                    continue;
                }

                // Regular message - send to the API
                renderer.show_working();
                let result = session.send(line).await;
                renderer.clear_working();

                match result {
                    Ok(reply) => renderer.print_response(&reply),
                    Err(err) => renderer.print_error(&err.to_string()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C at prompt - soft interrupt
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("Input error: {err}"));
                break;
            }
        }
    }

    Ok(())
}

fn print_config(session: &ChatSession) {
    let stats = session.stats();
    println!("    Current Configuration:");
    println!("      Endpoint: {}", stats.api_url);
    println!("      Model: {}", stats.model);
    println!("      Messages: {}", stats.message_count);
    println!("      System prompt: {}", stats.system_prompt);
}
