//! Chat application module for interactive conversations.
//!
//! This module provides the REPL chat interface built on top of the shai
//! client library. It supports:
//!
//! - Markdown-rendered replies with ANSI styling
//! - Local commands for session control
//! - Configurable config path and system prompt
//!
//! # Architecture
//!
//! The module is organized into several components:
//!
//! - [`config`]: CLI argument parsing and configuration
//! - [`session`]: Core chat session management and API interaction
//! - [`commands`]: Exit word and slash command handling

mod commands;
mod config;
mod session;

pub use commands::{ChatCommand, help_text, is_exit_word, parse_command};
pub use config::{ChatArgs, ChatConfig, DEFAULT_SYSTEM_PROMPT};
pub use session::{ChatSession, SessionStats};
