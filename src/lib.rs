// Public modules
pub mod chat;
pub mod client;
pub mod config;
pub mod error;
pub mod render;
pub mod transcript;
pub mod types;

// Re-exports
pub use client::ChatClient;
pub use config::Config;
pub use error::{Error, Result};
pub use render::{MarkdownRenderer, Renderer, render_markdown};
pub use transcript::Transcript;
pub use types::*;
