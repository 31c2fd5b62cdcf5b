//! Terminal output rendering.
//!
//! This module provides a trait-based rendering abstraction for the chat
//! loop plus a markdown renderer that turns assistant replies into
//! ANSI-styled text. With color disabled the same walk produces plain text
//! suitable for piping.

use std::io::{self, Stdout, Write};

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// ANSI escape code for bold text (headings, strong emphasis).
const ANSI_BOLD: &str = "\x1b[1m";

/// ANSI escape code for dim text (borders, rules, link targets).
const ANSI_DIM: &str = "\x1b[2m";

/// ANSI escape code for italic text (emphasis, block quotes).
const ANSI_ITALIC: &str = "\x1b[3m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// ANSI escape code for cyan text (headings, banner).
const ANSI_CYAN: &str = "\x1b[36m";

/// ANSI escape code for yellow text (inline code).
const ANSI_YELLOW: &str = "\x1b[33m";

/// ANSI escape code for red text (errors).
const ANSI_RED: &str = "\x1b[31m";

/// Erase from the cursor to the end of the line.
const ANSI_ERASE_LINE: &str = "\x1b[K";

/// Transient indicator shown while a request is in flight.
const WORKING_INDICATOR: &str = "Thinking...";

/// Trait for rendering chat output.
///
/// This abstraction keeps the loop independent of how replies are styled:
/// the default implementation renders markdown with ANSI escapes, and a
/// color-free variant serves piped output and tests.
pub trait Renderer: Send {
    /// Render an assistant reply (markdown) to the terminal.
    fn print_response(&mut self, markdown: &str);

    /// Print an error message in a distinct visual style.
    fn print_error(&mut self, error: &str);

    /// Print an informational message.
    fn print_info(&mut self, info: &str);

    /// Display the transient working indicator.
    fn show_working(&mut self);

    /// Clear the working indicator.
    fn clear_working(&mut self);
}

/// Markdown renderer with optional ANSI styling.
pub struct MarkdownRenderer {
    stdout: Stdout,
    use_color: bool,
}

impl MarkdownRenderer {
    /// Creates a new MarkdownRenderer with ANSI colors enabled.
    pub fn new() -> Self {
        Self::with_color(true)
    }

    /// Creates a new MarkdownRenderer with the specified color setting.
    pub fn with_color(use_color: bool) -> Self {
        Self {
            stdout: io::stdout(),
            use_color,
        }
    }

    /// Flushes stdout so transient output appears immediately.
    fn flush(&mut self) {
        let _ = self.stdout.flush();
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for MarkdownRenderer {
    fn print_response(&mut self, markdown: &str) {
        let rendered = render_markdown(markdown, self.use_color);
        println!("\n{}", rendered.trim_end());
        println!();
        self.flush();
    }

    fn print_error(&mut self, error: &str) {
        if self.use_color {
            eprintln!("{ANSI_RED}Error: {error}{ANSI_RESET}");
        } else {
            eprintln!("Error: {error}");
        }
    }

    fn print_info(&mut self, info: &str) {
        println!("{info}");
    }

    fn show_working(&mut self) {
        print!("{WORKING_INDICATOR}");
        self.flush();
    }

    fn clear_working(&mut self) {
        print!("\r{ANSI_ERASE_LINE}");
        self.flush();
    }
}

fn heading_prefix(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "# ",
        HeadingLevel::H2 => "## ",
        HeadingLevel::H3 => "### ",
        HeadingLevel::H4 => "#### ",
        HeadingLevel::H5 => "##### ",
        HeadingLevel::H6 => "###### ",
    }
}

/// Renders markdown to a terminal-displayable string.
///
/// The walk is total: any input produces output, and code block content is
/// preserved verbatim. With `use_color == false` no escape codes are
/// emitted.
pub fn render_markdown(input: &str, use_color: bool) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut out = String::new();
    let mut list_stack: Vec<Option<u64>> = Vec::new();
    let mut link_dest: Option<String> = None;

    let style = |out: &mut String, code: &str| {
        if use_color {
            out.push_str(code);
        }
    };

    for event in Parser::new_ext(input, options) {
        match event {
            Event::Start(tag) => match tag {
                Tag::Heading { level, .. } => {
                    style(&mut out, ANSI_BOLD);
                    style(&mut out, ANSI_CYAN);
                    out.push_str(heading_prefix(level));
                }
                Tag::CodeBlock(kind) => {
                    let lang = match &kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => lang.as_ref(),
                        _ => "code",
                    };
                    style(&mut out, ANSI_DIM);
                    out.push_str(&format!("╭─ {lang} {}\n", "─".repeat(40)));
                    style(&mut out, ANSI_RESET);
                }
                Tag::List(start) => {
                    list_stack.push(start);
                }
                Tag::Item => {
                    let depth = list_stack.len().saturating_sub(1);
                    out.push_str(&"  ".repeat(depth));
                    match list_stack.last_mut() {
                        Some(Some(index)) => {
                            out.push_str(&format!("{index}. "));
                            *index += 1;
                        }
                        _ => out.push_str("• "),
                    }
                }
                Tag::Emphasis => style(&mut out, ANSI_ITALIC),
                Tag::Strong => style(&mut out, ANSI_BOLD),
                Tag::BlockQuote(_) => {
                    style(&mut out, ANSI_ITALIC);
                    out.push_str("> ");
                }
                Tag::Link { dest_url, .. } => {
                    link_dest = Some(dest_url.to_string());
                }
                _ => {}
            },
            Event::End(tag_end) => match tag_end {
                TagEnd::Heading(_) => {
                    style(&mut out, ANSI_RESET);
                    out.push_str("\n\n");
                }
                TagEnd::CodeBlock => {
                    if !out.ends_with('\n') {
                        out.push('\n');
                    }
                    style(&mut out, ANSI_DIM);
                    out.push_str(&format!("╰{}\n", "─".repeat(44)));
                    style(&mut out, ANSI_RESET);
                    out.push('\n');
                }
                TagEnd::List(_) => {
                    list_stack.pop();
                    if list_stack.is_empty() {
                        out.push('\n');
                    }
                }
                TagEnd::Item => {
                    if !out.ends_with('\n') {
                        out.push('\n');
                    }
                }
                TagEnd::Emphasis | TagEnd::Strong => style(&mut out, ANSI_RESET),
                TagEnd::BlockQuote(_) => {
                    style(&mut out, ANSI_RESET);
                    out.push_str("\n\n");
                }
                TagEnd::Link => {
                    if let Some(dest) = link_dest.take() {
                        style(&mut out, ANSI_DIM);
                        out.push_str(&format!(" ({dest})"));
                        style(&mut out, ANSI_RESET);
                    }
                }
                TagEnd::Paragraph => {
                    out.push_str("\n\n");
                }
                _ => {}
            },
            Event::Text(text) => {
                out.push_str(&text);
            }
            Event::Code(code) => {
                style(&mut out, ANSI_YELLOW);
                out.push('`');
                out.push_str(&code);
                out.push('`');
                style(&mut out, ANSI_RESET);
            }
            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            Event::Rule => {
                style(&mut out, ANSI_DIM);
                out.push_str(&"─".repeat(44));
                style(&mut out, ANSI_RESET);
                out.push_str("\n\n");
            }
            Event::Html(html) | Event::InlineHtml(html) => out.push_str(&html),
            _ => {}
        }
    }

    out
}
