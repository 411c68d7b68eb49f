//! Markdown to plain-text conversion.
//!
//! Uses pulldown-cmark for CommonMark parsing. Block structure is flattened
//! to lines: every heading, paragraph line, list item and table row becomes
//! its own line, so line-based section detection sees headings as written.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Convert markdown to plain text.
///
/// Removes:
/// - Code blocks (fenced and indented)
/// - Inline code
/// - HTML
/// - YAML frontmatter
/// - Heading and emphasis markers
///
/// Keeps:
/// - Heading text, on its own line
/// - Link text (the visible part)
/// - Blockquote, list item, and table cell text
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn to_plain_text(text: &str) -> String {
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(&text, options);

    let mut result = String::with_capacity(text.len());
    let mut code_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_)) => code_depth += 1,
            Event::End(TagEnd::CodeBlock) => code_depth = code_depth.saturating_sub(1),

            Event::Text(t) if code_depth == 0 => result.push_str(&t),
            Event::SoftBreak | Event::HardBreak => end_line(&mut result),

            Event::Start(Tag::Heading { .. } | Tag::Item) => end_line(&mut result),
            Event::End(
                TagEnd::Heading(_)
                | TagEnd::Paragraph
                | TagEnd::Item
                | TagEnd::TableHead
                | TagEnd::TableRow,
            ) => end_line(&mut result),
            Event::End(TagEnd::TableCell) => result.push(' '),

            _ => {}
        }
    }

    result
}

/// Terminate the current line unless it is already terminated.
fn end_line(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

/// Strip YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> String {
    let trimmed = text.trim_start();
    if !trimmed.starts_with("---") {
        return text.to_string();
    }

    let after_opening = &trimmed[3..];
    let Some(close_pos) = after_opening.find("\n---") else {
        return text.to_string();
    };

    let remainder = &after_opening[close_pos + 4..];
    remainder
        .strip_prefix('\n')
        .unwrap_or(remainder)
        .to_string()
}
