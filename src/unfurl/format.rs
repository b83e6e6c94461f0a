// src/unfurl/format.rs
//! Pure block-to-markup formatting.

use crate::model::Block;
use crate::types::plain_text;
use lazy_static::lazy_static;
use regex::Regex;

/// Maps one content block to a single line of markup text.
///
/// Unsupported kinds degrade to empty output with a diagnostic log; the
/// walker drops empty lines. Numbered list items are rendered with the same
/// `・` marker as bulleted items, without sequential numbers; that is a
/// known limitation kept on purpose.
pub fn block_content(block: &Block) -> String {
    match block {
        Block::Paragraph { content, .. } => plain_text(&content.rich_text),
        Block::Heading1 { content, .. } => format!("# {}", plain_text(&content.rich_text)),
        Block::Heading2 { content, .. } => format!("## {}", plain_text(&content.rich_text)),
        Block::Heading3 { content, .. } => format!("### {}", plain_text(&content.rich_text)),
        Block::ToDo { todo, .. } => {
            let check_mark = if todo.checked { "x" } else { " " };
            format!("- [{}] {}", check_mark, plain_text(&todo.rich_text))
        }
        Block::BulletedListItem { content, .. } | Block::NumberedListItem { content, .. } => {
            format!("・{}", plain_text(&content.rich_text))
        }
        Block::Unsupported { block_type, .. } => {
            log::debug!("Unsupported type: {}", block_type);
            String::new()
        }
    }
}

lazy_static! {
    static ref HEADING_TEXT: Regex = Regex::new(r"# (.*)").expect("heading regex must compile");
}

/// Rewrites markdown heading lines into Slack-emphasized lines.
///
/// Slack's mrkdwn has no heading syntax, so every line starting with `#`
/// becomes `*text*`, where the text is whatever follows the first `# `
/// marker (the unmodified line when the marker is absent). All other lines
/// pass through unchanged.
pub fn format_headings(content: &str) -> String {
    content
        .split('\n')
        .map(|line| {
            if line.starts_with('#') {
                let title = HEADING_TEXT
                    .captures(line)
                    .and_then(|captures| captures.get(1))
                    .map_or(line, |m| m.as_str());
                format!("*{}*", title)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
