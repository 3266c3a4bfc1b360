//! Inline formatting for chat message content.
//!
//! DESIGN
//! ======
//! Assistant replies use a deliberately tiny grammar: `**bold**` spans and
//! line breaks. Parsing produces a structured node list that the widget
//! renders as real elements; message text is never interpolated into raw
//! markup. An unterminated `**` marker renders literally.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// One node of rendered inline content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Bold(String),
    Break,
}

/// Parse `**bold**` spans and newlines into a structured node list.
#[must_use]
pub fn parse_inline(input: &str) -> Vec<Inline> {
    let mut nodes = Vec::new();
    for (idx, line) in input.split('\n').enumerate() {
        if idx > 0 {
            nodes.push(Inline::Break);
        }
        parse_line(line, &mut nodes);
    }
    nodes
}

fn parse_line(line: &str, out: &mut Vec<Inline>) {
    let mut rest = line;
    while let Some(start) = rest.find("**") {
        let Some(close) = rest[start + 2..].find("**") else {
            break;
        };
        if start > 0 {
            out.push(Inline::Text(rest[..start].to_owned()));
        }
        out.push(Inline::Bold(rest[start + 2..start + 2 + close].to_owned()));
        rest = &rest[start + 2 + close + 2..];
    }
    if !rest.is_empty() {
        out.push(Inline::Text(rest.to_owned()));
    }
}
