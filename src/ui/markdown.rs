//! Inline markdown to styled ratatui lines.
//!
//! Only what profile text uses: paragraphs, bold, italic, inline code and
//! links. Block constructs degrade to their text.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// One line per markdown paragraph; wrapping is left to the widget.
pub fn render_markdown(text: &str, base: Style, link: Style) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut stack: Vec<Style> = vec![base];

    for event in Parser::new(text) {
        let current = stack.last().copied().unwrap_or(base);
        match event {
            Event::Start(Tag::Strong) => stack.push(current.add_modifier(Modifier::BOLD)),
            Event::Start(Tag::Emphasis) => stack.push(current.add_modifier(Modifier::ITALIC)),
            Event::Start(Tag::Link { .. }) => {
                stack.push(current.patch(link).add_modifier(Modifier::UNDERLINED))
            }
            Event::End(TagEnd::Strong | TagEnd::Emphasis | TagEnd::Link) => {
                if stack.len() > 1 {
                    stack.pop();
                }
            }
            Event::Text(text) => spans.push(Span::styled(text.into_string(), current)),
            Event::Code(code) => spans.push(Span::styled(
                code.into_string(),
                current.add_modifier(Modifier::DIM),
            )),
            Event::SoftBreak | Event::HardBreak => spans.push(Span::styled(" ", current)),
            Event::End(TagEnd::Paragraph) => {
                lines.push(Line::from(std::mem::take(&mut spans)));
            }
            _ => {}
        }
    }

    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

/// Markdown flattened onto a single line.
pub fn render_inline(text: &str, base: Style, link: Style) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (idx, line) in render_markdown(text, base, link).into_iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" ", base));
        }
        spans.extend(line.spans);
    }
    spans
}
