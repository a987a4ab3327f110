//! Main column: hero typewriter, about, news, publications, experience.

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::config::Theme;
use crate::content::{Content, Publication};
use crate::typewriter::Render;
use crate::ui::markdown::{render_inline, render_markdown};
use crate::ui::theme::{palette, style_color, Palette};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    News,
    Publications,
    Experience,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::News,
        Section::Publications,
        Section::Experience,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::About => "About Me",
            Section::News => "News",
            Section::Publications => "Selected Publications",
            Section::Experience => "Experience",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Inputs of one page render.
pub struct PageView<'a> {
    pub content: &'a Content,
    pub typewriter: &'a Render,
    pub theme: Theme,
    pub cursor_visible: bool,
    pub year: i32,
}

/// Unwrapped page lines plus the line index where each section starts.
pub struct Page {
    pub lines: Vec<Line<'static>>,
    pub anchors: Vec<(Section, usize)>,
}

/// Page height and section offsets after wrapping to a given width.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageMetrics {
    pub total: usize,
    pub anchors: Vec<(Section, usize)>,
}

impl PageMetrics {
    pub fn offset_of(&self, section: Section) -> usize {
        self.anchors
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, offset)| *offset)
            .unwrap_or(0)
    }
}

pub fn build_page(view: &PageView<'_>) -> Page {
    let colors = palette(view.theme);
    let mut lines = Vec::new();
    let mut anchors = Vec::new();

    hero(&mut lines, view, &colors);

    anchors.push((Section::About, lines.len()));
    section_title(&mut lines, Section::About, &colors);
    lines.extend(render_markdown(
        &view.content.profile.bio,
        Style::default().fg(colors.text),
        Style::default().fg(colors.accent),
    ));
    lines.push(Line::default());

    anchors.push((Section::News, lines.len()));
    section_title(&mut lines, Section::News, &colors);
    news(&mut lines, view.content, &colors);

    anchors.push((Section::Publications, lines.len()));
    section_title(&mut lines, Section::Publications, &colors);
    publications(&mut lines, view.content, &colors);

    anchors.push((Section::Experience, lines.len()));
    section_title(&mut lines, Section::Experience, &colors);
    experience(&mut lines, view.content, &colors);

    page_footer(&mut lines, view, &colors);

    Page { lines, anchors }
}

/// Wrapped height of `lines` at `width`.
pub fn wrapped_height(lines: &[Line<'static>], width: u16) -> usize {
    if width == 0 {
        return lines.len();
    }
    Paragraph::new(lines.to_vec())
        .wrap(Wrap { trim: false })
        .line_count(width)
}

pub fn measure(page: &Page, width: u16) -> PageMetrics {
    let anchors = page
        .anchors
        .iter()
        .map(|(section, idx)| (*section, wrapped_height(&page.lines[..*idx], width)))
        .collect();
    PageMetrics {
        total: wrapped_height(&page.lines, width),
        anchors,
    }
}

fn hero(lines: &mut Vec<Line<'static>>, view: &PageView<'_>, colors: &Palette) {
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("──── ", Style::default().fg(colors.border)),
        Span::styled(
            "RESEARCH FOCUS",
            Style::default()
                .fg(colors.muted)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "I am researching",
        Style::default()
            .fg(colors.heading)
            .add_modifier(Modifier::BOLD),
    )));

    let phrase_color = style_color(view.typewriter.style.as_deref(), view.theme);
    let cursor = if view.cursor_visible { "▌" } else { " " };
    lines.push(Line::from(vec![
        Span::styled(
            view.typewriter.text.clone(),
            Style::default()
                .fg(phrase_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(cursor, Style::default().fg(colors.accent)),
    ]));
    lines.push(Line::default());
}

fn section_title(lines: &mut Vec<Line<'static>>, section: Section, colors: &Palette) {
    lines.push(Line::from(Span::styled(
        section.title(),
        Style::default()
            .fg(colors.heading)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    )));
    lines.push(Line::default());
}

fn news(lines: &mut Vec<Line<'static>>, content: &Content, colors: &Palette) {
    let date_width = content
        .news
        .iter()
        .map(|item| item.date.chars().count())
        .max()
        .unwrap_or(0);

    for item in &content.news {
        let mut spans = vec![
            Span::styled(
                format!("{:>width$}", item.date, width = date_width),
                Style::default()
                    .fg(colors.muted)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ● ", Style::default().fg(colors.border)),
        ];
        spans.extend(render_inline(
            &item.content,
            Style::default().fg(colors.text),
            Style::default().fg(colors.accent),
        ));
        lines.push(Line::from(spans));
    }
    lines.push(Line::default());
}

fn publications(lines: &mut Vec<Line<'static>>, content: &Content, colors: &Palette) {
    let profile = &content.profile;
    for publication in &content.publications {
        let mut title = Vec::new();
        if publication.highlight {
            title.push(Span::styled(
                " HIGHLIGHT ",
                Style::default()
                    .fg(colors.background)
                    .bg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ));
            title.push(Span::raw(" "));
        }
        title.push(Span::styled(
            publication.title.clone(),
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(title));

        let mut authors = Vec::new();
        let last = publication.authors.len().saturating_sub(1);
        for (idx, author) in publication.authors.iter().enumerate() {
            let style = if Publication::is_author_highlighted(author, profile) {
                Style::default()
                    .fg(colors.heading)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(colors.text)
            };
            authors.push(Span::styled(author.clone(), style));
            if idx < last {
                authors.push(Span::styled(", ", Style::default().fg(colors.text)));
            }
        }
        lines.push(Line::from(authors));

        let venue_color = if publication.highlight {
            colors.badge
        } else {
            colors.muted
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}]", publication.venue),
                Style::default().fg(venue_color).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(publication.year.to_string(), Style::default().fg(colors.muted)),
        ]));

        if let Some(summary) = &publication.summary {
            lines.push(Line::from(Span::styled(
                summary.clone(),
                Style::default()
                    .fg(colors.muted)
                    .add_modifier(Modifier::ITALIC),
            )));
        }

        if !publication.links.is_empty() {
            let mut links = Vec::new();
            for link in &publication.links {
                links.push(Span::styled(
                    format!("↗ {}", link.name),
                    Style::default()
                        .fg(colors.accent)
                        .add_modifier(Modifier::BOLD),
                ));
                links.push(Span::styled(
                    format!(" {}   ", link.url),
                    Style::default()
                        .fg(colors.muted)
                        .add_modifier(Modifier::UNDERLINED),
                ));
            }
            lines.push(Line::from(links));
        }
        lines.push(Line::default());
    }
}

fn experience(lines: &mut Vec<Line<'static>>, content: &Content, colors: &Palette) {
    for item in &content.experience {
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(colors.accent)),
            Span::styled(
                item.role.clone(),
                Style::default()
                    .fg(colors.heading)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", item.period.to_uppercase()),
                Style::default()
                    .fg(colors.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("│ ", Style::default().fg(colors.border)),
            Span::styled(item.institution.clone(), Style::default().fg(colors.text)),
        ]));
        if let Some(description) = &item.description {
            lines.push(Line::from(vec![
                Span::styled("│   ", Style::default().fg(colors.border)),
                Span::styled(description.clone(), Style::default().fg(colors.muted)),
            ]));
        }
        lines.push(Line::default());
    }
}

fn page_footer(lines: &mut Vec<Line<'static>>, view: &PageView<'_>, colors: &Palette) {
    lines.push(Line::from(Span::styled(
        "─".repeat(24),
        Style::default().fg(colors.border),
    )));
    lines.push(
        Line::from(Span::styled(
            format!("© {} {}.", view.year, view.content.profile.name),
            Style::default().fg(colors.muted),
        ))
        .alignment(Alignment::Center),
    );
    lines.push(
        Line::from(Span::styled(
            "Designed with Academic Aesthetics",
            Style::default()
                .fg(colors.border)
                .add_modifier(Modifier::DIM),
        ))
        .alignment(Alignment::Center),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn page_for(render: &Render) -> Page {
        let content = Content::builtin();
        build_page(&PageView {
            content: &content,
            typewriter: render,
            theme: Theme::Dark,
            cursor_visible: true,
            year: 2026,
        })
    }

    #[test]
    fn hero_shows_typewriter_text_and_cursor() {
        let render = Render {
            text: "RAG".to_string(),
            style: Some("violet".to_string()),
            phrase_index: 1,
        };
        let page = page_for(&render);
        assert!(page.lines.iter().any(|line| plain(line) == "RAG▌"));
    }

    #[test]
    fn anchors_are_in_page_order() {
        let page = page_for(&Render::default());
        let order: Vec<_> = page.anchors.iter().map(|(s, _)| *s).collect();
        assert_eq!(order, Section::ALL.to_vec());
        assert!(page.anchors.windows(2).all(|w| w[0].1 < w[1].1));
        assert_eq!(plain(&page.lines[page.anchors[1].1]), "News");
    }

    #[test]
    fn footer_carries_copyright() {
        let page = page_for(&Render::default());
        assert!(page
            .lines
            .iter()
            .any(|line| plain(line) == "© 2026 Tingshuo Fan."));
    }

    #[test]
    fn narrow_width_wraps_to_more_lines() {
        let page = page_for(&Render::default());
        let wide = measure(&page, 200);
        let narrow = measure(&page, 30);
        assert!(narrow.total > wide.total);
        assert!(narrow.offset_of(Section::Experience) > wide.offset_of(Section::Experience));
    }

    #[test]
    fn section_cycle_wraps() {
        assert_eq!(Section::Experience.next(), Section::About);
        assert_eq!(Section::About.prev(), Section::Experience);
    }
}
