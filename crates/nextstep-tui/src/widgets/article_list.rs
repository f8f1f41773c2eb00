//! Recent-article list for the country detail page

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use nextstep_core::Article;

use crate::theme::styles;

/// List of article tiles. Each row shows date, source label, and title;
/// the highlighted row is the one `Enter`/`o` opens in the browser.
pub struct ArticleList<'a> {
    articles: &'a [Article],
    selected: usize,
}

impl<'a> ArticleList<'a> {
    pub fn new(articles: &'a [Article], selected: usize) -> Self {
        Self { articles, selected }
    }
}

impl Widget for ArticleList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(false).title("Latest Updates");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.articles.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "No recent updates yet - check back later",
                styles::muted_style(),
            )))
            .render(inner, buf);
            return;
        }

        let lines: Vec<Line> = self
            .articles
            .iter()
            .enumerate()
            .map(|(index, article)| {
                let marker = if index == self.selected { "▶ " } else { "  " };
                let style = if index == self.selected {
                    styles::selected_row_style()
                } else {
                    styles::secondary_style()
                };
                Line::from(Span::styled(
                    format!(
                        "{}{}  {:<16} {}",
                        marker,
                        article.date_line(),
                        article.source_line(),
                        article.title
                    ),
                    style,
                ))
            })
            .collect();

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
