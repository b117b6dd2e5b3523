//! Headline KPI card: title, value, change and a sparkline.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Sparkline};
use ratatui::Frame;

use cryptodash_core::domain::MetricCard;
use cryptodash_core::format;
use cryptodash_core::sparkline::{self, Trend};

use crate::theme;

pub fn render(f: &mut Frame, area: Rect, card: &MetricCard) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(format!(" {} ", card.title))
        .title_style(theme::muted());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let arrow = match sparkline::trend(&card.sparkline) {
        Trend::Up => "▲",
        Trend::Down => "▼",
    };
    let line = Line::from(vec![
        Span::styled(card.value.as_str(), theme::accent_bold()),
        Span::raw("  "),
        Span::styled(
            format!("{arrow} {}", format::percent(card.change, 2)),
            theme::change(card.change),
        ),
    ]);
    f.render_widget(Paragraph::new(line), chunks[0]);

    if chunks[1].height > 0 {
        let bars = sparkline::levels(&card.sparkline, 8 * u64::from(chunks[1].height));
        let spark = Sparkline::default()
            .data(&bars)
            .style(theme::change(card.change));
        f.render_widget(spark, chunks[1]);
    }
}
