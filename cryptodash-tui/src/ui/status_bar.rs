//! Bottom status bar: page hints, input mode, last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, InputMode, Page, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    for page in Page::NAV {
        let style = if page == app.page {
            theme::accent_bold()
        } else {
            theme::muted()
        };
        spans.push(Span::styled(format!(" {}:{}", page.index() + 1, short_label(page)), style));
    }

    spans.push(Span::raw(" | "));

    match app.mode {
        InputMode::Search => spans.push(Span::styled("SEARCH [Enter]keep [Esc]clear ", theme::warning())),
        InputMode::Normal => spans.push(Span::styled("?:help ", theme::muted())),
    }

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::raw("| "));
        spans.push(Span::styled(msg.as_str(), style));
    }

    if let Some(at) = app.last_refresh {
        spans.push(Span::styled(format!(" | updated {}", at.format("%H:%M:%S")), theme::muted()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn short_label(page: Page) -> &'static str {
    match page {
        Page::MarketOverview => "Market",
        Page::TradingPerformance => "Trading",
        Page::Portfolio => "Portfolio",
        Page::Risk => "Risk",
        Page::Research => "Research",
        Page::NotFound => "404",
    }
}
