//! Top-level UI layout: one page frame plus the status bar.

pub mod market_overview;
pub mod not_found;
pub mod overlays;
pub mod portfolio;
pub mod research;
pub mod risk;
pub mod status_bar;
pub mod trading_performance;
pub mod widgets;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{AppState, Overlay, Page};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    draw_page(f, main_area, app);
    status_bar::render(f, status_area, app);

    match &app.overlay {
        Overlay::Help => overlays::render_help(f, main_area),
        Overlay::Indicators => overlays::render_indicators(f, main_area, app),
        Overlay::ErrorHistory => overlays::render_error_history(f, main_area, app),
        Overlay::Goto(input) => overlays::render_goto(f, main_area, input),
        Overlay::None => {}
    }
}

/// Draw the active page inside its border.
fn draw_page(f: &mut Frame, area: Rect, app: &AppState) {
    let page = app.page;
    let title = match page {
        Page::NotFound => format!(" {} ", page.label()),
        _ => format!(" {} [{}] {} ", page.label(), page.index() + 1, page.subtitle()),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(title)
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match page {
        Page::MarketOverview => market_overview::render(f, inner, app),
        Page::TradingPerformance => trading_performance::render(f, inner, app),
        Page::Portfolio => portfolio::render(f, inner, app),
        Page::Risk => risk::render(f, inner, app),
        Page::Research => research::render(f, inner, app),
        Page::NotFound => not_found::render(f, inner, app),
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
