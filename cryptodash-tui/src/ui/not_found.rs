//! Shown for any route without a page.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, Page};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("404", theme::negative())),
        Line::from(Span::styled("Page Not Found", theme::accent_bold())),
        Line::from(""),
        Line::from(vec![
            Span::styled("No page at ", theme::muted()),
            Span::styled(app.route.as_str(), theme::warning()),
        ]),
        Line::from(""),
        Line::from(Span::styled("Available pages:", theme::muted())),
    ];
    for page in Page::NAV {
        lines.push(Line::from(vec![
            Span::styled(format!("{}  ", page.index() + 1), theme::accent()),
            Span::styled(page.route(), theme::text()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Press 1 to return to the market overview", theme::neutral())));

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
