//! Portfolio management: allocation summary and the holdings table.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use cryptodash_core::domain::Holding;
use cryptodash_core::format;
use cryptodash_core::Record;

use crate::app::{AppState, InputMode, TableId};
use crate::theme;
use crate::ui::widgets::table;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(5)])
        .split(area);

    f.render_widget(Paragraph::new(summary(app.tables.holdings.rows())), chunks[0]);

    let focused = app.is_focused(TableId::Holdings);
    table::render(
        f,
        chunks[1],
        &app.tables.holdings,
        Holding::columns(),
        &table::TableFrame {
            title: "Holdings [f]filter [Space]select [x]export",
            focused,
            cursor: app.cursor(TableId::Holdings),
            searching: focused && app.mode == InputMode::Search,
        },
        |h: &Holding| h.needs_rebalance().then(|| Span::styled("!", theme::warning())),
    );
}

fn summary(rows: &[Holding]) -> Vec<Line<'static>> {
    let total: f64 = rows.iter().map(|h| h.value).sum();
    let day: f64 = rows.iter().map(|h| h.value * h.day_change / 100.0).sum();
    let rebalance = rows.iter().filter(|h| h.needs_rebalance()).count();
    vec![
        Line::from(vec![
            Span::styled(" Portfolio Value ", theme::muted()),
            Span::styled(format::currency(total), theme::accent_bold()),
            Span::styled("   24h ", theme::muted()),
            Span::styled(format::currency(day), theme::change(day)),
            Span::styled("   Assets ", theme::muted()),
            Span::styled(rows.len().to_string(), theme::accent()),
        ]),
        Line::from(if rebalance == 0 {
            Span::styled(" Allocation within targets", theme::positive())
        } else {
            Span::styled(
                format!(" {rebalance} holdings drift beyond target and need rebalancing"),
                theme::warning(),
            )
        }),
    ]
}
