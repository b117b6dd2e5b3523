//! Risk monitoring: status counts and the risk breakdown table.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use cryptodash_core::domain::{RiskExposure, RiskStatus};
use cryptodash_core::format;
use cryptodash_core::Record;

use crate::app::{AppState, InputMode, TableId};
use crate::theme;
use crate::ui::widgets::table;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5)])
        .split(area);

    f.render_widget(Paragraph::new(status_line(app.tables.risk.rows())), chunks[0]);

    let focused = app.is_focused(TableId::Risk);
    table::render(
        f,
        chunks[1],
        &app.tables.risk,
        RiskExposure::columns(),
        &table::TableFrame {
            title: "Risk Breakdown [Space]select [x]export",
            focused,
            cursor: app.cursor(TableId::Risk),
            searching: focused && app.mode == InputMode::Search,
        },
        |_: &RiskExposure| None,
    );
}

fn status_line(rows: &[RiskExposure]) -> Line<'static> {
    let count = |s: RiskStatus| rows.iter().filter(|r| r.status == s).count();
    let exposure: f64 = rows.iter().map(|r| r.position).sum();
    Line::from(vec![
        Span::styled(" Exposure ", theme::muted()),
        Span::styled(format::compact(exposure, 1), theme::accent_bold()),
        Span::raw("   "),
        Span::styled(format!("{} normal", count(RiskStatus::Normal)), theme::risk_status(RiskStatus::Normal)),
        Span::raw("  "),
        Span::styled(format!("{} warning", count(RiskStatus::Warning)), theme::risk_status(RiskStatus::Warning)),
        Span::raw("  "),
        Span::styled(
            format!("{} critical", count(RiskStatus::Critical)),
            theme::risk_status(RiskStatus::Critical),
        ),
    ])
}
