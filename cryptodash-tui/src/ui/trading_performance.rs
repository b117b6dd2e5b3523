//! Trading performance: KPI strip, attribution by strategy, recent transactions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use cryptodash_core::domain::{Attribution, Transaction};
use cryptodash_core::format;
use cryptodash_core::Record;

use crate::app::{AppState, InputMode, TableId};
use crate::theme;
use crate::ui::widgets::table;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Percentage(55),
            Constraint::Min(6),
        ])
        .split(area);

    f.render_widget(Paragraph::new(kpi_line(app.tables.attribution.rows())), chunks[0]);

    let focused = app.is_focused(TableId::Attribution);
    table::render(
        f,
        chunks[1],
        &app.tables.attribution,
        Attribution::columns(),
        &table::TableFrame {
            title: "Performance Attribution [f]strategy",
            focused,
            cursor: app.cursor(TableId::Attribution),
            searching: focused && app.mode == InputMode::Search,
        },
        |_: &Attribution| None,
    );

    let focused = app.is_focused(TableId::Transactions);
    table::render(
        f,
        chunks[2],
        &app.tables.transactions,
        Transaction::columns(),
        &table::TableFrame {
            title: TableId::Transactions.label(),
            focused,
            cursor: app.cursor(TableId::Transactions),
            searching: focused && app.mode == InputMode::Search,
        },
        |t: &Transaction| t.is_open().then(|| Span::styled("○", theme::warning())),
    );
}

/// Totals across every attribution row, ignoring the current filter.
fn kpi_line(rows: &[Attribution]) -> Line<'static> {
    let pnl: f64 = rows.iter().map(|r| r.total_pnl).sum();
    let trades: u32 = rows.iter().map(|r| r.trades).sum();
    let win_rate = if rows.is_empty() {
        f64::NAN
    } else {
        rows.iter().map(|r| r.win_rate).sum::<f64>() / rows.len() as f64
    };
    Line::from(vec![
        Span::styled(" Total P&L ", theme::muted()),
        Span::styled(format::currency(pnl), theme::change(pnl)),
        Span::styled("   Avg Win Rate ", theme::muted()),
        Span::styled(format!("{}%", format::number(win_rate, 1)), theme::accent()),
        Span::styled("   Trades ", theme::muted()),
        Span::styled(trades.to_string(), theme::accent()),
    ])
}
