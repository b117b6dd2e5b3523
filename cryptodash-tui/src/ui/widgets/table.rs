//! Generic table renderer for any [`Record`] behind a [`TableEngine`].
//!
//! Header labels carry the sort arrow, a leading mark column shows selection
//! (and the watch star where the caller supplies one), and a one-line footer
//! carries the page summary, query and facet.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use cryptodash_core::domain::{
    Attribution, AttributionField, Coin, CoinField, Holding, HoldingField, MarketDatum,
    MarketField, NewsField, NewsItem, NoteField, ResearchNote, RiskExposure, RiskField,
    SocialField, SocialMention, Transaction, TransactionField,
};
use cryptodash_core::record::render_cell;
use cryptodash_core::{Column, Facet, Record, TableEngine};

use crate::theme;

/// Per-cell colouring on top of the plain text style.
pub trait CellStyle: Record {
    fn cell_style(&self, _field: Self::Field) -> Style {
        theme::text()
    }
}

/// How one table instance is drawn this frame.
pub struct TableFrame<'a> {
    pub title: &'a str,
    pub focused: bool,
    /// Cursor row on the current page; only drawn when focused.
    pub cursor: usize,
    /// Query is being edited.
    pub searching: bool,
}

const MAX_COLUMN_WIDTH: usize = 28;

pub fn render<R: CellStyle>(
    f: &mut Frame,
    area: Rect,
    engine: &TableEngine<R>,
    columns: &[R::Field],
    frame: &TableFrame<'_>,
    mark: impl Fn(&R) -> Option<Span<'static>>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(frame.focused))
        .title(format!(" {} ", frame.title))
        .title_style(theme::panel_title(frame.focused));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let view = engine.view();
    let sort = engine.sort();

    let header_labels: Vec<String> = columns
        .iter()
        .map(|&field| match sort {
            Some(s) if s.field == field => format!("{} {}", field.label(), s.direction.arrow()),
            _ => field.label().to_string(),
        })
        .collect();

    let cells: Vec<Vec<String>> = view
        .rows
        .iter()
        .map(|row| columns.iter().map(|&field| render_cell(*row, field)).collect())
        .collect();

    let mut widths = vec![Constraint::Length(3)];
    widths.extend(header_labels.iter().enumerate().map(|(i, label)| {
        let longest = cells
            .iter()
            .map(|r| r[i].chars().count())
            .chain(std::iter::once(label.chars().count()))
            .max()
            .unwrap_or(0);
        Constraint::Length(longest.min(MAX_COLUMN_WIDTH) as u16)
    }));

    let header = Row::new(
        std::iter::once(Cell::from(""))
            .chain(header_labels.into_iter().map(|l| Cell::from(l).style(theme::accent_bold()))),
    )
    .bottom_margin(0);

    let rows: Vec<Row> = view
        .rows
        .iter()
        .zip(cells)
        .map(|(row, texts)| {
            let marker = if engine.selection.contains(row.key()) {
                Span::styled("●", theme::accent())
            } else {
                mark(row).unwrap_or_else(|| Span::raw(" "))
            };
            let body = columns
                .iter()
                .zip(texts)
                .map(|(&field, text)| Cell::from(text).style(row.cell_style(field)));
            Row::new(std::iter::once(Cell::from(Line::from(marker))).chain(body))
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    if frame.focused && !view.rows.is_empty() {
        state.select(Some(frame.cursor.min(view.rows.len() - 1)));
    }

    if view.rows.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No rows match the current filters",
            theme::muted(),
        )));
        f.render_widget(table, chunks[0]);
        let message_area = Rect {
            y: chunks[0].y.saturating_add(1),
            height: chunks[0].height.saturating_sub(1),
            ..chunks[0]
        };
        f.render_widget(empty, message_area);
    } else {
        f.render_stateful_widget(table, chunks[0], &mut state);
    }

    f.render_widget(Paragraph::new(footer(engine, &view, frame)), chunks[1]);
}

fn footer<'a, R: Record>(
    engine: &'a TableEngine<R>,
    view: &cryptodash_core::TableView<'_, R>,
    frame: &TableFrame<'_>,
) -> Line<'a> {
    let mut spans = vec![Span::styled(view.summary(), theme::muted())];
    if view.total_pages > 1 {
        spans.push(Span::styled(
            format!("  Page {}/{}", view.page, view.total_pages),
            theme::neutral(),
        ));
    }
    let facet = engine.facet().label();
    if facet != R::Facet::default().label() {
        spans.push(Span::styled(format!("  [{facet}]"), theme::warning()));
    }
    if frame.searching || !engine.query().is_empty() {
        spans.push(Span::styled("  /", theme::accent()));
        spans.push(Span::styled(engine.query(), theme::accent_bold()));
        if frame.searching {
            spans.push(Span::styled("_", theme::accent()));
        }
    }
    if !engine.selection.is_empty() {
        spans.push(Span::styled(
            format!("  {} selected", engine.selection.len()),
            theme::accent(),
        ));
    }
    Line::from(spans)
}

// ── Cell colouring per row type ─────────────────────────────────────

impl CellStyle for Coin {
    fn cell_style(&self, field: CoinField) -> Style {
        match field {
            CoinField::Change1h => theme::change(self.change_1h),
            CoinField::Change24h => theme::change(self.change_24h),
            CoinField::Change7d => theme::change(self.change_7d),
            CoinField::Symbol => theme::accent_bold(),
            CoinField::Rank => theme::muted(),
            _ => theme::text(),
        }
    }
}

impl CellStyle for Attribution {
    fn cell_style(&self, field: AttributionField) -> Style {
        match field {
            AttributionField::TotalPnl => theme::change(self.total_pnl),
            AttributionField::AvgTrade => theme::change(self.avg_trade),
            AttributionField::SharpeRatio => theme::sharpe(self.sharpe_ratio),
            _ => theme::text(),
        }
    }
}

impl CellStyle for Transaction {
    fn cell_style(&self, field: TransactionField) -> Style {
        match field {
            TransactionField::Side => theme::signal(self.side.as_str()),
            TransactionField::RealizedPnl => match self.realized_pnl {
                Some(p) => theme::change(p),
                None => theme::muted(),
            },
            TransactionField::Status if self.is_open() => theme::warning(),
            TransactionField::Status => theme::muted(),
            _ => theme::text(),
        }
    }
}

impl CellStyle for Holding {
    fn cell_style(&self, field: HoldingField) -> Style {
        match field {
            HoldingField::DayChange => theme::change(self.day_change),
            HoldingField::Drift if self.needs_rebalance() => theme::warning(),
            HoldingField::Recommendation => theme::signal(&self.recommendation),
            _ => theme::text(),
        }
    }
}

impl CellStyle for RiskExposure {
    fn cell_style(&self, field: RiskField) -> Style {
        match field {
            RiskField::Status => theme::risk_status(self.status),
            RiskField::StressTest => theme::change(self.stress_test),
            _ => theme::text(),
        }
    }
}

impl CellStyle for MarketDatum {
    fn cell_style(&self, field: MarketField) -> Style {
        match field {
            MarketField::Change24h => theme::change(self.change_24h),
            MarketField::Signal => theme::signal(&self.signal),
            MarketField::Macd => theme::signal(&self.macd),
            MarketField::Rsi if self.rsi >= 70.0 => theme::negative(),
            MarketField::Rsi if self.rsi <= 30.0 => theme::positive(),
            MarketField::Sentiment => theme::sentiment(self.sentiment),
            _ => theme::text(),
        }
    }
}

impl CellStyle for NewsItem {
    fn cell_style(&self, field: NewsField) -> Style {
        match field {
            NewsField::Impact => theme::impact(self.impact),
            NewsField::Sentiment => theme::sentiment(self.sentiment),
            _ => theme::text(),
        }
    }
}

impl CellStyle for SocialMention {
    fn cell_style(&self, field: SocialField) -> Style {
        match field {
            SocialField::Change => theme::change(self.change),
            SocialField::Sentiment => theme::sentiment(self.sentiment),
            _ => theme::text(),
        }
    }
}

impl CellStyle for ResearchNote {
    fn cell_style(&self, field: NoteField) -> Style {
        match field {
            NoteField::Tags => theme::neutral(),
            _ => theme::text(),
        }
    }
}
