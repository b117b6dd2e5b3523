//! Market overview: KPI cards, the live coin table, the ticker and the
//! price chart with indicator overlays.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Tabs};
use ratatui::Frame;

use cryptodash_core::domain::{closes, Coin};
use cryptodash_core::format;
use cryptodash_core::indicators::Indicator;
use cryptodash_core::sparkline::{self, Trend};
use cryptodash_core::ticker::{ticker_view, TickerTab};
use cryptodash_core::Record;

use crate::app::{AppState, InputMode, TableId};
use crate::theme;
use crate::ui::widgets::{metric_card, table};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(8)])
        .split(area);

    render_cards(f, rows[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(body[0]);

    let focused = app.is_focused(TableId::Coins);
    table::render(
        f,
        left[0],
        &app.tables.coins,
        Coin::columns(),
        &table::TableFrame {
            title: TableId::Coins.label(),
            focused,
            cursor: app.cursor(TableId::Coins),
            searching: focused && app.mode == InputMode::Search,
        },
        |coin: &Coin| {
            app.watchlist
                .contains(&coin.symbol)
                .then(|| Span::styled("★", theme::warning()))
        },
    );
    render_chart(f, left[1], app);
    render_ticker(f, body[1], app);
}

fn render_cards(f: &mut Frame, area: Rect, app: &AppState) {
    if app.metrics.is_empty() {
        return;
    }
    let n = app.metrics.len() as u32;
    let constraints: Vec<Constraint> = (0..n).map(|_| Constraint::Ratio(1, n)).collect();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);
    for (card, slot) in app.metrics.iter().zip(cols.iter()) {
        metric_card::render(f, *slot, card);
    }
}

fn render_ticker(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false))
        .title(" Live Ticker [t] ")
        .title_style(theme::panel_title(false));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let selected = TickerTab::ALL.iter().position(|t| *t == app.ticker_tab).unwrap_or(0);
    let tabs = Tabs::new(TickerTab::ALL.iter().map(|t| t.label()))
        .select(selected)
        .style(theme::muted())
        .highlight_style(theme::accent_bold())
        .divider("|");
    f.render_widget(tabs, chunks[0]);

    let quotes = ticker_view(&app.quotes, app.ticker_tab, &app.watchlist, app.ticker_limit);
    let lines: Vec<Line> = if quotes.is_empty() {
        let msg = match app.ticker_tab {
            TickerTab::Watchlist => "Watchlist is empty. Press w on a coin to add it.",
            _ => "No quotes in this tab",
        };
        vec![Line::from(Span::styled(msg, theme::muted()))]
    } else {
        quotes
            .iter()
            .map(|q| {
                let arrow = match sparkline::trend(&q.sparkline) {
                    Trend::Up => Span::styled("▲", theme::positive()),
                    Trend::Down => Span::styled("▼", theme::negative()),
                };
                let star = if app.watchlist.contains(&q.symbol) { "★" } else { " " };
                Line::from(vec![
                    Span::styled(star, theme::warning()),
                    Span::styled(format!("{:<6}", q.symbol), theme::accent_bold()),
                    Span::styled(format!("{:>12}", format::currency(q.price)), theme::text()),
                    Span::raw(" "),
                    Span::styled(
                        format!("{:>8}", format::percent(q.change_24h, 2)),
                        theme::change(q.change_24h),
                    ),
                    Span::raw(" "),
                    arrow,
                    Span::styled(
                        format!(" {:>8}", format::compact(q.volume_24h, 1)),
                        theme::muted(),
                    ),
                ])
            })
            .collect()
    };
    f.render_widget(Paragraph::new(lines), chunks[1]);
}

fn indicator_color(indicator: Indicator) -> Color {
    match indicator {
        Indicator::Ma20 => theme::WARNING,
        Indicator::Ma50 => theme::NEUTRAL,
        Indicator::Rsi => theme::POSITIVE,
        Indicator::Macd => theme::NEGATIVE,
    }
}

/// `(x, y)` points, skipping warm-up NaNs.
fn series(values: &[f64]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_finite())
        .map(|(i, v)| (i as f64, *v))
        .collect()
}

fn bounds(values: &[(f64, f64)]) -> [f64; 2] {
    let (lo, hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, y)| (lo.min(*y), hi.max(*y)));
    if !lo.is_finite() || !hi.is_finite() {
        return [0.0, 1.0];
    }
    let pad = if hi > lo { (hi - lo) * 0.05 } else { 1.0 };
    [lo - pad, hi + pad]
}

fn render_chart(f: &mut Frame, area: Rect, app: &AppState) {
    if area.width < 12 || area.height < 4 {
        return;
    }
    let closes = closes(&app.candles);
    let oscillators: Vec<Indicator> = app
        .indicators
        .iter()
        .copied()
        .filter(|i| !i.is_overlay())
        .collect();

    let mut constraints = vec![Constraint::Min(6)];
    constraints.extend(oscillators.iter().map(|_| Constraint::Length(6)));
    let panes = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let price = series(&closes);
    let overlays: Vec<(Indicator, Vec<(f64, f64)>)> = app
        .indicators
        .iter()
        .copied()
        .filter(|i| i.is_overlay())
        .map(|i| (i, series(&i.compute(&closes))))
        .collect();

    let [y_lo, y_hi] = bounds(&price);
    let x_max = closes.len().saturating_sub(1).max(1) as f64;

    let mut datasets = vec![Dataset::default()
        .name("BTC/USD")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(theme::ACCENT))
        .data(&price)];
    for (indicator, points) in &overlays {
        datasets.push(
            Dataset::default()
                .name(indicator.label())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(indicator_color(*indicator)))
                .data(points),
        );
    }

    let last = closes.last().copied().unwrap_or(f64::NAN);
    let title = Line::from(vec![
        Span::styled(" Price Chart ", theme::panel_title(false)),
        Span::styled(format::currency(last), theme::accent_bold()),
        Span::styled(" [i]ndicators ", theme::muted()),
    ]);

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::panel_border(false))
                .title(title),
        )
        .x_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([0.0, x_max])
                .labels(vec![
                    Span::styled("0", theme::muted()),
                    Span::styled(format!("{}", closes.len()), theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([y_lo, y_hi])
                .labels(vec![
                    Span::styled(format!("{y_lo:.0}"), theme::muted()),
                    Span::styled(format!("{y_hi:.0}"), theme::muted()),
                ]),
        );
    f.render_widget(chart, panes[0]);

    for (indicator, pane) in oscillators.iter().zip(panes.iter().skip(1)) {
        render_oscillator(f, *pane, *indicator, &closes, x_max);
    }
}

fn render_oscillator(f: &mut Frame, area: Rect, indicator: Indicator, closes: &[f64], x_max: f64) {
    let points = series(&indicator.compute(closes));
    let y = match indicator {
        Indicator::Rsi => [0.0, 100.0],
        _ => bounds(&points),
    };
    let last = points.last().map(|(_, v)| format::number(*v, 2)).unwrap_or_else(|| format::PLACEHOLDER.into());
    let dataset = Dataset::default()
        .name(indicator.label())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(indicator_color(indicator)))
        .data(&points);
    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::muted())
                .title(format!(" {} {} ", indicator.label(), last))
                .title_style(theme::muted()),
        )
        .x_axis(Axis::default().bounds([0.0, x_max]))
        .y_axis(
            Axis::default()
                .style(theme::muted())
                .bounds(y)
                .labels(vec![
                    Span::styled(format!("{:.0}", y[0]), theme::muted()),
                    Span::styled(format!("{:.0}", y[1]), theme::muted()),
                ]),
        );
    f.render_widget(chart, area);
}
