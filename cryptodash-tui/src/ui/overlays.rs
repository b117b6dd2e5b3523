//! Overlay widgets: help, indicator picker, error history, route prompt.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use cryptodash_core::indicators::Indicator;

use crate::app::AppState;
use crate::theme;
use crate::ui::centered_rect;

const HELP: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("1-5", "Jump to page"),
            ("Tab / Shift+Tab", "Next / previous page"),
            ("g", "Go to a route"),
            ("o", "Focus the next table on the page"),
            ("q / Ctrl+C", "Quit"),
        ],
    ),
    (
        "Tables",
        &[
            ("/", "Search (Enter keeps, Esc clears)"),
            ("s / S", "Sort by next / previous column"),
            ("r", "Reverse sort direction"),
            ("n / p", "Next / previous page"),
            ("j / k", "Move cursor"),
            ("Space", "Select row"),
            ("a", "Select all / none"),
            ("f", "Cycle filter"),
            ("x", "Export selection to CSV"),
        ],
    ),
    (
        "Market Overview",
        &[
            ("w", "Watch / unwatch coin"),
            ("t", "Next ticker tab"),
            ("i", "Chart indicators"),
        ],
    ),
    (
        "Market Research",
        &[("e", "Next research section"), ("c", "Next column set")],
    ),
    ("Other", &[("E", "Error history"), ("?", "This help")]),
];

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Keyboard Shortcuts [any key]close ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = Vec::new();
    for (section, keys) in HELP {
        lines.push(Line::from(Span::styled(*section, theme::accent_bold())));
        for (key, desc) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:>16}  "), theme::accent()),
                Span::styled(*desc, theme::muted()),
            ]));
        }
        lines.push(Line::from(""));
    }

    f.render_widget(Paragraph::new(lines).block(block), popup);
}

pub fn render_indicators(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(40, 40, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Indicators [1-4]toggle [Esc]close ")
        .title_style(theme::accent_bold());

    let mut lines = vec![Line::from("")];
    for (i, indicator) in Indicator::ALL.iter().enumerate() {
        let on = app.indicators.contains(indicator);
        let (mark, style) = if on {
            ("[x]", theme::positive())
        } else {
            ("[ ]", theme::muted())
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", i + 1), theme::accent()),
            Span::styled(mark, style),
            Span::styled(format!(" {}", indicator.label()), style),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  Saved to {}", app.prefs.path().display()),
        theme::muted(),
    )));

    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), popup);
}

pub fn render_error_history(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(80, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::negative())
        .title(format!(" Error History ({}) [any key]close ", app.error_history.len()))
        .title_style(theme::negative());

    let lines: Vec<Line> = if app.error_history.is_empty() {
        vec![Line::from(Span::styled("No errors recorded.", theme::muted()))]
    } else {
        app.error_history
            .iter()
            .map(|err| {
                Line::from(vec![
                    Span::styled(format!("[{}] ", err.timestamp.format("%H:%M:%S")), theme::muted()),
                    Span::styled(format!("[{}] ", err.category.label()), theme::warning()),
                    Span::styled(err.message.as_str(), theme::text()),
                ])
            })
            .collect()
    };

    f.render_widget(Paragraph::new(lines).block(block), popup);
}

pub fn render_goto(f: &mut Frame, area: Rect, input: &str) {
    let popup = centered_rect(50, 20, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Go To [Enter]open [Esc]cancel ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Route, e.g. /risk-monitoring-dashboard:", theme::muted())),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", theme::accent()),
            Span::styled(input, theme::accent_bold()),
            Span::styled("_", theme::accent()),
        ]),
    ];

    f.render_widget(Paragraph::new(text).block(block), popup);
}
