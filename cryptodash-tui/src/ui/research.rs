//! Market research: the market data table with a column picker, beside the
//! news / social / notes lists.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use cryptodash_core::domain::{MarketDatum, NewsItem, ResearchNote, ResearchSection, SocialMention};
use cryptodash_core::Record;

use crate::app::{AppState, InputMode, TableId};
use crate::theme;
use crate::ui::widgets::table::{self, TableFrame};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    let title = format!("Market Data [c] {}", app.column_set.label());
    table::render(
        f,
        cols[0],
        &app.tables.market,
        app.column_set.columns(),
        &frame(app, TableId::Market, &title),
        |_: &MarketDatum| None,
    );

    render_sidebar(f, cols[1], app);
}

fn frame<'a>(app: &AppState, id: TableId, title: &'a str) -> TableFrame<'a> {
    let focused = app.is_focused(id);
    TableFrame {
        title,
        focused,
        cursor: app.cursor(id),
        searching: focused && app.mode == InputMode::Search,
    }
}

fn render_sidebar(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5), Constraint::Length(6)])
        .split(area);

    let selected = ResearchSection::ALL
        .iter()
        .position(|s| *s == app.research_section)
        .unwrap_or(0);
    let tabs = Tabs::new(ResearchSection::ALL.iter().map(|s| s.label()))
        .select(selected)
        .style(theme::muted())
        .highlight_style(theme::accent_bold())
        .divider("|");
    f.render_widget(tabs, chunks[0]);

    let detail: Vec<Line> = match app.research_section {
        ResearchSection::News => {
            let id = TableId::News;
            let title = "News Feed [e]section [o]focus";
            table::render(
                f,
                chunks[1],
                &app.tables.news,
                NewsItem::columns(),
                &frame(app, id, title),
                |_: &NewsItem| None,
            );
            let view = app.tables.news.view();
            view.rows
                .get(app.cursor(id))
                .map(|n| {
                    vec![
                        Line::from(Span::styled(n.title.clone(), theme::accent_bold())),
                        Line::from(Span::styled(n.summary.clone(), theme::text())),
                    ]
                })
                .unwrap_or_default()
        }
        ResearchSection::Social => {
            let id = TableId::Social;
            let title = "Social Mentions [e]section [o]focus";
            table::render(
                f,
                chunks[1],
                &app.tables.social,
                SocialMention::columns(),
                &frame(app, id, title),
                |_: &SocialMention| None,
            );
            let view = app.tables.social.view();
            view.rows
                .get(app.cursor(id))
                .map(|s| {
                    vec![Line::from(vec![
                        Span::styled(format!("{} trending: ", s.platform), theme::muted()),
                        Span::styled(s.trending.clone(), theme::accent_bold()),
                    ])]
                })
                .unwrap_or_default()
        }
        ResearchSection::Notes => {
            let id = TableId::Notes;
            let title = "Research Notes [e]section [o]focus";
            table::render(
                f,
                chunks[1],
                &app.tables.notes,
                ResearchNote::columns(),
                &frame(app, id, title),
                |_: &ResearchNote| None,
            );
            let view = app.tables.notes.view();
            view.rows
                .get(app.cursor(id))
                .map(|n| {
                    vec![
                        Line::from(vec![
                            Span::styled(n.title.clone(), theme::accent_bold()),
                            Span::styled(format!("  by {}, {}", n.author, n.last_modified), theme::muted()),
                        ]),
                        Line::from(Span::styled(n.content.clone(), theme::text())),
                        Line::from(Span::styled(n.tag_line.clone(), theme::neutral())),
                    ]
                })
                .unwrap_or_default()
        }
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(" Detail ")
        .title_style(theme::muted());
    f.render_widget(Paragraph::new(detail).block(block).wrap(Wrap { trim: true }), chunks[2]);
}
