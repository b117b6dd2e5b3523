//! Live ticker tabs. Each tab is a facet over quotes plus a fixed sort,
//! run through the same filter and sort as every other table.

use crate::domain::{Quote, QuoteField};
use crate::filter::{filter_rows, Facet};
use crate::selection::Watchlist;
use crate::sort::{sort_rows, SortState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickerTab {
    #[default]
    Gainers,
    Losers,
    Volume,
    Watchlist,
}

impl TickerTab {
    pub const ALL: [TickerTab; 4] = [
        TickerTab::Gainers,
        TickerTab::Losers,
        TickerTab::Volume,
        TickerTab::Watchlist,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TickerTab::Gainers => "Top Gainers",
            TickerTab::Losers => "Top Losers",
            TickerTab::Volume => "Volume Leaders",
            TickerTab::Watchlist => "Watchlist",
        }
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Fixed order of the tab. The watchlist keeps feed order.
    pub fn sort(self) -> Option<SortState<QuoteField>> {
        match self {
            TickerTab::Gainers => Some(SortState::descending(QuoteField::Change24h)),
            TickerTab::Losers => Some(SortState::ascending(QuoteField::Change24h)),
            TickerTab::Volume => Some(SortState::descending(QuoteField::Volume24h)),
            TickerTab::Watchlist => None,
        }
    }
}

/// Watchlist membership is not part of the row; `ticker_view` applies it.
impl Facet<Quote> for TickerTab {
    fn admits(&self, row: &Quote) -> bool {
        match self {
            TickerTab::Gainers => row.change_24h > 0.0,
            TickerTab::Losers => row.change_24h < 0.0,
            TickerTab::Volume | TickerTab::Watchlist => true,
        }
    }

    fn label(&self) -> &'static str {
        TickerTab::label(*self)
    }

    fn next(&self) -> Self {
        TickerTab::next(*self)
    }
}

/// Quotes shown under `tab`, at most `limit` of them.
pub fn ticker_view<'a>(
    quotes: &'a [Quote],
    tab: TickerTab,
    watchlist: &Watchlist,
    limit: usize,
) -> Vec<&'a Quote> {
    let mut rows = filter_rows(quotes, "", &tab);
    if tab == TickerTab::Watchlist {
        rows.retain(|q| watchlist.contains(&q.symbol));
    }
    sort_rows(&mut rows, tab.sort().as_ref());
    rows.truncate(limit);
    rows
}
