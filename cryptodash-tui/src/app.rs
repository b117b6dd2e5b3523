//! Application state. Single owner, main thread only.
//!
//! All dashboard state lives here. Refresh threads only send owned rows,
//! applied through [`AppState::apply_refresh`].

use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use cryptodash_core::data::{fixtures, tables, CandleFeed, CoinFeed, QuoteFeed};
use cryptodash_core::domain::{
    Attribution, Candle, Coin, ColumnSet, Holding, MarketDatum, MetricCard, NewsItem, Quote,
    ResearchNote, ResearchSection, RiskExposure, SocialMention, Transaction,
};
use cryptodash_core::export::{export_selected, ExportError};
use cryptodash_core::indicators::Indicator;
use cryptodash_core::prefs::PreferenceStore;
use cryptodash_core::ticker::TickerTab;
use cryptodash_core::{DashboardConfig, Facet, Record, SortDirection, TableEngine, Watchlist};

const ERROR_HISTORY_CAP: usize = 50;

/// Dashboard pages. `NotFound` is reached only through an unknown route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    MarketOverview,
    TradingPerformance,
    Portfolio,
    Risk,
    Research,
    NotFound,
}

impl Page {
    /// Pages in navigation order.
    pub const NAV: [Page; 5] = [
        Page::MarketOverview,
        Page::TradingPerformance,
        Page::Portfolio,
        Page::Risk,
        Page::Research,
    ];

    pub fn index(self) -> usize {
        match self {
            Page::MarketOverview => 0,
            Page::TradingPerformance => 1,
            Page::Portfolio => 2,
            Page::Risk => 3,
            Page::Research => 4,
            Page::NotFound => 5,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::NAV.get(i).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::MarketOverview => "Market Overview",
            Page::TradingPerformance => "Trading Performance",
            Page::Portfolio => "Portfolio Management",
            Page::Risk => "Risk Monitoring",
            Page::Research => "Market Research",
            Page::NotFound => "Page Not Found",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Page::MarketOverview => "Real-time market data and trends",
            Page::TradingPerformance => "Track trading results and analytics",
            Page::Portfolio => "Manage and monitor portfolios",
            Page::Risk => "Risk assessment and compliance",
            Page::Research => "Research tools and market analysis",
            Page::NotFound => "The page you requested does not exist",
        }
    }

    /// Canonical route of the page.
    pub fn route(self) -> &'static str {
        match self {
            Page::MarketOverview => "/market-overview-dashboard",
            Page::TradingPerformance => "/trading-performance-dashboard",
            Page::Portfolio => "/portfolio-management-dashboard",
            Page::Risk => "/risk-monitoring-dashboard",
            Page::Research => "/market-research-dashboard",
            Page::NotFound => "*",
        }
    }

    /// Resolve a path. `/` is the market overview; anything unknown is `NotFound`.
    pub fn from_route(path: &str) -> Self {
        let path = path.trim();
        if path == "/" {
            return Page::MarketOverview;
        }
        Self::NAV
            .into_iter()
            .find(|p| p.route() == path)
            .unwrap_or(Page::NotFound)
    }

    pub fn next(self) -> Page {
        match self {
            Page::NotFound => Page::MarketOverview,
            p => Self::NAV[(p.index() + 1) % Self::NAV.len()],
        }
    }

    pub fn prev(self) -> Page {
        match self {
            Page::NotFound => Page::MarketOverview,
            p => Self::NAV[(p.index() + Self::NAV.len() - 1) % Self::NAV.len()],
        }
    }

    /// Tables on the page, in focus order.
    pub fn tables(self, section: ResearchSection) -> &'static [TableId] {
        match self {
            Page::MarketOverview => &[TableId::Coins],
            Page::TradingPerformance => &[TableId::Attribution, TableId::Transactions],
            Page::Portfolio => &[TableId::Holdings],
            Page::Risk => &[TableId::Risk],
            Page::Research => match section {
                ResearchSection::News => &[TableId::Market, TableId::News],
                ResearchSection::Social => &[TableId::Market, TableId::Social],
                ResearchSection::Notes => &[TableId::Market, TableId::Notes],
            },
            Page::NotFound => &[],
        }
    }
}

/// Every table instance in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableId {
    Coins,
    Attribution,
    Transactions,
    Holdings,
    Risk,
    Market,
    News,
    Social,
    Notes,
}

impl TableId {
    pub fn label(self) -> &'static str {
        match self {
            TableId::Coins => "Cryptocurrencies",
            TableId::Attribution => "Performance Attribution",
            TableId::Transactions => "Recent Transactions",
            TableId::Holdings => "Holdings",
            TableId::Risk => "Risk Breakdown",
            TableId::Market => "Market Data",
            TableId::News => "News Feed",
            TableId::Social => "Social Mentions",
            TableId::Notes => "Research Notes",
        }
    }

    /// File stem used for CSV exports.
    pub fn slug(self) -> &'static str {
        match self {
            TableId::Coins => "coins",
            TableId::Attribution => "attribution",
            TableId::Transactions => "transactions",
            TableId::Holdings => "holdings",
            TableId::Risk => "risk",
            TableId::Market => "market",
            TableId::News => "news",
            TableId::Social => "social",
            TableId::Notes => "notes",
        }
    }
}

/// The operations keyboard input performs on whichever table has focus.
pub trait TableControl {
    fn query(&self) -> &str;
    fn push_query_char(&mut self, c: char);
    fn pop_query_char(&mut self);
    fn clear_query(&mut self);
    fn cycle_sort(&mut self, forward: bool);
    fn reverse_sort(&mut self);
    /// `(column label, direction)` of the active sort.
    fn sort_label(&self) -> Option<(&'static str, SortDirection)>;
    fn next_page(&mut self);
    fn prev_page(&mut self);
    fn cycle_facet(&mut self);
    fn facet_label(&self) -> &'static str;
    /// Rows on the current page.
    fn page_len(&self) -> usize;
    /// Key of the row at `index` on the current page.
    fn key_at(&self, index: usize) -> Option<String>;
    fn toggle_selected(&mut self, key: &str) -> bool;
    fn toggle_select_all(&mut self);
    fn selected_count(&self) -> usize;
    fn export(&self, path: &Path) -> Result<usize, ExportError>;
}

impl<R: Record> TableControl for TableEngine<R> {
    fn query(&self) -> &str {
        TableEngine::query(self)
    }

    fn push_query_char(&mut self, c: char) {
        TableEngine::push_query_char(self, c);
    }

    fn pop_query_char(&mut self) {
        TableEngine::pop_query_char(self);
    }

    fn clear_query(&mut self) {
        self.set_query("");
    }

    fn cycle_sort(&mut self, forward: bool) {
        self.cycle_sort_field(forward);
    }

    fn reverse_sort(&mut self) {
        TableEngine::reverse_sort(self);
    }

    fn sort_label(&self) -> Option<(&'static str, SortDirection)> {
        use cryptodash_core::Column;
        self.sort().map(|s| (s.field.label(), s.direction))
    }

    fn next_page(&mut self) {
        TableEngine::next_page(self);
    }

    fn prev_page(&mut self) {
        TableEngine::prev_page(self);
    }

    fn cycle_facet(&mut self) {
        TableEngine::cycle_facet(self);
    }

    fn facet_label(&self) -> &'static str {
        <R::Facet as Facet<R>>::label(self.facet())
    }

    fn page_len(&self) -> usize {
        self.view().rows.len()
    }

    fn key_at(&self, index: usize) -> Option<String> {
        self.view().rows.get(index).map(|r| r.key().to_string())
    }

    fn toggle_selected(&mut self, key: &str) -> bool {
        TableEngine::toggle_selected(self, key)
    }

    fn toggle_select_all(&mut self) {
        TableEngine::toggle_select_all(self);
    }

    fn selected_count(&self) -> usize {
        self.selection.len()
    }

    fn export(&self, path: &Path) -> Result<usize, ExportError> {
        export_selected(self, path)
    }
}

/// Every table engine, one per [`TableId`].
#[derive(Debug, Clone)]
pub struct Tables {
    pub coins: TableEngine<Coin>,
    pub attribution: TableEngine<Attribution>,
    pub transactions: TableEngine<Transaction>,
    pub holdings: TableEngine<Holding>,
    pub risk: TableEngine<RiskExposure>,
    pub market: TableEngine<MarketDatum>,
    pub news: TableEngine<NewsItem>,
    pub social: TableEngine<SocialMention>,
    pub notes: TableEngine<ResearchNote>,
}

impl Tables {
    /// Build every table with its default sort and page size.
    pub fn new(config: &DashboardConfig, coins: Vec<Coin>) -> Self {
        Self {
            coins: tables::coins(coins, config),
            attribution: tables::attribution(config),
            transactions: tables::transactions(config),
            holdings: tables::holdings(config),
            risk: tables::risk(config),
            market: tables::market(config),
            news: tables::news(config),
            social: tables::social(config),
            notes: tables::notes(config),
        }
    }

    pub fn get(&self, id: TableId) -> &dyn TableControl {
        match id {
            TableId::Coins => &self.coins,
            TableId::Attribution => &self.attribution,
            TableId::Transactions => &self.transactions,
            TableId::Holdings => &self.holdings,
            TableId::Risk => &self.risk,
            TableId::Market => &self.market,
            TableId::News => &self.news,
            TableId::Social => &self.social,
            TableId::Notes => &self.notes,
        }
    }

    pub fn get_mut(&mut self, id: TableId) -> &mut dyn TableControl {
        match id {
            TableId::Coins => &mut self.coins,
            TableId::Attribution => &mut self.attribution,
            TableId::Transactions => &mut self.transactions,
            TableId::Holdings => &mut self.holdings,
            TableId::Risk => &mut self.risk,
            TableId::Market => &mut self.market,
            TableId::News => &mut self.news,
            TableId::Social => &mut self.social,
            TableId::Notes => &mut self.notes,
        }
    }
}

/// First data for the live tables, taken from the same feeds the refresh
/// threads continue from.
#[derive(Debug, Clone, Default)]
pub struct LiveData {
    pub coins: Vec<Coin>,
    pub quotes: Vec<Quote>,
    pub candles: Vec<Candle>,
}

impl LiveData {
    pub fn from_feeds(coins: &CoinFeed, quotes: &mut QuoteFeed, candles: &mut CandleFeed) -> Self {
        Self {
            coins: coins.snapshot(),
            quotes: quotes.generate(),
            candles: candles.generate(),
        }
    }

    /// Fresh seeded feeds, for tests and previews.
    pub fn seeded(seed: u64) -> Self {
        Self::from_feeds(
            &CoinFeed::new(Some(seed)),
            &mut QuoteFeed::new(Some(seed)),
            &mut CandleFeed::new(Some(seed)),
        )
    }
}

/// One message from a refresh thread.
#[derive(Debug)]
pub enum Refresh {
    Coins(Vec<Coin>),
    Quotes(Vec<Quote>),
    Candles(Vec<Candle>),
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// An error record for the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub category: ErrorCategory,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Export,
    Prefs,
    Route,
}

impl ErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::Export => "EXPORT",
            ErrorCategory::Prefs => "PREFS",
            ErrorCategory::Route => "ROUTE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Keystrokes edit the focused table's query.
    Search,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    Indicators,
    ErrorHistory,
    /// Route prompt with its input so far.
    Goto(String),
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub page: Page,
    /// Path that was last navigated to, shown on the not-found page.
    pub route: String,
    pub running: bool,
    pub mode: InputMode,
    pub overlay: Overlay,

    // Tables
    pub tables: Tables,
    /// Index into [`Page::tables`] of the focused table, per page.
    focus: HashMap<Page, usize>,
    /// Cursor row on the current page of each table.
    cursors: HashMap<TableId, usize>,
    pub research_section: ResearchSection,
    pub column_set: ColumnSet,

    // Market overview
    pub metrics: Vec<MetricCard>,
    pub quotes: Vec<Quote>,
    pub candles: Vec<Candle>,
    pub ticker_tab: TickerTab,
    pub ticker_limit: usize,
    pub watchlist: Watchlist,
    pub indicators: Vec<Indicator>,
    pub prefs: PreferenceStore,
    pub last_refresh: Option<NaiveDateTime>,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub export_dir: PathBuf,
}

impl AppState {
    pub fn new(
        config: &DashboardConfig,
        live: LiveData,
        prefs: PreferenceStore,
        export_dir: PathBuf,
    ) -> Self {
        let indicators = prefs.chart_indicators();
        Self {
            page: Page::MarketOverview,
            route: "/".to_string(),
            running: true,
            mode: InputMode::Normal,
            overlay: Overlay::None,
            tables: Tables::new(config, live.coins),
            focus: HashMap::new(),
            cursors: HashMap::new(),
            research_section: ResearchSection::default(),
            column_set: ColumnSet::default(),
            metrics: fixtures::metric_cards(),
            quotes: live.quotes,
            candles: live.candles,
            ticker_tab: TickerTab::default(),
            ticker_limit: config.ticker_limit,
            watchlist: Watchlist::default(),
            indicators,
            prefs,
            last_refresh: None,
            status_message: None,
            error_history: VecDeque::with_capacity(ERROR_HISTORY_CAP),
            export_dir,
        }
    }

    // ── Navigation ───────────────────────────────────────────────────

    pub fn set_page(&mut self, page: Page) {
        self.page = page;
        self.route = page.route().to_string();
        self.mode = InputMode::Normal;
    }

    /// Follow a route; unknown paths land on the not-found page.
    pub fn navigate(&mut self, path: &str) {
        let page = Page::from_route(path);
        self.page = page;
        self.route = path.trim().to_string();
        self.mode = InputMode::Normal;
        if page == Page::NotFound {
            log::info!("no page for route {}", self.route);
            self.push_error(ErrorCategory::Route, format!("No page at {}", self.route));
        }
    }

    /// The table keyboard actions apply to, if the page has any.
    pub fn focused_table(&self) -> Option<TableId> {
        let tables = self.page.tables(self.research_section);
        let i = self.focus.get(&self.page).copied().unwrap_or(0);
        tables.get(i.min(tables.len().saturating_sub(1))).copied()
    }

    /// Move focus to the next table on pages with more than one.
    pub fn cycle_focus(&mut self) {
        let len = self.page.tables(self.research_section).len();
        if len > 1 {
            let i = self.focus.entry(self.page).or_insert(0);
            *i = (*i + 1) % len;
        }
    }

    pub fn is_focused(&self, id: TableId) -> bool {
        self.focused_table() == Some(id)
    }

    // ── Cursor ───────────────────────────────────────────────────────

    pub fn cursor(&self, id: TableId) -> usize {
        self.cursors.get(&id).copied().unwrap_or(0)
    }

    /// Move the cursor of the focused table by `delta`, within its page.
    pub fn move_cursor(&mut self, delta: isize) {
        let Some(id) = self.focused_table() else { return };
        let len = self.tables.get(id).page_len();
        let cursor = self.cursors.entry(id).or_insert(0);
        *cursor = if len == 0 {
            0
        } else {
            cursor.saturating_add_signed(delta).min(len - 1)
        };
    }

    fn reset_cursor(&mut self, id: TableId) {
        self.cursors.insert(id, 0);
    }

    /// Keep every cursor on a visible row after rows or pages change.
    pub fn clamp_cursors(&mut self) {
        for (id, cursor) in self.cursors.iter_mut() {
            let len = self.tables.get(*id).page_len();
            *cursor = (*cursor).min(len.saturating_sub(1));
        }
    }

    fn cursor_key(&self) -> Option<(TableId, String)> {
        let id = self.focused_table()?;
        let key = self.tables.get(id).key_at(self.cursor(id))?;
        Some((id, key))
    }

    // ── Table actions ────────────────────────────────────────────────

    pub fn with_focused<T>(&mut self, f: impl FnOnce(&mut dyn TableControl) -> T) -> Option<T> {
        let id = self.focused_table()?;
        Some(f(self.tables.get_mut(id)))
    }

    pub fn search_push(&mut self, c: char) {
        if let Some(id) = self.focused_table() {
            self.tables.get_mut(id).push_query_char(c);
            self.reset_cursor(id);
        }
    }

    pub fn search_pop(&mut self) {
        if let Some(id) = self.focused_table() {
            self.tables.get_mut(id).pop_query_char();
            self.reset_cursor(id);
        }
    }

    pub fn search_clear(&mut self) {
        if let Some(id) = self.focused_table() {
            self.tables.get_mut(id).clear_query();
            self.reset_cursor(id);
        }
    }

    pub fn change_page(&mut self, forward: bool) {
        if let Some(id) = self.focused_table() {
            let table = self.tables.get_mut(id);
            if forward {
                table.next_page();
            } else {
                table.prev_page();
            }
            self.reset_cursor(id);
        }
    }

    pub fn cycle_facet(&mut self) {
        if let Some(id) = self.focused_table() {
            let table = self.tables.get_mut(id);
            table.cycle_facet();
            let label = table.facet_label();
            self.reset_cursor(id);
            self.set_status(format!("Filter: {label}"));
        }
    }

    /// Toggle selection of the row under the cursor.
    pub fn toggle_cursor_selection(&mut self) {
        if let Some((id, key)) = self.cursor_key() {
            self.tables.get_mut(id).toggle_selected(&key);
        }
    }

    /// Add or remove the cursor's coin from the watchlist.
    pub fn toggle_watch(&mut self) {
        let Some((TableId::Coins, symbol)) = self.cursor_key() else {
            self.set_warning("Watchlist works on the cryptocurrency table");
            return;
        };
        let added = self.watchlist.toggle(&symbol);
        let verb = if added { "Watching" } else { "Unwatched" };
        self.set_status(format!("{verb} {symbol}"));
    }

    pub fn cycle_research_section(&mut self) {
        self.research_section = self.research_section.next();
    }

    pub fn cycle_column_set(&mut self) {
        self.column_set = self.column_set.next();
        let shown = self.column_set.columns();
        if self.tables.market.sort().is_some_and(|s| !shown.contains(&s.field)) {
            self.tables.market.clear_sort();
        }
        self.set_status(format!("Columns: {}", self.column_set.label()));
    }

    /// Sort the focused table by its next column. The market table only
    /// cycles through the columns of the active column set.
    pub fn cycle_sort(&mut self, forward: bool) {
        match self.focused_table() {
            Some(TableId::Market) => {
                let shown = self.column_set.columns();
                self.tables.market.cycle_sort_field_in(shown, forward);
            }
            Some(id) => self.tables.get_mut(id).cycle_sort(forward),
            None => {}
        }
    }

    pub fn cycle_ticker_tab(&mut self) {
        self.ticker_tab = self.ticker_tab.next();
    }

    /// Toggle a chart indicator and persist the new list.
    pub fn toggle_indicator(&mut self, indicator: Indicator) {
        match self.prefs.toggle_indicator(indicator) {
            Ok(list) => {
                self.indicators = list;
                let state = if self.indicators.contains(&indicator) { "on" } else { "off" };
                self.set_status(format!("{} {state}", indicator.label()));
            }
            Err(e) => {
                log::warn!("saving indicator preference failed: {e}");
                self.push_error(ErrorCategory::Prefs, format!("Could not save preferences: {e}"));
            }
        }
    }

    /// Export the focused table's selection to a timestamped CSV in `export_dir`.
    pub fn export_focused(&mut self) -> Option<PathBuf> {
        let id = self.focused_table()?;
        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
        let path = self.export_dir.join(format!("{}-{stamp}.csv", id.slug()));
        match self.tables.get(id).export(&path) {
            Ok(n) => {
                self.set_status(format!("Exported {n} rows to {}", path.display()));
                Some(path)
            }
            Err(ExportError::NothingSelected) => {
                self.set_warning("Select rows with Space before exporting");
                None
            }
            Err(e) => {
                self.push_error(ErrorCategory::Export, format!("Export failed: {e}"));
                None
            }
        }
    }

    // ── Refresh ──────────────────────────────────────────────────────

    /// Replace live rows. Query, sort, page and selection stay as they are.
    pub fn apply_refresh(&mut self, msg: Refresh) {
        match msg {
            Refresh::Coins(rows) => {
                self.tables.coins.replace_rows(rows);
                self.clamp_cursors();
            }
            Refresh::Quotes(quotes) => self.quotes = quotes,
            Refresh::Candles(candles) => self.candles = candles,
        }
        self.last_refresh = Some(chrono::Local::now().naive_local());
    }

    // ── Status ───────────────────────────────────────────────────────

    /// Push an error to the history, capping at 50.
    pub fn push_error(&mut self, category: ErrorCategory, message: String) {
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            category,
            message: message.clone(),
        };
        self.error_history.push_front(record);
        if self.error_history.len() > ERROR_HISTORY_CAP {
            self.error_history.pop_back();
        }
        self.status_message = Some((message, StatusLevel::Error));
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn app_in(dir: &Path) -> AppState {
        let config = DashboardConfig::default();
        let prefs = PreferenceStore::load(dir.join("preferences.json"));
        AppState::new(&config, LiveData::seeded(7), prefs, dir.join("exports"))
    }

    #[test]
    fn page_cycle() {
        assert_eq!(Page::MarketOverview.next(), Page::TradingPerformance);
        assert_eq!(Page::Research.next(), Page::MarketOverview);
        assert_eq!(Page::MarketOverview.prev(), Page::Research);
        assert_eq!(Page::NotFound.next(), Page::MarketOverview);
        assert_eq!(Page::NotFound.prev(), Page::MarketOverview);
    }

    #[test]
    fn page_from_index() {
        for i in 0..5 {
            assert_eq!(Page::from_index(i).unwrap().index(), i);
        }
        assert!(Page::from_index(5).is_none());
    }

    #[test]
    fn routes_resolve() {
        assert_eq!(Page::from_route("/"), Page::MarketOverview);
        for page in Page::NAV {
            assert_eq!(Page::from_route(page.route()), page);
        }
        assert_eq!(Page::from_route("/nope"), Page::NotFound);
        assert_eq!(Page::from_route(""), Page::NotFound);
    }

    #[test]
    fn navigate_unknown_records_route() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.navigate("/settings");
        assert_eq!(app.page, Page::NotFound);
        assert_eq!(app.route, "/settings");
        assert!(app.focused_table().is_none());
        assert_eq!(app.error_history.len(), 1);
    }

    #[test]
    fn error_history_caps_at_50() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        for i in 0..60 {
            app.push_error(ErrorCategory::Export, format!("error {i}"));
        }
        assert_eq!(app.error_history.len(), 50);
        assert!(app.error_history[0].message.contains("59"));
    }

    #[test]
    fn focus_cycles_between_tables() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.set_page(Page::TradingPerformance);
        assert_eq!(app.focused_table(), Some(TableId::Attribution));
        app.cycle_focus();
        assert_eq!(app.focused_table(), Some(TableId::Transactions));
        app.cycle_focus();
        assert_eq!(app.focused_table(), Some(TableId::Attribution));

        app.set_page(Page::Portfolio);
        app.cycle_focus();
        assert_eq!(app.focused_table(), Some(TableId::Holdings));
    }

    #[test]
    fn research_side_table_follows_section() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.set_page(Page::Research);
        app.cycle_focus();
        assert_eq!(app.focused_table(), Some(TableId::News));
        app.cycle_research_section();
        assert_eq!(app.focused_table(), Some(TableId::Social));
    }

    #[test]
    fn cursor_stays_on_page() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.move_cursor(-3);
        assert_eq!(app.cursor(TableId::Coins), 0);
        app.move_cursor(100);
        assert_eq!(app.cursor(TableId::Coins), 19);
        app.search_push('z');
        assert_eq!(app.cursor(TableId::Coins), 0);
    }

    #[test]
    fn refresh_keeps_query_and_selection() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.search_push('b');
        app.toggle_cursor_selection();
        let selected = app.tables.coins.selection.len();
        let mut feed = CoinFeed::new(Some(7));
        app.apply_refresh(Refresh::Coins(feed.tick()));
        assert_eq!(app.tables.coins.query(), "b");
        assert_eq!(app.tables.coins.selection.len(), selected);
        assert!(app.last_refresh.is_some());
    }

    #[test]
    fn watch_toggles_cursor_coin() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        let top = app.tables.coins.view().rows[0].symbol.clone();
        let before = app.watchlist.contains(&top);
        app.toggle_watch();
        assert_eq!(app.watchlist.contains(&top), !before);
    }

    #[test]
    fn indicator_toggle_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.toggle_indicator(Indicator::Rsi);
        assert_eq!(app.indicators, vec![Indicator::Ma20, Indicator::Ma50, Indicator::Rsi]);
        let reloaded = PreferenceStore::load(dir.path().join("preferences.json"));
        assert_eq!(reloaded.chart_indicators(), app.indicators);
    }

    #[test]
    fn export_without_selection_warns() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.set_page(Page::Risk);
        assert!(app.export_focused().is_none());
        assert!(matches!(app.status_message, Some((_, StatusLevel::Warning))));
    }

    #[test]
    fn export_writes_selected_holdings() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.set_page(Page::Portfolio);
        app.toggle_cursor_selection();
        let path = app.export_focused().unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        assert_eq!(text.lines().count(), 2);
    }
}
