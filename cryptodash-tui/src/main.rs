//! cryptodash: five-page terminal dashboard with live-refreshing tables.
//!
//! Startup order: panic hook, config, file logging, preferences, refresh
//! threads, terminal. Shutdown stops the refresh threads before the terminal
//! is restored.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use cryptodash_core::data::{CandleFeed, CoinFeed, QuoteFeed};
use cryptodash_core::prefs::PreferenceStore;
use cryptodash_core::refresh::{self, RefreshHandle};
use cryptodash_core::DashboardConfig;

use cryptodash_tui::app::{AppState, LiveData, Refresh};
use cryptodash_tui::{input, logging, ui};

#[derive(Parser)]
#[command(name = "cryptodash", about = "Crypto market dashboard in the terminal")]
struct Args {
    /// Config file. Defaults to <config dir>/cryptodash/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Route to open at startup, e.g. /portfolio-management-dashboard.
    #[arg(long, default_value = "/")]
    route: String,

    /// Log file. Defaults to <data dir>/cryptodash/cryptodash.log.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn app_dir(base: Option<PathBuf>) -> PathBuf {
    base.unwrap_or_else(|| PathBuf::from(".")).join("cryptodash")
}

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let args = Args::parse();

    // Paths
    let config_dir = app_dir(dirs::config_dir());
    let config_path = args.config.unwrap_or_else(|| config_dir.join("config.toml"));
    let prefs_path = config_dir.join("preferences.json");
    let export_dir = app_dir(dirs::data_dir()).join("exports");
    let log_path = args.log_file.unwrap_or_else(logging::default_path);

    let config = DashboardConfig::load_or_default(&config_path)?;
    let env_level = std::env::var(logging::LOG_ENV).ok();
    let level = logging::effective_level(config.level_filter()?, env_level.as_deref());
    logging::init(&log_path, level)?;
    log::info!("config from {}", config_path.display());

    let prefs = PreferenceStore::load(&prefs_path);

    // Feeds: the first snapshot seeds the UI, the threads continue from there.
    let coin_feed = CoinFeed::new(config.seed);
    let mut quote_feed = QuoteFeed::new(config.seed);
    let mut candle_feed = CandleFeed::new(config.seed);
    let live = LiveData::from_feeds(&coin_feed, &mut quote_feed, &mut candle_feed);

    let (tx, rx) = mpsc::channel();
    let handles = vec![
        refresh::spawn("coins", config.refresh.market_table(), coin_feed, tx.clone(), Refresh::Coins)?,
        refresh::spawn("quotes", config.refresh.ticker(), quote_feed, tx.clone(), Refresh::Quotes)?,
        refresh::spawn("candles", config.refresh.price_chart(), candle_feed, tx, Refresh::Candles)?,
    ];

    let mut app = AppState::new(&config, live, prefs, export_dir);
    app.navigate(&args.route);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app, &rx);

    shutdown(handles);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.context("dashboard loop failed")
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    refresh_rx: &Receiver<Refresh>,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Drain refresh ticks (non-blocking)
        while let Ok(msg) = refresh_rx.try_recv() {
            app.apply_refresh(msg);
        }

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

fn shutdown(handles: Vec<RefreshHandle>) {
    for handle in handles {
        let name = handle.name().to_string();
        handle.stop();
        log::debug!("stopped refresh `{name}`");
    }
    log::info!("dashboard closed");
}
