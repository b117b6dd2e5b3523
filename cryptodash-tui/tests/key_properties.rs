//! Property tests for key dispatch.
//!
//! Arbitrary key sequences (quit keys excluded) must keep:
//! 1. Cursor bounds: the focused table's cursor stays on its current page
//! 2. Page bounds: every table's page stays within `1..=total_pages`
//! 3. The error history stays capped
//! 4. The resulting state still renders

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use proptest::prelude::*;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use cryptodash_core::prefs::PreferenceStore;
use cryptodash_core::DashboardConfig;
use cryptodash_tui::app::{AppState, LiveData, TableControl};
use cryptodash_tui::{handle_key, ui};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_key() -> impl Strategy<Value = KeyEvent> {
    let chars = "jknpsSrfaowtieEcgx/? 12345btmz-";
    prop_oneof![
        8 => proptest::sample::select(chars.chars().collect::<Vec<_>>())
            .prop_map(|c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
        1 => Just(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
        1 => Just(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
        1 => Just(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)),
        1 => Just(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
        1 => Just(KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE)),
        1 => Just(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
    ]
}

fn app(dir: &std::path::Path) -> AppState {
    let config = DashboardConfig {
        page_size: 6,
        ..DashboardConfig::default()
    };
    let prefs = PreferenceStore::load(dir.join("preferences.json"));
    AppState::new(&config, LiveData::seeded(11), prefs, dir.join("exports"))
}

fn pages_in_range(app: &AppState) -> bool {
    let t = &app.tables;
    (1..=t.coins.total_pages().max(1)).contains(&t.coins.page())
        && t.attribution.page() == 1
        && t.holdings.page() == 1
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn key_sequences_keep_state_consistent(keys in prop::collection::vec(arb_key(), 0..60)) {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());
        for key in keys {
            handle_key(&mut app, key);
            prop_assert!(app.running);

            if let Some(id) = app.focused_table() {
                let len = app.tables.get(id).page_len();
                prop_assert!(app.cursor(id) < len.max(1), "cursor past page end on {:?}", id);
            }
            prop_assert!(pages_in_range(&app));
            prop_assert!(app.error_history.len() <= 50);
        }

        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        terminal.draw(|f| ui::draw(f, &app)).unwrap();
    }
}
