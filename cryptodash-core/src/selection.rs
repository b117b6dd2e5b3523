//! Checkbox selection and the star watchlist.
//!
//! Both sets hold row keys / symbols and are independent of filtering,
//! sorting and pagination: a selected row stays selected while hidden.

use std::collections::BTreeSet;

/// Row keys ticked in a table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    keys: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the key if absent, remove it if present. Returns whether it is now selected.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.keys.remove(key) {
            false
        } else {
            self.keys.insert(key.to_string());
            true
        }
    }

    /// Header checkbox: select every given key, or clear when all of them are
    /// already selected.
    pub fn toggle_all<'a>(&mut self, keys: impl IntoIterator<Item = &'a str>) {
        let keys: Vec<&str> = keys.into_iter().collect();
        let all_selected = !keys.is_empty() && keys.iter().all(|k| self.keys.contains(*k));
        if all_selected {
            self.keys.clear();
        } else {
            self.keys.extend(keys.into_iter().map(String::from));
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

/// Starred symbols. One watchlist is shared by every table that shows a star.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Watchlist {
    symbols: BTreeSet<String>,
}

impl Default for Watchlist {
    fn default() -> Self {
        Self::with_symbols(["BTC", "ETH", "ADA"])
    }
}

impl Watchlist {
    pub fn empty() -> Self {
        Self {
            symbols: BTreeSet::new(),
        }
    }

    pub fn with_symbols<'a>(symbols: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            symbols: symbols.into_iter().map(String::from).collect(),
        }
    }

    /// Star or unstar. Toggling twice restores the original set.
    pub fn toggle(&mut self, symbol: &str) -> bool {
        if self.symbols.remove(symbol) {
            false
        } else {
            self.symbols.insert(symbol.to_string());
            true
        }
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains(symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watchlist_toggle_twice_is_identity() {
        let original = Watchlist::default();
        let mut w = original.clone();
        assert!(!w.toggle("BTC"));
        assert!(!w.contains("BTC"));
        assert!(w.toggle("BTC"));
        assert_eq!(w, original);
    }

    #[test]
    fn default_watchlist() {
        let w = Watchlist::default();
        let symbols: Vec<_> = w.symbols().collect();
        assert_eq!(symbols, vec!["ADA", "BTC", "ETH"]);
    }

    #[test]
    fn toggle_all_selects_then_clears() {
        let mut s = Selection::new();
        s.toggle("eth-1");
        s.toggle_all(["btc-1", "eth-1"]);
        assert_eq!(s.len(), 2);
        s.toggle_all(["btc-1", "eth-1"]);
        assert!(s.is_empty());
    }

    #[test]
    fn toggle_all_with_no_keys_is_noop() {
        let mut s = Selection::new();
        s.toggle("sol-1");
        s.toggle_all(std::iter::empty());
        assert!(s.contains("sol-1"));
    }
}
