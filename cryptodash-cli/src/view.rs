//! Headless table views: drive a [`TableEngine`] from command-line options
//! and print the resulting page as aligned text.

use std::io::{self, Write};

use anyhow::{bail, Result};

use cryptodash_core::record::render_cell;
use cryptodash_core::{Column, Facet, Record, SortDirection, SortState, TableEngine, Value};

/// Query, facet, sort and page requested on the command line.
#[derive(Debug, Clone, Default)]
pub struct ViewOptions {
    pub query: Option<String>,
    pub facet: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<SortDirection>,
    pub page: usize,
}

/// Apply `opts` to `engine`. Unknown columns and facets are errors; an
/// out-of-range page is clamped with a warning.
pub fn apply<R: Record>(engine: &mut TableEngine<R>, opts: &ViewOptions) -> Result<()> {
    if let Some(query) = &opts.query {
        engine.set_query(query.as_str());
    }

    if let Some(label) = &opts.facet {
        let facet = find_facet::<R>(label)?;
        engine.set_facet(facet);
    }

    match (&opts.sort, opts.direction) {
        (Some(name), direction) => {
            let Some(field) = R::field_by_name(name) else {
                bail!("unknown column `{name}`; expected one of: {}", column_keys::<R>());
            };
            if !field.sortable() {
                bail!("column `{}` is not sortable", field.key());
            }
            let direction = direction.unwrap_or(engine.spec().new_field_direction);
            engine.set_sort(Some(SortState::new(field, direction)));
        }
        (None, Some(direction)) => {
            if let Some(current) = engine.sort() {
                engine.set_sort(Some(SortState::new(current.field, direction)));
            }
        }
        (None, None) => {}
    }

    let requested = opts.page.max(1);
    engine.set_page(requested);
    if engine.page() != requested {
        log::warn!(
            "page {requested} out of range, showing page {} of {}",
            engine.page(),
            engine.total_pages()
        );
    }
    Ok(())
}

/// Facet whose label matches `label`, ignoring ASCII case.
fn find_facet<R: Record>(label: &str) -> Result<R::Facet> {
    let first = R::Facet::default();
    let mut labels = Vec::new();
    let mut facet = first.clone();
    loop {
        if facet.label().eq_ignore_ascii_case(label) {
            return Ok(facet);
        }
        labels.push(facet.label());
        facet = facet.next();
        if facet.label() == first.label() {
            break;
        }
    }
    bail!("unknown filter `{label}`; expected one of: {}", labels.join(", "))
}

fn column_keys<R: Record>() -> String {
    R::columns()
        .iter()
        .map(|f| f.key())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Select rows by key, or every filtered row when `all` is set.
pub fn select<R: Record>(engine: &mut TableEngine<R>, keys: &[String], all: bool) -> Result<()> {
    if all && engine.selection.is_empty() {
        engine.toggle_select_all();
    }
    for key in keys {
        if !engine.rows().iter().any(|r| r.key() == key.as_str()) {
            bail!("no row with id `{key}`");
        }
        if !engine.selection.contains(key) {
            engine.toggle_selected(key);
        }
    }
    Ok(())
}

/// Print the current page: header (sorted column marked), rows, then the
/// summary line. Numbers are right-aligned.
pub fn render<R: Record, W: Write>(engine: &TableEngine<R>, out: &mut W) -> io::Result<()> {
    let view = engine.view();
    let columns = R::columns();
    let sort = engine.sort();

    let headers: Vec<String> = columns
        .iter()
        .map(|&field| match sort {
            Some(s) if s.field == field => format!("{} {}", field.label(), s.direction.arrow()),
            _ => field.label().to_string(),
        })
        .collect();

    let cells: Vec<Vec<(String, bool)>> = view
        .rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|&field| {
                    let numeric = !matches!(row.value(field), Value::Text(_));
                    (render_cell(*row, field), numeric)
                })
                .collect()
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            cells
                .iter()
                .map(|r| r[i].0.chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad(h, *w, false))
        .collect();
    writeln!(out, "{}", header.join("  ").trim_end())?;

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|((text, numeric), w)| pad(text, *w, *numeric))
            .collect();
        writeln!(out, "{}", line.join("  ").trim_end())?;
    }

    let mut footer = view.summary();
    if view.total_pages > 1 {
        footer.push_str(&format!("  (page {}/{})", view.page, view.total_pages));
    }
    let facet = engine.facet();
    if facet.label() != R::Facet::default().label() {
        footer.push_str(&format!("  [{}]", facet.label()));
    }
    if !engine.query().is_empty() {
        footer.push_str(&format!("  query: {}", engine.query()));
    }
    writeln!(out, "{footer}")
}

/// Pad by character count so headers with `▲`/`▼` line up.
fn pad(text: &str, width: usize, right: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(text.chars().count()));
    if right {
        format!("{fill}{text}")
    } else {
        format!("{text}{fill}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cryptodash_core::data::tables;
    use cryptodash_core::domain::HoldingField;
    use cryptodash_core::DashboardConfig;

    fn rendered<R: Record>(engine: &TableEngine<R>) -> String {
        let mut out = Vec::new();
        render(engine, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn sort_by_key_uses_new_field_direction() {
        let mut engine = tables::holdings(&DashboardConfig::default());
        let opts = ViewOptions {
            sort: Some("asset".into()),
            ..ViewOptions::default()
        };
        apply(&mut engine, &opts).unwrap();
        let sort = engine.sort().unwrap();
        assert_eq!(sort.field, HoldingField::Asset);
        assert_eq!(sort.direction, engine.spec().new_field_direction);
    }

    #[test]
    fn non_sortable_column_is_an_error() {
        let mut engine = tables::holdings(&DashboardConfig::default());
        let before = engine.sort();
        let opts = ViewOptions {
            sort: Some("symbol".into()),
            ..ViewOptions::default()
        };
        let err = apply(&mut engine, &opts).unwrap_err().to_string();
        assert!(err.contains("not sortable"), "{err}");
        assert_eq!(engine.sort(), before);
    }

    #[test]
    fn explicit_direction_wins() {
        let mut engine = tables::holdings(&DashboardConfig::default());
        let opts = ViewOptions {
            sort: Some("Value".into()),
            direction: Some(SortDirection::Ascending),
            ..ViewOptions::default()
        };
        apply(&mut engine, &opts).unwrap();
        assert_eq!(engine.sort(), Some(SortState::ascending(HoldingField::Value)));
    }

    #[test]
    fn direction_alone_flips_default_sort() {
        let mut engine = tables::holdings(&DashboardConfig::default());
        let opts = ViewOptions {
            direction: Some(SortDirection::Ascending),
            ..ViewOptions::default()
        };
        apply(&mut engine, &opts).unwrap();
        assert_eq!(engine.sort(), Some(SortState::ascending(HoldingField::Value)));
    }

    #[test]
    fn unknown_column_and_facet_are_errors() {
        let mut engine = tables::holdings(&DashboardConfig::default());
        let bad_sort = ViewOptions {
            sort: Some("nope".into()),
            ..ViewOptions::default()
        };
        let err = apply(&mut engine, &bad_sort).unwrap_err().to_string();
        assert!(err.contains("unknown column"));
        assert!(err.contains("dayChange"));

        let bad_facet = ViewOptions {
            facet: Some("Sideways".into()),
            ..ViewOptions::default()
        };
        let err = apply(&mut engine, &bad_facet).unwrap_err().to_string();
        assert!(err.contains("Overweight"));
    }

    #[test]
    fn facet_label_is_case_insensitive() {
        let mut engine = tables::holdings(&DashboardConfig::default());
        let opts = ViewOptions {
            facet: Some("cryptocurrencies".into()),
            ..ViewOptions::default()
        };
        apply(&mut engine, &opts).unwrap();
        assert_eq!(engine.facet().label(), "Cryptocurrencies");
    }

    #[test]
    fn page_is_clamped() {
        let config = DashboardConfig {
            page_size: 5,
            ..DashboardConfig::default()
        };
        let coins = cryptodash_core::data::CoinFeed::new(Some(1)).snapshot();
        let total = coins.len();
        let mut engine = tables::coins(coins, &config);
        let opts = ViewOptions {
            page: 99,
            ..ViewOptions::default()
        };
        apply(&mut engine, &opts).unwrap();
        assert_eq!(engine.page(), total.div_ceil(5));
    }

    #[test]
    fn render_marks_sort_and_prints_summary() {
        let engine = tables::holdings(&DashboardConfig::default());
        let text = rendered(&engine);
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("Asset"));
        assert!(first.contains("Value ▼"));
        assert!(text.contains("Bitcoin"));
        assert!(text.lines().last().unwrap().starts_with("Showing 1 to"));
    }

    #[test]
    fn render_empty_view() {
        let mut engine = tables::risk(&DashboardConfig::default());
        engine.set_query("zzzz");
        let text = rendered(&engine);
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("Showing 0 to 0 of 0"));
        assert!(text.contains("query: zzzz"));
    }

    #[test]
    fn select_by_key() {
        let mut engine = tables::holdings(&DashboardConfig::default());
        select(&mut engine, &["btc-1".into(), "eth-1".into()], false).unwrap();
        assert_eq!(engine.selection.len(), 2);
        // Selecting again keeps it selected.
        select(&mut engine, &["btc-1".into()], false).unwrap();
        assert_eq!(engine.selection.len(), 2);
        assert!(select(&mut engine, &["nope".into()], false).is_err());
    }

    #[test]
    fn select_all_takes_filtered_rows() {
        let mut engine = tables::risk(&DashboardConfig::default());
        engine.set_query("btc");
        select(&mut engine, &[], true).unwrap();
        assert_eq!(engine.selection.len(), 1);
    }
}
