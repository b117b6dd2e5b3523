//! cryptodash CLI: headless access to the dashboard's tables and settings.
//!
//! Commands:
//! - `table` prints one table after query, filter, sort and pagination
//! - `export` writes selected rows of a table as CSV
//! - `indicators` shows or toggles the persisted chart indicators
//! - `config` validates the config file and prints the effective settings

mod view;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use cryptodash_core::data::{tables, CoinFeed};
use cryptodash_core::export::{export_selected, write_rows};
use cryptodash_core::indicators::Indicator;
use cryptodash_core::prefs::PreferenceStore;
use cryptodash_core::{DashboardConfig, SortDirection};

use view::ViewOptions;

#[derive(Parser)]
#[command(name = "cryptodash-cli", about = "cryptodash CLI: dashboard tables without the TUI")]
struct Cli {
    /// Log debug output to stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    /// Config file. Defaults to <config dir>/cryptodash/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one table: filter, sort and paginate like the dashboard does.
    Table {
        #[arg(value_enum)]
        table: TableName,

        #[command(flatten)]
        view: ViewArgs,
    },
    /// Export selected rows of a table as CSV.
    Export {
        #[arg(value_enum)]
        table: TableName,

        /// Row ids to select (repeatable).
        #[arg(long = "select", value_name = "ID")]
        select: Vec<String>,

        /// Select every row that passes the query and filter.
        #[arg(long, default_value_t = false)]
        all: bool,

        /// Output file. Prints to stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,

        #[command(flatten)]
        view: ViewArgs,
    },
    /// Show the enabled chart indicators, optionally toggling one first.
    Indicators {
        /// Indicator id to toggle: MA20, MA50, RSI or MACD.
        #[arg(long)]
        toggle: Option<String>,

        /// Preference file. Defaults to <config dir>/cryptodash/preferences.json.
        #[arg(long)]
        prefs: Option<PathBuf>,
    },
    /// Validate the config file and print the effective settings as TOML.
    Config,
}

#[derive(Args)]
struct ViewArgs {
    /// Case-insensitive search over the table's text columns.
    #[arg(long)]
    query: Option<String>,

    /// Categorical filter by label, e.g. "Overweight" or "Scalping".
    #[arg(long)]
    filter: Option<String>,

    /// Column to sort by (field key such as `marketCap`, or header label).
    #[arg(long)]
    sort: Option<String>,

    #[arg(long, default_value_t = false, conflicts_with = "desc")]
    asc: bool,

    #[arg(long, default_value_t = false)]
    desc: bool,

    /// 1-based page of paginated tables.
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Mock feed seed. Overrides the config file.
    #[arg(long)]
    seed: Option<u64>,
}

impl ViewArgs {
    fn options(&self) -> ViewOptions {
        let direction = match (self.asc, self.desc) {
            (true, _) => Some(SortDirection::Ascending),
            (_, true) => Some(SortDirection::Descending),
            _ => None,
        };
        ViewOptions {
            query: self.query.clone(),
            facet: self.filter.clone(),
            sort: self.sort.clone(),
            direction,
            page: self.page,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TableName {
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

/// Build the named table's engine and run `$body` on it as `$engine`.
macro_rules! with_table {
    ($name:expr, $config:expr, $seed:expr, |$engine:ident| $body:expr) => {
        match $name {
            TableName::Coins => {
                let mut $engine = tables::coins(CoinFeed::new($seed).snapshot(), $config);
                $body
            }
            TableName::Attribution => {
                let mut $engine = tables::attribution($config);
                $body
            }
            TableName::Transactions => {
                let mut $engine = tables::transactions($config);
                $body
            }
            TableName::Holdings => {
                let mut $engine = tables::holdings($config);
                $body
            }
            TableName::Risk => {
                let mut $engine = tables::risk($config);
                $body
            }
            TableName::Market => {
                let mut $engine = tables::market($config);
                $body
            }
            TableName::News => {
                let mut $engine = tables::news($config);
                $body
            }
            TableName::Social => {
                let mut $engine = tables::social($config);
                $body
            }
            TableName::Notes => {
                let mut $engine = tables::notes($config);
                $body
            }
        }
    };
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cryptodash");
    let config = load_config(cli.config.as_deref(), &config_dir)?;

    match cli.command {
        Commands::Table { table, view } => run_table(table, &view, &config),
        Commands::Export {
            table,
            select,
            all,
            out,
            view,
        } => run_export(table, &view, &select, all, out.as_deref(), &config),
        Commands::Indicators { toggle, prefs } => {
            let path = prefs.unwrap_or_else(|| config_dir.join("preferences.json"));
            run_indicators(&path, toggle.as_deref(), &mut std::io::stdout().lock())
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Warnings only, or everything from debug up with `--verbose`. Stdout
/// stays clean for table and CSV output.
fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .context("failed to install logger")?;
    Ok(())
}

/// An explicit `--config` must exist; the default location may be absent.
fn load_config(explicit: Option<&Path>, config_dir: &Path) -> Result<DashboardConfig> {
    let config = match explicit {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::load_or_default(&config_dir.join("config.toml"))?,
    };
    Ok(config)
}

fn run_table(table: TableName, view: &ViewArgs, config: &DashboardConfig) -> Result<()> {
    let seed = view.seed.or(config.seed);
    let opts = view.options();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    with_table!(table, config, seed, |engine| {
        view::apply(&mut engine, &opts)?;
        view::render(&engine, &mut out)?;
    });
    Ok(())
}

fn run_export(
    table: TableName,
    view: &ViewArgs,
    select: &[String],
    all: bool,
    out: Option<&Path>,
    config: &DashboardConfig,
) -> Result<()> {
    if select.is_empty() && !all {
        bail!("nothing to export: pass --select <ID> or --all");
    }
    let seed = view.seed.or(config.seed);
    let opts = view.options();
    with_table!(table, config, seed, |engine| {
        view::apply(&mut engine, &opts)?;
        view::select(&mut engine, select, all)?;
        match out {
            Some(path) => {
                let written = export_selected(&engine, path)?;
                eprintln!("Wrote {written} rows to {}", path.display());
            }
            None => {
                let rows = engine.selected_rows();
                if rows.is_empty() {
                    bail!("no rows selected");
                }
                write_rows(&rows, std::io::stdout().lock())?;
            }
        }
    });
    Ok(())
}

/// Optionally toggle one indicator, then list all of them with the enabled
/// ones marked.
fn run_indicators<W: Write>(path: &Path, toggle: Option<&str>, out: &mut W) -> Result<()> {
    let mut store = PreferenceStore::load(path);
    let enabled = match toggle {
        Some(id) => {
            let Some(indicator) = Indicator::from_id(id) else {
                let known: Vec<&str> = Indicator::ALL.iter().map(|i| i.id()).collect();
                bail!("unknown indicator `{id}`; expected one of: {}", known.join(", "));
            };
            store
                .toggle_indicator(indicator)
                .with_context(|| format!("failed to save {}", path.display()))?
        }
        None => store.chart_indicators(),
    };
    for indicator in Indicator::ALL {
        let mark = if enabled.contains(&indicator) { "x" } else { " " };
        writeln!(out, "[{mark}] {:<5} {}", indicator.id(), indicator.label())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indicators(path: &Path, toggle: Option<&str>) -> Result<String> {
        let mut out = Vec::new();
        run_indicators(path, toggle, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn indicators_list_defaults_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        let text = indicators(&path, None).unwrap();
        assert!(text.contains("[x] MA20"));
        assert!(text.contains("[x] MA50"));
        assert!(text.contains("[ ] RSI"));
        assert_eq!(text.lines().count(), Indicator::ALL.len());
        assert!(!path.exists());
    }

    #[test]
    fn indicator_toggle_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        let text = indicators(&path, Some("rsi")).unwrap();
        assert!(text.contains("[x] RSI"));

        let text = indicators(&path, None).unwrap();
        assert!(text.contains("[x] RSI"));
        assert_eq!(PreferenceStore::load(&path).chart_indicators().len(), 3);

        indicators(&path, Some("MA20")).unwrap();
        assert!(indicators(&path, None).unwrap().contains("[ ] MA20"));
    }

    #[test]
    fn unknown_indicator_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        let err = indicators(&path, Some("BOLL")).unwrap_err().to_string();
        assert!(err.contains("MACD"), "{err}");
        assert!(!path.exists());
    }

    #[test]
    fn failed_save_is_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let err = indicators(&blocker.join("preferences.json"), Some("RSI")).unwrap_err();
        assert!(err.to_string().starts_with("failed to save"));
    }
}
