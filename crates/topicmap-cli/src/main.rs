//! `topicmap`: terminal dashboard over the thesis topic-mapping exports.
//!
//! # Usage
//!
//! ```
//! topicmap --data-dir data/exports/dashboard
//! topicmap --config topicmap.toml --page topic-evolution
//! ```

mod app;
mod ui;

use std::{
  fs::File,
  io,
  path::{Path, PathBuf},
  sync::Mutex,
  time::Duration,
};

use anyhow::{Context, Result};
use app::{App, Page};
use clap::Parser;
use crossterm::{
  event::{self, Event, KeyEventKind},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use serde::Deserialize;
use topicmap_core::Dataset;
use topicmap_store_parquet::ParquetStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "topicmap", version, about = "Terminal dashboard for thesis topic mapping")]
struct Args {
  /// Path to a TOML config file (data_dir, cache_capacity, log_file).
  #[arg(short, long, value_name = "FILE", default_value = "topicmap.toml")]
  config: PathBuf,

  /// Directory holding the parquet exports and `_manifest.json`.
  #[arg(short, long, env = "TOPICMAP_DATA_DIR", value_name = "DIR")]
  data_dir: Option<PathBuf>,

  /// Page shown on startup.
  #[arg(short, long, value_enum, default_value_t = Page::Overview)]
  page: Page,

  /// Write tracing output to this file.
  #[arg(long, env = "TOPICMAP_LOG_FILE", value_name = "FILE")]
  log_file: Option<PathBuf>,
}

// ─── Settings ─────────────────────────────────────────────────────────────────

/// Settings from the config file and `TOPICMAP_*` environment variables.
#[derive(Deserialize, Debug)]
#[serde(default)]
struct Settings {
  data_dir:       PathBuf,
  cache_capacity: usize,
  log_file:       Option<PathBuf>,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      data_dir:       PathBuf::from("data/exports/dashboard"),
      cache_capacity: 8,
      log_file:       None,
    }
  }
}

fn load_settings(path: &Path) -> Result<Settings> {
  config::Config::builder()
    .add_source(config::File::from(path).required(false))
    .add_source(config::Environment::with_prefix("TOPICMAP"))
    .build()
    .with_context(|| format!("reading config file {}", path.display()))?
    .try_deserialize()
    .context("parsing settings")
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  let args = Args::parse();
  let settings = load_settings(&args.config)?;

  // CLI flags override config file and environment, which override defaults.
  let data_dir = expand_tilde(args.data_dir.as_deref().unwrap_or(&settings.data_dir));
  let log_file = args.log_file.or(settings.log_file);

  // The terminal belongs to the UI, so tracing only goes to a file.
  if let Some(path) = &log_file {
    init_tracing(&expand_tilde(path))?;
  }

  let store = ParquetStore::with_capacity(data_dir, settings.cache_capacity);
  tracing::info!(data_dir = %store.data_dir().display(), "loading exports");
  let dataset = Dataset::load(&store)
    .with_context(|| format!("loading dashboard data from {}", store.data_dir().display()))?;

  let mut app = App::new(dataset, args.page);

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  // Run the event loop; restore terminal even on error.
  let run_result = run_event_loop(&mut terminal, &mut app);

  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

fn init_tracing(path: &Path) -> Result<()> {
  let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_ansi(false)
    .with_writer(Mutex::new(file))
    .init();
  Ok(())
}

// ─── Event loop ───────────────────────────────────────────────────────────────

fn run_event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
  loop {
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    if !event::poll(Duration::from_millis(250)).context("polling terminal events")? {
      continue;
    }

    match event::read().context("reading terminal event")? {
      Event::Key(key) if key.kind == KeyEventKind::Press => {
        if !app.handle_key(key) {
          break;
        }
      }
      // Terminal will redraw on next iteration.
      _ => {}
    }
  }

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
