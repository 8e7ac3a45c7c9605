//! Page router, widget state and key dispatcher.

use clap::ValueEnum;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use topicmap_core::{
  Dataset,
  format::decode_topic_selection,
  query::{self, MAX_EVOLUTION_TOPICS},
};
use tracing::debug;

// ─── Page ─────────────────────────────────────────────────────────────────────

/// The five mutually exclusive views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Page {
  Overview,
  SearchAdvisors,
  FilterByTopic,
  AdvisorProfile,
  TopicEvolution,
}

impl Page {
  pub const ALL: [Page; 5] = [
    Page::Overview,
    Page::SearchAdvisors,
    Page::FilterByTopic,
    Page::AdvisorProfile,
    Page::TopicEvolution,
  ];

  pub fn title(self) -> &'static str {
    match self {
      Page::Overview => "Overview",
      Page::SearchAdvisors => "Search advisors",
      Page::FilterByTopic => "Filter theses by topic",
      Page::AdvisorProfile => "Advisor profile",
      Page::TopicEvolution => "Topic evolution",
    }
  }

  pub fn index(self) -> usize {
    Page::ALL.iter().position(|p| *p == self).unwrap_or_default()
  }

  fn next(self) -> Page {
    Page::ALL[(self.index() + 1) % Page::ALL.len()]
  }

  fn prev(self) -> Page {
    Page::ALL[(self.index() + Page::ALL.len() - 1) % Page::ALL.len()]
  }
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
///
/// Only `page` drives which query runs; the other fields are the inputs of
/// the widgets on each page.
pub struct App {
  /// Currently selected page.
  pub page: Page,

  /// Session snapshot; never mutated after load.
  pub dataset: Dataset,

  /// `[id] label` strings for every topic, in id order.
  pub topic_options: Vec<String>,

  /// Advisor search text.
  pub search: String,

  /// Whether the user is typing into the search box.
  pub search_active: bool,

  /// Cursor within the topic selector (filter page).
  pub topic_cursor: usize,

  /// Cursor within the advisor selector (profile page).
  pub advisor_cursor: usize,

  /// Cursor within the evolution topic picker.
  pub evolution_cursor: usize,

  /// Topics picked for the evolution chart, in pick order.
  pub evolution_picks: Vec<i64>,

  /// Scroll offset of the active page's main table.
  pub table_scroll: usize,

  /// Whether the manifest side panel is shown.
  pub show_manifest: bool,

  /// One-line status message shown in the status bar.
  pub status_msg: String,
}

impl App {
  pub fn new(dataset: Dataset, page: Page) -> Self {
    let topic_options = dataset.topic_options();
    let evolution_picks = query::default_evolution_selection(&dataset);
    Self {
      page,
      dataset,
      topic_options,
      search: String::new(),
      search_active: false,
      topic_cursor: 0,
      advisor_cursor: 0,
      evolution_cursor: 0,
      evolution_picks,
      table_scroll: 0,
      show_manifest: false,
      status_msg: String::new(),
    }
  }

  // ── Selections ────────────────────────────────────────────────────────────

  /// Topic id under the filter-page cursor, decoded from its display string.
  pub fn selected_topic(&self) -> Option<i64> {
    let display = self.topic_options.get(self.topic_cursor)?;
    decode_topic_selection(display).ok()
  }

  /// Advisor name under the profile-page cursor.
  pub fn selected_advisor(&self) -> Option<&str> {
    query::advisor_options(&self.dataset)
      .get(self.advisor_cursor)
      .copied()
  }

  fn advisor_count(&self) -> usize {
    query::advisor_options(&self.dataset).len()
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub fn handle_key(&mut self, key: KeyEvent) -> bool {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    // Search input mode: printable keys go into the search string.
    if self.search_active {
      self.handle_search_key(key);
      return true;
    }

    self.status_msg.clear();
    match key.code {
      KeyCode::Char('q') => return false,
      KeyCode::Tab => self.goto(self.page.next()),
      KeyCode::BackTab => self.goto(self.page.prev()),
      KeyCode::Char(c @ '1'..='5') => {
        let idx = c as usize - '1' as usize;
        self.goto(Page::ALL[idx]);
      }
      KeyCode::Char('m') => self.show_manifest = !self.show_manifest,
      KeyCode::PageDown | KeyCode::Char('J') => self.table_scroll += 1,
      KeyCode::PageUp | KeyCode::Char('K') => {
        self.table_scroll = self.table_scroll.saturating_sub(1);
      }
      _ => self.handle_page_key(key),
    }
    true
  }

  fn goto(&mut self, page: Page) {
    if page != self.page {
      debug!(from = ?self.page, to = ?page, "page change");
      self.page = page;
      self.table_scroll = 0;
    }
  }

  fn handle_search_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => {
        self.search_active = false;
        self.search.clear();
      }
      KeyCode::Enter => self.search_active = false,
      KeyCode::Backspace => {
        self.search.pop();
      }
      KeyCode::Char(c) => self.search.push(c),
      _ => {}
    }
    self.table_scroll = 0;
  }

  fn handle_page_key(&mut self, key: KeyEvent) {
    let down = matches!(key.code, KeyCode::Down | KeyCode::Char('j'));
    let up = matches!(key.code, KeyCode::Up | KeyCode::Char('k'));

    match self.page {
      Page::Overview => {}
      Page::SearchAdvisors => {
        if key.code == KeyCode::Char('/') {
          self.search_active = true;
          self.search.clear();
        } else if down {
          self.table_scroll += 1;
        } else if up {
          self.table_scroll = self.table_scroll.saturating_sub(1);
        }
      }
      Page::FilterByTopic => {
        if step(&mut self.topic_cursor, self.topic_options.len(), up, down) {
          self.table_scroll = 0;
        }
      }
      Page::AdvisorProfile => {
        let count = self.advisor_count();
        if count == 0 {
          return;
        }
        if step(&mut self.advisor_cursor, count, up, down) {
          self.table_scroll = 0;
        }
      }
      Page::TopicEvolution => {
        step(&mut self.evolution_cursor, self.topic_options.len(), up, down);
        if key.code == KeyCode::Char(' ') {
          self.toggle_evolution_pick();
        }
      }
    }
  }

  fn toggle_evolution_pick(&mut self) {
    let Some(display) = self.topic_options.get(self.evolution_cursor) else {
      return;
    };
    let topic = match decode_topic_selection(display) {
      Ok(t) => t,
      Err(e) => {
        self.status_msg = e.to_string();
        return;
      }
    };

    if let Some(pos) = self.evolution_picks.iter().position(|t| *t == topic) {
      self.evolution_picks.remove(pos);
    } else if self.evolution_picks.len() >= MAX_EVOLUTION_TOPICS {
      self.status_msg = format!("At most {MAX_EVOLUTION_TOPICS} topics can be compared.");
    } else {
      self.evolution_picks.push(topic);
    }
  }
}

/// Move `cursor` one step within `0..len`. Returns whether it moved.
fn step(cursor: &mut usize, len: usize, up: bool, down: bool) -> bool {
  if down && *cursor + 1 < len {
    *cursor += 1;
    true
  } else if up && *cursor > 0 {
    *cursor -= 1;
    true
  } else {
    false
  }
}
