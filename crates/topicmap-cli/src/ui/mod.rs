//! TUI rendering: orchestrates all panes.

pub mod advisors;
pub mod evolution;
pub mod manifest;
pub mod overview;
pub mod profile;
pub mod topic_filter;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  symbols::Marker,
  text::{Line, Span},
  widgets::{
    Axis, Block, Borders, Chart, Dataset as ChartDataset, GraphType, List, ListItem, ListState,
    Paragraph, Wrap,
  },
};
use topicmap_core::query::Notice;

use crate::app::{App, Page};

/// Series colours, cycled by series index.
pub const PALETTE: [Color; 6] = [
  Color::Cyan,
  Color::Yellow,
  Color::Magenta,
  Color::Green,
  Color::LightRed,
  Color::LightBlue,
];

/// Footer credits, always shown at the right of the status bar.
pub const CREDITS: &str =
  "Undergraduate thesis in Computer Science (UFCG) · Topic mapping with BERTopic · Dashboard by Daniel Dantas";

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: header, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0]);
  draw_body(f, rows[1], app);
  draw_status(f, rows[2], app);
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let left = Span::styled(
    " topicmap  thesis topic mapping",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(format!("{date} "), Style::default().fg(Color::Gray));

  // Simple left-right header: pad the middle.
  let pad = area
    .width
    .saturating_sub(left.width() as u16)
    .saturating_sub(right.width() as u16);

  let line = Line::from(vec![left, Span::raw(" ".repeat(pad as usize)), right]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::DarkGray)),
    area,
  );
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
  let mut constraints = vec![Constraint::Length(26), Constraint::Min(0)];
  if app.show_manifest {
    constraints.push(Constraint::Length(36));
  }
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints(constraints)
    .split(area);

  draw_nav(f, cols[0], app);

  // Exactly one query pathway runs per frame.
  match app.page {
    Page::Overview => overview::draw(f, cols[1], app),
    Page::SearchAdvisors => advisors::draw(f, cols[1], app),
    Page::FilterByTopic => topic_filter::draw(f, cols[1], app),
    Page::AdvisorProfile => profile::draw(f, cols[1], app),
    Page::TopicEvolution => evolution::draw(f, cols[1], app),
  }

  if app.show_manifest {
    manifest::draw(f, cols[2], &app.dataset.manifest);
  }
}

fn draw_nav(f: &mut Frame, area: Rect, app: &App) {
  let items: Vec<ListItem> = Page::ALL
    .iter()
    .enumerate()
    .map(|(i, page)| ListItem::new(format!("{} {}", i + 1, page.title())))
    .collect();

  let mut state = ListState::default();
  state.select(Some(app.page.index()));

  f.render_stateful_widget(
    List::new(items)
      .block(panel(" Navigation "))
      .highlight_style(selected_style())
      .highlight_symbol("▶ "),
    area,
    &mut state,
  );
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = match app.page {
    Page::SearchAdvisors if app.search_active => ("SEARCH", "Type to filter  Esc clear  Enter done"),
    Page::SearchAdvisors => ("NORMAL", "/ search  ↑↓ scroll  1-5/Tab page  m manifest  q quit"),
    Page::FilterByTopic | Page::AdvisorProfile => (
      "NORMAL",
      "↑↓/jk select  PgUp/PgDn scroll  1-5/Tab page  m manifest  q quit",
    ),
    Page::TopicEvolution => ("NORMAL", "↑↓/jk move  Space pick (max 6)  1-5/Tab page  m manifest  q quit"),
    Page::Overview => ("NORMAL", "1-5/Tab page  m manifest  q quit"),
  };

  let status = if app.status_msg.is_empty() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(format!("  {status}"), Style::default().fg(Color::Gray));
  let credits_span = Span::styled(format!("{CREDITS} "), Style::default().fg(Color::DarkGray));

  let pad = area
    .width
    .saturating_sub(mode_span.width() as u16)
    .saturating_sub(hint_span.width() as u16)
    .saturating_sub(credits_span.width() as u16)
    .max(2);

  let line = Line::from(vec![
    mode_span,
    hint_span,
    Span::raw(" ".repeat(pad as usize)),
    credits_span,
  ]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}

// ─── Shared widgets ───────────────────────────────────────────────────────────

/// Bordered block with a dim border, used by every pane.
pub fn panel(title: impl Into<Line<'static>>) -> Block<'static> {
  Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray))
}

pub fn selected_style() -> Style {
  Style::default()
    .bg(Color::Blue)
    .fg(Color::White)
    .add_modifier(Modifier::BOLD)
}

pub fn header_style() -> Style {
  Style::default()
    .fg(Color::Cyan)
    .add_modifier(Modifier::BOLD)
}

/// Render a non-blocking notice inside a titled panel.
pub fn draw_notice(f: &mut Frame, area: Rect, title: &str, notice: Notice) {
  f.render_widget(
    Paragraph::new(notice.message())
      .style(Style::default().fg(Color::Yellow))
      .wrap(Wrap { trim: true })
      .block(panel(format!(" {title} "))),
    area,
  );
}

/// A row of metric cards, one per `(title, value)`.
pub fn draw_metrics(f: &mut Frame, area: Rect, metrics: &[(&str, String)]) {
  let n = metrics.len().max(1) as u32;
  let cells = Layout::default()
    .direction(Direction::Horizontal)
    .constraints(metrics.iter().map(|_| Constraint::Ratio(1, n)))
    .split(area);

  for ((title, value), cell) in metrics.iter().zip(cells.iter()) {
    f.render_widget(
      Paragraph::new(Line::from(Span::styled(
        value.clone(),
        Style::default().add_modifier(Modifier::BOLD),
      )))
      .wrap(Wrap { trim: true })
      .block(panel(format!(" {title} "))),
      *cell,
    );
  }
}

/// One line of a line chart.
pub struct Series {
  pub name:   String,
  pub color:  Color,
  pub points: Vec<(f64, f64)>,
}

/// Line chart with one x tick per year and a y axis either as counts or as
/// percentages.
pub fn draw_line_chart(f: &mut Frame, area: Rect, title: &str, series: &[Series], y_as_pct: bool) {
  let xs = series.iter().flat_map(|s| s.points.iter().map(|p| p.0));
  let (x_min, x_max) = xs.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
    (lo.min(x), hi.max(x))
  });
  let y_max = series
    .iter()
    .flat_map(|s| s.points.iter().map(|p| p.1))
    .fold(0.0_f64, f64::max);

  let (x_min, x_max) = if x_min.is_finite() {
    (x_min, x_max.max(x_min + 1.0))
  } else {
    (0.0, 1.0)
  };
  let y_top = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };

  let datasets: Vec<ChartDataset> = series
    .iter()
    .map(|s| {
      ChartDataset::default()
        .name(s.name.clone())
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(s.color))
        .data(&s.points)
    })
    .collect();

  let y_label = |v: f64| {
    if y_as_pct {
      format!("{:.0}%", v * 100.0)
    } else {
      format!("{v:.0}")
    }
  };

  let chart = Chart::new(datasets)
    .block(panel(format!(" {title} ")))
    .x_axis(
      Axis::default()
        .style(Style::default().fg(Color::Gray))
        .bounds([x_min, x_max])
        .labels(vec![
          format!("{x_min:.0}"),
          format!("{:.0}", (x_min + x_max) / 2.0),
          format!("{x_max:.0}"),
        ]),
    )
    .y_axis(
      Axis::default()
        .style(Style::default().fg(Color::Gray))
        .bounds([0.0, y_top])
        .labels(vec![y_label(0.0), y_label(y_top / 2.0), y_label(y_top)]),
    );

  f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
  use ratatui::{Terminal, backend::TestBackend};
  use topicmap_core::{Dataset, advisor::AdvisorProfile, manifest::Manifest};

  use super::*;

  fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(240, 40)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    terminal
      .backend()
      .buffer()
      .content()
      .iter()
      .map(|c| c.symbol())
      .collect()
  }

  #[test]
  fn credits_stay_visible_with_a_status_message() {
    let mut app = App::new(Dataset::default(), Page::Overview);
    assert!(render(&app).contains("Dashboard by Daniel Dantas"));

    app.status_msg = "At most 6 topics can be compared.".into();
    let screen = render(&app);
    assert!(screen.contains("At most 6 topics"));
    assert!(screen.contains("Topic mapping with BERTopic"));
  }

  #[test]
  fn profile_table_separates_label_and_topic_id() {
    let dataset = Dataset::from_parts(
      vec![],
      vec![],
      vec![],
      vec![],
      vec![AdvisorProfile {
        advisor_id:   "a1".into(),
        advisor_name: Some("Ana".into()),
        thesis_count: 0,
        years_active: 0,
        top_topics:   None,
      }],
      vec![],
      Manifest::empty(),
    );
    let app = App::new(dataset, Page::AdvisorProfile);
    let screen = render(&app);
    assert!(screen.contains("Label"));
    assert!(screen.contains("Supervised theses of Ana"));
    assert!(!screen.contains(" Id "));
  }

  #[test]
  fn manifest_panel_shows_missing_notice() {
    let mut app = App::new(Dataset::default(), Page::Overview);
    app.show_manifest = true;
    assert!(render(&app).contains("Manifest not found"));
  }
}
