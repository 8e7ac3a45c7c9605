//! Overview page: headline metrics, top topics, theses per year.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Style},
  text::Line,
  widgets::{Bar, BarChart, BarGroup},
};
use topicmap_core::{
  format::{PLACEHOLDER, human_pct},
  query::{self, TopicShare},
};

use super::{PALETTE, Series, draw_line_chart, draw_metrics, panel};
use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let overview = query::overview(&app.dataset);

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(3),      // metrics
      Constraint::Percentage(55), // top topics
      Constraint::Min(6),         // per year
    ])
    .split(area);

  draw_metrics(f, rows[0], &[
    ("Theses", overview.total_docs.to_string()),
    ("Period", overview.period_display()),
    ("Topics (excl. -1)", overview.topic_count.to_string()),
    ("Outliers (docs)", overview.outliers_display()),
  ]);

  draw_top_topics(f, rows[1], &overview.top_topics);

  let mut title = String::from("Theses per year");
  if overview.undated_docs > 0 {
    title.push_str(&format!(" ({} undated)", overview.undated_docs));
  }
  let series = [Series {
    name:   "theses".into(),
    color:  PALETTE[0],
    points: overview
      .docs_per_year
      .iter()
      .map(|y| (y.year as f64, y.n_docs as f64))
      .collect(),
  }];
  draw_line_chart(f, rows[2], &title, &series, false);
}

/// Horizontal bars of mean share, labelled `label` and annotated with the
/// share and the summed document count.
fn draw_top_topics(f: &mut Frame, area: Rect, shares: &[TopicShare]) {
  let bars: Vec<Bar> = shares
    .iter()
    .map(|s| {
      Bar::default()
        .label(Line::from(s.label.unwrap_or(PLACEHOLDER).to_string()))
        // Bars are integral; per-mille keeps one decimal of a percentage.
        .value((s.mean_share * 1000.0).round().max(0.0) as u64)
        .text_value(format!("{} · {} docs", human_pct(Some(s.mean_share)), s.total_docs))
        .style(Style::default().fg(Color::Cyan))
    })
    .collect();

  let chart = BarChart::default()
    .block(panel(" Top topics (mean share over the period) "))
    .direction(Direction::Horizontal)
    .bar_width(1)
    .bar_gap(0)
    .value_style(Style::default().fg(Color::Black).bg(Color::Cyan))
    .data(BarGroup::default().bars(&bars));

  f.render_widget(chart, area);
}
