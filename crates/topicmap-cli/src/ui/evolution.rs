//! Topic evolution page: multi-topic picker and share-per-year chart.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::Style,
  text::{Line, Span},
  widgets::{List, ListItem, ListState},
};
use topicmap_core::{
  format::{PLACEHOLDER, decode_topic_selection},
  query::{self, MAX_EVOLUTION_TOPICS},
};

use super::{PALETTE, Series, draw_line_chart, draw_notice, panel, selected_style};
use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(32), Constraint::Percentage(68)])
    .split(area);

  let evolution = query::topic_evolution(&app.dataset, &app.evolution_picks);

  // Picked topics keep their palette colour across frames.
  let color_of = |topic: i64| {
    evolution
      .selected
      .iter()
      .position(|t| *t == topic)
      .map(|i| PALETTE[i % PALETTE.len()])
  };

  let items: Vec<ListItem> = app
    .topic_options
    .iter()
    .map(|display| {
      let color = decode_topic_selection(display).ok().and_then(color_of);
      let mark = if color.is_some() { "[x] " } else { "[ ] " };
      let style = color.map_or_else(Style::default, |c| Style::default().fg(c));
      ListItem::new(Line::from(vec![Span::styled(mark, style), Span::raw(display.as_str())]))
    })
    .collect();

  let mut state = ListState::default();
  state.select((!app.topic_options.is_empty()).then_some(app.evolution_cursor));
  f.render_stateful_widget(
    List::new(items)
      .block(panel(format!(
        " Topics ({}/{MAX_EVOLUTION_TOPICS}) ",
        evolution.selected.len()
      )))
      .highlight_style(selected_style()),
    cols[0],
    &mut state,
  );

  if let Some(notice) = evolution.notice() {
    draw_notice(f, cols[1], "Share per year", notice);
    return;
  }

  let series: Vec<Series> = evolution
    .series
    .iter()
    .map(|s| Series {
      name:   format!("[{}] {}", s.topic, s.label.unwrap_or(PLACEHOLDER)),
      color:  color_of(s.topic).unwrap_or(PALETTE[0]),
      points: s.points.iter().map(|t| (t.year as f64, t.share)).collect(),
    })
    .collect();

  draw_line_chart(f, cols[1], "Share per year", &series, true);
}
