//! Advisor search page: search box over a profile table.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Style},
  widgets::{Cell, Paragraph, Row, Table, TableState},
};
use topicmap_core::{
  format::{PLACEHOLDER, or_placeholder},
  query,
};

use super::{header_style, panel};
use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let search = query::search_advisors(&app.dataset, &app.search);

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Length(3), Constraint::Min(0)])
    .split(area);

  let input = if app.search_active {
    format!("{}_", app.search)
  } else if app.search.is_empty() {
    "press / to type part of an advisor's name".to_string()
  } else {
    app.search.clone()
  };
  let input_style = if app.search_active || !app.search.is_empty() {
    Style::default().fg(Color::Yellow)
  } else {
    Style::default().fg(Color::DarkGray)
  };
  f.render_widget(
    Paragraph::new(input)
      .style(input_style)
      .block(panel(" Advisor name ")),
    rows[0],
  );

  let body: Vec<Row> = search
    .results
    .iter()
    .map(|p| {
      Row::new(vec![
        Cell::from(or_placeholder(p.advisor_name.as_deref())),
        Cell::from(p.thesis_count.to_string()),
        Cell::from(p.years_active.to_string()),
        Cell::from(p.top_topics.clone().unwrap_or_else(|| PLACEHOLDER.to_string())),
      ])
    })
    .collect();

  let table = Table::new(body, [
    Constraint::Percentage(30),
    Constraint::Length(7),
    Constraint::Length(7),
    Constraint::Min(10),
  ])
  .header(Row::new(vec!["Advisor", "Theses", "Years", "Top topics"]).style(header_style()))
  .block(panel(format!(" Results: {} ", search.count())));

  let mut state = TableState::default().with_offset(app.table_scroll.min(search.count().saturating_sub(1)));
  f.render_stateful_widget(table, rows[1], &mut state);
}
