//! Advisor profile page.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Style},
  text::Line,
  widgets::{Bar, BarChart, BarGroup, Cell, List, ListItem, ListState, Row, Table, TableState},
};
use topicmap_core::{
  format::{PLACEHOLDER, human_pct, or_placeholder},
  query::{self, AdvisorProfileView, Notice},
};

use super::{draw_metrics, draw_notice, header_style, panel, selected_style};
use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let page = query::profile_page(&app.dataset, app.selected_advisor());

  if page.options.is_empty() {
    draw_notice(f, area, "Advisor", Notice::NoAdvisors);
    return;
  }

  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(28), Constraint::Percentage(72)])
    .split(area);

  let items: Vec<ListItem> = page.options.iter().map(|n| ListItem::new(*n)).collect();
  let mut state = ListState::default();
  state.select(Some(app.advisor_cursor));
  f.render_stateful_widget(
    List::new(items)
      .block(panel(" Advisor "))
      .highlight_style(selected_style()),
    cols[0],
    &mut state,
  );

  match &page.selected {
    Some(view) => draw_view(f, cols[1], view, app.table_scroll),
    None => draw_notice(f, cols[1], "Profile", Notice::NoAdvisors),
  }
}

fn draw_view(f: &mut Frame, area: Rect, view: &AdvisorProfileView, scroll: usize) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(3),
      Constraint::Percentage(50),
      Constraint::Min(6),
    ])
    .split(area);

  let p = view.profile;
  draw_metrics(f, rows[0], &[
    ("Theses supervised", p.thesis_count.to_string()),
    ("Years active", p.years_active.to_string()),
    ("Main topics", or_placeholder(p.top_topics.as_deref())),
  ]);

  let body: Vec<Row> = view
    .theses
    .iter()
    .map(|d| {
      Row::new(vec![
        Cell::from(d.doc_id.clone()),
        Cell::from(or_placeholder(d.year)),
        Cell::from(or_placeholder(d.title.as_deref())),
        Cell::from(or_placeholder(d.label.as_deref())),
        Cell::from(d.prob.map_or_else(|| PLACEHOLDER.to_string(), |p| format!("{p:.3}"))),
        Cell::from(d.topic.to_string()),
      ])
    })
    .collect();

  let table = Table::new(body, [
    Constraint::Length(10),
    Constraint::Length(5),
    Constraint::Percentage(45),
    Constraint::Percentage(25),
    Constraint::Length(6),
    Constraint::Length(6),
  ])
  .header(Row::new(vec!["ID", "Year", "Title", "Label", "Prob", "Topic"]).style(header_style()))
  .block(panel(format!(" Supervised theses of {} ", or_placeholder(p.advisor_name.as_deref()))));

  let mut state = TableState::default().with_offset(scroll.min(view.theses.len().saturating_sub(1)));
  f.render_stateful_widget(table, rows[1], &mut state);

  if let Some(notice) = view.notice() {
    draw_notice(f, rows[2], "Topic distribution", notice);
    return;
  }

  let bars: Vec<Bar> = view
    .distribution
    .iter()
    .map(|c| {
      Bar::default()
        .label(Line::from(c.label.unwrap_or(PLACEHOLDER).to_string()))
        .value(c.n_docs.max(0) as u64)
        .text_value(format!("{} ({})", c.n_docs, human_pct(c.share)))
        .style(Style::default().fg(Color::Magenta))
    })
    .collect();

  f.render_widget(
    BarChart::default()
      .block(panel(" Topic distribution (theses per topic) "))
      .direction(Direction::Horizontal)
      .bar_width(1)
      .bar_gap(0)
      .value_style(Style::default().fg(Color::Black).bg(Color::Magenta))
      .data(BarGroup::default().bars(&bars)),
    rows[2],
  );
}
