//! Filter-by-topic page: topic selector, its theses and its yearly share.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  widgets::{Cell, List, ListItem, ListState, Paragraph, Row, Table, TableState, Wrap},
};
use topicmap_core::{
  format::{PLACEHOLDER, or_placeholder},
  join::DocumentWithTopic,
  query,
};

use super::{PALETTE, Series, draw_line_chart, draw_notice, header_style, panel, selected_style};
use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(32), Constraint::Percentage(68)])
    .split(area);

  draw_topic_selector(f, cols[0], &app.topic_options, app.topic_cursor, " Topic ");

  let Some(topic) = app.selected_topic() else {
    f.render_widget(panel(" Theses "), cols[1]);
    return;
  };
  let view = query::filter_by_topic(&app.dataset, topic);

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(3),
      Constraint::Percentage(55),
      Constraint::Min(6),
    ])
    .split(cols[1]);

  f.render_widget(
    Paragraph::new(or_placeholder(view.keywords))
      .wrap(Wrap { trim: true })
      .block(panel(format!(" Keywords of [{topic}] {} ", view.label.unwrap_or_default()))),
    rows[0],
  );

  let title = format!(" Theses in topic [{topic}]: {} documents ", view.documents.len());
  draw_documents(f, rows[1], &title, &view.documents, app.table_scroll);

  match view.notice() {
    Some(notice) => draw_notice(f, rows[2], "Share per year", notice),
    None => {
      let series = [Series {
        name:   view.label.unwrap_or(PLACEHOLDER).to_string(),
        color:  PALETTE[0],
        points: view
          .trend
          .iter()
          .map(|t| (t.year as f64, t.share))
          .collect(),
      }];
      draw_line_chart(f, rows[2], "Share per year", &series, true);
    }
  }
}

/// Scrollable `[id] label` list with the cursor highlighted.
pub fn draw_topic_selector(f: &mut Frame, area: Rect, options: &[String], cursor: usize, title: &str) {
  let items: Vec<ListItem> = options.iter().map(|o| ListItem::new(o.as_str())).collect();

  let mut state = ListState::default();
  state.select((!options.is_empty()).then_some(cursor));

  f.render_stateful_widget(
    List::new(items)
      .block(panel(title.to_string()))
      .highlight_style(selected_style()),
    area,
    &mut state,
  );
}

fn draw_documents(f: &mut Frame, area: Rect, title: &str, docs: &[&DocumentWithTopic], scroll: usize) {
  let body: Vec<Row> = docs
    .iter()
    .map(|d| {
      Row::new(vec![
        Cell::from(d.doc_id.clone()),
        Cell::from(or_placeholder(d.year)),
        Cell::from(or_placeholder(d.title.as_deref())),
        Cell::from(or_placeholder(d.advisor_name.as_deref())),
        Cell::from(d.prob.map_or_else(|| PLACEHOLDER.to_string(), |p| format!("{p:.3}"))),
        Cell::from(or_placeholder(d.url.as_deref())),
      ])
    })
    .collect();

  let table = Table::new(body, [
    Constraint::Length(10),
    Constraint::Length(5),
    Constraint::Percentage(40),
    Constraint::Percentage(20),
    Constraint::Length(6),
    Constraint::Min(10),
  ])
  .header(Row::new(vec!["ID", "Year", "Title", "Advisor", "Prob", "URL"]).style(header_style()))
  .block(panel(title.to_string()));

  let mut state = TableState::default().with_offset(scroll.min(docs.len().saturating_sub(1)));
  f.render_stateful_widget(table, area, &mut state);
}
