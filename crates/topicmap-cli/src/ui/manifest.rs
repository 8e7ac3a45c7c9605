//! Manifest side panel: provenance of the loaded snapshot.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Style},
  text::{Line, Span},
  widgets::{Paragraph, Wrap},
};
use topicmap_core::{
  format::{human_pct, or_placeholder},
  manifest::Manifest,
  query::Notice,
};

use super::{draw_notice, header_style, panel};

const TITLE: &str = "Artifacts & run";

pub fn draw(f: &mut Frame, area: Rect, manifest: &Manifest) {
  if manifest.is_empty() {
    draw_notice(f, area, TITLE, Notice::ManifestMissing);
    return;
  }

  f.render_widget(
    Paragraph::new(lines(manifest))
      .wrap(Wrap { trim: true })
      .block(panel(format!(" {TITLE} "))),
    area,
  );
}

fn lines(m: &Manifest) -> Vec<Line<'static>> {
  let mut out = vec![field("Generated", or_placeholder(m.generated_at()))];

  if m.has_selection() {
    out.push(field("Model", or_placeholder(m.method())));
    out.push(field(
      "Run/Trial",
      format!("{} / {}", or_placeholder(m.run()), or_placeholder(m.trial())),
    ));
    out.push(field("K", or_placeholder(m.k())));
    out.push(field("Outliers (reported)", human_pct(m.reported_outliers_pct())));
  }

  out.push(field("Docs", or_placeholder(m.corpus_docs())));
  out.push(field(
    "Years",
    format!("{}–{}", or_placeholder(m.year_min()), or_placeholder(m.year_max())),
  ));
  out
}

fn field(name: &'static str, value: String) -> Line<'static> {
  Line::from(vec![
    Span::styled(format!("{name}: "), header_style()),
    Span::styled(value, Style::default().fg(Color::White)),
  ])
}
