//! Topic evolution page: yearly share of a handful of topics.

use tracing::warn;

use super::Notice;
use crate::{Dataset, topic::TopicTrend};

/// Most topics the evolution chart compares at once.
pub const MAX_EVOLUTION_TOPICS: usize = 6;

/// Topics preselected when the page first opens.
pub const DEFAULT_EVOLUTION_TOPICS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Evolution<'a> {
  /// Selected topic ids, deduplicated, in selection order.
  pub selected: Vec<i64>,
  /// One series per selected topic with trend rows, by topic id.
  pub series:   Vec<TrendSeries<'a>>,
}

impl Evolution<'_> {
  pub fn notice(&self) -> Option<Notice> {
    self.selected.is_empty().then_some(Notice::NoTopicsSelected)
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries<'a> {
  pub topic:  i64,
  pub label:  Option<&'a str>,
  /// Year ascending.
  pub points: Vec<&'a TopicTrend>,
}

/// The first [`DEFAULT_EVOLUTION_TOPICS`] topic ids.
pub fn default_evolution_selection(ds: &Dataset) -> Vec<i64> {
  ds.topics
    .iter()
    .take(DEFAULT_EVOLUTION_TOPICS)
    .map(|t| t.topic)
    .collect()
}

pub fn topic_evolution<'a>(ds: &'a Dataset, picks: &[i64]) -> Evolution<'a> {
  let mut selected: Vec<i64> = Vec::with_capacity(picks.len().min(MAX_EVOLUTION_TOPICS));
  for &p in picks {
    if !selected.contains(&p) {
      selected.push(p);
    }
  }
  if selected.len() > MAX_EVOLUTION_TOPICS {
    warn!(
      requested = selected.len(),
      max = MAX_EVOLUTION_TOPICS,
      "too many topics selected for evolution; keeping the first ones"
    );
    selected.truncate(MAX_EVOLUTION_TOPICS);
  }

  let mut ids = selected.clone();
  ids.sort_unstable();

  let series = ids
    .into_iter()
    .filter_map(|topic| {
      let mut points: Vec<&TopicTrend> = ds.trends.iter().filter(|t| t.topic == topic).collect();
      if points.is_empty() {
        return None;
      }
      points.sort_by_key(|t| t.year);
      Some(TrendSeries { topic, label: ds.label_of(topic), points })
    })
    .collect();

  Evolution { selected, series }
}
