//! Overview page: headline metrics, top topics and documents per year.

use std::collections::BTreeMap;

use crate::{
  Dataset,
  format::{PLACEHOLDER, human_pct},
  topic::{OUTLIER_TOPIC, Topic, TopicTrend},
};

/// How many topics the "top topics" chart shows.
pub const TOP_TOPICS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Overview<'a> {
  pub total_docs:    usize,
  /// Earliest and latest year among dated documents.
  pub period:        Option<(i64, i64)>,
  /// Topics excluding the outlier sentinel.
  pub topic_count:   usize,
  /// Assignments to the outlier sentinel.
  pub outlier_count: usize,
  pub top_topics:    Vec<TopicShare<'a>>,
  pub docs_per_year: Vec<YearCount>,
  pub undated_docs:  usize,
}

impl Overview<'_> {
  /// `min–max`, or the placeholder when no document is dated.
  pub fn period_display(&self) -> String {
    match self.period {
      Some((min, max)) => format!("{min}–{max}"),
      None => PLACEHOLDER.to_string(),
    }
  }

  /// Outliers as a fraction of all documents; `None` without documents.
  pub fn outlier_share(&self) -> Option<f64> {
    (self.total_docs > 0).then(|| self.outlier_count as f64 / self.total_docs as f64)
  }

  pub fn outliers_display(&self) -> String {
    format!("{} ({})", self.outlier_count, human_pct(self.outlier_share()))
  }
}

/// Mean yearly share of one topic over the whole period.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicShare<'a> {
  pub topic:      i64,
  pub label:      Option<&'a str>,
  pub mean_share: f64,
  pub total_docs: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearCount {
  pub year:   i64,
  pub n_docs: usize,
}

pub fn overview(ds: &Dataset) -> Overview<'_> {
  let mut per_year: BTreeMap<i64, usize> = BTreeMap::new();
  let mut undated_docs = 0;
  for doc in &ds.documents {
    match doc.year {
      Some(y) => *per_year.entry(y).or_default() += 1,
      None => undated_docs += 1,
    }
  }

  let period = per_year
    .keys()
    .next()
    .copied()
    .zip(per_year.keys().next_back().copied());

  let mut top_topics = topic_shares(&ds.trends, &ds.topics);
  top_topics.truncate(TOP_TOPICS);

  Overview {
    total_docs: ds.documents.len(),
    period,
    topic_count: ds.topics.iter().filter(|t| !t.is_outlier()).count(),
    outlier_count: ds
      .doc_topics
      .iter()
      .filter(|dt| dt.topic == OUTLIER_TOPIC)
      .count(),
    top_topics,
    docs_per_year: per_year
      .into_iter()
      .map(|(year, n_docs)| YearCount { year, n_docs })
      .collect(),
    undated_docs,
  }
}

/// Group trends by topic into mean share and summed document count, label
/// them, and sort by mean share descending (ties by topic id).
pub fn topic_shares<'a>(trends: &[TopicTrend], topics: &'a [Topic]) -> Vec<TopicShare<'a>> {
  let mut groups: BTreeMap<i64, (f64, usize, i64)> = BTreeMap::new();
  for t in trends {
    let entry = groups.entry(t.topic).or_default();
    entry.0 += t.share;
    entry.1 += 1;
    entry.2 += t.n_docs;
  }

  let mut shares: Vec<TopicShare<'a>> = groups
    .into_iter()
    .map(|(topic, (sum, rows, total_docs))| TopicShare {
      topic,
      label: topics
        .iter()
        .find(|t| t.topic == topic)
        .and_then(|t| t.label.as_deref()),
      mean_share: sum / rows as f64,
      total_docs,
    })
    .collect();

  // Groups come out in topic order, so a stable sort keeps ties by id.
  shares.sort_by(|a, b| b.mean_share.total_cmp(&a.mean_share));
  shares
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;
  use crate::query::fixture::{self, trend};

  #[test]
  fn headline_metrics() {
    let ds = fixture::dataset();
    let o = overview(&ds);

    assert_eq!(o.total_docs, 4);
    assert_eq!(o.period, Some((2019, 2021)));
    assert_eq!(o.period_display(), "2019–2021");
    assert_eq!(o.topic_count, 3);
    assert_eq!(o.outlier_count, 1);
    assert_eq!(o.outliers_display(), "1 (25.0%)");
  }

  #[test]
  fn documents_per_year_ascending() {
    let ds = fixture::dataset();
    let o = overview(&ds);
    assert_eq!(
      o.docs_per_year,
      vec![
        YearCount { year: 2019, n_docs: 1 },
        YearCount { year: 2020, n_docs: 1 },
        YearCount { year: 2021, n_docs: 2 },
      ]
    );
    assert_eq!(o.undated_docs, 0);
  }

  #[test]
  fn mean_share_and_total_docs() {
    let topics = vec![fixture::topic(1, "Redes")];
    let trends = vec![trend(1, 2020, 0.2, 4), trend(1, 2021, 0.3, 6)];
    let shares = topic_shares(&trends, &topics);

    assert_eq!(shares.len(), 1);
    assert!((shares[0].mean_share - 0.25).abs() < 1e-12);
    assert_eq!(shares[0].total_docs, 10);
    assert_eq!(shares[0].label, Some("Redes"));
  }

  #[test]
  fn top_topics_sorted_with_ties_by_id() {
    let topics = vec![fixture::topic(1, "a"), fixture::topic(2, "b")];
    let trends = vec![
      trend(5, 2020, 0.4, 1),
      trend(2, 2020, 0.1, 1),
      trend(1, 2020, 0.1, 1),
      trend(3, 2020, 0.4, 1),
    ];
    let order: Vec<i64> = topic_shares(&trends, &topics).iter().map(|s| s.topic).collect();
    assert_eq!(order, vec![3, 5, 1, 2]);
  }

  #[test]
  fn top_topics_capped_at_ten() {
    let trends: Vec<_> = (0..15).map(|t| trend(t, 2020, t as f64 / 100.0, 1)).collect();
    let mut ds = fixture::dataset();
    ds.trends = trends;
    let o = overview(&ds);
    assert_eq!(o.top_topics.len(), TOP_TOPICS);
    assert_eq!(o.top_topics[0].topic, 14);
    assert!(o.top_topics[1].label.is_none());
  }

  #[test]
  fn zero_documents_render_placeholders() {
    let ds = Dataset::default();
    let o = overview(&ds);
    assert_eq!(o.total_docs, 0);
    assert_eq!(o.period, None);
    assert_eq!(o.period_display(), "–");
    assert_eq!(o.outlier_share(), None);
    assert_eq!(o.outliers_display(), "0 (–)");
    assert!(o.top_topics.is_empty());
  }

  #[test]
  fn undated_documents_are_counted_apart() {
    let mut ds = fixture::dataset();
    ds.documents.push(fixture::doc("d5", None, "a1", "Ana Souza"));
    let o = overview(&ds);
    assert_eq!(o.total_docs, 5);
    assert_eq!(o.undated_docs, 1);
    assert_eq!(o.period, Some((2019, 2021)));
  }
}
