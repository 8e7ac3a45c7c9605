//! Filter-by-topic page: the theses of one topic and its yearly share.

use super::{Notice, sort_by_year_then_prob};
use crate::{Dataset, join::DocumentWithTopic, topic::TopicTrend};

#[derive(Debug, Clone, PartialEq)]
pub struct TopicFilter<'a> {
  pub topic:     i64,
  pub label:     Option<&'a str>,
  pub keywords:  Option<&'a str>,
  /// Year ascending, then probability descending.
  pub documents: Vec<&'a DocumentWithTopic>,
  /// Year ascending.
  pub trend:     Vec<&'a TopicTrend>,
}

impl TopicFilter<'_> {
  pub fn notice(&self) -> Option<Notice> {
    self.trend.is_empty().then_some(Notice::NoTimeSeries)
  }
}

pub fn filter_by_topic(ds: &Dataset, topic: i64) -> TopicFilter<'_> {
  let mut documents: Vec<&DocumentWithTopic> = ds
    .doc_with_topic
    .iter()
    .filter(|r| r.topic == topic)
    .collect();
  sort_by_year_then_prob(&mut documents);

  let mut trend: Vec<&TopicTrend> = ds.trends.iter().filter(|t| t.topic == topic).collect();
  trend.sort_by_key(|t| t.year);

  let row = ds.topic(topic);
  TopicFilter {
    topic,
    label: row.and_then(|t| t.label.as_deref()),
    keywords: row.and_then(|t| t.keywords.as_deref()),
    documents,
    trend,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::query::fixture::{self, assign, doc};

  #[test]
  fn documents_sorted_by_year_then_probability() {
    let mut ds = fixture::dataset();
    ds.documents.push(doc("d6", Some(2020), "a2", "Bruno Lima"));
    ds.doc_topics.push(assign("d6", 1, 0.95));
    let ds = Dataset::from_parts(
      ds.documents,
      ds.topics,
      ds.doc_topics,
      ds.trends,
      ds.advisor_profiles,
      ds.advisor_topics,
      ds.manifest,
    );

    let f = filter_by_topic(&ds, 1);
    let ids: Vec<&str> = f.documents.iter().map(|r| r.doc_id.as_str()).collect();
    assert_eq!(ids, vec!["d6", "d1", "d2"]);
    assert_eq!(f.label, Some("Redes"));
    assert_eq!(f.keywords, Some("kw1"));
    assert_eq!(f.notice(), None);

    let years: Vec<i64> = f.trend.iter().map(|t| t.year).collect();
    assert_eq!(years, vec![2020, 2021]);
  }

  #[test]
  fn outlier_topic_is_filterable() {
    let ds = fixture::dataset();
    let f = filter_by_topic(&ds, -1);
    assert_eq!(f.documents.len(), 1);
    assert_eq!(f.documents[0].doc_id, "d4");
  }

  #[test]
  fn topic_without_trends_raises_notice() {
    let ds = fixture::dataset();
    let f = filter_by_topic(&ds, 3);
    assert!(f.trend.is_empty());
    assert!(f.documents.is_empty());
    assert_eq!(f.notice(), Some(Notice::NoTimeSeries));
  }

  #[test]
  fn unknown_topic_has_no_label_or_keywords() {
    let ds = fixture::dataset();
    let f = filter_by_topic(&ds, 42);
    assert_eq!(f.label, None);
    assert_eq!(f.keywords, None);
  }
}
