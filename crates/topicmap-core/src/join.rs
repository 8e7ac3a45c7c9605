//! The denormalized document-with-topic view.

use std::collections::HashMap;

use serde::Serialize;

use crate::{
  document::{Document, DocumentTopic},
  topic::Topic,
};

/// One topic assignment joined with its document and topic label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentWithTopic {
  pub doc_id:       String,
  pub topic:        i64,
  pub prob:         Option<f64>,
  pub year:         Option<i64>,
  pub title:        Option<String>,
  pub advisor_name: Option<String>,
  pub advisor_id:   Option<String>,
  pub url:          Option<String>,
  /// `None` when the assignment names a topic absent from the topics table.
  pub label:        Option<String>,
}

/// Join assignments to documents (inner, by document id) and then to topics
/// (left, by topic id).
///
/// Output rows follow the order of `doc_topics`. Assignments whose document
/// is unknown are dropped.
pub fn build_document_with_topic(
  documents: &[Document],
  doc_topics: &[DocumentTopic],
  topics: &[Topic],
) -> Vec<DocumentWithTopic> {
  let mut docs_by_id: HashMap<&str, Vec<&Document>> = HashMap::new();
  for doc in documents {
    docs_by_id.entry(doc.doc_id.as_str()).or_default().push(doc);
  }

  let labels: HashMap<i64, Option<&str>> = topics
    .iter()
    .map(|t| (t.topic, t.label.as_deref()))
    .collect();

  let mut out = Vec::with_capacity(doc_topics.len());
  for dt in doc_topics {
    let Some(matches) = docs_by_id.get(dt.doc_id.as_str()) else {
      continue;
    };
    let label = labels.get(&dt.topic).copied().flatten().map(str::to_owned);
    for doc in matches {
      out.push(DocumentWithTopic {
        doc_id:       dt.doc_id.clone(),
        topic:        dt.topic,
        prob:         dt.prob,
        year:         doc.year,
        title:        doc.title.clone(),
        advisor_name: doc.advisor_name.clone(),
        advisor_id:   doc.advisor_id.clone(),
        url:          doc.url.clone(),
        label:        label.clone(),
      });
    }
  }
  out
}
