//! Topics and their yearly trends.

use serde::{Deserialize, Serialize};

/// Reserved topic id for documents the model left unassigned.
pub const OUTLIER_TOPIC: i64 = -1;

/// A discovered theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
  pub topic:    i64,
  pub label:    Option<String>,
  pub keywords: Option<String>,
}

impl Topic {
  pub fn is_outlier(&self) -> bool {
    self.topic == OUTLIER_TOPIC
  }

  /// The `[id] label` string used wherever a topic is offered for selection.
  pub fn display(&self) -> String {
    crate::format::topic_display(self.topic, self.label.as_deref())
  }
}

/// A (topic, year) aggregate.
///
/// Shares of one year need not sum to 1 across topics; each lies in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicTrend {
  pub topic:  i64,
  #[serde(rename = "ano")]
  pub year:   i64,
  pub share:  f64,
  pub n_docs: i64,
}
