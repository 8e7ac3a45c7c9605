//! Advisor summaries.

use serde::{Deserialize, Serialize};

/// One advisor's body of supervised work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorProfile {
  #[serde(rename = "orientador_id")]
  pub advisor_id:   String,
  /// Missing in some exports; such advisors are listed but not selectable.
  #[serde(rename = "orientador_nome")]
  pub advisor_name: Option<String>,
  #[serde(rename = "n_tccs")]
  pub thesis_count: i64,
  #[serde(rename = "anos_atuacao")]
  pub years_active: i64,
  #[serde(rename = "temas_top")]
  pub top_topics:   Option<String>,
}

/// An (advisor, topic) aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorTopic {
  #[serde(rename = "orientador_id")]
  pub advisor_id: String,
  pub topic:      i64,
  pub n_docs:     i64,
  /// Fraction of this advisor's theses that fall in the topic.
  #[serde(rename = "share_no_orientador")]
  pub share:      Option<f64>,
}
