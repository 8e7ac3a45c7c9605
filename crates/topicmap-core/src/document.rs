//! Thesis documents and their topic assignments.
//!
//! Field names follow the column names of the upstream exports, which are
//! kept verbatim through `serde(rename)` so the same types decode and encode
//! the tables.

use serde::{Deserialize, Serialize};

/// One thesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
  #[serde(rename = "DOC_ID")]
  pub doc_id:       String,
  #[serde(rename = "ano")]
  pub year:         Option<i64>,
  #[serde(rename = "titulo")]
  pub title:        Option<String>,
  #[serde(rename = "orientador_nome")]
  pub advisor_name: Option<String>,
  #[serde(rename = "orientador_id")]
  pub advisor_id:   Option<String>,
  pub url:          Option<String>,
}

/// Assignment of a document to a topic.
///
/// A document appears more than once only when the model kept several
/// candidate topics for it; `prob` tells them apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentTopic {
  #[serde(rename = "DOC_ID")]
  pub doc_id: String,
  pub topic:  i64,
  pub prob:   Option<f64>,
}
