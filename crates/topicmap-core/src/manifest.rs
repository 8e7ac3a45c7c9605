//! Provenance record of a dataset snapshot.
//!
//! The manifest is optional and loosely shaped, so it is held as raw JSON and
//! read through typed accessors. Every accessor returns `None` for a missing
//! field, a missing parent object, or a value of the wrong kind.

use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
  raw: Option<Value>,
}

impl Manifest {
  /// An empty manifest, used when the file is absent or unreadable.
  pub fn empty() -> Self {
    Self::default()
  }

  pub fn from_value(raw: Value) -> Self {
    // `{}` carries nothing worth showing; treat it like an absent file.
    match &raw {
      Value::Object(map) if map.is_empty() => Self::empty(),
      Value::Object(_) => Self { raw: Some(raw) },
      _ => Self::empty(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.raw.is_none()
  }

  fn get(&self, path: &[&str]) -> Option<&Value> {
    let mut cur = self.raw.as_ref()?;
    for key in path {
      cur = cur.as_object()?.get(*key)?;
    }
    (!cur.is_null()).then_some(cur)
  }

  fn text(&self, path: &[&str]) -> Option<String> {
    match self.get(path)? {
      Value::String(s) => Some(s.clone()),
      Value::Number(n) => Some(n.to_string()),
      Value::Bool(b) => Some(b.to_string()),
      _ => None,
    }
  }

  fn number(&self, path: &[&str]) -> Option<f64> {
    match self.get(path)? {
      Value::Number(n) => n.as_f64(),
      Value::String(s) => s.trim().parse().ok(),
      _ => None,
    }
  }

  fn integer(&self, path: &[&str]) -> Option<i64> {
    match self.get(path)? {
      Value::Number(n) => n.as_i64(),
      Value::String(s) => s.trim().parse().ok(),
      _ => None,
    }
  }

  // ── Accessors ─────────────────────────────────────────────────────────────

  pub fn generated_at(&self) -> Option<String> {
    self.text(&["generated_at"])
  }

  /// Whether a `selection` block is present at all.
  pub fn has_selection(&self) -> bool {
    self.get(&["selection"]).is_some_and(Value::is_object)
  }

  pub fn method(&self) -> Option<String> {
    self.text(&["selection", "method"])
  }

  pub fn run(&self) -> Option<String> {
    self.text(&["selection", "run"])
  }

  pub fn trial(&self) -> Option<String> {
    self.text(&["selection", "trial"])
  }

  /// Number of clusters the selected model was trained with.
  pub fn k(&self) -> Option<i64> {
    self.integer(&["selection", "K"])
  }

  /// Outlier fraction reported by the pipeline, in `[0, 1]`.
  pub fn reported_outliers_pct(&self) -> Option<f64> {
    self.number(&["selection", "reported_outliers_pct"])
  }

  pub fn corpus_docs(&self) -> Option<i64> {
    self.integer(&["corpus", "n_docs"])
  }

  pub fn year_min(&self) -> Option<i64> {
    self.integer(&["corpus", "years", "min"])
  }

  pub fn year_max(&self) -> Option<i64> {
    self.integer(&["corpus", "years", "max"])
  }
}
