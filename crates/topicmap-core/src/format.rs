//! Display helpers shared by the query layer and the UI.

use crate::{Error, Result};

/// Placeholder shown wherever a value is missing or cannot be formatted.
pub const PLACEHOLDER: &str = "–";

/// Render a fraction as a percentage with one decimal place.
///
/// `None` and non-finite values render as [`PLACEHOLDER`].
pub fn human_pct(x: Option<f64>) -> String {
  match x {
    Some(v) if v.is_finite() => format!("{:.1}%", 100.0 * v),
    _ => PLACEHOLDER.to_string(),
  }
}

/// Render an optional value, falling back to [`PLACEHOLDER`].
pub fn or_placeholder<T: ToString>(value: Option<T>) -> String {
  value.map_or_else(|| PLACEHOLDER.to_string(), |v| v.to_string())
}

/// `[id] label`, the selection string for a topic.
pub fn topic_display(topic: i64, label: Option<&str>) -> String {
  format!("[{topic}] {}", label.unwrap_or_default())
}

/// Decode the topic id from a `[id] label` selection string.
///
/// Only the text before the first `]` is considered, so labels may contain
/// brackets of their own.
pub fn decode_topic_selection(display: &str) -> Result<i64> {
  let head = display
    .split_once(']')
    .map(|(head, _)| head)
    .ok_or_else(|| Error::InvalidSelection(display.to_string()))?;

  head
    .trim()
    .strip_prefix('[')
    .map(str::trim)
    .and_then(|id| id.parse().ok())
    .ok_or_else(|| Error::InvalidSelection(display.to_string()))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn pct_one_decimal() {
    assert_eq!(human_pct(Some(0.1234)), "12.3%");
    assert_eq!(human_pct(Some(0.0)), "0.0%");
    assert_eq!(human_pct(Some(1.0)), "100.0%");
  }

  #[test]
  fn pct_placeholder_for_missing_or_nan() {
    assert_eq!(human_pct(None), "–");
    assert_eq!(human_pct(Some(f64::NAN)), "–");
    assert_eq!(human_pct(Some(f64::INFINITY)), "–");
  }

  #[test]
  fn decode_plain_and_negative_ids() {
    assert_eq!(decode_topic_selection("[12] Machine Learning").unwrap(), 12);
    assert_eq!(decode_topic_selection("[-1] Outliers").unwrap(), -1);
  }

  #[test]
  fn decode_uses_first_closing_bracket() {
    assert_eq!(decode_topic_selection("[3] arrays [i] and [j]").unwrap(), 3);
    assert_eq!(decode_topic_selection("[7] ]]").unwrap(), 7);
  }

  #[test]
  fn decode_round_trips_display() {
    let s = topic_display(42, Some("Redes [SDN]"));
    assert_eq!(s, "[42] Redes [SDN]");
    assert_eq!(decode_topic_selection(&s).unwrap(), 42);
  }

  #[test]
  fn decode_rejects_malformed() {
    for bad in ["12 Machine Learning", "[x] label", "[] empty", ""] {
      assert!(
        matches!(decode_topic_selection(bad), Err(Error::InvalidSelection(_))),
        "{bad:?} should not decode"
      );
    }
  }

  #[test]
  fn placeholder_helper() {
    assert_eq!(or_placeholder(Some(5)), "5");
    assert_eq!(or_placeholder::<i64>(None), "–");
  }
}
