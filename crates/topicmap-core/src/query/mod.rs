//! Per-page query pathways.
//!
//! Each page of the dashboard has one independent function here that reads
//! the session [`Dataset`](crate::Dataset) and returns a borrowed view: the
//! metrics, sorted tables and chart series the page shows. Conditions that
//! leave a page with nothing to draw are reported as a [`Notice`], never as
//! an error.

pub mod advisors;
pub mod evolution;
pub mod overview;
pub mod profile;
pub mod topic_filter;

use std::cmp::Ordering;

pub use advisors::{AdvisorSearch, search_advisors};
pub use evolution::{
  DEFAULT_EVOLUTION_TOPICS, Evolution, MAX_EVOLUTION_TOPICS, TrendSeries,
  default_evolution_selection, topic_evolution,
};
pub use overview::{Overview, TOP_TOPICS, TopicShare, YearCount, overview, topic_shares};
pub use profile::{AdvisorProfileView, ProfilePage, TopicCount, advisor_options, profile_page, resolve_advisor};
pub use topic_filter::{TopicFilter, filter_by_topic};

use crate::join::DocumentWithTopic;

/// A user-visible, non-blocking condition on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
  /// The selected topic has no trend rows.
  NoTimeSeries,
  /// The advisor profiles table is empty.
  NoAdvisors,
  /// The selected advisor has no advisor-topic rows.
  NoAdvisorDistribution,
  /// The evolution picker is empty.
  NoTopicsSelected,
  /// `_manifest.json` is absent or unreadable.
  ManifestMissing,
}

impl Notice {
  pub fn message(self) -> &'static str {
    match self {
      Notice::NoTimeSeries => "No time series for this topic.",
      Notice::NoAdvisors => "No advisor profiles available.",
      Notice::NoAdvisorDistribution => "No topic distribution computed for this advisor.",
      Notice::NoTopicsSelected => "Select at least one topic to see its evolution.",
      Notice::ManifestMissing => "Manifest not found (_manifest.json).",
    }
  }
}

/// Descending by probability, missing probabilities last.
fn cmp_prob_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
  match (a, b) {
    (Some(x), Some(y)) => y.total_cmp(&x),
    (Some(_), None) => Ordering::Less,
    (None, Some(_)) => Ordering::Greater,
    (None, None) => Ordering::Equal,
  }
}

/// Year ascending (undated first), then probability descending. Stable.
fn sort_by_year_then_prob(rows: &mut [&DocumentWithTopic]) {
  rows.sort_by(|a, b| a.year.cmp(&b.year).then_with(|| cmp_prob_desc(a.prob, b.prob)));
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn prob_ordering_puts_missing_last() {
    assert_eq!(cmp_prob_desc(Some(0.9), Some(0.1)), Ordering::Less);
    assert_eq!(cmp_prob_desc(Some(0.1), Some(0.9)), Ordering::Greater);
    assert_eq!(cmp_prob_desc(Some(0.1), None), Ordering::Less);
    assert_eq!(cmp_prob_desc(None, Some(0.1)), Ordering::Greater);
  }

  #[test]
  fn every_notice_has_a_message() {
    for n in [
      Notice::NoTimeSeries,
      Notice::NoAdvisors,
      Notice::NoAdvisorDistribution,
      Notice::NoTopicsSelected,
      Notice::ManifestMissing,
    ] {
      assert!(!n.message().is_empty());
    }
  }
}
