//! Advisor search page.

use crate::{Dataset, advisor::AdvisorProfile};

#[derive(Debug, Clone, PartialEq)]
pub struct AdvisorSearch<'a> {
  /// Profiles whose name contains the query, most theses first.
  pub results: Vec<&'a AdvisorProfile>,
}

impl AdvisorSearch<'_> {
  pub fn count(&self) -> usize {
    self.results.len()
  }
}

/// Case-insensitive substring search over advisor names.
///
/// A blank (whitespace-only) query matches every profile; any other query is
/// matched as typed, surrounding whitespace included. Profiles without a name
/// only appear for a blank query. Results are sorted by thesis count
/// descending, ties by name.
pub fn search_advisors<'a>(ds: &'a Dataset, query: &str) -> AdvisorSearch<'a> {
  let blank = query.trim().is_empty();
  let needle = query.to_lowercase();

  let mut results: Vec<&AdvisorProfile> = ds
    .advisor_profiles
    .iter()
    .filter(|p| {
      blank
        || p
          .advisor_name
          .as_deref()
          .is_some_and(|name| name.to_lowercase().contains(&needle))
    })
    .collect();

  results.sort_by(|a, b| {
    b.thesis_count
      .cmp(&a.thesis_count)
      .then_with(|| a.advisor_name.cmp(&b.advisor_name))
  });

  AdvisorSearch { results }
}
