//! Advisor profile page.
//!
//! Advisors are selected by name. Names are not guaranteed unique across
//! advisor ids; a name resolves to the first profile row carrying it, in the
//! row order of the advisor profiles export.

use super::{Notice, sort_by_year_then_prob};
use crate::{Dataset, advisor::AdvisorProfile, join::DocumentWithTopic};

#[derive(Debug, Clone, PartialEq)]
pub struct ProfilePage<'a> {
  /// Selectable advisor names, ascending.
  pub options:  Vec<&'a str>,
  pub selected: Option<AdvisorProfileView<'a>>,
}

impl ProfilePage<'_> {
  pub fn notice(&self) -> Option<Notice> {
    match &self.selected {
      _ if self.options.is_empty() => Some(Notice::NoAdvisors),
      Some(view) => view.notice(),
      None => Some(Notice::NoAdvisors),
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdvisorProfileView<'a> {
  pub profile:      &'a AdvisorProfile,
  /// Year ascending, then probability descending.
  pub theses:       Vec<&'a DocumentWithTopic>,
  /// Document count descending.
  pub distribution: Vec<TopicCount<'a>>,
}

impl AdvisorProfileView<'_> {
  pub fn notice(&self) -> Option<Notice> {
    self
      .distribution
      .is_empty()
      .then_some(Notice::NoAdvisorDistribution)
  }
}

/// One bar of an advisor's topic distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicCount<'a> {
  pub topic:  i64,
  pub label:  Option<&'a str>,
  pub n_docs: i64,
  pub share:  Option<f64>,
}

/// Advisor names in ascending order, duplicates included. Profiles without
/// a name are not selectable.
pub fn advisor_options(ds: &Dataset) -> Vec<&str> {
  let mut names: Vec<&str> = ds
    .advisor_profiles
    .iter()
    .filter_map(|p| p.advisor_name.as_deref())
    .collect();
  names.sort_unstable();
  names
}

/// The first profile, in export row order, whose name is exactly `name`.
pub fn resolve_advisor<'a>(ds: &'a Dataset, name: &str) -> Option<&'a AdvisorProfile> {
  ds
    .advisor_profiles
    .iter()
    .find(|p| p.advisor_name.as_deref() == Some(name))
}

/// Build the profile page for `choice`, defaulting to the first option.
pub fn profile_page<'a>(ds: &'a Dataset, choice: Option<&str>) -> ProfilePage<'a> {
  let options = advisor_options(ds);
  let selected = choice
    .or_else(|| options.first().copied())
    .and_then(|name| resolve_advisor(ds, name))
    .map(|profile| profile_view(ds, profile));
  ProfilePage { options, selected }
}

fn profile_view<'a>(ds: &'a Dataset, profile: &'a AdvisorProfile) -> AdvisorProfileView<'a> {
  let id = profile.advisor_id.as_str();

  let mut theses: Vec<&DocumentWithTopic> = ds
    .doc_with_topic
    .iter()
    .filter(|r| r.advisor_id.as_deref() == Some(id))
    .collect();
  sort_by_year_then_prob(&mut theses);

  let mut distribution: Vec<TopicCount> = ds
    .advisor_topics
    .iter()
    .filter(|at| at.advisor_id == id)
    .map(|at| TopicCount {
      topic:  at.topic,
      label:  ds.label_of(at.topic),
      n_docs: at.n_docs,
      share:  at.share,
    })
    .collect();
  distribution.sort_by(|a, b| b.n_docs.cmp(&a.n_docs));

  AdvisorProfileView { profile, theses, distribution }
}
