//! Candidate filters
//!
//! [`CandidateQuery`] is the storage-independent description of a discovery
//! read. Postgres translates it to SQL; in-memory stores evaluate it with
//! [`CandidateQuery::admits`]. Both must agree.

use std::collections::HashSet;

use crate::entities::{Preferences, Profile, User};
use crate::value_objects::{BirthDateWindow, CandidatePage, UserId};

/// Preference-derived predicate over a candidate's profile
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreferenceFilter {
    pub birth_window: BirthDateWindow,
    pub gender: Option<String>,
    pub religion: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl PreferenceFilter {
    /// Build the filter from stored preferences, evaluated in `current_year`.
    ///
    /// Blank attribute values impose no constraint.
    pub fn from_preferences(preferences: &Preferences, current_year: i32) -> Self {
        Self {
            birth_window: BirthDateWindow::from_age_range(
                preferences.min_age,
                preferences.max_age,
                current_year,
            ),
            gender: non_blank(preferences.gender.as_deref()),
            religion: non_blank(preferences.religion.as_deref()),
            city: non_blank(preferences.city.as_deref()),
            country: non_blank(preferences.country.as_deref()),
        }
    }

    /// Exact-match and birth-window check against one profile
    pub fn matches(&self, profile: &Profile) -> bool {
        self.birth_window.contains(profile.date_of_birth)
            && field_matches(self.gender.as_deref(), profile.gender.as_deref())
            && field_matches(self.religion.as_deref(), profile.religion.as_deref())
            && field_matches(self.city.as_deref(), profile.city.as_deref())
            && field_matches(self.country.as_deref(), profile.country.as_deref())
    }
}

/// Everything a repository needs to list candidates for one requester
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateQuery {
    pub requester: UserId,
    /// Present when the requester has stored preferences
    pub preferences: Option<PreferenceFilter>,
    pub page: CandidatePage,
}

impl CandidateQuery {
    pub fn new(requester: UserId, preferences: Option<PreferenceFilter>, page: CandidatePage) -> Self {
        Self {
            requester,
            preferences,
            page,
        }
    }

    /// Eligibility of one user before paging.
    ///
    /// `swiped` is the requester's exclusion set of already-swiped targets.
    pub fn admits(&self, user: &User, profile: Option<&Profile>, swiped: &HashSet<UserId>) -> bool {
        if user.id == self.requester || !user.is_active || swiped.contains(&user.id) {
            return false;
        }

        match &self.preferences {
            None => true,
            Some(filter) => profile.is_some_and(|p| filter.matches(p)),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}

fn field_matches(wanted: Option<&str>, actual: Option<&str>) -> bool {
    wanted.is_none_or(|w| actual == Some(w))
}
