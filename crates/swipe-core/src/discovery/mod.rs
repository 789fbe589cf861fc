//! Discovery filtering - exclusion rules and preference predicates

mod filter;

pub use filter::{CandidateQuery, PreferenceFilter};
