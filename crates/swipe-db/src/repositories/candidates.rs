//! SQL construction for the discovery query

use sqlx::{Postgres, QueryBuilder};
use swipe_core::discovery::CandidateQuery;

const CANDIDATE_SELECT: &str = r"
SELECT u.id, u.username, u.email, u.is_verified, u.verified_at, u.is_active,
       u.created_at, u.last_login,
       p.id AS profile_id, p.full_name, p.date_of_birth, p.religion, p.gender,
       p.country, p.city, p.picture,
       p.created_at AS profile_created_at, p.updated_at AS profile_updated_at
FROM users u
LEFT JOIN profiles p ON p.user_id = u.id
WHERE u.is_active = TRUE";

/// Build the candidate listing for `query`.
///
/// Exclusions (self, swiped, inactive) always apply. A preference filter
/// additionally requires a profile row and narrows on it. Rows are ordered
/// by user id so offsets are stable.
pub fn build_candidate_query(query: &CandidateQuery) -> QueryBuilder<'_, Postgres> {
    let requester = query.requester.into_inner();
    let mut qb = QueryBuilder::new(CANDIDATE_SELECT);

    qb.push(" AND u.id <> ").push_bind(requester);
    qb.push(" AND NOT EXISTS (SELECT 1 FROM swipes s WHERE s.user_id = ")
        .push_bind(requester)
        .push(" AND s.swiped_user_id = u.id)");

    if let Some(filter) = &query.preferences {
        qb.push(" AND p.id IS NOT NULL");

        if let Some(earliest) = filter.birth_window.earliest {
            qb.push(" AND p.date_of_birth >= ").push_bind(earliest);
        }
        if let Some(latest) = filter.birth_window.latest {
            qb.push(" AND p.date_of_birth <= ").push_bind(latest);
        }

        let exact = [
            ("p.gender", filter.gender.as_deref()),
            ("p.religion", filter.religion.as_deref()),
            ("p.city", filter.city.as_deref()),
            ("p.country", filter.country.as_deref()),
        ];
        for (column, value) in exact {
            if let Some(value) = value {
                qb.push(" AND ").push(column).push(" = ").push_bind(value);
            }
        }
    }

    qb.push(" ORDER BY u.id ASC OFFSET ").push_bind(query.page.offset);
    if let Some(limit) = query.page.limit {
        qb.push(" LIMIT ").push_bind(limit);
    }

    qb
}
