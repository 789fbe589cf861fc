//! Discovery quota and candidate paging

/// Default number of candidates an unverified user may browse
pub const DEFAULT_UNVERIFIED_LIMIT: i64 = 10;

/// Offset/limit window into the ordered candidate list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CandidatePage {
    pub offset: i64,
    /// `None` means no upper bound on the page size
    pub limit: Option<i64>,
}

impl CandidatePage {
    pub fn new(offset: i64, limit: i64) -> Self {
        Self {
            offset: offset.max(0),
            limit: Some(limit.max(0)),
        }
    }

    /// Every candidate from the first position on
    pub fn all() -> Self {
        Self::default()
    }
}

/// Result cap gated by verification status
///
/// The cap bounds the positions a requester can reach, not just one page:
/// an unverified user with the default quota only ever sees positions `[0, 10)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryQuota {
    pub unverified_limit: i64,
    /// `None` leaves verified users unbounded
    pub verified_limit: Option<i64>,
}

impl Default for DiscoveryQuota {
    fn default() -> Self {
        Self {
            unverified_limit: DEFAULT_UNVERIFIED_LIMIT,
            verified_limit: None,
        }
    }
}

impl DiscoveryQuota {
    pub fn new(unverified_limit: i64, verified_limit: Option<i64>) -> Self {
        Self {
            unverified_limit,
            verified_limit,
        }
    }

    /// The cap that applies to a requester
    pub fn cap_for(&self, is_verified: bool) -> Option<i64> {
        if is_verified {
            self.verified_limit
        } else {
            Some(self.unverified_limit)
        }
    }

    /// Clip a requested page to the requester's cap.
    ///
    /// Returns `None` when the page starts at or past the cap.
    pub fn clip(&self, is_verified: bool, page: CandidatePage) -> Option<CandidatePage> {
        let offset = page.offset.max(0);
        let requested = page.limit.map(|l| l.max(0));

        let Some(cap) = self.cap_for(is_verified) else {
            return Some(CandidatePage {
                offset,
                limit: requested,
            });
        };

        if offset >= cap {
            return None;
        }

        let remaining = cap - offset;
        Some(CandidatePage {
            offset,
            limit: Some(requested.map_or(remaining, |l| l.min(remaining))),
        })
    }
}
