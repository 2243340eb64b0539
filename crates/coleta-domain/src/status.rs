//! Collection-request lifecycle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Status of a collection request.
///
/// Wire format: snake_case string, stored verbatim in the `status` column.
///
/// ```text
/// requested ──accept──▶ accepted ──▶ confirmed ──▶ en_route ──▶ collected
///     │  ▲                  │            │            │
///     ▼  │                  └────────────┴────────────┴──▶ cancelled
/// awaiting_collector ──────────────────────────────────▶ cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionStatus {
    Requested,
    Accepted,
    Confirmed,
    Cancelled,
    Collected,
    EnRoute,
    AwaitingCollector,
}

/// Returned when a string is not one of the allow-listed statuses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status: {0}")]
pub struct UnknownStatus(pub String);

impl CollectionStatus {
    pub const ALL: [CollectionStatus; 7] = [
        Self::Requested,
        Self::Accepted,
        Self::Confirmed,
        Self::Cancelled,
        Self::Collected,
        Self::EnRoute,
        Self::AwaitingCollector,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Requested => "requested",
            Self::Accepted => "accepted",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Collected => "collected",
            Self::EnRoute => "en_route",
            Self::AwaitingCollector => "awaiting_collector",
        }
    }

    /// Only unassigned requests in this state are offered to collectors.
    pub fn is_available(self) -> bool {
        self == Self::Requested
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Cancelled | Self::Collected)
    }

    /// Whether a plain status update may move a request from `self` to `next`.
    ///
    /// `accepted` is never a valid target here: it also assigns a collector and
    /// is reachable only through the accept action.
    pub fn can_transition_to(self, next: Self) -> bool {
        use CollectionStatus::*;
        matches!(
            (self, next),
            (Requested, AwaitingCollector | Cancelled)
                | (AwaitingCollector, Requested | Cancelled)
                | (Accepted, Confirmed | EnRoute | Cancelled)
                | (Confirmed, EnRoute | Collected | Cancelled)
                | (EnRoute, Collected | Cancelled)
        )
    }
}

impl fmt::Display for CollectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_owned()))
    }
}
