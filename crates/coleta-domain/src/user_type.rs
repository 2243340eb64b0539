//! Actor kinds of the marketplace.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The three kinds of account. Each lives in its own table.
///
/// Wire format: lowercase string (`"producer"`, `"collector"`, `"cooperative"`),
/// used both in JSON bodies and in the `user_type` JWT claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Producer,
    Collector,
    Cooperative,
}

impl UserType {
    pub const ALL: [UserType; 3] = [Self::Producer, Self::Collector, Self::Cooperative];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Producer => "producer",
            Self::Collector => "collector",
            Self::Cooperative => "cooperative",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
