//! Data-visibility scopes and the record filter they imply

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Visibility breadth granted alongside an approved action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeName {
    /// Every record
    All,
    /// Records of projects the caller is a member of
    Project,
    /// Records the caller created
    Own,
}

impl ScopeName {
    pub const ALL_KEYWORDS: [&'static str; 3] = ["all", "project", "own"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeName::All => "all",
            ScopeName::Project => "project",
            ScopeName::Own => "own",
        }
    }

    /// Seeded reference score (all=1, project=2, own=3)
    pub fn score(&self) -> i32 {
        match self {
            ScopeName::All => 1,
            ScopeName::Project => 2,
            ScopeName::Own => 3,
        }
    }

    /// Whether `caller` may see `record` under this scope
    pub fn permits<R: ScopedRecord + ?Sized>(&self, caller: Uuid, record: &R) -> bool {
        match self {
            ScopeName::All => true,
            ScopeName::Project => record.has_member(caller),
            ScopeName::Own => record.created_by() == Some(caller),
        }
    }

    /// Keep only the records `caller` may see
    pub fn filter<R: ScopedRecord>(&self, caller: Uuid, records: Vec<R>) -> Vec<R> {
        records
            .into_iter()
            .filter(|record| self.permits(caller, record))
            .collect()
    }
}

impl fmt::Display for ScopeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for keywords outside the scope vocabulary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scope keyword: {0:?}")]
pub struct UnknownScope(pub String);

impl FromStr for ScopeName {
    type Err = UnknownScope;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ScopeName::All),
            "project" => Ok(ScopeName::Project),
            "own" => Ok(ScopeName::Own),
            other => Err(UnknownScope(other.to_string())),
        }
    }
}

/// A record whose visibility depends on ownership and project membership
pub trait ScopedRecord {
    /// Creator of the record, if tracked
    fn created_by(&self) -> Option<Uuid>;

    /// Whether `user` belongs to the project owning the record
    fn has_member(&self, user: Uuid) -> bool;
}
