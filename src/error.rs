use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors signaled by the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument did not name a recognized value, e.g. an unknown insertion strategy.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Where [`insert`](crate::AvlTreeMap::insert) starts looking for the insertion point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InsertStrategy {
    /// Plain descent from the root.
    #[default]
    FromRoot,
    /// Finger search starting at the maximum node.
    /// Cheap for ascending or nearly ascending key sequences.
    FromMax,
}

impl FromStr for InsertStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "root" => Ok(InsertStrategy::FromRoot),
            "max" => Ok(InsertStrategy::FromMax),
            other => Err(Error::InvalidArgument(format!(
                "unknown insert strategy {other:?}, expected \"root\" or \"max\""
            ))),
        }
    }
}

impl fmt::Display for InsertStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InsertStrategy::FromRoot => "root",
            InsertStrategy::FromMax => "max",
        })
    }
}
