use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use super::task::Task;

/// Which tasks the list shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FilterMode {
    #[default]
    All,
    Completed,
    Pending,
}

impl FilterMode {
    /// All modes in filter-bar order
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Completed, FilterMode::Pending];

    pub fn matches(self, task: &Task) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Completed => task.completed,
            FilterMode::Pending => !task.completed,
        }
    }

    /// Button label in the filter bar
    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "All Tasks",
            FilterMode::Completed => "Completed Tasks",
            FilterMode::Pending => "Pending Tasks",
        }
    }

    /// Next mode in filter-bar order, wrapping around
    pub fn next(self) -> FilterMode {
        match self {
            FilterMode::All => FilterMode::Completed,
            FilterMode::Completed => FilterMode::Pending,
            FilterMode::Pending => FilterMode::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Completed => "completed",
            FilterMode::Pending => "pending",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter \"{0}\" (expected all, completed or pending)")]
pub struct ParseFilterError(pub String);

impl FromStr for FilterMode {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "completed" | "done" => Ok(FilterMode::Completed),
            "pending" | "todo" => Ok(FilterMode::Pending),
            _ => Err(ParseFilterError(s.to_string())),
        }
    }
}

// Config files accept the same names as the command line
impl<'de> Deserialize<'de> for FilterMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
