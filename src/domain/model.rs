use crate::utils::error::ReportError;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points.
    pub fn distance_to(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientUser {
    pub name: String,
    pub position: Position,
    pub reward: f64,
    /// `None` means the client has no requirements at all.
    #[serde(default)]
    pub demands: Option<Vec<String>>,
}

impl ClientUser {
    /// A client is met when every one of its demands is among `possibilities`.
    pub fn is_met_by(&self, possibilities: &HashSet<&str>) -> bool {
        match &self.demands {
            None => true,
            Some(demands) => demands.iter().all(|d| possibilities.contains(d.as_str())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutorUser {
    pub position: Position,
    #[serde(default)]
    pub possibilities: Vec<String>,
}

impl ExecutorUser {
    pub fn possibility_set(&self) -> HashSet<&str> {
        self.possibilities.iter().map(String::as_str).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SortMode {
    /// Closest clients first
    Distance,
    /// Best paying clients first
    #[default]
    Reward,
}

impl SortMode {
    /// Column heading used in the report table.
    pub fn heading(&self) -> &'static str {
        match self {
            SortMode::Distance => "shortest distance",
            SortMode::Reward => "highest reward",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMode::Distance => write!(f, "distance"),
            SortMode::Reward => write!(f, "reward"),
        }
    }
}

impl FromStr for SortMode {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "distance" => Ok(SortMode::Distance),
            "reward" => Ok(SortMode::Reward),
            _ => Err(ReportError::InvalidSortMode {
                value: s.to_string(),
            }),
        }
    }
}

/// Rendered outcome of a successful match.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub met: usize,
    pub total: usize,
    pub text: String,
}
